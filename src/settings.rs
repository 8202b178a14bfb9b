//! Runtime settings
//!
//! Native builds fill these from command-line flags and environment
//! variables; the web build uses the defaults.

use std::path::PathBuf;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Storage key the snapshot lives under
pub const DEFAULT_STORAGE_KEY: &str = "phasmoRollerData";

/// How long a front end should show a roll result (ms)
pub const DEFAULT_REVEAL_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key passed to the store for the snapshot
    pub storage_key: String,
    /// Directory for file-backed storage (native only)
    pub data_dir: PathBuf,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Reveal duration hint for front ends; the roller itself has no timers
    pub reveal_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: PathBuf::from("."),
            seed: None,
            reveal_ms: DEFAULT_REVEAL_MS,
        }
    }
}

impl Settings {
    /// Settings with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// RNG for rolls, seeded per `seed`
    pub fn rng(&self) -> Pcg32 {
        match self.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_os_rng(),
        }
    }
}
