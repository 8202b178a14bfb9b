//! Phasmo Roller - roll to unlock Phasmophobia items
//!
//! Core modules:
//! - `catalog`: The fixed item list and its defaults
//! - `roller`: State engine (roll, toggle, reset, load/save reconciliation)
//! - `persistence`: Snapshot wire format
//! - `platform`: Storage backends (memory, file, LocalStorage)
//! - `settings`: Runtime configuration

pub mod catalog;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod roller;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use catalog::{ALWAYS_UNLOCKED, ItemDef};
pub use error::{RollerError, StoreError};
pub use platform::{MemoryStore, Store};
pub use roller::{ItemView, Persisted, RollOutcome, Roller};
pub use settings::Settings;

#[cfg(not(target_arch = "wasm32"))]
pub use platform::FileStore;

/// Engine over `store`, configured and initialized from `settings`
pub fn open<S: Store>(store: S, settings: &Settings) -> Roller<S> {
    let mut roller = Roller::new(store, settings.rng(), settings.storage_key.clone());
    roller.initialize();
    roller
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_restores_progress() {
        let settings = Settings::with_seed(7);
        let mut first = open(MemoryStore::new(), &settings);
        let rolled = first.roll().into_result().unwrap();
        let RollOutcome::Unlocked(key) = rolled else {
            panic!("fresh roller had locked items");
        };

        let store = first.store().clone();
        let second = open(store, &settings);
        assert!(second.is_unlocked(key).unwrap());
        assert_eq!(second.unlocked_count(), 2);
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_file_backed_progress_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            data_dir: dir.path().to_path_buf(),
            ..Settings::with_seed(3)
        };

        let mut first = open(FileStore::new(&settings.data_dir), &settings);
        first.toggle("spirit-box").unwrap().into_result().unwrap();
        first.toggle("salt").unwrap().into_result().unwrap();
        first.toggle("salt").unwrap().into_result().unwrap();

        let second = open(FileStore::new(&settings.data_dir), &settings);
        assert!(second.is_unlocked("spirit-box").unwrap());
        assert!(!second.is_unlocked("salt").unwrap());
        assert!(dir.path().join("phasmoRollerData.json").exists());
    }
}
