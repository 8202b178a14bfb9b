//! Unlock state engine
//!
//! Owns the live locked/unlocked flag for every catalog item and the legal
//! transitions between them. Every mutation writes the full snapshot through
//! to the store immediately.
//!
//! Invariants held at every observable point:
//! - exactly one flag per catalog key, no more, no less
//! - the `ALWAYS_UNLOCKED` item is unlocked

use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::catalog::{self, ALWAYS_UNLOCKED, ItemDef};
use crate::error::RollerError;
use crate::persistence::{self, Snapshot};
use crate::platform::Store;

/// Result of a roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollOutcome {
    /// This previously locked item is now unlocked
    Unlocked(&'static str),
    /// Nothing was locked; state unchanged
    AllUnlocked,
}

/// Read-only view of one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}

/// Value of a mutating operation plus the outcome of its write-through
///
/// The in-memory change has already happened when `write_error` is set.
#[must_use]
#[derive(Debug)]
pub struct Persisted<T> {
    pub value: T,
    pub write_error: Option<RollerError>,
}

impl<T> Persisted<T> {
    /// True if the snapshot write succeeded
    pub fn is_saved(&self) -> bool {
        self.write_error.is_none()
    }

    /// Turn a failed write into an error
    pub fn into_result(self) -> Result<T, RollerError> {
        match self.write_error {
            None => Ok(self.value),
            Some(e) => Err(e),
        }
    }
}

/// The state engine
pub struct Roller<S, R = Pcg32> {
    store: S,
    rng: R,
    storage_key: String,
    /// Indexed like `catalog::defaults()`
    flags: Vec<bool>,
    /// Last write failed and nothing has been saved since
    dirty: bool,
}

fn default_flags() -> Vec<bool> {
    catalog::defaults()
        .iter()
        .map(|item| item.default_unlocked)
        .collect()
}

fn pinned_index() -> usize {
    catalog::index_of(ALWAYS_UNLOCKED).unwrap_or(0)
}

impl<S: Store, R: Rng> Roller<S, R> {
    /// Engine at catalog defaults; call `initialize` to apply stored progress
    pub fn new(store: S, rng: R, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            rng,
            storage_key: storage_key.into(),
            flags: default_flags(),
            dirty: false,
        }
    }

    /// Reset to catalog defaults, then apply the stored snapshot if any
    pub fn initialize(&mut self) {
        self.flags = default_flags();
        let raw = self.store.get(&self.storage_key);
        self.load(raw.as_deref());
        log::info!(
            "Roller initialized: {}/{} unlocked",
            self.unlocked_count(),
            self.len()
        );
    }

    /// Overlay a raw snapshot onto live state
    ///
    /// Absent or unreadable input leaves state untouched. Only catalog keys
    /// with a boolean `unlocked` are applied.
    pub fn load(&mut self, raw: Option<&str>) {
        let Some(raw) = raw else {
            log::info!("No saved progress found, starting fresh");
            return;
        };

        let snapshot = match Snapshot::parse(raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("Ignoring saved progress: {}", e);
                return;
            }
        };

        self.apply(&snapshot);
        log::info!("Loaded saved progress ({} entries)", snapshot.len());
    }

    fn apply(&mut self, snapshot: &Snapshot) {
        for (flag, item) in self.flags.iter_mut().zip(catalog::defaults()) {
            if let Some(unlocked) = snapshot.get(item.key) {
                *flag = unlocked;
            }
        }
        self.flags[pinned_index()] = true;
    }

    /// Serialized snapshot of live state, without writing it
    pub fn snapshot(&self) -> Result<String, RollerError> {
        persistence::encode(&self.flags)
    }

    /// Serialize live state and write it to the store
    pub fn save(&mut self) -> Result<String, RollerError> {
        let json = self.snapshot()?;
        match self.store.set(&self.storage_key, &json) {
            Ok(()) => {
                self.dirty = false;
                log::debug!("Progress saved");
                Ok(json)
            }
            Err(e) => {
                self.dirty = true;
                log::warn!("Failed to save progress: {}", e);
                Err(RollerError::PersistenceWrite(e))
            }
        }
    }

    /// Write-through after a mutation
    fn persist<T>(&mut self, value: T) -> Persisted<T> {
        Persisted {
            value,
            write_error: self.save().err(),
        }
    }

    /// Flip an item's flag; the pinned item silently stays unlocked
    ///
    /// Returns the item's flag after the call.
    pub fn toggle(&mut self, key: &str) -> Result<Persisted<bool>, RollerError> {
        let index = catalog::index_of(key)
            .ok_or_else(|| RollerError::InvalidKey(key.to_string()))?;

        if key == ALWAYS_UNLOCKED {
            log::debug!("Ignoring toggle of {}", key);
            return Ok(Persisted {
                value: true,
                write_error: None,
            });
        }

        let unlocked = !self.flags[index];
        self.flags[index] = unlocked;
        let state = if unlocked { "unlocked" } else { "locked" };
        log::debug!("Toggled {} -> {}", key, state);
        Ok(self.persist(unlocked))
    }

    /// Unlock one locked item chosen uniformly at random
    ///
    /// Never rolls nothing while something is locked.
    pub fn roll(&mut self) -> Persisted<RollOutcome> {
        let locked: Vec<usize> = self
            .flags
            .iter()
            .enumerate()
            .filter(|&(_, &unlocked)| !unlocked)
            .map(|(i, _)| i)
            .collect();

        if locked.is_empty() {
            log::debug!("Roll: everything already unlocked");
            return Persisted {
                value: RollOutcome::AllUnlocked,
                write_error: None,
            };
        }

        let index = locked[self.rng.random_range(0..locked.len())];
        self.flags[index] = true;
        let key = catalog::defaults()[index].key;
        log::info!("Rolled {} ({} were locked)", key, locked.len());
        self.persist(RollOutcome::Unlocked(key))
    }

    /// Lock everything except the pinned item, then save once
    pub fn reset(&mut self) -> Persisted<()> {
        self.flags = default_flags();
        log::info!("Progress reset");
        self.persist(())
    }

    /// All items in canonical order
    pub fn items(&self) -> impl Iterator<Item = ItemView> + '_ {
        catalog::defaults()
            .iter()
            .zip(&self.flags)
            .map(|(item, &unlocked)| view(item, unlocked))
    }

    /// Flag for `key`
    pub fn is_unlocked(&self, key: &str) -> Result<bool, RollerError> {
        catalog::index_of(key)
            .map(|i| self.flags[i])
            .ok_or_else(|| RollerError::InvalidKey(key.to_string()))
    }

    /// Locked keys in canonical order
    pub fn locked_keys(&self) -> Vec<&'static str> {
        self.items()
            .filter(|item| !item.unlocked)
            .map(|item| item.key)
            .collect()
    }

    pub fn unlocked_count(&self) -> usize {
        self.flags.iter().filter(|&&unlocked| unlocked).count()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn all_unlocked(&self) -> bool {
        self.flags.iter().all(|&unlocked| unlocked)
    }

    /// A write has failed since the last successful save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Key the snapshot is stored under
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn view(item: &ItemDef, unlocked: bool) -> ItemView {
    ItemView {
        key: item.key,
        name: item.name,
        icon: item.icon,
        unlocked,
    }
}
