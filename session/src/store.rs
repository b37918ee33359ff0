use std::collections::BTreeMap;

use crate::{Snapshot, Storage, StorageError};

/// Fixed top-level storage key every day's snapshot lives under.
pub const STORE_KEY: &str = "palabrita:games:v1";

/// Day-keyed snapshot store. All days share one JSON mapping under
/// `STORE_KEY`; each save rewrites the mapping after merging into whatever
/// is already stored, so other days' entries survive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameStore<S> {
    storage: S,
}

impl<S: Storage> GameStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Snapshot stored for `day_key`. Unreadable or corrupt data is treated
    /// the same as no data: the caller starts fresh.
    pub fn load(&self, day_key: &str) -> Option<Snapshot> {
        let raw = match self.storage.get(STORE_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                log::warn!("could not read stored games: {err}");
                return None;
            }
        };

        let mut days: BTreeMap<String, Snapshot> = match serde_json::from_str(&raw) {
            Ok(days) => days,
            Err(err) => {
                log::warn!("stored games are corrupt, starting fresh: {err}");
                return None;
            }
        };

        days.remove(day_key)
    }

    /// Merges `snapshot` under `day_key` and writes the mapping back.
    pub fn save(&mut self, day_key: &str, snapshot: &Snapshot) -> Result<(), StorageError> {
        let mut days: BTreeMap<String, Snapshot> = match self.storage.get(STORE_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => BTreeMap::new(),
        };

        days.insert(day_key.to_owned(), snapshot.clone());
        let raw = serde_json::to_string(&days)?;
        self.storage.set(STORE_KEY, &raw)
    }
}
