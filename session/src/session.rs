use palabrita_core::{GameConfig, GameError, KeyInput, KeyOutcome, PlayEngine, TargetWord};

use crate::{day_key, GameStore, Snapshot, Storage};

/// One player's progress for one day, wired to its persistence store. Input
/// flows through `handle_key`; every state-changing key is snapshotted once
/// the stored state has been read, and never before.
#[derive(Clone, Debug)]
pub struct GameSession<S> {
    engine: PlayEngine,
    store: GameStore<S>,
    day_key: String,
    loaded: bool,
}

impl<S: Storage> GameSession<S> {
    /// Fresh session for today's puzzle. Nothing is read from or written to
    /// storage until `restore` runs.
    pub fn new(storage: S, target: TargetWord, config: GameConfig) -> Self {
        Self::with_day_key(storage, target, config, day_key())
    }

    pub fn with_day_key(
        storage: S,
        target: TargetWord,
        config: GameConfig,
        day_key: String,
    ) -> Self {
        Self {
            engine: PlayEngine::new(target, config),
            store: GameStore::new(storage),
            day_key,
            loaded: false,
        }
    }

    /// Reads this day's stored snapshot, replacing the fresh engine when one
    /// is present and usable. Always marks the session loaded so later keys
    /// persist.
    pub fn restore(&mut self) {
        if let Some(snapshot) = self.store.load(&self.day_key) {
            match snapshot.restore(self.engine.target().clone()) {
                Ok(engine) => self.engine = engine,
                Err(err) => {
                    log::warn!(
                        "stored game for {} is unusable, starting fresh: {err}",
                        self.day_key
                    );
                }
            }
        }
        self.loaded = true;
    }

    /// Forwards one key to the engine and snapshots the result. Persistence
    /// failures are logged and swallowed; the in-memory state stays
    /// authoritative.
    pub fn handle_key(&mut self, key: KeyInput) -> Result<KeyOutcome, GameError> {
        let outcome = self.engine.handle_key(key)?;
        if self.loaded && outcome.has_update() {
            self.persist();
        }
        Ok(outcome)
    }

    fn persist(&mut self) {
        let snapshot = Snapshot::capture(&self.engine);
        if let Err(err) = self.store.save(&self.day_key, &snapshot) {
            log::warn!("could not persist game for {}: {err}", self.day_key);
        }
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn day_key(&self) -> &str {
        &self.day_key
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn store(&self) -> &GameStore<S> {
        &self.store
    }

    pub fn into_storage(self) -> S {
        self.store.into_storage()
    }
}
