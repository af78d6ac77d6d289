use fnv::FnvHashMap;
use thiserror::Error;

/// Storage key for the "skip intro" preference.
pub const SKIP_INTRO_KEY: &str = "ocean.skipIntro.v1";
const SKIP_INTRO_VALUE: &str = "1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    WriteRejected(String),
}

/// Minimal string key-value persistence (browser `localStorage` in production).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, also used when the browser denies storage access.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write, like storage in a locked-down browser.
    pub fn read_only() -> Self {
        Self {
            entries: FnvHashMap::default(),
            read_only: true,
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::WriteRejected(key.to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroBehavior {
    Show,
    Skip,
}

/// Read once at startup: only the exact stored value means "skip".
pub fn load_intro_behavior<S: KeyValueStore + ?Sized>(store: &S) -> IntroBehavior {
    match store.get(SKIP_INTRO_KEY).as_deref() {
        Some(SKIP_INTRO_VALUE) => IntroBehavior::Skip,
        _ => IntroBehavior::Show,
    }
}

/// Remember that the user skipped the intro. Failures are absorbed.
pub fn mark_skipped<S: KeyValueStore + ?Sized>(store: &mut S) {
    if let Err(e) = store.set(SKIP_INTRO_KEY, SKIP_INTRO_VALUE) {
        log::debug!("skip preference not saved: {}", e);
    }
}
