use crate::core::prefs::{KeyValueStore, StoreError};
use web_sys as web;

/// `window.localStorage`, when the browser grants it.
pub struct LocalStorage {
    inner: Option<web::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::debug!("localStorage unavailable; preferences will not persist");
        }
        Self { inner }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.inner.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::WriteRejected(format!("{:?}", e)))
    }
}
