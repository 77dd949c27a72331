//! Browser LocalStorage backend

use web_sys::Storage;

use super::KeyValueStore;

/// `window.localStorage`, or nothing when storage is unavailable
/// (private browsing, sandboxed iframes)
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if storage.is_none() {
            log::warn!("LocalStorage unavailable, scores will not persist");
        }

        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("Failed to write {key} to LocalStorage");
            }
        }
    }
}
