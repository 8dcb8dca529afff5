use folio_engine::{PreferenceStore, StoreError};
use web_sys::{Storage, Window};

/// `localStorage`, when the browser grants it.
/// A missing store reads as empty and rejects writes.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn from_window(window: &Window) -> Self {
        // Throws in some privacy modes; treat that like an absent store.
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::debug!("localStorage unavailable; preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match &self.storage {
            Some(storage) => storage
                .get_item(key)
                .map_err(|err| StoreError(format!("get '{}': {:?}", key, err))),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match &self.storage {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|err| StoreError(format!("set '{}': {:?}", key, err))),
            None => Err(StoreError("localStorage unavailable".into())),
        }
    }
}
