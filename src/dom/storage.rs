//! `localStorage`-backed theme preference store.

use web_sys::{Storage, Window};

use crate::error::PageError;
use crate::theme::PreferenceStore;

pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    /// Open the window's local storage. Blocked or missing storage yields a
    /// store that reads nothing and fails every write.
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("local storage blocked: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("local storage read failed: {err:?}");
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        let storage = self.storage.as_ref().ok_or(PageError::NoStorage)?;
        storage
            .set_item(key, value)
            .map_err(|err| PageError::js("local_storage.set_item", &err))
    }
}
