use shared::storage::KeyValueStore;
use shared::WheelError;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

/// `localStorage`-backed store. Reads from a browser without storage come
/// back empty; writes fail with [`WheelError::Storage`].
#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, wheels will not persist");
        }
        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> Result<&Storage, WheelError> {
        self.storage
            .as_ref()
            .ok_or_else(|| WheelError::Storage("localStorage is not available".to_string()))
    }
}

fn js_error(err: JsValue) -> WheelError {
    WheelError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, WheelError> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WheelError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), WheelError> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
