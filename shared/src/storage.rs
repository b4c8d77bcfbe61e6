use std::cell::RefCell;
use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::{PURCHASES_KEY, SETTINGS_KEY, STORAGE_KEYS, WHEELS_KEY};
use crate::error::WheelError;
use crate::segment::Wheel;
use crate::templates::default_wheels;

/// String key/value persistence, e.g. the browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, WheelError>;
    fn set(&self, key: &str, value: &str) -> Result<(), WheelError>;
    fn remove(&self, key: &str) -> Result<(), WheelError>;
}

/// In-memory store for tests and hosts without local storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, WheelError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), WheelError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), WheelError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    // Nothing reads `sound` or `analytics` yet; they stay so settings saved
    // by earlier builds load and save back unchanged.
    pub sound: bool,
    pub analytics: bool,
    pub high_contrast: bool,
    pub large_text: bool,
    pub reduced_motion: bool,
    pub parental_controls_enabled: bool,
    /// Seconds chosen in the settings panel; `None` keeps the preset timing.
    pub spin_time_secs: Option<u32>,
    pub spin_slowly: bool,
    pub exclude_after_spin: bool,
    pub family_safe: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            analytics: false,
            high_contrast: false,
            large_text: false,
            reduced_motion: false,
            parental_controls_enabled: true,
            spin_time_secs: None,
            spin_slowly: false,
            exclude_after_spin: false,
            family_safe: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Purchases {
    pub no_ads: bool,
    /// Recorded by the purchase gateway; no wheel is gated on it yet.
    pub premium_wheels: bool,
}

/// Application data context. Built once at startup and handed to whatever
/// needs persistence.
#[derive(Debug)]
pub struct AppStore<S> {
    store: S,
}

impl<S: KeyValueStore> AppStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, WheelError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), WheelError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    fn load_or_default<T: DeserializeOwned>(&self, key: &str, default: impl FnOnce() -> T) -> T {
        match self.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default(),
            Err(e) => {
                warn!("Failed to read {} from storage, using defaults: {}", key, e);
                default()
            }
        }
    }

    pub fn wheels(&self) -> Vec<Wheel> {
        let wheels: Vec<Wheel> = self.load_or_default(WHEELS_KEY, default_wheels);
        if wheels.is_empty() {
            default_wheels()
        } else {
            wheels
        }
    }

    pub fn save_wheels(&self, wheels: &[Wheel]) -> Result<(), WheelError> {
        self.save(WHEELS_KEY, wheels)
    }

    pub fn wheel(&self, id: &str) -> Option<Wheel> {
        self.wheels().into_iter().find(|w| w.id == id)
    }

    /// Replaces the wheel with the same id, or appends it.
    pub fn upsert_wheel(&self, wheel: Wheel) -> Result<(), WheelError> {
        let mut wheels = self.wheels();
        match wheels.iter_mut().find(|w| w.id == wheel.id) {
            Some(existing) => *existing = wheel,
            None => wheels.push(wheel),
        }
        self.save_wheels(&wheels)
    }

    pub fn delete_wheel(&self, id: &str) -> Result<bool, WheelError> {
        let mut wheels = self.wheels();
        let before = wheels.len();
        wheels.retain(|w| w.id != id);
        if wheels.len() == before {
            return Ok(false);
        }
        self.save_wheels(&wheels)?;
        Ok(true)
    }

    pub fn settings(&self) -> Settings {
        self.load_or_default(SETTINGS_KEY, Settings::default)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), WheelError> {
        self.save(SETTINGS_KEY, settings)
    }

    // Stored base64-encoded so casual edits of local storage don't flip flags.
    // This is obfuscation, not protection.
    pub fn purchases(&self) -> Purchases {
        let decoded = self.store.get(PURCHASES_KEY).and_then(|raw| match raw {
            Some(raw) => {
                let bytes = STANDARD.decode(raw.as_bytes())?;
                let json = String::from_utf8(bytes)?;
                Ok(Some(serde_json::from_str::<Purchases>(&json)?))
            }
            None => Ok(None),
        });
        match decoded {
            Ok(Some(purchases)) => purchases,
            Ok(None) => Purchases::default(),
            Err(e) => {
                warn!("Failed to decode purchases, using defaults: {}", e);
                Purchases::default()
            }
        }
    }

    pub fn save_purchases(&self, purchases: &Purchases) -> Result<(), WheelError> {
        let json = serde_json::to_string(purchases)?;
        self.store.set(PURCHASES_KEY, &STANDARD.encode(json))
    }

    /// Removes this app's keys only.
    pub fn clear(&self) -> Result<(), WheelError> {
        for key in STORAGE_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, WheelError> {
            Err(WheelError::Storage("unavailable".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), WheelError> {
            Err(WheelError::Storage("unavailable".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), WheelError> {
            Err(WheelError::Storage("unavailable".to_string()))
        }
    }

    #[test]
    fn test_fresh_store_yields_default_wheels() {
        let store = AppStore::new(MemoryStore::new());
        let wheels = store.wheels();
        assert_eq!(wheels.len(), 4);
        assert_eq!(wheels[0].id, "colors");
    }

    #[test]
    fn test_upsert_and_delete_wheel() {
        let store = AppStore::new(MemoryStore::new());
        let custom = Wheel::from_labels("custom-1", "Mine", ["A", "B"]);
        store.upsert_wheel(custom.clone()).unwrap();
        assert_eq!(store.wheel("custom-1"), Some(custom));

        let renamed = Wheel::from_labels("custom-1", "Renamed", ["A"]);
        store.upsert_wheel(renamed).unwrap();
        assert_eq!(store.wheels().len(), 5);
        assert_eq!(store.wheel("custom-1").unwrap().name, "Renamed");

        assert!(store.delete_wheel("custom-1").unwrap());
        assert!(!store.delete_wheel("custom-1").unwrap());
    }

    #[test]
    fn test_settings_merge_missing_fields_with_defaults() {
        let backend = MemoryStore::new();
        backend.set(SETTINGS_KEY, r#"{"sound": false, "spinTimeSecs": 8}"#).unwrap();
        let store = AppStore::new(backend);
        let settings = store.settings();
        assert!(!settings.sound);
        assert_eq!(settings.spin_time_secs, Some(8));
        assert!(settings.parental_controls_enabled);
    }

    #[test]
    fn test_purchases_are_encoded() {
        let store = AppStore::new(MemoryStore::new());
        let purchases = Purchases { no_ads: true, premium_wheels: false };
        store.save_purchases(&purchases).unwrap();

        let raw = store.backend().get(PURCHASES_KEY).unwrap().unwrap();
        assert!(!raw.contains("noAds"));
        assert_eq!(store.purchases(), purchases);
    }

    #[test]
    fn test_unused_flags_survive_a_save_cycle() {
        let backend = MemoryStore::new();
        backend
            .set(SETTINGS_KEY, r#"{"sound": false, "analytics": true, "legacyTheme": "dark"}"#)
            .unwrap();
        backend
            .set(PURCHASES_KEY, &STANDARD.encode(r#"{"premiumWheels": true}"#))
            .unwrap();
        let store = AppStore::new(backend);

        let settings = store.settings();
        assert!(!settings.sound);
        assert!(settings.analytics);
        store.save_settings(&settings).unwrap();
        assert_eq!(store.settings(), settings);

        let purchases = store.purchases();
        assert!(purchases.premium_wheels);
        assert!(!purchases.no_ads);
        store.save_purchases(&purchases).unwrap();
        assert_eq!(store.purchases(), purchases);
    }

    #[test]
    fn test_corrupt_values_fall_back_to_defaults() {
        let backend = MemoryStore::new();
        backend.set(WHEELS_KEY, "not json").unwrap();
        backend.set(PURCHASES_KEY, "%%%").unwrap();
        let store = AppStore::new(backend);
        assert_eq!(store.wheels().len(), 4);
        assert_eq!(store.purchases(), Purchases::default());
    }

    #[test]
    fn test_unavailable_storage_reads_defaults_and_reports_writes() {
        let store = AppStore::new(BrokenStore);
        assert_eq!(store.settings(), Settings::default());
        assert!(matches!(store.save_settings(&Settings::default()), Err(WheelError::Storage(_))));
    }

    #[test]
    fn test_clear_only_touches_app_keys() {
        let backend = MemoryStore::new();
        backend.set("other_app", "keep").unwrap();
        let store = AppStore::new(backend);
        store.save_settings(&Settings::default()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.backend().len(), 1);
        assert_eq!(store.backend().get("other_app").unwrap().as_deref(), Some("keep"));
    }
}
