use std::{collections::HashMap, sync::Mutex};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Key, KeyValueStorage};

/// Volatile backend holding serialized values, used for tests and headless sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<Key, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value, e.g. to simulate data written by another version.
    pub fn set_raw(&self, key: Key, value: &str) -> Result<(), Error> {
        self.lock()?.insert(key, value.to_string());
        Ok(())
    }

    pub fn get_raw(&self, key: Key) -> Result<Option<String>, Error> {
        Ok(self.lock()?.get(&key).cloned())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Key, String>>, Error> {
        self.entries
            .lock()
            .map_err(|err| Error::Unknown(err.to_string()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get<V: DeserializeOwned>(&self, key: Key) -> Result<Option<V>, Error> {
        match self.lock()?.get(&key) {
            Some(value) => Ok(Some(serde_json::from_str(value)?)),
            None => Ok(None),
        }
    }

    fn set<V: Serialize + ?Sized>(&self, key: Key, value: &V) -> Result<(), Error> {
        let value = serde_json::to_string(value)?;
        self.lock()?.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: Key) -> Result<(), Error> {
        self.lock()?.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_get_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get::<Vec<u32>>(Key::Workouts).unwrap(), None);
    }

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        storage.set(Key::Settings, &[1, 2, 3]).unwrap();
        assert_eq!(
            storage.get::<Vec<u32>>(Key::Settings).unwrap(),
            Some(vec![1, 2, 3])
        );
        assert_eq!(storage.get::<Vec<u32>>(Key::Log).unwrap(), None);

        storage.remove(Key::Settings).unwrap();
        assert_eq!(storage.get::<Vec<u32>>(Key::Settings).unwrap(), None);
    }

    #[test]
    fn test_get_malformed_value() {
        let storage = MemoryStorage::new();
        storage.set_raw(Key::Workouts, "not json").unwrap();
        assert!(matches!(
            storage.get::<Vec<u32>>(Key::Workouts),
            Err(Error::Serialization(_))
        ));
        assert_eq!(
            storage.get_raw(Key::Workouts).unwrap(),
            Some("not json".to_string())
        );
    }
}
