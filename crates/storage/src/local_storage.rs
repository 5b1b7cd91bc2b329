use gloo_storage::{LocalStorage as GlooLocalStorage, Storage, errors::StorageError};
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Key, KeyValueStorage};

/// Browser `localStorage`.
pub struct LocalStorage;

impl KeyValueStorage for LocalStorage {
    fn get<V: DeserializeOwned>(&self, key: Key) -> Result<Option<V>, Error> {
        match GlooLocalStorage::get(key.as_ref()) {
            Ok(value) => Ok(Some(value)),
            Err(err) => match err {
                StorageError::KeyNotFound(_) => Ok(None),
                StorageError::SerdeError(err) => Err(Error::Serialization(err)),
                err => Err(Error::Unknown(err.to_string())),
            },
        }
    }

    fn set<V: Serialize + ?Sized>(&self, key: Key, value: &V) -> Result<(), Error> {
        GlooLocalStorage::set(key.as_ref(), value).map_err(|err| match err {
            StorageError::SerdeError(err) => Error::Serialization(err),
            err => Error::Unknown(err.to_string()),
        })
    }

    fn remove(&self, key: Key) -> Result<(), Error> {
        GlooLocalStorage::delete(key.as_ref());
        Ok(())
    }
}
