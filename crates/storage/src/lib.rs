#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;

pub mod file;
#[cfg(target_arch = "wasm32")]
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod memory;
pub mod repository;

/// Synchronous key-value backend storing JSON-serialized values.
pub trait KeyValueStorage {
    /// Return `None` if no value is stored under `key`.
    fn get<V: DeserializeOwned>(&self, key: Key) -> Result<Option<V>, Error>;
    fn set<V: Serialize + ?Sized>(&self, key: Key, value: &V) -> Result<(), Error>;
    fn remove(&self, key: Key) -> Result<(), Error>;
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    #[strum(serialize = "@calroast_workouts")]
    Workouts,
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "log")]
    Log,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Unknown(String),
}

impl From<Error> for calroast_domain::StorageError {
    fn from(value: Error) -> Self {
        match value {
            Error::Serialization(err) => calroast_domain::StorageError::Malformed(err.to_string()),
            Error::Io(err) => calroast_domain::StorageError::Other(Box::new(err)),
            Error::Unknown(message) => calroast_domain::StorageError::Other(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    pub mod data;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Key::Workouts, "@calroast_workouts")]
    #[case(Key::Settings, "settings")]
    #[case(Key::Log, "log")]
    fn test_key_as_ref(#[case] key: Key, #[case] expected: &str) {
        assert_eq!(key.as_ref(), expected);
    }

    #[test]
    fn test_storage_error_from_error() {
        let err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        assert!(matches!(
            calroast_domain::StorageError::from(Error::Serialization(err)),
            calroast_domain::StorageError::Malformed(_)
        ));
        assert!(matches!(
            calroast_domain::StorageError::from(Error::Unknown("full".to_string())),
            calroast_domain::StorageError::Other(err) if err.to_string() == "full"
        ));
    }
}
