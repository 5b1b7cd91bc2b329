use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Key, KeyValueStorage};

/// Backend for native targets keeping one JSON file per key in a directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: Key) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_ref()))
    }
}

impl KeyValueStorage for FileStorage {
    fn get<V: DeserializeOwned>(&self, key: Key) -> Result<Option<V>, Error> {
        match fs::read_to_string(self.path(key)) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set<V: Serialize + ?Sized>(&self, key: Key, value: &V) -> Result<(), Error> {
        let json = serde_json::to_string(value)?;
        fs::create_dir_all(&self.dir)?;

        // Write to temp file first, then rename atomically
        let path = self.path(key);
        let temp_path = self.dir.join(format!("{}.json.tmp", key.as_ref()));
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    fn remove(&self, key: Key) -> Result<(), Error> {
        match fs::remove_file(self.path(key)) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_get_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        assert_eq!(storage.get::<Vec<u32>>(Key::Workouts).unwrap(), None);
    }

    #[test]
    fn test_set_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("data"));

        storage.set(Key::Workouts, &["a", "b"]).unwrap();

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("data/@calroast_workouts.json")).unwrap(),
            r#"["a","b"]"#
        );
        assert!(!temp_dir.path().join("data/@calroast_workouts.json.tmp").exists());
        assert_eq!(
            storage.get::<Vec<String>>(Key::Workouts).unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_set_overwrites_value() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.set(Key::Settings, &1).unwrap();
        storage.set(Key::Settings, &2).unwrap();

        assert_eq!(storage.get::<u32>(Key::Settings).unwrap(), Some(2));
    }

    #[test]
    fn test_get_malformed_value() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("log.json"), "[1,").unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(matches!(
            storage.get::<Vec<u32>>(Key::Log),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.remove(Key::Log).unwrap();
        storage.set(Key::Log, &0).unwrap();
        storage.remove(Key::Log).unwrap();

        assert_eq!(storage.get::<u32>(Key::Log).unwrap(), None);
    }
}
