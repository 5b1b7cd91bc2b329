use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

/// Number of entries kept in the persisted log.
pub const MAX_ENTRIES: usize = 100;

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

pub trait Service {
    fn get_log_entries(&self) -> Result<VecDeque<Entry>, Error>;
}

/// Implementations must not emit log records themselves.
#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    /// Entries ordered from newest to oldest.
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    /// Prepend `entry` and drop entries beyond [`MAX_ENTRIES`].
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(storage: Arc<Mutex<dyn Repository>>) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(storage);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        echo(record.level(), &message);

        let Ok(log) = LOG.lock() else {
            return;
        };
        let Some(ref repository) = *log else {
            return;
        };
        let Ok(repository) = repository.lock() else {
            return;
        };
        let _ = repository.write_entry(Entry {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message,
        });
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn echo(level: Level, message: &str) {
    match level {
        Level::Error => gloo_console::error!(message),
        Level::Warn => gloo_console::warn!(message),
        Level::Info => gloo_console::info!(message),
        Level::Debug | Level::Trace => gloo_console::debug!(message),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn echo(level: Level, message: &str) {
    eprintln!("[{level}] {message}");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct MockRepository {
        entries: Mutex<VecDeque<Entry>>,
    }

    impl Repository for MockRepository {
        fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
            Ok(self.entries.lock().unwrap().clone())
        }

        fn write_entry(&self, entry: Entry) -> Result<(), Error> {
            let mut entries = self.entries.lock().unwrap();
            entries.push_front(entry);
            entries.truncate(MAX_ENTRIES);
            Ok(())
        }
    }

    #[test]
    fn test_logger_writes_entries() {
        let repository = Arc::new(Mutex::new(MockRepository::default()));
        init(repository.clone()).unwrap();

        log::warn!("first message");
        log::error!("second message");
        log::trace!("ignored message");

        let entries = repository.lock().unwrap().read_entries().unwrap();
        let messages = entries
            .iter()
            .map(|e| (e.level, e.message.as_str()))
            .collect::<Vec<_>>();
        let first = messages
            .iter()
            .position(|m| *m == (Level::Warn, "first message"))
            .unwrap();
        let second = messages
            .iter()
            .position(|m| *m == (Level::Error, "second message"))
            .unwrap();
        assert!(second < first);
        assert!(!messages.iter().any(|(_, m)| *m == "ignored message"));
    }

    #[test]
    fn test_entry_serde() {
        let entry = Entry {
            time: "Oct 14 09:00:00".to_string(),
            level: Level::Warn,
            message: "foo".to_string(),
        };
        let serialized = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            serialized,
            r#"{"time":"Oct 14 09:00:00","level":"Warn","message":"foo"}"#
        );
        assert_eq!(serde_json::from_str::<Entry>(&serialized).unwrap(), entry);
    }
}
