#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("conflict")]
    Conflict,
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("malformed data: {0}")]
    Malformed(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_from_storage_error() {
        assert!(matches!(
            ReadError::from(StorageError::Malformed("x".to_string())),
            ReadError::Storage(StorageError::Malformed(message)) if message == "x"
        ));
        assert_eq!(UpdateError::from(StorageError::Unavailable).to_string(), "storage unavailable");
        assert_eq!(CreateError::Conflict.to_string(), "conflict");
    }

    #[test]
    fn test_storage_error_display() {
        assert_eq!(
            StorageError::Malformed("expected array".to_string()).to_string(),
            "malformed data: expected array"
        );
    }
}
