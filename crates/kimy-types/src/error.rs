use thiserror::Error;

/// Errors from settings storage operations (used by trait definitions in
/// kimy-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors related to profile operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("username is empty")]
    EmptyUsername,

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

/// Errors from the image-selection capability.
///
/// Cancellation is not an error; pickers report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("image not found: '{0}'")]
    NotFound(String),

    #[error("selection failed: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_profile_error_wraps_repository_error() {
        let err: ProfileError = RepositoryError::Connection.into();
        assert!(err.to_string().contains("database connection error"));
    }

    #[test]
    fn test_picker_error_display() {
        let err = PickerError::NotFound("/tmp/nope.jpg".to_string());
        assert_eq!(err.to_string(), "image not found: '/tmp/nope.jpg'");
    }
}
