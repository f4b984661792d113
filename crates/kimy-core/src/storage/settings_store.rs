//! Settings store trait.
//!
//! Defines the interface for the persistent key-value settings that back the
//! user profile. Implementations live in kimy-infra.

use kimy_types::error::RepositoryError;

/// Trait for persistent string-to-string settings storage.
///
/// Stored values must round-trip bit-for-bit. Uses RPITIT (native async fn
/// in traits, Rust 2024 edition).
pub trait SettingsStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, RepositoryError>> + Send;

    /// Set a value for a key (upsert).
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
