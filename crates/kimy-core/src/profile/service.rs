//! Profile loading and saving on top of the settings store.
//!
//! Read failures degrade to defaults (a profile is never required to exist);
//! write failures and validation errors surface to the caller.

use tracing::{info, warn};

use kimy_types::error::ProfileError;
use kimy_types::profile::{AVATAR_KEY, Profile, USERNAME_KEY};

use crate::storage::settings_store::SettingsStore;

/// Loads and saves the user profile through a [`SettingsStore`].
///
/// Generic over the store so kimy-core never depends on kimy-infra.
pub struct ProfileService<S: SettingsStore> {
    store: S,
}

impl<S: SettingsStore> ProfileService<S> {
    /// Create a new profile service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the profile from storage.
    ///
    /// A missing key leaves the default for that field; a read failure is
    /// treated the same way and logged, never surfaced.
    pub async fn load(&self) -> Profile {
        let username = match self.store.get(USERNAME_KEY).await {
            Ok(value) => value.unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, key = USERNAME_KEY, "settings read failed, using default");
                String::new()
            }
        };
        let avatar = match self.store.get(AVATAR_KEY).await {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, key = AVATAR_KEY, "settings read failed, using default");
                None
            }
        };
        Profile { username, avatar }
    }

    /// Persist the profile.
    ///
    /// A username that is empty after trimming is rejected without touching
    /// storage. The avatar is written only when one has been picked; an
    /// existing stored avatar is left alone otherwise.
    pub async fn save(&self, profile: &Profile) -> Result<(), ProfileError> {
        if profile.username.trim().is_empty() {
            return Err(ProfileError::EmptyUsername);
        }

        self.store.set(USERNAME_KEY, &profile.username).await?;
        if let Some(avatar) = &profile.avatar {
            self.store.set(AVATAR_KEY, avatar).await?;
        }
        info!(username = %profile.username, has_avatar = profile.avatar.is_some(), "profile saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kimy_types::error::RepositoryError;

    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory store; `fail_reads` simulates a broken backend.
    #[derive(Default)]
    struct MemoryStore {
        values: Mutex<HashMap<String, String>>,
        fail_reads: bool,
    }

    impl SettingsStore for MemoryStore {
        async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
            if self.fail_reads {
                return Err(RepositoryError::Connection);
            }
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_load_defaults_when_nothing_saved() {
        let service = ProfileService::new(MemoryStore::default());
        let profile = service.load().await;
        assert_eq!(profile, Profile::default());
        assert_eq!(profile.display_name(), "usuario");
    }

    #[tokio::test]
    async fn test_load_treats_read_failure_as_absent() {
        let store = MemoryStore {
            fail_reads: true,
            ..Default::default()
        };
        let service = ProfileService::new(store);
        let profile = service.load().await;
        assert_eq!(profile, Profile::default());
    }

    #[tokio::test]
    async fn test_save_rejects_whitespace_username_without_writing() {
        let service = ProfileService::new(MemoryStore::default());
        for username in ["", "   ", "\t\n"] {
            let profile = Profile {
                username: username.to_string(),
                avatar: Some("/tmp/pic.jpg".to_string()),
            };
            let err = service.save(&profile).await.unwrap_err();
            assert!(matches!(err, ProfileError::EmptyUsername));
        }
        assert!(service.store.values.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrips_exactly() {
        let service = ProfileService::new(MemoryStore::default());
        let profile = Profile {
            username: "Ana".to_string(),
            avatar: Some("/home/ana/fotos/año nuevo.jpg".to_string()),
        };
        service.save(&profile).await.unwrap();

        let loaded = service.load().await;
        assert_eq!(loaded, profile);
    }

    #[tokio::test]
    async fn test_save_without_avatar_leaves_stored_avatar() {
        let service = ProfileService::new(MemoryStore::default());
        service
            .save(&Profile {
                username: "Ana".to_string(),
                avatar: Some("/tmp/old.jpg".to_string()),
            })
            .await
            .unwrap();

        service
            .save(&Profile {
                username: "Ana María".to_string(),
                avatar: None,
            })
            .await
            .unwrap();

        let loaded = service.load().await;
        assert_eq!(loaded.username, "Ana María");
        assert_eq!(loaded.avatar.as_deref(), Some("/tmp/old.jpg"));
    }
}
