//! User profile types.
//!
//! The profile is the only persistent state in Kimy: a username and an
//! optional avatar image path, stored under two fixed settings keys.

use serde::{Deserialize, Serialize};

/// Settings key under which the username is persisted.
pub const USERNAME_KEY: &str = "username";

/// Settings key under which the avatar image path is persisted.
pub const AVATAR_KEY: &str = "userImage";

/// Fallback display name when no username has been saved.
pub const DEFAULT_DISPLAY_NAME: &str = "usuario";

/// The locally persisted user profile.
///
/// Loaded once at startup; mutated only through an explicit save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Username as typed by the user. May be empty before the first save.
    pub username: String,
    /// Opaque local path to the picked avatar image, if any.
    pub avatar: Option<String>,
}

impl Profile {
    /// Name shown in the conversation, substituting "usuario" when the
    /// username is empty.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            DEFAULT_DISPLAY_NAME
        } else {
            &self.username
        }
    }
}
