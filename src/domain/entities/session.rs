//! Admin session and the storage contract that holds it.
//!
//! The session is an opaque bearer token plus a minimal user record. It is
//! the only state shared between screens; every reader goes through
//! [`SessionStore`] instead of caching it.

use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "admin_token";

/// Storage key of the serialized user record.
pub const USER_KEY: &str = "user_data";

/// Legacy token key removed together with the session.
pub const LEGACY_TOKEN_KEY: &str = "auth_token";

/// Minimal user record returned at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(default, alias = "fullName", alias = "full_name")]
    pub name: String,

    pub email: String,

    #[serde(default)]
    pub role: String,
}

/// A snapshot of the stored session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: Option<SessionUser>,
}

/// Session storage contract.
///
/// Implementations must never cache values across calls in a way that hides
/// a `clear` issued by another holder of the same store.
pub trait SessionStore: Send + Sync {
    /// Current bearer token, if any.
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: &str) -> Result<(), AppError>;

    /// Stored user record. Unparseable records read as `None`.
    fn user(&self) -> Option<SessionUser>;

    fn set_user(&self, user: &SessionUser) -> Result<(), AppError>;

    /// Remove token and user record.
    fn clear(&self) -> Result<(), AppError>;

    fn session(&self) -> Option<Session> {
        self.token().map(|token| Session {
            token,
            user: self.user(),
        })
    }

    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
