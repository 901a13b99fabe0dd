//! In-memory session store.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::{SessionStore, SessionUser, LEGACY_TOKEN_KEY, TOKEN_KEY, USER_KEY};
use crate::shared::error::AppError;

/// Session store living only as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .write()
            .insert(TOKEN_KEY.to_string(), token.to_string());
        store
    }

    /// Raw value under a storage key.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    pub fn set_raw(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.raw(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) -> Result<(), AppError> {
        self.set_raw(TOKEN_KEY, token);
        Ok(())
    }

    fn user(&self) -> Option<SessionUser> {
        self.raw(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    fn set_user(&self, user: &SessionUser) -> Result<(), AppError> {
        let raw = serde_json::to_string(user)?;
        self.set_raw(USER_KEY, &raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        let mut entries = self.entries.write();
        entries.remove(TOKEN_KEY);
        entries.remove(LEGACY_TOKEN_KEY);
        entries.remove(USER_KEY);
        Ok(())
    }
}
