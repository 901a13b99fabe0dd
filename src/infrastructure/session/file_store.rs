//! JSON file session store.
//!
//! The file holds a flat string map keyed like browser local storage
//! (`admin_token`, `user_data`). It is re-read on every access so a session
//! cleared by another process or handle is never served from memory.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::domain::{SessionStore, SessionUser, LEGACY_TOKEN_KEY, TOKEN_KEY, USER_KEY};
use crate::shared::error::AppError;

type Entries = BTreeMap<String, String>;

pub struct FileSessionStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Entries::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                AppError::Storage(format!("corrupt session file {}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn update<F>(&self, apply: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut Entries),
    {
        let _guard = self.write_lock.lock();
        // A corrupt file is replaced rather than blocking every write
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Discarding unreadable session file");
            Entries::new()
        });
        apply(&mut entries);
        self.write_entries(&entries)
    }

    fn get(&self, key: &str) -> Option<String> {
        match self.read_entries() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Failed to read session file");
                None
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) -> Result<(), AppError> {
        self.update(|entries| {
            entries.insert(TOKEN_KEY.to_string(), token.to_string());
        })
    }

    fn user(&self) -> Option<SessionUser> {
        let raw = self.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring invalid stored user record");
                None
            }
        }
    }

    fn set_user(&self, user: &SessionUser) -> Result<(), AppError> {
        let raw = serde_json::to_string(user)?;
        self.update(|entries| {
            entries.insert(USER_KEY.to_string(), raw);
        })
    }

    fn clear(&self) -> Result<(), AppError> {
        self.update(|entries| {
            entries.remove(TOKEN_KEY);
            entries.remove(LEGACY_TOKEN_KEY);
            entries.remove(USER_KEY);
        })
    }
}
