//! Client-side navigation.
//!
//! Screens never change routes themselves; they ask an injected
//! [`Navigator`]. The console uses [`RecordingNavigator`], which keeps the
//! history so commands can tell the user where a web client would have gone.

use parking_lot::Mutex;

/// Login view route.
pub const LOGIN_ROUTE: &str = "/login";

/// Dashboard landing route.
pub const ADMIN_ROUTE: &str = "/admin";

#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator that records every requested route.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().clone()
    }

    pub fn current(&self) -> Option<String> {
        self.history.lock().last().cloned()
    }

    pub fn visited(&self, path: &str) -> bool {
        self.history.lock().iter().any(|p| p == path)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path = %path, "Navigating");
        self.history.lock().push(path.to_string());
    }
}
