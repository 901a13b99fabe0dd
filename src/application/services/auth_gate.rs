//! Auth Gate
//!
//! Post-render redirect for admin screens. The check only happens once the
//! first render pass is done, and it only looks at whether a token is
//! stored. It is advisory: nothing stops the admin screen from having been
//! built before the redirect fires.

use std::sync::Arc;

use crate::domain::SessionStore;
use crate::infrastructure::navigation::{Navigator, ADMIN_ROUTE, LOGIN_ROUTE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    /// First render not finished yet, no decision made
    Pending,
    Allowed,
    /// No token; navigation to the login view was issued
    Redirected,
}

pub struct AuthGate {
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    status: GateStatus,
}

impl AuthGate {
    pub fn new(session: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            session,
            navigator,
            status: GateStatus::Pending,
        }
    }

    pub fn status(&self) -> GateStatus {
        self.status
    }

    /// Admin route mounted again: the previous decision no longer holds.
    pub fn mount(&mut self) {
        self.status = GateStatus::Pending;
    }

    /// Run the token check. The store is read fresh on every call.
    pub fn after_first_render(&mut self) -> GateStatus {
        self.status = if self.session.is_authenticated() {
            GateStatus::Allowed
        } else {
            tracing::info!(target_route = LOGIN_ROUTE, "No session token, redirecting");
            self.navigator.navigate(LOGIN_ROUTE);
            GateStatus::Redirected
        };
        self.status
    }
}

/// Login view counterpart: send an already authenticated visitor to the
/// dashboard. Returns whether a redirect was issued.
pub fn redirect_if_authenticated(session: &dyn SessionStore, navigator: &dyn Navigator) -> bool {
    if session.is_authenticated() {
        navigator.navigate(ADMIN_ROUTE);
        true
    } else {
        false
    }
}
