//! Reactive mirror of the credential session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The [`Session`] itself is not reactive. Pages update this view after every
//! sign-in or sign-out so route gates and headers re-render.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use tracker::routes::RouteTable;
use tracker::session::{AuthState, Session};

/// Auth state plus a one-shot notice for the next page.
///
/// Held in an `RwSignal` provided via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionView {
    pub auth: AuthState,
    pub notice: Option<String>,
}

impl SessionView {
    pub fn from_session(session: &Session) -> Self {
        Self { auth: session.auth_state(), notice: None }
    }

    /// Re-read the auth state after the session changed.
    pub fn refresh(&mut self, session: &Session) {
        self.auth = session.auth_state();
    }

    pub fn route_table(&self) -> RouteTable {
        RouteTable::new(self.auth)
    }

    /// Remove and return the pending notice.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }
}
