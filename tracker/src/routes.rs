//! Auth-gated route table.
//!
//! DESIGN
//! ======
//! A [`RouteTable`] is built for one [`AuthState`] and never changes. UIs
//! rebuild it when the session changes rather than re-deriving the route
//! list on every lookup. The dashboard renders only from an authenticated
//! table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::session::{AuthState, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    NotFound,
}

impl Route {
    /// Every navigable route, in menu order.
    pub const ALL: [Route; 4] = [Route::Home, Route::Login, Route::Register, Route::Dashboard];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::NotFound => "/404",
        }
    }

    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard)
    }

    fn from_path(path: &str) -> Self {
        match normalize_path(path) {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/dashboard" => Self::Dashboard,
            _ => Self::NotFound,
        }
    }
}

/// What the UI should do for a requested path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteTable {
    state: AuthState,
}

impl RouteTable {
    #[must_use]
    pub fn new(state: AuthState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn for_session(session: &Session) -> Self {
        Self::new(session.auth_state())
    }

    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution {
        let requested = Route::from_path(path);
        match self.state {
            AuthState::Authenticated if requested == Route::Dashboard => Resolution::Render(Route::Dashboard),
            AuthState::Authenticated => Resolution::Redirect(Route::Dashboard),
            AuthState::Unauthenticated if requested.is_protected() => Resolution::Redirect(Route::Login),
            AuthState::Unauthenticated => Resolution::Render(requested),
        }
    }
}

/// Strip query, fragment, and a trailing slash (except on the root).
fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
