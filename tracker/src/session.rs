//! Credential storage and the injectable session handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token is the only piece of mutable state shared between the
//! router, the API client, and the UI. Every consumer receives a [`Session`]
//! explicitly instead of reaching into a global storage slot.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Storage key used by browser-backed credential stores.
pub const TOKEN_STORAGE_KEY: &str = "jwtToken";

/// Error returned by credential store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    /// The token was empty or whitespace.
    #[error("refusing to store an empty token")]
    EmptyToken,
    /// The underlying storage backend rejected the operation.
    #[error("credential storage failed: {0}")]
    Storage(String),
}

/// An opaque bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token, rejecting empty or whitespace-only values.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] when `raw` has no content.
    pub fn new(raw: impl Into<String>) -> Result<Self, SessionError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value for this token.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens never end up in logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Whether a credential is currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    #[default]
    Unauthenticated,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Persistent slot holding zero or one token string.
pub trait CredentialStore: Send + Sync {
    /// Current raw token, if any.
    fn get(&self) -> Option<String>;

    /// Replace the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the backend cannot persist.
    fn set(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the stored token. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the backend cannot persist.
    fn clear(&self) -> Result<(), SessionError>;
}

/// In-process store. Lives as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Cloneable handle around the active credential store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl Session {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Session backed by a fresh [`MemoryStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Stored credential, ignoring blank leftovers in the backend.
    #[must_use]
    pub fn token(&self) -> Option<Credential> {
        let raw = self.store.get()?;
        if raw.trim().is_empty() {
            return None;
        }
        Some(Credential(raw))
    }

    /// Persist `token` as the active credential.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] for blank tokens, or the store's
    /// error when it cannot persist.
    pub fn sign_in(&self, token: &str) -> Result<Credential, SessionError> {
        let credential = Credential::new(token)?;
        self.store.set(credential.as_str())?;
        log::info!("session: credential stored");
        Ok(credential)
    }

    /// Drop the active credential.
    ///
    /// # Errors
    ///
    /// Returns the store's error when it cannot persist.
    pub fn sign_out(&self) -> Result<(), SessionError> {
        self.store.clear()?;
        log::info!("session: credential cleared");
        Ok(())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    #[must_use]
    pub fn auth_state(&self) -> AuthState {
        if self.is_authenticated() { AuthState::Authenticated } else { AuthState::Unauthenticated }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("auth_state", &self.auth_state()).finish()
    }
}
