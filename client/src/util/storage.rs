//! `localStorage`-backed credential store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser calls only exist with the `csr` feature. Elsewhere the store reads
//! as empty and refuses writes, and [`browser_session`] falls back to memory.

#[cfg(all(test, not(feature = "csr")))]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(feature = "csr")]
use tracker::session::TOKEN_STORAGE_KEY;
use tracker::session::{CredentialStore, Session, SessionError};

/// Token kept under [`tracker::session::TOKEN_STORAGE_KEY`] in `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| SessionError::Storage("localStorage unavailable".to_owned()))
}

impl CredentialStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage().ok()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(TOKEN_STORAGE_KEY, token)
                .map_err(|e| SessionError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(SessionError::Storage("localStorage unavailable".to_owned()))
        }
    }

    fn clear(&self) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(TOKEN_STORAGE_KEY)
                .map_err(|e| SessionError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}

/// Session for the running app: `localStorage` in the browser, memory otherwise.
pub fn browser_session() -> Session {
    #[cfg(feature = "csr")]
    {
        Session::new(LocalStorageStore)
    }
    #[cfg(not(feature = "csr"))]
    {
        Session::in_memory()
    }
}
