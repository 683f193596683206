//! REST client for the expense tracker API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three fixed POST exchanges, no retries. The client owns the injected
//! [`Session`]: a successful login writes the token into it and the wallet
//! call reads the bearer token from it.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged here and returned. Callers decide how to surface
//! it; nothing is swallowed.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

pub mod error;
pub mod transport;
pub mod types;

use serde::Serialize;
use serde_json::Value;

pub use error::ApiError;
pub use transport::{ApiRequest, ApiResponse, Transport};
pub use types::{LoginRequest, RegisterRequest, WalletDetails};

use crate::config::ApiConfig;
use crate::session::{Credential, Session};
use types::{LOGIN_PATH, LoginResponse, REGISTER_PATH, WALLET_PATH};

pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
    session: Session,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T, session: Session) -> Self {
        Self { config, transport, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST /user/register`.
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx statuses.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Value, ApiError> {
        let body = self.post(REGISTER_PATH, request, None).await?;
        log::info!("api: registered user {}", request.username);
        Ok(body)
    }

    /// `POST /user/login`, storing the returned token in the session.
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx statuses, [`ApiError::MissingToken`] when
    /// the body lacks `data.jwtToken`, or a session storage failure. The
    /// session is untouched on every error path before storage.
    pub async fn login(&self, request: &LoginRequest) -> Result<Credential, ApiError> {
        let body = self.post(LOGIN_PATH, request, None).await?;
        let Ok(response) = serde_json::from_value::<LoginResponse>(body) else {
            log::error!("api: login response missing data.jwtToken");
            return Err(ApiError::MissingToken);
        };
        let credential = match self.session.sign_in(&response.data.jwt_token) {
            Ok(credential) => credential,
            Err(crate::session::SessionError::EmptyToken) => {
                log::error!("api: login response carried an empty token");
                return Err(ApiError::MissingToken);
            }
            Err(e) => {
                log::error!("api: storing credential failed: {e}");
                return Err(e.into());
            }
        };
        log::info!("api: logged in as {}", request.email);
        Ok(credential)
    }

    /// `POST /user/wallet` with the session's bearer token.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotAuthenticated`] without a stored token (no request is
    /// sent), otherwise transport failures and non-2xx statuses.
    pub async fn submit_wallet(&self, details: &WalletDetails) -> Result<Value, ApiError> {
        let Some(token) = self.session.token() else {
            log::warn!("api: wallet submit without a credential");
            return Err(ApiError::NotAuthenticated);
        };
        let body = self.post(WALLET_PATH, details, Some(token)).await?;
        log::info!("api: wallet details saved");
        Ok(body)
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B, bearer: Option<Credential>) -> Result<Value, ApiError> {
        let url = self.config.endpoint(path);
        let request = ApiRequest { url, bearer, body: serde_json::to_value(body)? };
        log::debug!("api: POST {}", request.url);

        let response = match self.transport.post_json(request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("api: POST /{path} failed: {e}");
                return Err(e);
            }
        };
        if !response.is_success() {
            let message = status_message(response.status, &response.body);
            log::error!("api: POST /{path} returned {}: {message}", response.status);
            return Err(ApiError::Status { status: response.status, message });
        }
        Ok(response.body)
    }
}

/// Server-provided `message`/`error` text, or a generic status line.
fn status_message(status: u16, body: &Value) -> String {
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .filter(|text| !text.trim().is_empty())
        .map_or_else(|| format!("request failed with status {status}"), ToOwned::to_owned)
}
