//! HTTP seam between the API client and the platform's networking stack.

use async_trait::async_trait;
use serde_json::Value;

use super::error::ApiError;
use crate::session::Credential;

/// One JSON POST.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub url: String,
    pub bearer: Option<Credential>,
    pub body: Value,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed body; `Value::Null` when the server sent none or non-JSON.
    pub body: Value,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns whatever status the server answered with.
///
/// Implementations only fail with [`ApiError::Transport`] when no response
/// arrived; status handling belongs to the client.
#[async_trait(?Send)]
pub trait Transport {
    async fn post_json(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}
