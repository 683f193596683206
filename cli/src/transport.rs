//! `reqwest` implementation of the tracker [`Transport`].

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use serde_json::Value;
use tracker::api::{ApiError, ApiRequest, ApiResponse, Transport};

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("expense-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or(Value::Null)
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn post_json(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = self.client.post(&request.url).json(&request.body);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token.as_str());
        }
        let response = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        tracing::debug!(status, url = %request.url, "response received");
        Ok(ApiResponse { status, body: parse_body(&text) })
    }
}
