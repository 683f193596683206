//! `gloo-net` implementation of [`Transport`].
//!
//! Client-side (csr): real `fetch` calls. Elsewhere every request fails with
//! a transport error since there is no browser to send it from.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use serde_json::Value;
use tracker::api::{ApiError, ApiRequest, ApiResponse, Transport};

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

/// Body as JSON, `Null` when empty or not JSON.
#[cfg(any(test, feature = "csr"))]
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or(Value::Null)
}

#[cfg(any(test, feature = "csr"))]
fn transport_failed_message(error: &str) -> String {
    format!("fetch failed: {error}")
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn post_json(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let mut builder = gloo_net::http::Request::post(&request.url);
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &token.bearer_header());
            }
            let resp = builder
                .json(&request.body)
                .map_err(|e| ApiError::Transport(transport_failed_message(&e.to_string())))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(transport_failed_message(&e.to_string())))?;
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            Ok(ApiResponse { status, body: parse_body(&text) })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }
}
