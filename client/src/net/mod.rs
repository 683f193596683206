//! Networking for the expense tracker API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `tracker::api` owns request shapes and status handling; `transport` only
//! moves bytes through `gloo-net` in the browser.

pub mod transport;

use std::sync::Arc;

use tracker::api::ApiClient;
use tracker::config::ApiConfig;
use tracker::session::Session;

pub use transport::GlooTransport;

/// API client shared through Leptos context.
pub type Api = Arc<ApiClient<GlooTransport>>;

/// Base URL baked in at build time via `EXPENSE_API_BASE_URL`.
pub fn api_config() -> ApiConfig {
    ApiConfig::from_override(option_env!("EXPENSE_API_BASE_URL")).unwrap_or_else(|e| {
        log::warn!("ignoring EXPENSE_API_BASE_URL: {e}");
        ApiConfig::default()
    })
}

pub fn api(session: Session) -> Api {
    Arc::new(ApiClient::new(api_config(), GlooTransport, session))
}
