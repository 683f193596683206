use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::session::MemoryStore;

/// Transport that records requests and replays canned replies.
#[derive(Default)]
struct FakeTransport {
    sent: RefCell<Vec<ApiRequest>>,
    replies: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl FakeTransport {
    fn replying(status: u16, body: Value) -> Self {
        let fake = Self::default();
        fake.replies.borrow_mut().push_back(Ok(ApiResponse { status, body }));
        fake
    }

    fn failing(message: &str) -> Self {
        let fake = Self::default();
        fake.replies.borrow_mut().push_back(Err(ApiError::Transport(message.to_owned())));
        fake
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn post_json(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse { status: 200, body: Value::Null }))
    }
}

fn client(transport: FakeTransport, session: Session) -> ApiClient<FakeTransport> {
    let config = ApiConfig::new("https://api.test").expect("config");
    ApiClient::new(config, transport, session)
}

fn login_request() -> LoginRequest {
    LoginRequest { email: "user@example.com".to_owned(), password: "Password1!".to_owned() }
}

fn wallet() -> WalletDetails {
    WalletDetails { account_balance: 1000.0, savings_amount: 250.5, cash_in_hand: 40.0 }
}

// =============================================================
// register
// =============================================================

#[test]
fn register_posts_credentials_without_confirmation() {
    let api = client(FakeTransport::replying(201, json!({ "ok": true })), Session::in_memory());
    let request = RegisterRequest {
        username: "alice".to_owned(),
        email: "user@example.com".to_owned(),
        password: "Password1!".to_owned(),
    };

    block_on(api.register(&request)).expect("register");

    let sent = api.transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "https://api.test/user/register");
    assert_eq!(sent[0].bearer, None);
    assert_eq!(
        sent[0].body,
        json!({ "username": "alice", "email": "user@example.com", "password": "Password1!" })
    );
}

#[test]
fn register_surfaces_server_message_on_conflict() {
    let api = client(FakeTransport::replying(409, json!({ "message": "Email already used" })), Session::in_memory());
    let request = RegisterRequest::from_values(&crate::forms::FormValues::new());

    let err = block_on(api.register(&request)).expect_err("conflict");
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.user_message(), "Email already used");
}

// =============================================================
// login
// =============================================================

#[test]
fn login_stores_exactly_the_returned_token() {
    let session = Session::in_memory();
    let api = client(FakeTransport::replying(200, json!({ "data": { "jwtToken": "abc.def" } })), session.clone());

    let credential = block_on(api.login(&login_request())).expect("login");

    assert_eq!(credential.as_str(), "abc.def");
    assert_eq!(session.token().map(|c| c.as_str().to_owned()).as_deref(), Some("abc.def"));
    let sent = api.transport.sent.borrow();
    assert_eq!(sent[0].url, "https://api.test/user/login");
    assert_eq!(sent[0].body, json!({ "email": "user@example.com", "password": "Password1!" }));
}

#[test]
fn login_replaces_previous_token() {
    let session = Session::new(MemoryStore::with_token("stale"));
    let api = client(FakeTransport::replying(200, json!({ "data": { "jwtToken": "fresh" } })), session.clone());

    block_on(api.login(&login_request())).expect("login");
    assert_eq!(session.token().map(|c| c.as_str().to_owned()).as_deref(), Some("fresh"));
}

#[test]
fn login_without_token_in_body_leaves_session_empty() {
    let session = Session::in_memory();
    let api = client(FakeTransport::replying(200, json!({ "data": {} })), session.clone());

    let err = block_on(api.login(&login_request())).expect_err("missing token");
    assert!(matches!(err, ApiError::MissingToken));
    assert!(!session.is_authenticated());
}

#[test]
fn login_with_blank_token_is_missing_token() {
    let session = Session::in_memory();
    let api = client(FakeTransport::replying(200, json!({ "data": { "jwtToken": "" } })), session.clone());

    assert!(matches!(block_on(api.login(&login_request())), Err(ApiError::MissingToken)));
    assert!(!session.is_authenticated());
}

#[test]
fn rejected_login_leaves_session_untouched() {
    let session = Session::new(MemoryStore::with_token("keep"));
    let api = client(FakeTransport::replying(401, json!({ "error": "Invalid credentials" })), session.clone());

    let err = block_on(api.login(&login_request())).expect_err("unauthorized");
    assert_eq!(err.user_message(), "Invalid credentials");
    assert_eq!(session.token().map(|c| c.as_str().to_owned()).as_deref(), Some("keep"));
}

#[test]
fn transport_failure_is_returned() {
    let api = client(FakeTransport::failing("connection refused"), Session::in_memory());
    let err = block_on(api.login(&login_request())).expect_err("offline");
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}

// =============================================================
// submit_wallet
// =============================================================

#[test]
fn wallet_submit_attaches_bearer_token() {
    let session = Session::new(MemoryStore::with_token("tok-1"));
    let api = client(FakeTransport::replying(200, json!({ "ok": true })), session);

    block_on(api.submit_wallet(&wallet())).expect("wallet");

    let sent = api.transport.sent.borrow();
    assert_eq!(sent[0].url, "https://api.test/user/wallet");
    assert_eq!(sent[0].bearer.as_ref().map(Credential::bearer_header).as_deref(), Some("Bearer tok-1"));
    assert_eq!(sent[0].body, json!({ "accountBalance": 1000.0, "savingsAmount": 250.5, "cashInHand": 40.0 }));
}

#[test]
fn wallet_submit_without_token_sends_nothing() {
    let api = client(FakeTransport::default(), Session::in_memory());

    let err = block_on(api.submit_wallet(&wallet())).expect_err("no token");
    assert!(matches!(err, ApiError::NotAuthenticated));
    assert!(api.transport.sent.borrow().is_empty());
}

// =============================================================
// status_message
// =============================================================

#[test]
fn status_message_falls_back_to_status_line() {
    assert_eq!(status_message(500, &Value::Null), "request failed with status 500");
    assert_eq!(status_message(400, &json!({ "message": "  " })), "request failed with status 400");
}

#[test]
fn status_message_prefers_message_over_error() {
    let body = json!({ "message": "primary", "error": "secondary" });
    assert_eq!(status_message(400, &body), "primary");
}
