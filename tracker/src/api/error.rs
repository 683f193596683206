use crate::session::SessionError;

/// Failure of a single API exchange.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// A 2xx login response without `data.jwtToken`.
    #[error("login response did not include a token")]
    MissingToken,
    /// A protected call was attempted without a stored credential.
    #[error("no credential stored; log in first")]
    NotAuthenticated,
    /// Form values that passed validation could not be turned into a request body.
    #[error("cannot build request: {0}")]
    InvalidRequest(&'static str),
    #[error("invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// Short text suitable for showing under a form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "Could not reach the server. Check your connection and try again.".to_owned(),
            Self::Status { message, .. } => message.clone(),
            Self::MissingToken => "Login failed: the server did not return a token.".to_owned(),
            Self::NotAuthenticated => "Your session has ended. Please log in again.".to_owned(),
            Self::InvalidRequest(_) => "The form could not be sent. Check the values and try again.".to_owned(),
            Self::Decode(_) => "Unexpected response from the server.".to_owned(),
            Self::Session(e) => format!("Could not save your session: {e}"),
        }
    }

    /// HTTP status when the server rejected the request.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
