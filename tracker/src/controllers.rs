//! Submit handlers binding each form schema to the API client.
//!
//! A controller validates first and only talks to the API when the schema
//! accepts the values. The outcome tells the UI what to do next; controllers
//! never touch the UI themselves.

#[cfg(test)]
#[path = "controllers_test.rs"]
mod controllers_test;

use crate::api::{ApiClient, ApiError, LoginRequest, RegisterRequest, Transport, WalletDetails};
use crate::forms::{FormValues, LOGIN, REGISTER, Schema, ValidationErrors, WALLET};
use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Register,
    Login,
    Wallet,
}

impl FormKind {
    #[must_use]
    pub fn schema(self) -> &'static Schema {
        match self {
            Self::Register => &REGISTER,
            Self::Login => &LOGIN,
            Self::Wallet => &WALLET,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Register => "Sign Up",
            Self::Login => "Login",
            Self::Wallet => "Wallet Details",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Register => "Sign Up",
            Self::Login => "Log in",
            Self::Wallet => "Submit",
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(ValidationErrors),
    /// The request was sent and failed. The form keeps its values.
    Failed(ApiError),
    Navigate(Route),
    /// Saved; clear the form.
    Reset,
}

pub async fn submit<T: Transport>(kind: FormKind, api: &ApiClient<T>, values: &FormValues) -> SubmitOutcome {
    match kind {
        FormKind::Register => submit_register(api, values).await,
        FormKind::Login => submit_login(api, values).await,
        FormKind::Wallet => submit_wallet(api, values).await,
    }
}

/// Register, then send the user to the login page.
pub async fn submit_register<T: Transport>(api: &ApiClient<T>, values: &FormValues) -> SubmitOutcome {
    if let Err(errors) = REGISTER.validate(values) {
        log::debug!("register: {} invalid field(s)", errors.len());
        return SubmitOutcome::Invalid(errors);
    }
    match api.register(&RegisterRequest::from_values(values)).await {
        Ok(_) => SubmitOutcome::Navigate(Route::Login),
        Err(e) => SubmitOutcome::Failed(e),
    }
}

/// Log in (the client stores the token), then open the dashboard.
pub async fn submit_login<T: Transport>(api: &ApiClient<T>, values: &FormValues) -> SubmitOutcome {
    if let Err(errors) = LOGIN.validate(values) {
        log::debug!("login: {} invalid field(s)", errors.len());
        return SubmitOutcome::Invalid(errors);
    }
    match api.login(&LoginRequest::from_values(values)).await {
        Ok(_) => SubmitOutcome::Navigate(Route::Dashboard),
        Err(e) => SubmitOutcome::Failed(e),
    }
}

/// Save wallet details, then reset the form.
pub async fn submit_wallet<T: Transport>(api: &ApiClient<T>, values: &FormValues) -> SubmitOutcome {
    if let Err(errors) = WALLET.validate(values) {
        log::debug!("wallet: {} invalid field(s)", errors.len());
        return SubmitOutcome::Invalid(errors);
    }
    let details = match wallet_details(values) {
        Ok(details) => details,
        Err(e) => return SubmitOutcome::Failed(e),
    };
    match api.submit_wallet(&details).await {
        Ok(_) => SubmitOutcome::Reset,
        Err(e) => SubmitOutcome::Failed(e),
    }
}

fn wallet_details(values: &FormValues) -> Result<WalletDetails, ApiError> {
    WalletDetails::from_values(values).ok_or_else(|| {
        log::error!("wallet: validated values did not parse as amounts");
        ApiError::InvalidRequest("wallet amounts are not numbers")
    })
}
