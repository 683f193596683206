//! Wire payloads for the `/user/*` endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::forms::FormValues;

pub const REGISTER_PATH: &str = "user/register";
pub const LOGIN_PATH: &str = "user/login";
pub const WALLET_PATH: &str = "user/wallet";

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Payload from register form values. `confirmPassword` is not sent.
    #[must_use]
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            username: values.get("username").to_owned(),
            email: values.get("email").to_owned(),
            password: values.get("password").to_owned(),
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    #[must_use]
    pub fn from_values(values: &FormValues) -> Self {
        Self { email: values.get("email").to_owned(), password: values.get("password").to_owned() }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest").field("email", &self.email).field("password", &"***").finish()
    }
}

/// `{ "data": { "jwtToken": "..." } }`
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    #[serde(rename = "jwtToken")]
    pub jwt_token: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletDetails {
    pub account_balance: f64,
    pub savings_amount: f64,
    pub cash_in_hand: f64,
}

impl WalletDetails {
    /// Parse wallet form values; `None` if any field is not a number.
    #[must_use]
    pub fn from_values(values: &FormValues) -> Option<Self> {
        Some(Self {
            account_balance: values.number("accountBalance")?,
            savings_amount: values.number("savingsAmount")?,
            cash_in_hand: values.number("cashInHand")?,
        })
    }
}
