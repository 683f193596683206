//! # tracker
//!
//! Platform-neutral core of the expense tracker front-end.
//!
//! This crate owns everything the browser UI and the terminal front-end share:
//! the credential [`session`], the declarative [`forms`] schemas, the REST
//! [`api`] client, the submit [`controllers`], and the auth-gated [`routes`]
//! table. It has no browser or runtime dependency; the UI plugs in its own
//! credential store and HTTP transport.

pub mod api;
pub mod config;
pub mod controllers;
pub mod forms;
pub mod routes;
pub mod session;
