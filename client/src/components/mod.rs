//! Reusable UI components.

pub mod schema_form;
