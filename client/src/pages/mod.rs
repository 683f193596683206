//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped chrome (titles, banners, links) and delegate the
//! forms themselves to `components::schema_form`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
