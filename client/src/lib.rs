//! # client
//!
//! Leptos + WASM front-end for the expense tracker. Three forms (register,
//! login, wallet details) over the `tracker` core, routed by auth state.
//!
//! Build for the browser with the `csr` feature (for example via `trunk
//! serve`); without it the crate compiles natively so its logic can be tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::mount_to_body(app::App);
}
