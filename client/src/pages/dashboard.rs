//! Dashboard page hosting the wallet form.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only protected route. The route gate in `app` guarantees a
//! credential is stored whenever this page renders.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use tracker::controllers::FormKind;
use tracker::routes::Route;
use tracker::session::{Session, SessionError};

use crate::components::schema_form::SchemaForm;
use crate::net::Api;
use crate::state::session::SessionView;

pub(crate) const LOGGED_OUT_NOTICE: &str = "You have been logged out.";

/// Clear the credential and produce the notice for the login page.
pub(crate) fn sign_out(session: &Session) -> Result<&'static str, SessionError> {
    session.sign_out()?;
    Ok(LOGGED_OUT_NOTICE)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let session_view = expect_context::<RwSignal<SessionView>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let notice = match sign_out(api.session()) {
            Ok(notice) => Some(notice.to_owned()),
            Err(e) => {
                log::error!("logout failed: {e}");
                Some(format!("Logout failed: {e}"))
            }
        };
        session_view.update(|view| {
            view.refresh(api.session());
            view.notice = notice;
        });
        navigate(Route::Login.path(), NavigateOptions::default());
    };

    view! {
        <div class="page">
            <div class="page__panel">
                <header class="toolbar">
                    <span class="toolbar__spacer"></span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
                <SchemaForm kind=FormKind::Wallet/>
            </div>
        </div>
    }
}
