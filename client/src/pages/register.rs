//! Registration page.

use leptos::prelude::*;
use leptos_router::components::A;
use tracker::controllers::FormKind;

use crate::components::schema_form::SchemaForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__panel">
                <SchemaForm kind=FormKind::Register/>
                <p>"Already registered? " <A href="/login">"Log in"</A></p>
            </div>
            <div class="page__banner">
                <p>"Welcome back to win"</p>
            </div>
        </div>
    }
}
