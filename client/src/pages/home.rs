//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__panel">
                <h1 class="page__title">"Expense Tracker"</h1>
                <p>"Keep an eye on your balance, savings, and cash in hand."</p>
                <nav class="toolbar">
                    <A href="/login">"Log in"</A>
                    <A href="/register">"Sign up"</A>
                </nav>
            </div>
        </div>
    }
}
