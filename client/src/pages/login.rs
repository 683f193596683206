//! Login page: email + password, stores the returned token on success.

use leptos::prelude::*;
use leptos_router::components::A;
use tracker::controllers::FormKind;

use crate::components::schema_form::SchemaForm;
use crate::state::session::SessionView;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session_view = expect_context::<RwSignal<SessionView>>();
    // Shown once, e.g. after registering or logging out.
    let notice = session_view.try_update(SessionView::take_notice).flatten();

    view! {
        <div class="page">
            <div class="page__panel">
                {notice.map(|text| view! { <p class="form__notice">{text}</p> })}
                <SchemaForm kind=FormKind::Login/>
                <p>"No account yet? " <A href="/register">"Sign up"</A></p>
            </div>
            <div class="page__banner">
                <p>"Welcome back to win"</p>
            </div>
        </div>
    }
}
