//! Root application component with routing and context providers.
//!
//! ROUTING
//! =======
//! Every path goes through [`RouteGate`], which hands the browser's pathname
//! to the current [`RouteTable`] to render a page or redirect. The table is a memo
//! over the session's auth state, so it is rebuilt only on sign-in and
//! sign-out.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route as RouteView, Router, Routes},
    hooks::use_location,
};
use tracker::routes::{Resolution, Route, RouteTable};

use crate::net;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage,
};
use crate::state::session::SessionView;
use crate::util::storage::browser_session;

/// Root application component.
///
/// Creates the session and API client once and provides them, plus the
/// session view and route table, to all child components.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = browser_session();
    let session_view = RwSignal::new(SessionView::from_session(&session));
    let table = Memo::new(move |_| session_view.with(SessionView::route_table));

    provide_context(net::api(session));
    provide_context(session_view);
    provide_context(table);

    view! {
        <Title text="Expense Tracker"/>

        <Router>
            <Routes fallback=RouteGate>
                <RouteView path=StaticSegment("") view=RouteGate/>
                <RouteView path=StaticSegment("login") view=RouteGate/>
                <RouteView path=StaticSegment("register") view=RouteGate/>
                <RouteView path=StaticSegment("dashboard") view=RouteGate/>
            </Routes>
        </Router>
    }
}

/// Render the page for the current location or redirect, as the route table
/// decides.
#[component]
fn RouteGate() -> impl IntoView {
    let table = expect_context::<Memo<RouteTable>>();
    let pathname = use_location().pathname;

    move || match pathname.with(|path| table.get().resolve(path)) {
        Resolution::Render(page) => page_view(page),
        Resolution::Redirect(target) => view! { <Redirect path=target.path()/> }.into_any(),
    }
}

fn page_view(route: Route) -> AnyView {
    match route {
        Route::Home => view! { <HomePage/> }.into_any(),
        Route::Login => view! { <LoginPage/> }.into_any(),
        Route::Register => view! { <RegisterPage/> }.into_any(),
        Route::Dashboard => view! { <DashboardPage/> }.into_any(),
        Route::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
