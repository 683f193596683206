//! Form component driven by a `tracker` schema.
//!
//! DESIGN
//! ======
//! The component renders one input per [`FieldSpec`], validates on submit,
//! and re-validates on every keystroke once a submit was attempted. The
//! submit itself is delegated to `tracker::controllers`; this module only
//! maps the outcome onto signals, navigation, and the session view.

#[cfg(test)]
#[path = "schema_form_test.rs"]
mod schema_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use tracker::api::ApiError;
use tracker::controllers::{self, FormKind, SubmitOutcome};
use tracker::forms::{FieldSpec, FormValues, ValidationErrors};
use tracker::routes::Route;

use crate::net::Api;
use crate::state::session::SessionView;

pub(crate) const REGISTERED_NOTICE: &str = "Account created. Please log in.";
pub(crate) const WALLET_SAVED_NOTICE: &str = "Wallet details saved.";
pub(crate) const SESSION_ENDED_NOTICE: &str = "Your session has ended. Please log in again.";

/// What the UI does with a submit outcome.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FormEffect {
    ShowErrors(ValidationErrors),
    ShowFailure(String),
    Navigate { route: Route, notice: Option<&'static str> },
    Reset { notice: &'static str },
}

pub(crate) fn effect_for(kind: FormKind, outcome: SubmitOutcome) -> FormEffect {
    match outcome {
        SubmitOutcome::Invalid(errors) => FormEffect::ShowErrors(errors),
        // The token vanished after load; the session view must drop to signed out.
        SubmitOutcome::Failed(ApiError::NotAuthenticated) => {
            FormEffect::Navigate { route: Route::Login, notice: Some(SESSION_ENDED_NOTICE) }
        }
        SubmitOutcome::Failed(e) => FormEffect::ShowFailure(e.user_message()),
        SubmitOutcome::Navigate(route) => {
            let notice = matches!(kind, FormKind::Register).then_some(REGISTERED_NOTICE);
            FormEffect::Navigate { route, notice }
        }
        SubmitOutcome::Reset => FormEffect::Reset { notice: WALLET_SAVED_NOTICE },
    }
}

/// Errors currently reported by `kind`'s schema for `values`.
pub(crate) fn current_errors(kind: FormKind, values: &FormValues) -> ValidationErrors {
    match kind.schema().validate(values) {
        Ok(()) => ValidationErrors::default(),
        Err(errors) => errors,
    }
}

#[component]
pub fn SchemaForm(kind: FormKind) -> impl IntoView {
    let api = expect_context::<Api>();
    let session_view = expect_context::<RwSignal<SessionView>>();
    let navigate = use_navigate();

    let values = RwSignal::new(kind.schema().initial_values());
    let errors = RwSignal::new(ValidationErrors::default());
    let attempted = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let failure = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        attempted.set(true);
        failure.set(None);
        notice.set(None);

        let current = values.get_untracked();
        let found = current_errors(kind, &current);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(ValidationErrors::default());
        busy.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = controllers::submit(kind, &*api, &current).await;
            match effect_for(kind, outcome) {
                FormEffect::ShowErrors(found) => errors.set(found),
                FormEffect::ShowFailure(message) => failure.set(Some(message)),
                FormEffect::Navigate { route, notice } => {
                    session_view.update(|view| {
                        view.refresh(api.session());
                        view.notice = notice.map(str::to_owned);
                    });
                    navigate(route.path(), NavigateOptions::default());
                }
                FormEffect::Reset { notice: saved } => {
                    values.update(FormValues::reset);
                    attempted.set(false);
                    notice.set(Some(saved.to_owned()));
                }
            }
            busy.set(false);
        });
    };

    let fields = kind
        .schema()
        .fields
        .iter()
        .map(|field| view! { <SchemaField field=*field kind=kind values=values errors=errors attempted=attempted/> })
        .collect::<Vec<_>>();

    view! {
        <form class="form" on:submit=on_submit novalidate=true>
            <h1 class="page__title">{kind.title()}</h1>
            {fields}
            <Show when=move || failure.get().is_some()>
                <p class="form__failure" role="alert">{move || failure.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="form__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Please wait..." } else { kind.submit_label() }}
            </button>
        </form>
    }
}

#[component]
fn SchemaField(
    field: FieldSpec,
    kind: FormKind,
    values: RwSignal<FormValues>,
    errors: RwSignal<ValidationErrors>,
    attempted: RwSignal<bool>,
) -> impl IntoView {
    let name = field.name;
    let message = move || errors.with(|e| e.get(name));

    view! {
        <div class="form-field">
            <label class="form-field__label" for=name>{field.label}</label>
            <input
                class="form-field__input"
                id=name
                name=name
                type=field.input.html_type()
                placeholder=field.label
                prop:value=move || values.with(|v| v.get(name).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    values.update(|v| v.set(name, value));
                    if attempted.get_untracked() {
                        errors.set(current_errors(kind, &values.get_untracked()));
                    }
                }
            />
            <Show when=move || message().is_some()>
                <div class="form-field__error">{move || message().unwrap_or_default()}</div>
            </Show>
        </div>
    }
}
