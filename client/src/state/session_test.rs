use super::*;
use tracker::routes::{Resolution, Route};
use tracker::session::MemoryStore;

#[test]
fn view_starts_unauthenticated_for_empty_session() {
    let view = SessionView::from_session(&Session::in_memory());
    assert_eq!(view.auth, AuthState::Unauthenticated);
    assert!(view.notice.is_none());
}

#[test]
fn view_picks_up_stored_token() {
    let view = SessionView::from_session(&Session::new(MemoryStore::with_token("t")));
    assert_eq!(view.route_table().resolve("/"), Resolution::Redirect(Route::Dashboard));
}

#[test]
fn refresh_tracks_sign_out() {
    let session = Session::new(MemoryStore::with_token("t"));
    let mut view = SessionView::from_session(&session);
    session.sign_out().expect("sign out");
    view.refresh(&session);
    assert_eq!(view.auth, AuthState::Unauthenticated);
    assert_eq!(view.route_table().resolve("/dashboard"), Resolution::Redirect(Route::Login));
}

#[test]
fn notice_is_consumed_once() {
    let mut view = SessionView { notice: Some("Account created.".to_owned()), ..SessionView::default() };
    assert_eq!(view.take_notice().as_deref(), Some("Account created."));
    assert_eq!(view.take_notice(), None);
}

#[test]
fn route_table_accepts_raw_browser_pathnames() {
    let signed_in = SessionView::from_session(&Session::new(MemoryStore::with_token("t"))).route_table();
    assert_eq!(signed_in.resolve("/dashboard/"), Resolution::Render(Route::Dashboard));
    assert_eq!(signed_in.resolve("/dashboard?tab=wallet"), Resolution::Render(Route::Dashboard));

    let signed_out = SessionView::default().route_table();
    assert_eq!(signed_out.resolve("/register/"), Resolution::Render(Route::Register));
    assert_eq!(signed_out.resolve("/dashboard/"), Resolution::Redirect(Route::Login));
}
