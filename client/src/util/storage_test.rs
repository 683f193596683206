use super::*;

#[test]
fn store_outside_browser_reads_empty() {
    assert_eq!(LocalStorageStore.get(), None);
}

#[test]
fn store_outside_browser_refuses_writes() {
    assert!(matches!(LocalStorageStore.set("t"), Err(SessionError::Storage(_))));
    assert!(LocalStorageStore.clear().is_ok());
}

#[test]
fn browser_session_falls_back_to_memory() {
    let session = browser_session();
    session.sign_in("tok").expect("memory store accepts tokens");
    assert!(session.is_authenticated());
}
