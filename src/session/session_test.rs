use super::*;

#[test]
fn token_round_trips_through_the_store() {
    let session = Session::in_memory();
    assert_eq!(session.token(), None);
    session.set_token("opaque-token");
    assert_eq!(session.token(), Some("opaque-token".to_owned()));
}

#[test]
fn clear_logs_the_session_out() {
    let session = Session::in_memory();
    session.set_token("opaque-token");
    session.clear();
    assert_eq!(session.token(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn clones_share_the_same_store() {
    let session = Session::in_memory();
    let clone = session.clone();
    session.set_token("shared");
    assert_eq!(clone.token(), Some("shared".to_owned()));
    clone.clear();
    assert!(!session.is_authenticated());
}

#[test]
fn is_authenticated_tracks_token_presence() {
    let session = Session::in_memory();
    assert!(!session.is_authenticated());
    session.set_token("t");
    assert!(session.is_authenticated());
}
