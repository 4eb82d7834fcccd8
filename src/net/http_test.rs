use super::*;
use crate::net::error::ApiError;

// =============================================================
// Bearer header
// =============================================================

#[test]
fn bearer_formats_token_verbatim() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

// =============================================================
// Query builder
// =============================================================

#[test]
fn query_push_opt_omits_none() {
    let query = Query::new().push_opt("category", None);
    assert!(query.is_empty());
}

#[test]
fn query_push_opt_omits_empty_strings() {
    let query = Query::new().push_opt("category", Some("")).push_opt("city", Some("   "));
    assert!(query.is_empty());
}

#[test]
fn query_push_opt_keeps_trimmed_values() {
    let query = Query::new().push_opt("city", Some(" Pune "));
    assert_eq!(query.pairs(), [("city".to_owned(), "Pune".to_owned())]);
}

#[test]
fn query_push_num_handles_pagination() {
    let query = Query::new().push_num("page", Some(2)).push_num("limit", None);
    assert_eq!(query.pairs(), [("page".to_owned(), "2".to_owned())]);
}

#[test]
fn query_preserves_insertion_order() {
    let query = Query::new().push("q", "food").push_num("page", Some(1));
    let keys: Vec<&str> = query.pairs().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["q", "page"]);
}

// =============================================================
// Multipart form marshalling
// =============================================================

#[test]
fn multipart_flag_serializes_booleans_as_literal_strings() {
    let form = MultipartForm::new().flag("donationEnabled", true).flag("featured", false);
    assert_eq!(
        form.fields(),
        [
            ("donationEnabled".to_owned(), "true".to_owned()),
            ("featured".to_owned(), "false".to_owned()),
        ]
    );
}

#[test]
fn multipart_text_opt_omits_absent_fields() {
    let form = MultipartForm::new().text("title", "Food Drive").text_opt("venue", None).text_opt("city", Some(""));
    assert_eq!(form.fields(), [("title".to_owned(), "Food Drive".to_owned())]);
}

// =============================================================
// Token freshness
// =============================================================

#[test]
fn require_token_fails_unauthorized_after_clear() {
    let session = crate::session::Session::in_memory();
    session.set_token("tok");
    let http = Http::new(session.clone());
    assert!(http.require_token().is_ok());

    session.clear();
    assert_eq!(http.require_token(), Err(ApiError::Unauthorized));
}

#[test]
fn require_token_reads_fresh_value_per_call() {
    let session = crate::session::Session::in_memory();
    let http = Http::new(session.clone());
    session.set_token("first");
    assert_eq!(http.require_token(), Ok("first".to_owned()));
    session.set_token("second");
    assert_eq!(http.require_token(), Ok("second".to_owned()));
}
