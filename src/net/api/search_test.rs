use futures::executor::block_on;

use super::*;
use crate::net::http::Http;
use crate::session::Session;

#[test]
fn search_query_includes_scope_and_pagination() {
    let query = search_query("food", Some(SearchScope::Orgs), Some(1), Some(20));
    let pairs: Vec<(&str, &str)> = query.pairs().iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(pairs, [("q", "food"), ("type", "orgs"), ("page", "1"), ("limit", "20")]);
}

#[test]
fn search_query_omits_unset_parameters() {
    let query = search_query("food", None, None, None);
    let keys: Vec<&str> = query.pairs().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["q"]);
}

#[test]
fn search_rejects_empty_query() {
    let client = SearchClient::new(Http::new(Session::in_memory()));
    assert!(block_on(client.search("  ", None, None, None)).is_err());
}

#[test]
fn suggest_short_circuits_on_empty_input() {
    let client = SearchClient::new(Http::new(Session::in_memory()));
    // Resolves without touching the network even in a build with no fetch
    // implementation at all.
    assert_eq!(block_on(client.suggest("")), Ok(Vec::new()));
}
