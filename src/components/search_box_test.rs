use super::*;
use crate::net::types::SuggestionKind;

#[test]
fn event_suggestions_route_to_event_detail() {
    let s = Suggestion {
        id: "ev-1".to_owned(),
        label: "Beach Cleanup".to_owned(),
        kind: SuggestionKind::Event,
    };
    assert_eq!(suggestion_route(&s), "/event/ev-1");
}

#[test]
fn org_suggestions_route_to_org_profile() {
    let s = Suggestion {
        id: "o-2".to_owned(),
        label: "Seva Trust".to_owned(),
        kind: SuggestionKind::Org,
    };
    assert_eq!(suggestion_route(&s), "/org/o-2");
}
