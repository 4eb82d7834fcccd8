use super::*;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn event_endpoint_formats_expected_path() {
    assert_eq!(event_endpoint("ev-1"), "/api/events/ev-1");
}

#[test]
fn org_events_endpoint_formats_expected_path() {
    assert_eq!(org_events_endpoint("o-9"), "/api/events/org/o-9");
}

#[test]
fn update_endpoint_formats_expected_path() {
    assert_eq!(update_endpoint("ev-1"), "/api/events/update/ev-1");
}

// =============================================================
// Filter -> query mapping
// =============================================================

#[test]
fn empty_filter_produces_no_query() {
    let query = EventFilter::default().into_query();
    assert!(query.is_empty());
}

#[test]
fn filter_omits_empty_values_and_keeps_set_ones() {
    let filter = EventFilter {
        category: Some(String::new()),
        city: Some("Pune".to_owned()),
        page: Some(3),
        limit: None,
    };
    let query = filter.into_query();
    assert_eq!(
        query.pairs(),
        [("city".to_owned(), "Pune".to_owned()), ("page".to_owned(), "3".to_owned())]
    );
}

// =============================================================
// Draft -> multipart mapping
// =============================================================

#[test]
fn draft_serializes_booleans_as_strings() {
    let draft = EventDraft {
        title: "Blood Camp".to_owned(),
        description: None,
        category: Some("health".to_owned()),
        city: None,
        venue: None,
        date: "2026-10-02T08:00:00Z".to_owned(),
        donation_enabled: true,
        volunteers_needed: Some(12),
    };
    let fields = draft.into_form();
    assert!(fields.fields().contains(&("donationEnabled".to_owned(), "true".to_owned())));
    assert!(fields.fields().contains(&("volunteersNeeded".to_owned(), "12".to_owned())));
    assert!(!fields.fields().iter().any(|(k, _)| k == "description"));
}
