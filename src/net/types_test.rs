use super::*;

// =============================================================
// Actor tagged union
// =============================================================

#[test]
fn actor_user_deserializes_from_type_tag() {
    let json = r#"{"type":"user","id":"u1","name":"Asha","email":"asha@example.com","city":"Pune"}"#;
    let actor: Actor = serde_json::from_str(json).unwrap();
    let Actor::User(user) = &actor else {
        panic!("expected user actor");
    };
    assert_eq!(user.city.as_deref(), Some("Pune"));
    assert_eq!(actor.role(), Role::User);
    assert_eq!(actor.id(), "u1");
    assert_eq!(actor.display_name(), "Asha");
}

#[test]
fn actor_org_deserializes_with_verification_flag() {
    let json = r#"{"type":"org","id":"o1","name":"Seva Trust","email":"hello@seva.org","verified":true}"#;
    let actor: Actor = serde_json::from_str(json).unwrap();
    let Actor::Org(org) = &actor else {
        panic!("expected org actor");
    };
    assert!(org.verified);
    assert_eq!(actor.role(), Role::Org);
}

#[test]
fn actor_org_verification_defaults_to_false() {
    let json = r#"{"type":"org","id":"o2","name":"New Org","email":"n@o.org"}"#;
    let actor: Actor = serde_json::from_str(json).unwrap();
    let Actor::Org(org) = actor else {
        panic!("expected org actor");
    };
    assert!(!org.verified);
}

#[test]
fn actor_admin_deserializes() {
    let json = r#"{"type":"admin","id":"a1","name":"Root","email":"root@sahyog.in"}"#;
    let actor: Actor = serde_json::from_str(json).unwrap();
    assert_eq!(actor.role(), Role::Admin);
}

#[test]
fn actor_with_unknown_tag_is_rejected() {
    let json = r#"{"type":"ghost","id":"g1","name":"?","email":"?"}"#;
    assert!(serde_json::from_str::<Actor>(json).is_err());
}

#[test]
fn role_home_paths_match_redirect_table() {
    assert_eq!(Role::User.home_path(), "/user/home");
    assert_eq!(Role::Org.home_path(), "/org/home");
    assert_eq!(Role::Admin.home_path(), "/admin/orgs");
}

// =============================================================
// Remote entities
// =============================================================

#[test]
fn event_deserializes_camel_case_fields() {
    let json = r#"{
        "id": "ev1",
        "title": "Beach Cleanup",
        "date": "2026-09-01T09:00:00Z",
        "orgId": "o1",
        "orgName": "Seva Trust",
        "imageUrl": "https://cdn/img.jpg",
        "donationEnabled": true,
        "volunteersNeeded": 25
    }"#;
    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.org_id, "o1");
    assert!(event.donation_enabled);
    assert_eq!(event.volunteers_needed, Some(25));
    assert_eq!(event.venue, None);
}

#[test]
fn donation_amount_accepts_whole_valued_float() {
    let json = r#"{"id":"d1","eventId":"ev1","amount":1000.0,"createdAt":"2026-08-01"}"#;
    let donation: Donation = serde_json::from_str(json).unwrap();
    assert_eq!(donation.amount, 1000);
    assert_eq!(donation.donor_name, None);
}

#[test]
fn donation_amount_rejects_fractional_paise() {
    let json = r#"{"id":"d1","eventId":"ev1","amount":10.5,"createdAt":"2026-08-01"}"#;
    assert!(serde_json::from_str::<Donation>(json).is_err());
}

#[test]
fn donation_amount_rejects_negative() {
    let json = r#"{"id":"d1","eventId":"ev1","amount":-100,"createdAt":"2026-08-01"}"#;
    assert!(serde_json::from_str::<Donation>(json).is_err());
}

#[test]
fn dashboard_stats_accept_js_float_aggregates() {
    let json = r#"{"eventsHosted":12.0,"volunteersPending":3,"followers":240.0,"donationsTotal":125000}"#;
    let stats: DashboardStats = serde_json::from_str(json).unwrap();
    assert_eq!(stats.events_hosted, 12);
    assert_eq!(stats.donations_total, 125_000);
}

#[test]
fn request_status_round_trips_lowercase() {
    assert_eq!(serde_json::to_string(&RequestStatus::Approved).unwrap(), r#""approved""#);
    let status: RequestStatus = serde_json::from_str(r#""pending""#).unwrap();
    assert_eq!(status, RequestStatus::Pending);
}

#[test]
fn search_results_default_to_empty_groups() {
    let results: SearchResults = serde_json::from_str("{}").unwrap();
    assert!(results.events.is_empty());
    assert!(results.orgs.is_empty());
}

#[test]
fn suggestion_kind_tags_are_lowercase() {
    let s: Suggestion = serde_json::from_str(r#"{"id":"o1","label":"Seva Trust","kind":"org"}"#).unwrap();
    assert_eq!(s.kind, SuggestionKind::Org);
}
