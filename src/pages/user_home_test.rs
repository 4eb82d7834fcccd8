use super::*;

#[test]
fn attending_badge_ignores_status() {
    assert_eq!(activity_badge(ActivityKind::Attending, None), "attending");
    assert_eq!(activity_badge(ActivityKind::Attending, Some(RequestStatus::Rejected)), "attending");
}

#[test]
fn volunteering_badge_tracks_approval() {
    assert_eq!(activity_badge(ActivityKind::Volunteering, Some(RequestStatus::Approved)), "volunteer");
    assert_eq!(
        activity_badge(ActivityKind::Volunteering, Some(RequestStatus::Pending)),
        "volunteer (pending)"
    );
    assert_eq!(activity_badge(ActivityKind::Volunteering, None), "volunteer (pending)");
    assert_eq!(
        activity_badge(ActivityKind::Volunteering, Some(RequestStatus::Rejected)),
        "not selected"
    );
}
