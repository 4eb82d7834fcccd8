use super::*;
use crate::net::types::{AdminAccount, OrgAccount, UserAccount};

fn user() -> Actor {
    Actor::User(UserAccount {
        id: "u1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        avatar_url: None,
        city: None,
    })
}

fn org() -> Actor {
    Actor::Org(OrgAccount {
        id: "o1".to_owned(),
        name: "Seva Trust".to_owned(),
        email: "hello@seva.org".to_owned(),
        verified: true,
        logo_url: None,
        description: None,
        website: None,
    })
}

fn admin() -> Actor {
    Actor::Admin(AdminAccount {
        id: "a1".to_owned(),
        name: "Root".to_owned(),
        email: "root@sahyog.in".to_owned(),
    })
}

// =============================================================
// Anonymous visitors
// =============================================================

#[test]
fn no_actor_redirects_to_login() {
    assert_eq!(guard_outcome(None, &[], false), GuardOutcome::Redirect("/login"));
}

#[test]
fn no_actor_redirects_to_login_even_with_dashboard_flag() {
    assert_eq!(guard_outcome(None, &[Role::User], true), GuardOutcome::Redirect("/login"));
}

// =============================================================
// Allow-list checks
// =============================================================

#[test]
fn empty_allow_list_admits_any_authenticated_role() {
    assert_eq!(guard_outcome(Some(&user()), &[], false), GuardOutcome::Render);
    assert_eq!(guard_outcome(Some(&org()), &[], false), GuardOutcome::Render);
    assert_eq!(guard_outcome(Some(&admin()), &[], false), GuardOutcome::Render);
}

#[test]
fn user_on_an_org_only_route_goes_to_user_home() {
    assert_eq!(
        guard_outcome(Some(&user()), &[Role::Org], false),
        GuardOutcome::Redirect("/user/home")
    );
}

#[test]
fn org_on_a_user_only_route_goes_to_org_home() {
    assert_eq!(
        guard_outcome(Some(&org()), &[Role::User], false),
        GuardOutcome::Redirect("/org/home")
    );
}

#[test]
fn matching_role_renders() {
    assert_eq!(guard_outcome(Some(&org()), &[Role::Org], false), GuardOutcome::Render);
    assert_eq!(guard_outcome(Some(&user()), &[Role::User, Role::Admin], false), GuardOutcome::Render);
}

// =============================================================
// Dashboard override
// =============================================================

#[test]
fn dashboard_flag_overrides_the_allow_list_for_orgs() {
    // Without the flag the org would be bounced to /org/home; the flag wins
    // because it is evaluated first.
    assert_eq!(
        guard_outcome(Some(&org()), &[Role::User], true),
        GuardOutcome::Redirect("/dashboard")
    );
}

#[test]
fn dashboard_flag_ignores_non_org_actors() {
    assert_eq!(guard_outcome(Some(&user()), &[Role::User], true), GuardOutcome::Render);
    assert_eq!(
        guard_outcome(Some(&admin()), &[Role::User], true),
        GuardOutcome::Redirect("/admin/orgs")
    );
}
