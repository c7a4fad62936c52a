use super::*;
use crate::net::types::{AccessLevel, Identity};

fn identity(level: AccessLevel) -> Identity {
    Identity {
        id: "u-1".to_owned(),
        email: "ana@example.com".to_owned(),
        access_level: level,
        active: true,
    }
}

const NON_ADMIN_LEVELS: [AccessLevel; 4] =
    [AccessLevel::Free, AccessLevel::User, AccessLevel::Business, AccessLevel::Enterprise];

#[test]
fn guards_suspend_while_resolving() {
    assert_eq!(require_auth(&SessionState::Resolving), GuardOutcome::Pending);
    assert_eq!(require_admin(&SessionState::Resolving), GuardOutcome::Pending);
}

#[test]
fn require_auth_redirects_anonymous_to_login() {
    assert_eq!(require_auth(&SessionState::Anonymous), GuardOutcome::Redirect(AppRoute::Login));
}

#[test]
fn require_auth_allows_every_access_level() {
    for level in NON_ADMIN_LEVELS.into_iter().chain([AccessLevel::Admin]) {
        let state = SessionState::Authenticated(identity(level));
        assert_eq!(require_auth(&state), GuardOutcome::Allow, "{level:?}");
    }
}

#[test]
fn require_admin_redirects_non_admins_to_dashboard() {
    for level in NON_ADMIN_LEVELS {
        let state = SessionState::Authenticated(identity(level));
        assert_eq!(require_admin(&state), GuardOutcome::Redirect(AppRoute::Dashboard), "{level:?}");
    }
}

#[test]
fn require_admin_redirects_anonymous_to_dashboard() {
    assert_eq!(require_admin(&SessionState::Anonymous), GuardOutcome::Redirect(AppRoute::Dashboard));
}

#[test]
fn require_admin_allows_admin() {
    let state = SessionState::Authenticated(identity(AccessLevel::Admin));
    assert_eq!(require_admin(&state), GuardOutcome::Allow);
}
