use super::*;
use crate::net::http::ApiError;
use crate::net::types::UserProfile;

const ADMIN: &str = "admin";

fn session_with_user(role: &str) -> SessionState {
    let mut state = SessionState::default();
    state.login(UserProfile {
        id: 1,
        display_name: "Jana Nováková".to_owned(),
        email: "jana@example.com".to_owned(),
        role: role.to_owned(),
    });
    state
}

fn session_failed(error: ApiError) -> SessionState {
    let mut state = SessionState::default();
    state.begin_fetch();
    state.finish_fetch(&Err(error));
    state
}

#[test]
fn public_routes_always_allow() {
    for has_credential in [false, true] {
        for session in [SessionState::default(), session_with_user("auditor")] {
            assert_eq!(
                evaluate(RouteRequirement::PUBLIC, has_credential, &session, ADMIN),
                GateOutcome::Allow,
            );
        }
    }
}

#[test]
fn protected_route_without_credential_redirects_to_entry() {
    for requirement in [RouteRequirement::AUTHENTICATED, RouteRequirement::ADMIN] {
        assert_eq!(
            evaluate(requirement, false, &SessionState::default(), ADMIN),
            GateOutcome::RedirectToEntry,
        );
    }
}

#[test]
fn credential_with_unresolved_identity_awaits_the_fetch() {
    assert_eq!(
        evaluate(RouteRequirement::AUTHENTICATED, true, &SessionState::default(), ADMIN),
        GateOutcome::AwaitIdentity,
    );
}

#[test]
fn failed_resolution_fails_closed_to_entry() {
    for error in [ApiError::Unauthorized, ApiError::Network("offline".to_owned()), ApiError::Status(500)] {
        assert_eq!(
            evaluate(RouteRequirement::AUTHENTICATED, true, &session_failed(error), ADMIN),
            GateOutcome::RedirectToEntry,
            "network and server failures must be treated as unauthenticated",
        );
    }
}

#[test]
fn authenticated_user_is_allowed_on_plain_protected_routes() {
    assert_eq!(
        evaluate(RouteRequirement::AUTHENTICATED, true, &session_with_user("auditor"), ADMIN),
        GateOutcome::Allow,
    );
}

#[test]
fn non_admin_on_admin_route_goes_to_landing_not_entry() {
    for role in ["auditor", "solver", ""] {
        assert_eq!(
            evaluate(RouteRequirement::ADMIN, true, &session_with_user(role), ADMIN),
            GateOutcome::RedirectToLanding,
            "under-privileged users stay logged in and land on the landing screen",
        );
    }
}

#[test]
fn admin_passes_the_admin_gate() {
    assert_eq!(
        evaluate(RouteRequirement::ADMIN, true, &session_with_user("admin"), ADMIN),
        GateOutcome::Allow,
    );
}

#[test]
fn entry_screen_bounces_authenticated_users_to_landing() {
    assert_eq!(
        evaluate_entry(true, &session_with_user("auditor")),
        EntryOutcome::RedirectToLanding,
    );
}

#[test]
fn entry_screen_resolves_a_dangling_credential_first() {
    assert_eq!(evaluate_entry(true, &SessionState::default()), EntryOutcome::AwaitIdentity);
}

#[test]
fn entry_screen_stays_without_credential_or_after_failed_resolution() {
    assert_eq!(evaluate_entry(false, &SessionState::default()), EntryOutcome::Stay);
    assert_eq!(
        evaluate_entry(true, &session_failed(ApiError::Unauthorized)),
        EntryOutcome::Stay,
        "a stale credential falls through to the login form",
    );
}
