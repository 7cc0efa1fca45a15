use super::*;
use std::cell::Cell;

#[test]
fn only_401_is_an_auth_failure() {
    assert!(is_auth_failure(401));
    assert!(!is_auth_failure(400));
    assert!(!is_auth_failure(403));
    assert!(!is_auth_failure(500));
}

#[test]
fn error_for_status_distinguishes_unauthorized() {
    assert_eq!(error_for_status(401), ApiError::Unauthorized);
    assert_eq!(error_for_status(503), ApiError::Status(503));
}

#[test]
fn redirect_skipped_when_already_on_entry_screen() {
    assert!(!should_return_to_entry("/", "/"));
    assert!(should_return_to_entry("/dashboard", "/"));
    assert!(should_return_to_entry("/audits", "/"));
}

#[test]
fn url_joins_base_without_duplicate_slash() {
    let gw = HttpGateway::new("http://127.0.0.1:8000/", || {});
    assert_eq!(gw.url("/auth/me"), "http://127.0.0.1:8000/auth/me");

    let gw = HttpGateway::new("http://127.0.0.1:8000", || {});
    assert_eq!(gw.url("/neshody/"), "http://127.0.0.1:8000/neshody/");
}

#[test]
fn check_invalidates_on_401_before_returning_the_error() {
    let invalidated = std::rc::Rc::new(Cell::new(false));
    let flag = invalidated.clone();
    let gw = HttpGateway::new("http://x", move || flag.set(true));

    let err = gw.check(401).expect_err("401 must propagate");
    assert_eq!(err, ApiError::Unauthorized);
    assert!(invalidated.get(), "invalidation must run before the caller sees the error");
}

#[test]
fn check_passes_success_and_keeps_session_on_other_errors() {
    let invalidated = std::rc::Rc::new(Cell::new(false));
    let flag = invalidated.clone();
    let gw = HttpGateway::new("http://x", move || flag.set(true));

    assert!(gw.check(200).is_ok());
    assert!(gw.check(204).is_ok());
    assert_eq!(gw.check(500).expect_err("500 propagates"), ApiError::Status(500));
    assert!(!invalidated.get(), "non-auth failures must not tear the session down");
}

#[test]
fn authorization_header_shape_is_shared_by_every_request_kind() {
    use crate::session::credentials::Credential;

    // GET, JSON POST, and form POST all attach through this one helper.
    let header = authorization(Some(Credential::new("abc.def.ghi")));
    assert_eq!(header, Some(("Authorization", "Bearer abc.def.ghi".to_owned())));
    assert_eq!(authorization(None), None);
}

#[test]
fn api_error_messages_are_stable() {
    assert_eq!(ApiError::Unauthorized.to_string(), "not authenticated");
    assert_eq!(ApiError::Status(500).to_string(), "server responded with status 500");
    assert_eq!(
        ApiError::Network("timeout".to_owned()).to_string(),
        "request failed: timeout"
    );
}
