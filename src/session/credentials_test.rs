use super::*;

fn profile() -> UserProfile {
    UserProfile {
        id: 3,
        display_name: "Petr Svoboda".to_owned(),
        email: "petr@example.com".to_owned(),
        role: "solver".to_owned(),
    }
}

#[test]
fn bearer_prefixes_the_token() {
    let cred = Credential::new("abc.def.ghi");
    assert_eq!(cred.bearer(), "Bearer abc.def.ghi");
}

#[test]
fn new_credential_carries_no_hints() {
    let cred = Credential::new("t");
    assert_eq!(cred.hints, DisplayHints::default());
}

#[test]
fn with_profile_copies_every_hint() {
    let cred = Credential::with_profile("t", &profile());
    assert_eq!(cred.hints.user_id.as_deref(), Some("3"));
    assert_eq!(cred.hints.name.as_deref(), Some("Petr Svoboda"));
    assert_eq!(cred.hints.email.as_deref(), Some("petr@example.com"));
    assert_eq!(cred.hints.role.as_deref(), Some("solver"));
}

#[test]
fn read_is_none_outside_the_browser() {
    // No storage exists in native builds; the credential path fails closed.
    assert!(read().is_none());
}
