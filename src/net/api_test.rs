use super::*;

#[test]
fn login_form_puts_the_email_in_the_username_field() {
    let fields = login_form("jana@example.com", "tajne-heslo");
    assert_eq!(fields, [("username", "jana@example.com"), ("password", "tajne-heslo")]);
}
