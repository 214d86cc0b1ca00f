use super::*;

// =============================================================
// validate_login_input
// =============================================================

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  farmer@gaupal.test ", "secret"),
        Ok(("farmer@gaupal.test".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("a@b.test", ""), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(validate_login_input("a@b.test", " pw "), Ok(("a@b.test".to_owned(), " pw ".to_owned())));
}

// =============================================================
// login_error_message
// =============================================================

#[test]
fn unknown_user_or_wrong_password_reads_invalid_credentials() {
    let failure = LoginFailure::Identity(IdentityError::InvalidCredentials);
    assert_eq!(login_error_message(&failure), "Invalid email or password");
}

#[test]
fn backend_message_is_surfaced() {
    let failure = LoginFailure::Backend(ApiError::from_body(404, r#"{"message":"User not found in database"}"#));
    assert_eq!(login_error_message(&failure), "User not found in database");
}

#[test]
fn other_failures_read_generic() {
    let network = LoginFailure::Identity(IdentityError::Network("offline".to_owned()));
    assert_eq!(login_error_message(&network), GENERIC_LOGIN_ERROR);
    let bare = LoginFailure::Backend(ApiError::from_body(500, ""));
    assert_eq!(login_error_message(&bare), GENERIC_LOGIN_ERROR);
}
