use super::*;

#[test]
fn extract_prefers_error_over_detail() {
    let body = serde_json::json!({ "error": "Email already registered", "detail": "ignored" });
    assert_eq!(extract_error_message(&body), Some("Email already registered".to_owned()));
}

#[test]
fn extract_falls_back_to_detail() {
    let body = serde_json::json!({ "detail": "Invalid credentials" });
    assert_eq!(extract_error_message(&body), Some("Invalid credentials".to_owned()));
}

#[test]
fn extract_skips_empty_error_field() {
    let body = serde_json::json!({ "error": "", "detail": "Token expired" });
    assert_eq!(extract_error_message(&body), Some("Token expired".to_owned()));
}

#[test]
fn extract_ignores_structured_detail() {
    let body = serde_json::json!({ "detail": [{ "loc": ["body", "email"], "msg": "invalid" }] });
    assert_eq!(extract_error_message(&body), None);
}

#[test]
fn extract_handles_non_object_bodies() {
    assert_eq!(extract_error_message(&serde_json::Value::Null), None);
    assert_eq!(extract_error_message(&serde_json::json!("Bad Gateway")), None);
}

#[test]
fn user_message_uses_backend_message_when_present() {
    let err = ApiError::from_status(400, &serde_json::json!({ "detail": "Weak password" }));
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message("Registration failed"), "Weak password");
}

#[test]
fn user_message_defaults_for_other_failures() {
    assert_eq!(ApiError::from_status(500, &serde_json::Value::Null).user_message("Login failed"), "Login failed");
    assert_eq!(ApiError::Network("offline".to_owned()).user_message("Login failed"), "Login failed");
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message("Login failed"), "Login failed");
    assert_eq!(ApiError::Unavailable.status(), None);
}
