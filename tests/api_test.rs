//! API-layer tests: response envelopes, role guards, and the form
//! boundary types handlers rely on.

use uuid::Uuid;

use mentorlink::api::middleware::{require_admin, require_role, CurrentUser};
use mentorlink::domain::{ListInput, UserRole};
use mentorlink::errors::AppError;
use mentorlink::types::ApiResponse;

fn principal(role: UserRole) -> CurrentUser {
    CurrentUser {
        id: Uuid::new_v4(),
        email: "user@example.com".to_string(),
        role,
    }
}

// =============================================================================
// Response envelope
// =============================================================================

#[test]
fn test_api_response_structure() {
    let response: ApiResponse<String> = ApiResponse::success("test data".to_string());
    assert!(response.success);
    assert_eq!(response.data.unwrap(), "test data");
    assert!(response.message.is_none());
}

#[test]
fn test_message_only_response() {
    let response: ApiResponse<()> = ApiResponse::message("Feedback submitted. Thank you!");
    assert!(response.success);
    assert!(response.data.is_none());
    assert_eq!(response.message.unwrap(), "Feedback submitted. Thank you!");
}

// =============================================================================
// Role guards
// =============================================================================

#[test]
fn test_require_admin_rejects_other_roles() {
    assert!(require_admin(&principal(UserRole::Admin)).is_ok());
    assert!(matches!(
        require_admin(&principal(UserRole::Mentor)).unwrap_err(),
        AppError::Forbidden
    ));
    assert!(matches!(
        require_admin(&principal(UserRole::Mentee)).unwrap_err(),
        AppError::Forbidden
    ));
}

#[test]
fn test_require_role_lets_admins_through() {
    assert!(require_role(&principal(UserRole::Mentor), UserRole::Mentor).is_ok());
    assert!(require_role(&principal(UserRole::Admin), UserRole::Mentor).is_ok());
    assert!(matches!(
        require_role(&principal(UserRole::Mentee), UserRole::Mentor).unwrap_err(),
        AppError::Forbidden
    ));
}

// =============================================================================
// Form boundary types
// =============================================================================

#[test]
fn test_list_input_deserializes_from_json_array() {
    let input: ListInput = serde_json::from_str(r#"["Rust", "Mentoring"]"#).unwrap();
    assert_eq!(input.into_items(), vec!["Rust", "Mentoring"]);
}

#[test]
fn test_list_input_deserializes_from_comma_separated_string() {
    let input: ListInput = serde_json::from_str(r#""Rust, Mentoring , ""#).unwrap();
    assert_eq!(input.into_items(), vec!["Rust", "Mentoring"]);
}

#[test]
fn test_user_role_serde_round_trip() {
    for (role, wire) in [
        (UserRole::Mentor, "\"mentor\""),
        (UserRole::Mentee, "\"mentee\""),
        (UserRole::Admin, "\"admin\""),
    ] {
        assert_eq!(serde_json::to_string(&role).unwrap(), wire);
        let parsed: UserRole = serde_json::from_str(wire).unwrap();
        assert_eq!(parsed, role);
    }
}
