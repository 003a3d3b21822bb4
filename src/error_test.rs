use super::*;

#[test]
fn status_error_displays_backend_message() {
    let err = ApiError::status(409, Some("store name already taken".to_owned()));
    assert_eq!(err.message(), "store name already taken");
}

#[test]
fn status_error_without_body_message_uses_generic_text() {
    assert_eq!(ApiError::status(500, None).message(), "request failed with status 500");
    assert_eq!(ApiError::status(502, Some("   ".to_owned())).message(), "request failed with status 502");
}

#[test]
fn decode_error_wraps_serde_failure() {
    let err: ApiError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn menu_form_errors_are_alert_text() {
    assert_eq!(MenuFormError::EmptyName.to_string(), "Please enter a menu name.");
    assert_eq!(MenuFormError::InvalidPrice.to_string(), "Please enter a valid price.");
}
