use super::*;

#[test]
fn message_strips_variant_prefix() {
    let err = BackendError::Request("network error".into());
    assert_eq!(err.to_string(), "request failed: network error");
    assert_eq!(err.message(), "network error");
}

#[test]
fn api_message_is_provider_text() {
    let err = BackendError::Api { status: 404, message: "Object not found".into() };
    assert_eq!(err.message(), "Object not found");
}

#[test]
fn missing_config_message_uses_display() {
    assert_eq!(BackendError::MissingConfig("BACKEND_URL").message(), "missing config: BACKEND_URL not set");
}

#[test]
fn auth_rejection_covers_client_errors_only() {
    assert!(BackendError::Api { status: 401, message: String::new() }.is_auth_rejection());
    assert!(BackendError::Api { status: 400, message: String::new() }.is_auth_rejection());
    assert!(!BackendError::Api { status: 503, message: String::new() }.is_auth_rejection());
    assert!(!BackendError::Request("timeout".into()).is_auth_rejection());
}
