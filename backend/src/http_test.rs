use super::*;

#[test]
fn error_message_reads_storage_shape() {
    let body = r#"{"statusCode":"404","error":"not_found","message":"Object not found"}"#;
    assert_eq!(error_message(404, body), "Object not found");
}

#[test]
fn error_message_reads_auth_shapes() {
    assert_eq!(error_message(400, r#"{"code":400,"msg":"Invalid login credentials"}"#), "Invalid login credentials");
    assert_eq!(
        error_message(400, r#"{"error":"invalid_grant","error_description":"Refresh Token Not Found"}"#),
        "Refresh Token Not Found"
    );
}

#[test]
fn error_message_falls_back_to_body_then_status() {
    assert_eq!(error_message(502, "Bad Gateway\n"), "Bad Gateway");
    assert_eq!(error_message(500, ""), "HTTP 500");
    assert_eq!(error_message(500, r#"{"message":"  "}"#), r#"{"message":"  "}"#);
}

#[test]
fn encode_key_escapes_segments_but_keeps_slashes() {
    assert_eq!(encode_key("1700000000000-cat.png"), "1700000000000-cat.png");
    assert_eq!(encode_key("1700-my photo #1.jpg"), "1700-my%20photo%20%231.jpg");
    assert_eq!(encode_key("folder/a b.png"), "folder/a%20b.png");
}
