use super::*;

fn lookup(port: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
    move |key| (key == PORT_KEY).then_some(port).flatten().map(str::to_owned)
}

#[test]
fn port_defaults_when_unset() {
    assert_eq!(ServerConfig::from_lookup(lookup(None)).unwrap().port, DEFAULT_PORT);
}

#[test]
fn blank_port_counts_as_unset() {
    assert_eq!(ServerConfig::from_lookup(lookup(Some("  "))).unwrap().port, DEFAULT_PORT);
}

#[test]
fn port_is_parsed() {
    assert_eq!(ServerConfig::from_lookup(lookup(Some("8080"))).unwrap().port, 8080);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(Some("eighty"))).unwrap_err();
    assert!(matches!(err, ServerError::InvalidConfig { key: "PORT", ref value } if value == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}
