use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.auth, None);
}

#[test]
fn parses_port() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn invalid_port_is_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn auth_url_enables_relay_with_default_timeouts() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("AUTH_SERVICE_URL", "https://auth.test/api/auth/")])).unwrap();
    assert_eq!(
        cfg.auth,
        Some(AuthRelayConfig {
            base_url: "https://auth.test/api/auth".to_owned(),
            timeouts: RelayTimeouts {
                request_secs: DEFAULT_AUTH_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_AUTH_CONNECT_TIMEOUT_SECS,
            },
        })
    );
}

#[test]
fn blank_auth_url_disables_relay() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("AUTH_SERVICE_URL", "   ")])).unwrap();
    assert_eq!(cfg.auth, None);
}

#[test]
fn timeout_overrides_apply() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("AUTH_SERVICE_URL", "http://localhost:4000"),
        ("AUTH_REQUEST_TIMEOUT_SECS", "30"),
        ("AUTH_CONNECT_TIMEOUT_SECS", " 2 "),
    ]))
    .unwrap();
    let timeouts = cfg.auth.unwrap().timeouts;
    assert_eq!(timeouts, RelayTimeouts { request_secs: 30, connect_secs: 2 });
}

#[test]
fn invalid_timeout_is_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[
        ("AUTH_SERVICE_URL", "http://localhost:4000"),
        ("AUTH_REQUEST_TIMEOUT_SECS", "-1"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "AUTH_REQUEST_TIMEOUT_SECS", .. }));
}

#[test]
fn timeouts_ignored_without_auth_url() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("AUTH_REQUEST_TIMEOUT_SECS", "nope")])).unwrap();
    assert_eq!(cfg.auth, None);
}
