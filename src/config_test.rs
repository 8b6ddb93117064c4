use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.auth_base_url, DEFAULT_AUTH_BASE_URL);
    assert_eq!(cfg.content_base_url, DEFAULT_CONTENT_BASE_URL);
    assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert_eq!(cfg.storage_path, default_storage_path());
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("ANIMECARDS_AUTH_BASE_URL", "http://127.0.0.1:9000/auth/"),
        ("ANIMECARDS_CONTENT_BASE_URL", " http://127.0.0.1:9001 "),
        ("ANIMECARDS_REQUEST_TIMEOUT_SECS", "3"),
        ("ANIMECARDS_STORAGE_PATH", "/tmp/session.json"),
    ]))
    .unwrap();
    assert_eq!(cfg.auth_base_url, "http://127.0.0.1:9000/auth");
    assert_eq!(cfg.content_base_url, "http://127.0.0.1:9001");
    assert_eq!(cfg.request_timeout, Duration::from_secs(3));
    assert_eq!(cfg.storage_path, PathBuf::from("/tmp/session.json"));
}

#[test]
fn from_lookup_blank_url_errors() {
    let err = ClientConfig::from_lookup(lookup_from(&[("ANIMECARDS_AUTH_BASE_URL", " / ")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("ANIMECARDS_AUTH_BASE_URL must not be empty"));
}

#[test]
fn from_lookup_zero_timeout_errors() {
    let err = ClientConfig::from_lookup(lookup_from(&[("ANIMECARDS_REQUEST_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
}

#[test]
fn from_lookup_non_numeric_timeout_errors() {
    let err = ClientConfig::from_lookup(lookup_from(&[("ANIMECARDS_REQUEST_TIMEOUT_SECS", "soon")]))
        .unwrap_err()
        .to_string();
    assert!(err.contains("ANIMECARDS_REQUEST_TIMEOUT_SECS"));
    assert!(err.contains("soon"));
}

#[test]
fn from_lookup_blank_storage_path_uses_default() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("ANIMECARDS_STORAGE_PATH", "  ")])).unwrap();
    assert_eq!(cfg.storage_path, default_storage_path());
}

#[test]
fn normalize_base_url_strips_trailing_slashes() {
    assert_eq!(normalize_base_url("https://example.test/prod//"), "https://example.test/prod");
    assert_eq!(normalize_base_url("https://example.test"), "https://example.test");
}
