use super::*;

#[test]
fn defaults_match_development_ports() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.server_url, "http://localhost:5000");
    assert_eq!(cfg.identity_url, DEFAULT_IDENTITY_URL);
    assert_eq!(cfg.identity_api_key, "");
    assert_eq!(cfg.recommend_url, "");
    assert_eq!(cfg.pair_url, "http://localhost:8060");
    assert_eq!(cfg.disease_url, "http://localhost:7000");
}

#[test]
fn from_parts_trims_trailing_slashes() {
    let cfg = ClientConfig::from_parts(Some("https://api.example.test/"), None, Some(" key "), Some("https://ml.test//"), None, None);
    assert_eq!(cfg.server_url, "https://api.example.test");
    assert_eq!(cfg.identity_api_key, "key");
    assert_eq!(cfg.recommend_url, "https://ml.test");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ClientConfig::from_parts(Some("   "), Some(""), None, None, Some(" "), None);
    assert_eq!(cfg.server_url, DEFAULT_SERVER_URL);
    assert_eq!(cfg.identity_url, DEFAULT_IDENTITY_URL);
    assert_eq!(cfg.pair_url, DEFAULT_PAIR_URL);
}

#[test]
fn join_handles_slashes_on_both_sides() {
    assert_eq!(join("http://h:1", "/gaupal/auth/login"), "http://h:1/gaupal/auth/login");
    assert_eq!(join("http://h:1/", "gaupal"), "http://h:1/gaupal");
}

#[test]
fn join_with_empty_base_stays_same_origin() {
    assert_eq!(join("", "/recommend"), "/recommend");
}
