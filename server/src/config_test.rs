use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, backend_url: DEFAULT_BACKEND_URL.to_owned() });
}

#[test]
fn from_lookup_reads_port_and_backend() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("BACKEND_URL", "https://kb.internal:9000/")]))
        .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://kb.internal:9000");
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn parse_port_rejects_non_numeric() {
    assert!(matches!(parse_port(Some("http")), Err(ConfigError::InvalidPort(_))));
}

#[test]
fn parse_port_blank_uses_default() {
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_backend_url_requires_http_scheme() {
    assert_eq!(
        parse_backend_url(Some("kb.internal:8000")),
        Err(ConfigError::InvalidBackendUrl("kb.internal:8000".to_owned()))
    );
    assert!(parse_backend_url(Some("ftp://kb.internal")).is_err());
}

#[test]
fn parse_backend_url_requires_host() {
    assert!(parse_backend_url(Some("http://")).is_err());
    assert!(parse_backend_url(Some("https:///")).is_err());
}

#[test]
fn parse_backend_url_keeps_path_prefix() {
    assert_eq!(parse_backend_url(Some("http://gw/kb/")), Ok("http://gw/kb".to_owned()));
}

#[test]
fn config_error_messages_name_the_variable() {
    assert!(ConfigError::InvalidPort("x".to_owned()).to_string().contains("PORT"));
    assert!(ConfigError::InvalidBackendUrl("x".to_owned()).to_string().contains("BACKEND_URL"));
}
