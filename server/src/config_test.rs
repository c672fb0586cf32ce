use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on"] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_case_insensitive_and_trimmed() {
    assert_eq!(parse_bool("  TRUE "), Some(true));
    assert_eq!(parse_bool("Off"), Some(false));
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig::from_lookup
// =============================================================================

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert!(config.compression);
    assert!(config.public_dir.ends_with("../public"));
}

#[test]
fn reads_all_values() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("PUBLIC_DIR", "/srv/public"),
        ("COMPRESSION", "off"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.public_dir, PathBuf::from("/srv/public"));
    assert!(!config.compression);
}

#[test]
fn invalid_port_is_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
}

#[test]
fn zero_and_out_of_range_ports_are_errors() {
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "0")])).is_err());
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

#[test]
fn invalid_compression_flag_is_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("COMPRESSION", "sometimes")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidFlag { key: "COMPRESSION", value: "sometimes".to_owned() });
}

#[test]
fn bind_addr_uses_all_interfaces() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "4100")])).unwrap();
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:4100");
}

#[test]
fn config_error_messages_name_the_variable() {
    assert!(ConfigError::InvalidPort("x".to_owned()).to_string().contains("PORT"));
    let flag = ConfigError::InvalidFlag { key: "COMPRESSION", value: "x".to_owned() };
    assert!(flag.to_string().contains("COMPRESSION"));
}

#[test]
fn default_public_dir_ships_brand_logo() {
    assert!(default_public_dir().join("logo.png").is_file());
}
