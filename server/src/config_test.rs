use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_geolearn_env() {
    unsafe {
        std::env::remove_var("GEOLEARN_ADDR");
    }
}

#[test]
fn parse_addr_defaults_when_absent() {
    let addr = parse_addr(None).unwrap();
    assert_eq!(addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
    assert_eq!(addr.port(), 3000);
}

#[test]
fn parse_addr_treats_blank_as_absent() {
    assert_eq!(parse_addr(Some("   ")).unwrap().port(), 3000);
}

#[test]
fn parse_addr_accepts_explicit_address() {
    let addr = parse_addr(Some("127.0.0.1:8080")).unwrap();
    assert_eq!(addr.to_string(), "127.0.0.1:8080");
}

#[test]
fn parse_addr_trims_whitespace() {
    assert_eq!(parse_addr(Some(" 127.0.0.1:4000 ")).unwrap().port(), 4000);
}

#[test]
fn parse_addr_rejects_missing_port() {
    let err = parse_addr(Some("localhost")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidAddr { ref raw, .. } if raw == "localhost"));
}

#[test]
fn parse_addr_rejects_out_of_range_port() {
    assert!(parse_addr(Some("0.0.0.0:70000")).is_err());
}

#[test]
fn config_error_messages_name_the_variable() {
    let err = parse_addr(Some("nope")).unwrap_err();
    assert!(err.to_string().starts_with("invalid GEOLEARN_ADDR \"nope\""));
}

#[test]
fn from_env_reads_addr_override() {
    unsafe {
        clear_geolearn_env();
        std::env::set_var("GEOLEARN_ADDR", "127.0.0.1:3999");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr.port(), 3999);

    unsafe { clear_geolearn_env() };
}

#[test]
fn from_env_rejects_bad_addr() {
    unsafe {
        clear_geolearn_env();
        std::env::set_var("GEOLEARN_ADDR", "not-an-address");
    }

    assert!(matches!(ServerConfig::from_env(), Err(ConfigError::InvalidAddr { .. })));

    unsafe { clear_geolearn_env() };
}
