use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use discern_server::config::ServerConfig;

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<ServerConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(config.session_ttl, Duration::from_secs(3600));
    assert_eq!(config.sweep_interval, Duration::from_secs(300));
    assert_eq!(config.engine_config, None);
}

#[test]
fn variables_override_defaults() {
    let config = config_from(&[
        ("DISCERN_BIND_ADDR", "127.0.0.1:9000"),
        ("DISCERN_SESSION_TTL_SECS", "600"),
        ("DISCERN_SESSION_SWEEP_SECS", " 30 "),
        ("DISCERN_ENGINE_CONFIG", "/etc/discern/engine.json"),
    ])
    .unwrap();
    assert_eq!(config.bind_addr.port(), 9000);
    assert_eq!(config.session_ttl, Duration::from_secs(600));
    assert_eq!(config.sweep_interval, Duration::from_secs(30));
    assert_eq!(
        config.engine_config,
        Some(PathBuf::from("/etc/discern/engine.json"))
    );
}

#[test]
fn empty_values_count_as_unset() {
    let config = config_from(&[("DISCERN_ENGINE_CONFIG", ""), ("DISCERN_BIND_ADDR", " ")]).unwrap();
    assert_eq!(config.engine_config, None);
    assert_eq!(config.bind_addr.port(), 8080);
}

#[test]
fn bad_values_are_rejected() {
    assert!(config_from(&[("DISCERN_BIND_ADDR", "localhost")]).is_err());
    assert!(config_from(&[("DISCERN_SESSION_TTL_SECS", "soon")]).is_err());
    assert!(config_from(&[("DISCERN_SESSION_SWEEP_SECS", "0")]).is_err());
}
