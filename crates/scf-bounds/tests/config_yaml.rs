use std::fs;

use scf_bounds::{BoundConfig, CriticalRegimePolicy, ScfError};

#[test]
fn empty_document_uses_defaults() {
    let config = BoundConfig::from_yaml_slice(b"{}").expect("parse");
    assert_eq!(config, BoundConfig::default());
    assert_eq!(config.critical_regime, CriticalRegimePolicy::Connected);
    assert_eq!(config.search.max_n, 10_000);
    assert_eq!(config.threads, 0);
}

#[test]
fn kebab_case_policy_parses() {
    let yaml = b"critical_regime: giant-component\nsearch:\n  max_n: 500\nthreads: 4\n";
    let config = BoundConfig::from_yaml_slice(yaml).expect("parse");
    assert_eq!(config.critical_regime, CriticalRegimePolicy::GiantComponent);
    assert_eq!(config.search.max_n, 500);
    assert_eq!(config.threads, 4);
}

#[test]
fn round_trips_through_yaml() {
    let mut config = BoundConfig::default();
    config.critical_regime = CriticalRegimePolicy::GiantComponent;
    config.search.max_n = 77;
    let yaml = serde_yaml::to_string(&config).expect("yaml");
    assert!(yaml.contains("giant-component"));
    let decoded = BoundConfig::from_yaml_slice(yaml.as_bytes()).expect("decode");
    assert_eq!(decoded, config);
}

#[test]
fn rejects_tiny_search_ceiling() {
    let err = BoundConfig::from_yaml_slice(b"search:\n  max_n: 1\n").unwrap_err();
    match err {
        ScfError::Config(info) => assert_eq!(info.code, "config-invalid"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_search_ceiling_above_vertex_limit() {
    let yaml = format!("search:\n  max_n: {}\n", scf_core::MAX_VERTICES + 1);
    let err = BoundConfig::from_yaml_slice(yaml.as_bytes()).unwrap_err();
    assert_eq!(err.code(), "config-invalid");
}

#[test]
fn unknown_policy_is_a_serde_error() {
    let err = BoundConfig::from_yaml_slice(b"critical_regime: bogus\n").unwrap_err();
    assert_eq!(err.code(), "yaml_deserialize");
}

#[test]
fn loads_from_disk() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("bounds.yaml");
    fs::write(&path, "critical_regime: connected\n").expect("write");
    let config = BoundConfig::load(&path).expect("load");
    assert_eq!(config.critical_regime, CriticalRegimePolicy::Connected);

    let missing = BoundConfig::load(&dir.path().join("missing.yaml")).unwrap_err();
    assert_eq!(missing.code(), "config_read");
    assert!(missing.info().context.contains_key("path"));
}
