//! # Configuration Tests
//!
//! Tests for configuration deserialization, defaults, and validation.

use cachesim_core::config::{CacheConfig, PolicyKind};
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = CacheConfig::default();
    assert_eq!(config.total_bytes, 1 << 40);
    assert_eq!(config.policy, PolicyKind::Rand);
    assert_eq!(config.seed, 0x5EED_0F_CACE);
}

#[test]
fn test_empty_json_yields_defaults() {
    let config = CacheConfig::from_json("{}").unwrap();
    assert_eq!(config, CacheConfig::default());
}

#[test]
fn test_partial_json_fills_remaining_defaults() {
    let config = CacheConfig::from_json(r#"{"total_bytes": 1024}"#).unwrap();
    assert_eq!(config.total_bytes, 1024);
    assert_eq!(config.policy, PolicyKind::Rand);
    assert_eq!(config.seed, CacheConfig::default().seed);
}

#[test]
fn test_full_json_deserialization() {
    let json = r#"{
        "total_bytes": 104857600,
        "policy": "lru",
        "seed": 99
    }"#;

    let config = CacheConfig::from_json(json).unwrap();
    assert_eq!(config.total_bytes, 100 * 1024 * 1024);
    assert_eq!(config.policy, PolicyKind::Lru);
    assert_eq!(config.seed, 99);
}

#[test]
fn test_json_all_policies() {
    for (name, kind) in [
        ("rand", PolicyKind::Rand),
        ("lru", PolicyKind::Lru),
        ("fifo", PolicyKind::Fifo),
    ] {
        let json = format!(r#"{{"policy": "{name}"}}"#);
        let config = CacheConfig::from_json(&json).unwrap();
        assert_eq!(config.policy, kind);
    }
}

#[test]
fn test_unknown_policy_is_rejected() {
    assert!(CacheConfig::from_json(r#"{"policy": "mru"}"#).is_err());
}

#[test]
fn test_unknown_field_is_rejected() {
    assert!(CacheConfig::from_json(r#"{"capacity": 1024}"#).is_err());
}
