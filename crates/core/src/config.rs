//! Configuration for simulated cache instances.
//!
//! This module defines the configuration structures used to parameterize a
//! simulated cache. It provides:
//! 1. **Defaults:** Baseline constants used when a field is not overridden.
//! 2. **Structures:** The per-instance `CacheConfig`.
//! 3. **Enums:** The eviction policy selector.
//!
//! Configuration is supplied as JSON by the external driver (use
//! [`CacheConfig::from_json`]) or constructed with `CacheConfig::default()`.

use serde::Deserialize;

use crate::common::BytesSize;

/// Default configuration constants for a simulated cache instance.
mod defaults {
    /// Default cache capacity in bytes (1 TiB).
    ///
    /// Matches the order of magnitude of the disk caches this simulator
    /// models; sweeps override it per instance.
    pub const TOTAL_BYTES: u64 = 1 << 40;

    /// Default seed for policies that draw random numbers.
    ///
    /// A fixed seed keeps runs reproducible unless the driver injects its own.
    pub const SEED: u64 = 0x5EED_0F_CACE;
}

/// Eviction policy selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Uniform random eviction (the reference policy).
    Rand,
    /// Least-recently-accessed eviction.
    Lru,
    /// First-inserted eviction.
    Fifo,
}

/// Configuration of a single simulated cache instance.
///
/// All fields have defaults, so a partial JSON object (or `{}`) is a valid
/// configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Fixed total capacity of the storage in bytes.
    pub total_bytes: BytesSize,
    /// Eviction policy backing the cache instance.
    pub policy: PolicyKind,
    /// Seed for the policy's random number generator, where one is used.
    pub seed: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            total_bytes: defaults::TOTAL_BYTES,
            policy: PolicyKind::Rand,
            seed: defaults::SEED,
        }
    }
}

impl CacheConfig {
    /// Parses a configuration from its JSON representation.
    ///
    /// # Arguments
    ///
    /// * `json` - A JSON object; absent fields fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying deserialization error if `json` is malformed
    /// or contains unknown fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
