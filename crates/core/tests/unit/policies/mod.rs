//! # Eviction Policy Tests
//!
//! This module aggregates the unit tests for the eviction-state
//! implementations shipped with the core.



/// Unit tests for the uniform random (Rand) reference policy.
pub mod random;
