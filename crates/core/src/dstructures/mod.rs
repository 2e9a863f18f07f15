//! Data structures backing the eviction policies.
//!
//! This module collects the policy-critical containers that are not
//! themselves policy logic. It includes:
//! 1. **Ordered Mapping:** `LruDict`, an order-preserving associative
//!    container with O(1) recency operations, used by recency- and
//!    insertion-order-sensitive policies.

/// Ordered associative container with recency operations.
pub mod lru;

pub use lru::LruDict;
