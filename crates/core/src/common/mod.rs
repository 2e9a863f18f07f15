//! Common types shared throughout the cache simulator core.
//!
//! This module provides the fundamental building blocks used by every
//! component of the core. It includes:
//! 1. **Workload Types:** Object identifiers, part indices, byte counts, and
//!    access events.
//! 2. **Error Handling:** The error taxonomy separating recoverable capacity
//!    conditions from caller contract violations.

/// Error types for storage and eviction-state operations.
pub mod error;

/// Workload-facing type definitions (identifiers, sizes, access events).
pub mod types;

pub use error::CacheError;
pub use types::{Access, BytesSize, FileId, PartInd, PartSpec, TimeStamp};
