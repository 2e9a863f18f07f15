//! Trace-driven cache simulator core.
//!
//! This crate implements the core of a cache-behavior simulator for objects
//! that can be partially cached. It provides the following:
//! 1. **Storage:** Exact byte accounting for part-addressable objects against
//!    a fixed capacity, with atomic max-merge placement.
//! 2. **Eviction-State Protocol:** The capability set every eviction policy
//!    implements (membership, removal, candidate selection, access updates).
//! 3. **Policies:** Rand (the reference implementation), LRU, and FIFO.
//! 4. **Processor:** The driver adapter translating access events into
//!    admission decisions, eviction loops, and placements.
//! 5. **Statistics:** Per-file and total hit/byte counters derived from
//!    per-access outcome records.
//!
//! Workload parsing, the multi-cache simulation loop, and the CLI are
//! external collaborators; they interact with this core only through
//! [`Access`](common::Access) events, [`AccessInfo`](cache::AccessInfo)
//! records, and the read-only storage queries.
//!
//! Each simulated cache instance is single-threaded: one access is processed
//! to completion before the next. A harness may run independent instances in
//! parallel, but storage and state of one instance are never shared.

/// The simulated cache core (storage, state protocol, policies, processor).
pub mod cache;

/// Common types and error taxonomy.
pub mod common;

/// Simulated cache instance configuration.
pub mod config;

/// Data structures backing the eviction policies.
pub mod dstructures;

/// Per-access outcome record; feed these to a [`cache::StatsCollector`].
pub use crate::cache::AccessInfo;
/// The driver adapter; construct with [`StateDrivenProcessor::from_config`].
pub use crate::cache::StateDrivenProcessor;
/// Byte-exact bounded storage; construct with a fixed capacity.
pub use crate::cache::Storage;
/// Error taxonomy; only `InsufficientFreeSpace` is recoverable.
pub use crate::common::CacheError;
/// Root configuration type; use `CacheConfig::default()` or deserialize from JSON.
pub use crate::config::CacheConfig;
