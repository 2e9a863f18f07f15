//! The simulated cache core.
//!
//! This module groups the tightly coupled pieces of the simulator:
//! 1. **Storage:** Exact byte accounting for partially resident objects.
//! 2. **State:** The eviction-state protocol every policy implements.
//! 3. **Policies:** Rand (reference), LRU, and FIFO.
//! 4. **Processor:** The driver adapter gluing state and storage together.
//! 5. **Stats:** Aggregation of per-access outcome records.

/// Eviction policy implementations (Rand, LRU, FIFO).
pub mod policies;

/// Driver-facing access processor and per-access outcome records.
pub mod processor;

/// The eviction-state protocol (capability traits and hints).
pub mod state;

/// Statistics aggregation over processed accesses.
pub mod stats;

/// Exact byte accounting against a fixed capacity.
pub mod storage;

pub use processor::{AccessInfo, StateDrivenProcessor};
pub use state::{EvictionHints, Item, State};
pub use stats::{FileStats, StatsCollector, TotalStats};
pub use storage::Storage;
