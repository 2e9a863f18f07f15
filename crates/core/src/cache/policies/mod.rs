//! Eviction policy implementations.
//!
//! Each policy is an implementation of the
//! [`State`](crate::cache::state::State) protocol; new policies plug in as
//! new implementations without touching storage or processor.
//!
//! # Policies
//!
//! - `Rand`: uniform random eviction (the reference implementation).
//! - `Lru`: least-recently-accessed eviction.
//! - `Fifo`: first-inserted eviction.

/// First-inserted eviction policy.
pub mod fifo;

/// Least-recently-accessed eviction policy.
pub mod lru;

/// Uniform random eviction policy.
pub mod random;

pub use fifo::FifoState;
pub use lru::LruState;
pub use random::RandState;

use crate::config::{CacheConfig, PolicyKind};

use super::state::State;

/// Builds the eviction state selected by the configuration.
///
/// The seed is forwarded to policies that draw random numbers; deterministic
/// policies ignore it.
pub fn build_state(config: &CacheConfig) -> Box<dyn State> {
    match config.policy {
        PolicyKind::Rand => Box::new(RandState::new(config.seed)),
        PolicyKind::Lru => Box::new(LruState::new()),
        PolicyKind::Fifo => Box::new(FifoState::new()),
    }
}
