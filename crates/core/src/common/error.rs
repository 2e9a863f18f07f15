//! Error taxonomy of the cache core.
//!
//! This module defines all failure conditions the core reports. It provides:
//! 1. **Recoverable Conditions:** `InsufficientFreeSpace`, which the driver's
//!    eviction loop handles by evicting further victims and retrying.
//! 2. **Contract Violations:** `NotResident`, `ItemTypeMismatch`, and
//!    `NoEvictionCandidates`, which indicate caller bugs and should be treated
//!    as fatal by the driver rather than retried.

use thiserror::Error;

use super::types::{BytesSize, FileId};

/// Failure conditions reported by storage and eviction-state operations.
///
/// Only [`CacheError::InsufficientFreeSpace`] is an expected, recoverable
/// condition; the remaining variants are precondition violations on the
/// caller's side.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CacheError {
    /// A placement requires more free bytes than the storage currently has.
    ///
    /// The placement is not applied; the storage is unchanged. Callers evict
    /// victims to free capacity and retry.
    #[error("insufficient free space: {missing} bytes missing, {free} bytes free")]
    InsufficientFreeSpace {
        /// Bytes the placement would have added.
        missing: BytesSize,
        /// Bytes currently free in the storage.
        free: BytesSize,
    },

    /// A removal named an object that is not resident in the eviction state.
    #[error("file {0} is not resident in the eviction state")]
    NotResident(FileId),

    /// A membership item was handed to an eviction-state implementation that
    /// did not create it.
    #[error("membership item belongs to a different eviction-state implementation")]
    ItemTypeMismatch,

    /// Eviction candidates were requested from an empty eviction state.
    ///
    /// Callers must check residency before asking for candidates; this can
    /// surface legitimately only when a single access requests more bytes
    /// than the storage can hold in total.
    #[error("no eviction candidates remain")]
    NoEvictionCandidates,
}
