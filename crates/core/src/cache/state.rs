//! The eviction-state protocol.
//!
//! This module defines the contract every eviction policy's internal state
//! implements. It provides:
//! 1. **The `State` Trait:** Locate membership, remove by item or by
//!    identifier, pop eviction candidates, and react to accesses.
//! 2. **Membership Items:** Short-lived handles enabling O(1) removal without
//!    a second lookup.
//! 3. **Hints:** Advisory byte-level context a policy may consult when
//!    selecting victims.
//!
//! The protocol is byte-agnostic: policies reason about object identifiers
//! only, while [`Storage`](super::storage::Storage) reasons about parts. The
//! processor is the glue keeping both views consistent.

use std::any::Any;
use std::fmt;

use crate::common::{BytesSize, CacheError, FileId, TimeStamp};

/// Advisory context for [`State::pop_eviction_candidates`] and
/// [`State::process_access`].
///
/// Size-aware policies may use any of these fields; policies that ignore them
/// (such as Rand) must tolerate any combination, including the all-zero
/// default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvictionHints {
    /// Timestamp of the access driving the eviction.
    pub ts: TimeStamp,
    /// Running index of the access within the trace.
    pub ind: u64,
    /// Bytes requested by the access.
    pub requested_bytes: BytesSize,
    /// Bytes of the request already resident.
    pub contained_bytes: BytesSize,
    /// Bytes of the request not resident.
    pub missing_bytes: BytesSize,
    /// Bytes of the accessed file resident in total (beyond the request).
    pub in_cache_bytes: BytesSize,
    /// Bytes currently free in the storage.
    pub free_bytes: BytesSize,
    /// Bytes that still must be freed before the placement fits.
    pub required_free_bytes: BytesSize,
}

/// Membership handle into an eviction state's internal structure.
///
/// An item is valid only until the next mutation of the state that produced
/// it: any removal or candidate pop may reorder the underlying structure and
/// leave retained items dangling. Obtain, use, discard.
pub trait Item: Any {
    /// The object this item refers to.
    fn file(&self) -> FileId;

    /// Upcast used by [`State::remove`] to recover the concrete item type.
    fn as_any(&self) -> &dyn Any;
}

impl fmt::Debug for dyn Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item({})", self.file())
    }
}

/// Capability set implemented by every eviction policy's internal state.
///
/// A state tracks object-level residency and answers "who should be evicted
/// next". The driver keeps it consistent with the byte-level
/// [`Storage`](super::storage::Storage): an object resident in one must be
/// resident in the other.
pub trait State {
    /// Locates the membership item for `file`, or `None` if not resident.
    fn find(&self, file: FileId) -> Option<Box<dyn Item>>;

    /// Removes the object referred to by a previously obtained item.
    ///
    /// # Errors
    ///
    /// [`CacheError::ItemTypeMismatch`] if the item was produced by a
    /// different implementation; [`CacheError::NotResident`] if the item is
    /// stale. Both are caller bugs.
    fn remove(&mut self, item: &dyn Item) -> Result<(), CacheError>;

    /// Removes `file` directly by identifier.
    ///
    /// # Errors
    ///
    /// [`CacheError::NotResident`] if `file` is not tracked; residency is a
    /// precondition of this call.
    fn remove_file(&mut self, file: FileId) -> Result<(), CacheError>;

    /// Selects and removes one or more eviction victims from this state.
    ///
    /// The returned objects are no longer tracked; the driver is responsible
    /// for evicting them from storage. `file` names the object whose access
    /// triggered the eviction and `hints` carries advisory byte context.
    ///
    /// # Errors
    ///
    /// [`CacheError::NoEvictionCandidates`] if the state is empty; callers
    /// must check residency first.
    fn pop_eviction_candidates(
        &mut self,
        file: FileId,
        hints: &EvictionHints,
    ) -> Result<Vec<FileId>, CacheError>;

    /// Updates the state to reflect that `file` was accessed.
    ///
    /// `ensure` is true when the caller cannot guarantee the file is already
    /// tracked and the state must insert it if absent; with `ensure` false
    /// the caller asserts the file is tracked already and only the policy's
    /// access bookkeeping (recency, frequency, ...) applies.
    fn process_access(&mut self, file: FileId, ensure: bool, hints: &EvictionHints);
}
