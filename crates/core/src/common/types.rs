//! Workload-facing type definitions.
//!
//! This module defines the strong types shared between the cache core and the
//! external trace source. It provides:
//! 1. **Identifiers:** An opaque object identifier (`FileId`) and part index (`PartInd`).
//! 2. **Quantities:** Exact integer byte counts and timestamps; no floating point
//!    ever enters the accounting.
//! 3. **Access Events:** The `Access` record a trace source hands to the processor.

use std::fmt;

/// Opaque identifier of a cacheable object.
///
/// The core assumes no internal structure beyond equality, ordering, and
/// hashing. Trace frontends are expected to intern object names into dense
/// 64-bit identifiers before feeding accesses to the processor, which keeps
/// all hot-path structures allocation-free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub u64);

impl FileId {
    /// Creates a new file identifier from a raw 64-bit value.
    #[inline(always)]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw 64-bit identifier value.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a sub-range ("part") of an object.
///
/// Ordering over part indices is total; storage queries report parts in
/// ascending index order.
pub type PartInd = u64;

/// Non-negative byte count. All accounting is exact integer arithmetic.
pub type BytesSize = u64;

/// Simulated timestamp of an access event.
pub type TimeStamp = u64;

/// A part and a byte size: "this part, at least this many bytes".
///
/// In a request the size is the number of bytes read from the part; in a
/// storage query result it is the number of bytes currently resident.
pub type PartSpec = (PartInd, BytesSize);

/// A single access event from the trace source.
///
/// Carries the accessed object and the parts (with byte sizes) the access
/// touches. The core makes no assumption about where accesses originate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Access {
    /// Timestamp at which the access occurs.
    pub access_ts: TimeStamp,
    /// The accessed object.
    pub file: FileId,
    /// Requested parts and their byte sizes.
    pub parts: Vec<PartSpec>,
}

impl Access {
    /// Creates a new access event.
    ///
    /// # Arguments
    ///
    /// * `access_ts` - Timestamp of the access.
    /// * `file` - The accessed object.
    /// * `parts` - Requested parts and their byte sizes.
    pub const fn new(access_ts: TimeStamp, file: FileId, parts: Vec<PartSpec>) -> Self {
        Self {
            access_ts,
            file,
            parts,
        }
    }

    /// Total number of bytes requested by this access.
    pub fn requested_bytes(&self) -> BytesSize {
        self.parts.iter().map(|&(_, part_bytes)| part_bytes).sum()
    }
}
