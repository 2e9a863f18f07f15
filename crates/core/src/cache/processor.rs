//! Driver-facing access processor.
//!
//! This module wires an eviction state to the byte-accounting storage and to
//! the access stream. It provides:
//! 1. **Access Records:** The per-access outcome (`AccessInfo`) a statistics
//!    collector consumes.
//! 2. **The Processor:** Translation of "file accessed with requested parts"
//!    into admission decisions, the eviction loop, placement, and state
//!    updates.
//!
//! Processing is strictly sequential: one access runs to completion before
//! the next is seen. That sequencing is the correctness mechanism; there is
//! no locking because there is no concurrent mutation.

use tracing::{debug, warn};

use crate::common::{Access, BytesSize, CacheError, FileId};
use crate::config::CacheConfig;

use super::policies;
use super::state::{EvictionHints, State};
use super::storage::Storage;

/// Outcome record of a single processed access.
///
/// Consumed by statistics collectors to derive object-hit and byte-hit
/// ratios; the processor itself aggregates nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessInfo {
    /// The access this record describes.
    pub access: Access,
    /// Whether any part of the file was resident when the access arrived.
    pub file_hit: bool,
    /// Requested bytes that were already resident.
    pub bytes_hit: BytesSize,
    /// Requested bytes that had to be fetched.
    pub bytes_missed: BytesSize,
    /// Bytes added to the storage by this access.
    pub bytes_added: BytesSize,
    /// Bytes evicted from the storage to make room for this access.
    pub bytes_removed: BytesSize,
    /// Bytes of the file resident after the access completed.
    pub total_bytes: BytesSize,
    /// Files evicted while making room, in eviction order.
    pub evicted_files: Vec<FileId>,
}

impl AccessInfo {
    /// Total bytes requested by the access.
    pub const fn bytes_requested(&self) -> BytesSize {
        self.bytes_hit + self.bytes_missed
    }
}

/// Adapter driving one eviction state against one storage.
///
/// Owns both exclusively; the external simulation loop feeds it one access at
/// a time and forwards the returned [`AccessInfo`] records to its collector.
pub struct StateDrivenProcessor {
    storage: Storage,
    state: Box<dyn State>,
    ind: u64,
}

impl std::fmt::Debug for StateDrivenProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateDrivenProcessor")
            .field("storage", &self.storage)
            .field("ind", &self.ind)
            .finish_non_exhaustive()
    }
}

impl StateDrivenProcessor {
    /// Creates a processor from an existing storage and eviction state.
    pub fn new(storage: Storage, state: Box<dyn State>) -> Self {
        Self {
            storage,
            state,
            ind: 0,
        }
    }

    /// Creates a processor with the storage capacity and policy selected by
    /// the configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(Storage::new(config.total_bytes), policies::build_state(config))
    }

    /// Read-only view of the storage, for statistics queries.
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Read-only view of the eviction state.
    pub fn state(&self) -> &dyn State {
        self.state.as_ref()
    }

    /// Processes a single access to completion.
    ///
    /// Computes the hit/overlap bookkeeping, evicts victims until the missing
    /// bytes fit, places the requested parts, and informs the eviction state
    /// of the access.
    ///
    /// If the eviction state pops the accessed file itself, the access is
    /// accounted as a complete miss: conceptually the eviction happens before
    /// the re-placement.
    ///
    /// # Errors
    ///
    /// [`CacheError::NoEvictionCandidates`] if victims run out before the
    /// placement fits (a single access larger than the whole storage). Any
    /// error leaves storage and state consistent with each other.
    pub fn process_access(&mut self, access: &Access) -> Result<AccessInfo, CacheError> {
        let ind = self.ind;
        self.ind += 1;

        let file_hit = self.storage.contains_file(access.file);
        let requested_bytes = access.requested_bytes();
        let mut contained_bytes = self.storage.contained_bytes(access.file, &access.parts);
        let mut missing_bytes = requested_bytes - contained_bytes;
        let mut in_cache_bytes: BytesSize = self
            .storage
            .parts(access.file)
            .iter()
            .map(|&(_, part_bytes)| part_bytes)
            .sum();

        if missing_bytes == 0 {
            let hints = EvictionHints {
                ts: access.access_ts,
                ind,
                requested_bytes,
                contained_bytes,
                missing_bytes: 0,
                in_cache_bytes,
                free_bytes: self.storage.free_bytes(),
                required_free_bytes: 0,
            };
            self.state.process_access(access.file, false, &hints);

            return Ok(AccessInfo {
                access: access.clone(),
                file_hit: true,
                bytes_hit: contained_bytes,
                bytes_missed: 0,
                bytes_added: 0,
                bytes_removed: 0,
                total_bytes: in_cache_bytes,
                evicted_files: Vec::new(),
            });
        }

        let mut free_bytes = self.storage.free_bytes();
        let mut evicted_files: Vec<FileId> = Vec::new();
        let mut evicted_bytes: BytesSize = 0;

        while free_bytes < missing_bytes {
            let hints = EvictionHints {
                ts: access.access_ts,
                ind,
                requested_bytes,
                contained_bytes,
                missing_bytes,
                in_cache_bytes,
                free_bytes,
                required_free_bytes: missing_bytes - free_bytes,
            };

            for candidate in self.state.pop_eviction_candidates(access.file, &hints)? {
                let freed = self.storage.evict(candidate);
                debug!(file = %candidate, freed_bytes = freed, "evicted file");

                evicted_files.push(candidate);
                evicted_bytes += freed;
                free_bytes += freed;

                if candidate == access.file {
                    // Conceptually the eviction happens before the
                    // re-placement, so the access becomes a complete miss.
                    warn!(file = %access.file, "evicted the file currently being accessed");
                    contained_bytes = 0;
                    missing_bytes = requested_bytes;
                    in_cache_bytes = 0;
                }
            }
        }

        let placed_bytes = self.storage.place(access.file, &access.parts)?;
        let total_bytes = in_cache_bytes + placed_bytes;

        // Object-level and part-level residency are reconciled here: the
        // state must start tracking the file only if no byte of it was
        // resident before this placement.
        let ensure = in_cache_bytes == 0;
        let hints = EvictionHints {
            ts: access.access_ts,
            ind,
            requested_bytes,
            contained_bytes,
            missing_bytes,
            in_cache_bytes,
            free_bytes: self.storage.free_bytes(),
            required_free_bytes: 0,
        };
        self.state.process_access(access.file, ensure, &hints);

        Ok(AccessInfo {
            access: access.clone(),
            file_hit,
            bytes_hit: contained_bytes,
            bytes_missed: missing_bytes,
            bytes_added: placed_bytes,
            bytes_removed: evicted_bytes,
            total_bytes,
            evicted_files,
        })
    }
}
