//! Statistics aggregation over processed accesses.
//!
//! This module aggregates the [`AccessInfo`] records emitted by the processor
//! into per-file and total counters. It provides:
//! 1. **Counters:** Object hits/misses and exact byte counters (hit, missed,
//!    added, removed).
//! 2. **Residency Marks:** The timestamps at which a file last entered and
//!    left the storage.
//! 3. **Derived Metrics:** Object-hit and byte-hit ratios.
//!
//! The collector is a pure consumer: it queries nothing and mutates neither
//! storage nor eviction state.

use std::collections::HashMap;

use crate::common::{BytesSize, FileId, TimeStamp};

use super::processor::AccessInfo;

/// Counters tracked for a single file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileStats {
    /// Accesses that found any part of the file resident.
    pub hits: u64,
    /// Accesses that found no part of the file resident.
    pub misses: u64,
    /// Requested bytes that were resident at access time.
    pub bytes_hit: BytesSize,
    /// Requested bytes that had to be fetched.
    pub bytes_missed: BytesSize,
    /// Bytes added to the storage on behalf of this file.
    pub bytes_added: BytesSize,
    /// Bytes evicted from the storage due to this file's accesses.
    pub bytes_removed_due: BytesSize,
    /// Timestamp of the last access that began a residency of this file.
    pub last_residency_begin: TimeStamp,
    /// Timestamp of the last access that evicted this file.
    pub last_residency_end: TimeStamp,
}

/// Counters aggregated over all files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TotalStats {
    /// Accesses that found any part of the accessed file resident.
    pub files_hit: u64,
    /// Accesses that found no part of the accessed file resident.
    pub files_missed: u64,
    /// Requested bytes resident at access time, summed over all accesses.
    pub bytes_hit: BytesSize,
    /// Requested bytes fetched, summed over all accesses.
    pub bytes_missed: BytesSize,
    /// Bytes added to the storage.
    pub bytes_added: BytesSize,
    /// Bytes evicted from the storage.
    pub bytes_removed: BytesSize,
}

impl TotalStats {
    /// Fraction of accesses that hit, or 0.0 before any access.
    pub fn file_hit_ratio(&self) -> f64 {
        let accesses = self.files_hit + self.files_missed;
        if accesses == 0 {
            return 0.0;
        }
        self.files_hit as f64 / accesses as f64
    }

    /// Fraction of requested bytes that were resident, or 0.0 before any access.
    pub fn byte_hit_ratio(&self) -> f64 {
        let requested = self.bytes_hit + self.bytes_missed;
        if requested == 0 {
            return 0.0;
        }
        self.bytes_hit as f64 / requested as f64
    }
}

/// Aggregates [`AccessInfo`] records into per-file and total counters.
#[derive(Clone, Debug, Default)]
pub struct StatsCollector {
    total: TotalStats,
    files: HashMap<FileId, FileStats>,
}

impl StatsCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate counters over all files.
    pub const fn total(&self) -> &TotalStats {
        &self.total
    }

    /// Counters for a single file, or `None` if it was never accessed.
    pub fn file(&self, file: FileId) -> Option<&FileStats> {
        self.files.get(&file)
    }

    /// Number of distinct files seen so far.
    pub fn tracked_files(&self) -> usize {
        self.files.len()
    }

    /// Folds one access record into the counters.
    pub fn record(&mut self, info: &AccessInfo) {
        let file_stats = self.files.entry(info.access.file).or_default();

        file_stats.bytes_hit += info.bytes_hit;
        file_stats.bytes_missed += info.bytes_missed;
        file_stats.bytes_added += info.bytes_added;
        file_stats.bytes_removed_due += info.bytes_removed;

        if info.file_hit {
            file_stats.hits += 1;
            self.total.files_hit += 1;
        } else {
            file_stats.misses += 1;
            self.total.files_missed += 1;
            file_stats.last_residency_begin = info.access.access_ts;
        }

        self.total.bytes_hit += info.bytes_hit;
        self.total.bytes_missed += info.bytes_missed;
        self.total.bytes_added += info.bytes_added;
        self.total.bytes_removed += info.bytes_removed;

        for file in &info.evicted_files {
            if let Some(evicted_stats) = self.files.get_mut(file) {
                evicted_stats.last_residency_end = info.access.access_ts;
            }
        }
    }

    /// Zeroes all counters while keeping the set of tracked files.
    ///
    /// Called after a warm-up phase so reported ratios cover only the
    /// steady-state portion of the trace.
    pub fn reset_after_warm_up(&mut self) {
        self.total = TotalStats::default();
        for file_stats in self.files.values_mut() {
            *file_stats = FileStats::default();
        }
    }
}
