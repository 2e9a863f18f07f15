//! Exact byte accounting for partially resident objects.
//!
//! This module implements the storage component of the simulated cache. It
//! tracks, per object, the set of parts currently resident and the bytes held
//! for each part, against a fixed total capacity. It provides:
//! 1. **Queries:** Residency and overlap queries used by the driver to decide
//!    admissions and by collectors to compute hit ratios.
//! 2. **Mutation:** Atomic placement with max-merge semantics and whole-object
//!    eviction.
//! 3. **Invariants:** `used_bytes` always equals the sum of all resident part
//!    sizes and never exceeds `total_bytes`.
//!
//! Storage is pure accounting; it knows nothing about eviction policy.

use std::collections::HashMap;

use crate::common::{BytesSize, CacheError, FileId, PartInd, PartSpec};

/// Byte-exact bounded storage for part-addressable objects.
///
/// An object may be partially resident: some parts present, others missing,
/// and each present part held at some byte size. An object with no entry is
/// fully absent. Placement records the maximum byte size ever seen for a
/// part, modelling a cache that keeps the largest byte-range fetched so far.
#[derive(Clone, Debug)]
pub struct Storage {
    total_bytes: BytesSize,
    used_bytes: BytesSize,
    files: HashMap<FileId, HashMap<PartInd, BytesSize>>,
}

impl Storage {
    /// Creates an empty storage with the given fixed capacity.
    ///
    /// # Arguments
    ///
    /// * `total_bytes` - Total capacity in bytes; immutable for the lifetime
    ///   of the storage.
    pub fn new(total_bytes: BytesSize) -> Self {
        Self {
            total_bytes,
            used_bytes: 0,
            files: HashMap::new(),
        }
    }

    /// Total capacity in bytes.
    #[inline(always)]
    pub const fn total_bytes(&self) -> BytesSize {
        self.total_bytes
    }

    /// Bytes currently resident across all objects.
    #[inline(always)]
    pub const fn used_bytes(&self) -> BytesSize {
        self.used_bytes
    }

    /// Bytes of remaining capacity.
    #[inline(always)]
    pub const fn free_bytes(&self) -> BytesSize {
        self.total_bytes - self.used_bytes
    }

    /// Returns all resident parts of `file`, sorted by part index ascending.
    ///
    /// Returns an empty vector if the file is absent. No side effects.
    pub fn parts(&self, file: FileId) -> Vec<PartSpec> {
        let Some(file_parts) = self.files.get(&file) else {
            return Vec::new();
        };

        let mut parts: Vec<PartSpec> = file_parts
            .iter()
            .map(|(&part_ind, &part_bytes)| (part_ind, part_bytes))
            .collect();
        parts.sort_unstable();
        parts
    }

    /// Whether any part of `file` is resident. O(1).
    pub fn contains_file(&self, file: FileId) -> bool {
        self.files.contains_key(&file)
    }

    /// Whether every requested part is resident at at least the requested size.
    ///
    /// An absent file satisfies only an empty request.
    pub fn contains(&self, file: FileId, parts: &[PartSpec]) -> bool {
        let Some(file_parts) = self.files.get(&file) else {
            return parts.is_empty();
        };

        parts
            .iter()
            .all(|&(part_ind, part_bytes)| file_parts.get(&part_ind).copied().unwrap_or(0) >= part_bytes)
    }

    /// Bytes of useful overlap between the request and the resident parts.
    ///
    /// Sums `min(resident_size, requested_size)` over the requested parts;
    /// never counts more than was asked for.
    pub fn contained_bytes(&self, file: FileId, parts: &[PartSpec]) -> BytesSize {
        let Some(file_parts) = self.files.get(&file) else {
            return 0;
        };

        parts
            .iter()
            .map(|&(part_ind, part_bytes)| {
                file_parts.get(&part_ind).copied().unwrap_or(0).min(part_bytes)
            })
            .sum()
    }

    /// Bytes of the request not currently resident.
    ///
    /// Equals the requested total minus [`Storage::contained_bytes`]; always
    /// non-negative.
    pub fn missing_bytes(&self, file: FileId, parts: &[PartSpec]) -> BytesSize {
        let requested_bytes: BytesSize = parts.iter().map(|&(_, part_bytes)| part_bytes).sum();

        requested_bytes - self.contained_bytes(file, parts)
    }

    /// Evicts all parts of `file` from the storage.
    ///
    /// # Returns
    ///
    /// The exact number of bytes freed; 0 if the file was absent.
    pub fn evict(&mut self, file: FileId) -> BytesSize {
        let Some(file_parts) = self.files.remove(&file) else {
            return 0;
        };

        let evicted_bytes: BytesSize = file_parts.values().sum();
        self.used_bytes -= evicted_bytes;

        evicted_bytes
    }

    /// Places the requested parts of `file` in the storage.
    ///
    /// For each requested part the resident size becomes the maximum of the
    /// existing and the requested size, so re-placing a part at a smaller
    /// size is a no-op. The operation is atomic: on failure nothing is
    /// mutated.
    ///
    /// # Returns
    ///
    /// The number of bytes added to the storage (the request's missing
    /// bytes before placement).
    ///
    /// # Errors
    ///
    /// [`CacheError::InsufficientFreeSpace`] if the missing bytes exceed the
    /// free capacity. Callers evict victims first and retry.
    pub fn place(&mut self, file: FileId, parts: &[PartSpec]) -> Result<BytesSize, CacheError> {
        let missing_bytes = self.missing_bytes(file, parts);
        if self.free_bytes() < missing_bytes {
            return Err(CacheError::InsufficientFreeSpace {
                missing: missing_bytes,
                free: self.free_bytes(),
            });
        }

        let file_parts = self.files.entry(file).or_default();
        for &(part_ind, part_bytes) in parts {
            let resident = file_parts.entry(part_ind).or_insert(0);
            *resident = (*resident).max(part_bytes);
        }

        self.used_bytes += missing_bytes;

        Ok(missing_bytes)
    }
}
