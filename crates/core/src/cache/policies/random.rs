//! Uniform random eviction policy.
//!
//! This policy selects a uniformly random resident file as the sole eviction
//! candidate. It is the reference implementation of the eviction-state
//! protocol: it demonstrates swap-and-pop removal for O(1) amortized
//! eviction and keeps a companion membership set for O(1) residency checks.
//! Access patterns do not affect its state, so it doubles as the baseline
//! against which smarter policies are compared.
//!
//! The random number generator is injected via a seed at construction, which
//! keeps simulation runs reproducible.

use std::any::Any;
use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::cache::state::{EvictionHints, Item, State};
use crate::common::{CacheError, FileId};

/// Membership handle into [`RandState`]'s dense file vector.
///
/// Carries the file's position at the time [`find`](RandState::find) ran.
/// Invalidated by any subsequent mutation of the state: removals swap the
/// last element into the vacated position.
#[derive(Clone, Copy, Debug)]
pub struct RandItem {
    index: usize,
    file: FileId,
}

impl Item for RandItem {
    fn file(&self) -> FileId {
        self.file
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Eviction state selecting victims uniformly at random.
///
/// Resident files live in a dense vector; a companion hash set answers
/// membership in O(1). Removal swaps the target with the last element and
/// truncates, so no element ever shifts.
#[derive(Debug)]
pub struct RandState {
    files: Vec<FileId>,
    members: HashSet<FileId>,
    rng: SmallRng,
}

impl RandState {
    /// Creates an empty state drawing from the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            files: Vec::new(),
            members: HashSet::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Number of resident files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no file is resident.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Swap-and-pop removal of the file at `index`.
    fn remove_at(&mut self, index: usize) -> FileId {
        let file = self.files.swap_remove(index);
        self.members.remove(&file);
        file
    }
}

impl State for RandState {
    /// Linear scan for the position of `file`.
    ///
    /// Acceptable for the reference implementation; policies that need a
    /// faster `find` keep a direct index map instead.
    fn find(&self, file: FileId) -> Option<Box<dyn Item>> {
        let index = self.files.iter().position(|&resident| resident == file)?;
        Some(Box::new(RandItem { index, file }))
    }

    fn remove(&mut self, item: &dyn Item) -> Result<(), CacheError> {
        let Some(&RandItem { index, file }) = item.as_any().downcast_ref::<RandItem>() else {
            return Err(CacheError::ItemTypeMismatch);
        };

        // A stale item no longer names its file's slot.
        if self.files.get(index) != Some(&file) {
            return Err(CacheError::NotResident(file));
        }

        self.remove_at(index);
        Ok(())
    }

    fn remove_file(&mut self, file: FileId) -> Result<(), CacheError> {
        let index = self
            .files
            .iter()
            .position(|&resident| resident == file)
            .ok_or(CacheError::NotResident(file))?;

        self.remove_at(index);
        Ok(())
    }

    /// Draws a uniformly random resident file and removes it.
    ///
    /// Every resident file has probability `1/n` of selection.
    fn pop_eviction_candidates(
        &mut self,
        _file: FileId,
        _hints: &EvictionHints,
    ) -> Result<Vec<FileId>, CacheError> {
        if self.files.is_empty() {
            return Err(CacheError::NoEvictionCandidates);
        }

        let index = self.rng.random_range(0..self.files.len());
        Ok(vec![self.remove_at(index)])
    }

    /// Starts tracking `file` if it is not tracked already.
    ///
    /// Insertion is idempotent thanks to the membership set, so the `ensure`
    /// assertion carries no extra information for this policy.
    fn process_access(&mut self, file: FileId, _ensure: bool, _hints: &EvictionHints) {
        if self.members.insert(file) {
            self.files.push(file);
        }
    }
}
