//! First-inserted eviction policy.
//!
//! Evicts the file that entered the cache earliest, regardless of how
//! recently it was accessed. Uses the same [`LruDict`] as the recency policy
//! but moves a file to the front only when it is first tracked, so the order
//! freezes at insertion time.

use std::any::Any;

use crate::cache::state::{EvictionHints, Item, State};
use crate::common::{CacheError, FileId};
use crate::dstructures::LruDict;

/// Membership handle into [`FifoState`].
#[derive(Clone, Copy, Debug)]
pub struct FifoItem {
    file: FileId,
}

impl Item for FifoItem {
    fn file(&self) -> FileId {
        self.file
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Eviction state ordered by insertion time.
#[derive(Clone, Debug, Default)]
pub struct FifoState {
    queue: LruDict<FileId, ()>,
}

impl FifoState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resident files.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no file is resident.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl State for FifoState {
    fn find(&self, file: FileId) -> Option<Box<dyn Item>> {
        self.queue
            .contains(&file)
            .then(|| Box::new(FifoItem { file }) as Box<dyn Item>)
    }

    fn remove(&mut self, item: &dyn Item) -> Result<(), CacheError> {
        let Some(&FifoItem { file }) = item.as_any().downcast_ref::<FifoItem>() else {
            return Err(CacheError::ItemTypeMismatch);
        };

        self.remove_file(file)
    }

    fn remove_file(&mut self, file: FileId) -> Result<(), CacheError> {
        self.queue
            .remove(&file)
            .ok_or(CacheError::NotResident(file))
    }

    /// Pops the earliest-inserted file as the sole candidate.
    fn pop_eviction_candidates(
        &mut self,
        _file: FileId,
        _hints: &EvictionHints,
    ) -> Result<Vec<FileId>, CacheError> {
        let (file, ()) = self.queue.pop().ok_or(CacheError::NoEvictionCandidates)?;
        Ok(vec![file])
    }

    /// Starts tracking the file on first insertion; later accesses leave the
    /// order untouched.
    fn process_access(&mut self, file: FileId, ensure: bool, _hints: &EvictionHints) {
        if ensure {
            self.queue.insert(file, ());
            self.queue.touch(&file);
        }
    }
}
