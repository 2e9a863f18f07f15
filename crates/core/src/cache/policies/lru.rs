//! Least-recently-accessed eviction policy.
//!
//! Evicts the file whose most recent access lies furthest in the past. Built
//! directly on [`LruDict`]: every access moves the file to the most-recent
//! position and eviction pops from the least-recent end.

use std::any::Any;

use crate::cache::state::{EvictionHints, Item, State};
use crate::common::{CacheError, FileId};
use crate::dstructures::LruDict;

/// Membership handle into [`LruState`].
///
/// Only the identifier is carried; removal goes through the dict's key
/// lookup, so the handle stays cheap and the O(1) cost is paid there.
#[derive(Clone, Copy, Debug)]
pub struct LruItem {
    file: FileId,
}

impl Item for LruItem {
    fn file(&self) -> FileId {
        self.file
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Eviction state ordered by recency of access.
#[derive(Clone, Debug, Default)]
pub struct LruState {
    lru: LruDict<FileId, ()>,
}

impl LruState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resident files.
    pub fn len(&self) -> usize {
        self.lru.len()
    }

    /// Whether no file is resident.
    pub fn is_empty(&self) -> bool {
        self.lru.is_empty()
    }
}

impl State for LruState {
    fn find(&self, file: FileId) -> Option<Box<dyn Item>> {
        self.lru
            .contains(&file)
            .then(|| Box::new(LruItem { file }) as Box<dyn Item>)
    }

    fn remove(&mut self, item: &dyn Item) -> Result<(), CacheError> {
        let Some(&LruItem { file }) = item.as_any().downcast_ref::<LruItem>() else {
            return Err(CacheError::ItemTypeMismatch);
        };

        self.remove_file(file)
    }

    fn remove_file(&mut self, file: FileId) -> Result<(), CacheError> {
        self.lru
            .remove(&file)
            .ok_or(CacheError::NotResident(file))
    }

    /// Pops the least recently accessed file as the sole candidate.
    fn pop_eviction_candidates(
        &mut self,
        _file: FileId,
        _hints: &EvictionHints,
    ) -> Result<Vec<FileId>, CacheError> {
        let (file, ()) = self.lru.pop().ok_or(CacheError::NoEvictionCandidates)?;
        Ok(vec![file])
    }

    /// Inserts the file when `ensure` asks for it, then marks it most
    /// recently accessed.
    fn process_access(&mut self, file: FileId, ensure: bool, _hints: &EvictionHints) {
        if ensure {
            self.lru.insert(file, ());
        }
        self.lru.touch(&file);
    }
}
