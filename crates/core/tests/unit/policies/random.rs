//! Rand reference policy tests.
//!
//! Covers the eviction-state protocol contract: membership handles, removal
//! consistency, candidate exhaustion, and the statistical uniformity of
//! victim selection.

use std::collections::{HashMap, HashSet};

use cachesim_core::cache::policies::{LruState, RandState};
use cachesim_core::cache::state::{EvictionHints, State};
use cachesim_core::common::FileId;
use cachesim_core::CacheError;

const A: FileId = FileId::new(10);
const B: FileId = FileId::new(20);
const C: FileId = FileId::new(30);

fn hints() -> EvictionHints {
    EvictionHints::default()
}

/// A state with the given files tracked, in order.
fn state_with(files: &[FileId]) -> RandState {
    let mut state = RandState::new(7);
    for &file in files {
        state.process_access(file, true, &hints());
    }
    state
}

#[test]
fn process_access_is_idempotent() {
    let mut state = state_with(&[A, B]);
    state.process_access(A, true, &hints());
    state.process_access(A, false, &hints());
    assert_eq!(state.len(), 2);
}

#[test]
fn find_locates_tracked_files_only() {
    let state = state_with(&[A, B]);

    let item = state.find(B).unwrap();
    assert_eq!(item.file(), B);
    assert!(state.find(C).is_none());
}

#[test]
fn remove_by_item() {
    let mut state = state_with(&[A, B, C]);

    let item = state.find(B).unwrap();
    state.remove(item.as_ref()).unwrap();

    assert!(state.find(B).is_none());
    assert_eq!(state.len(), 2);
}

#[test]
fn stale_item_is_rejected() {
    let mut state = state_with(&[A, B, C]);

    // The handle is invalidated by any mutation of the state.
    let item = state.find(A).unwrap();
    state.remove_file(A).unwrap();

    assert_eq!(
        state.remove(item.as_ref()),
        Err(CacheError::NotResident(A))
    );
    assert_eq!(state.len(), 2);
}

#[test]
fn foreign_item_is_rejected() {
    let mut rand_state = state_with(&[A]);
    let mut lru_state = LruState::new();
    lru_state.process_access(A, true, &hints());

    let foreign = lru_state.find(A).unwrap();
    assert_eq!(
        rand_state.remove(foreign.as_ref()),
        Err(CacheError::ItemTypeMismatch)
    );
    assert_eq!(rand_state.len(), 1);
}

#[test]
fn remove_file_requires_residency() {
    let mut state = state_with(&[A]);
    assert_eq!(state.remove_file(B), Err(CacheError::NotResident(B)));
    state.remove_file(A).unwrap();
    assert_eq!(state.remove_file(A), Err(CacheError::NotResident(A)));
}

#[test]
fn removal_consistency_scenario() {
    // Residents {a, b, c}; after remove_file(b) the candidate pool is
    // exactly {a, c}, each drawn once.
    let mut state = state_with(&[A, B, C]);
    state.remove_file(B).unwrap();
    assert!(state.find(B).is_none());

    let mut drained = HashSet::new();
    while !state.is_empty() {
        let candidates = state.pop_eviction_candidates(FileId::new(0), &hints()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert!(drained.insert(candidates[0]));
    }

    assert_eq!(drained, HashSet::from([A, C]));
}

#[test]
fn pop_on_empty_state_fails() {
    let mut state = RandState::new(1);
    assert_eq!(
        state.pop_eviction_candidates(FileId::new(0), &hints()),
        Err(CacheError::NoEvictionCandidates)
    );
}

#[test]
fn same_seed_same_victims() {
    let draw = |seed: u64| -> Vec<FileId> {
        let mut state = RandState::new(seed);
        for id in 0..16 {
            state.process_access(FileId::new(id), true, &hints());
        }
        let mut victims = Vec::new();
        while !state.is_empty() {
            victims.extend(state.pop_eviction_candidates(FileId::new(0), &hints()).unwrap());
        }
        victims
    };

    assert_eq!(draw(99), draw(99));
}

#[test]
fn selection_is_uniform() {
    // With n resident files, each file must be drawn with empirical
    // frequency approaching 1/n. 20_000 draws over 8 files give an
    // expectation of 2500 per file; the tolerance below sits many standard
    // deviations out (sigma is about 47).
    const FILES: u64 = 8;
    const DRAWS: u64 = 20_000;

    let mut state = RandState::new(42);
    for id in 0..FILES {
        state.process_access(FileId::new(id), true, &hints());
    }

    let mut counts: HashMap<FileId, u64> = HashMap::new();
    for _ in 0..DRAWS {
        let candidates = state.pop_eviction_candidates(FileId::new(0), &hints()).unwrap();
        let victim = candidates[0];
        *counts.entry(victim).or_insert(0) += 1;
        // Re-track the victim so every draw selects among all files.
        state.process_access(victim, true, &hints());
    }

    let expected = DRAWS / FILES;
    for id in 0..FILES {
        let count = counts.get(&FileId::new(id)).copied().unwrap_or(0);
        let deviation = count.abs_diff(expected);
        assert!(
            deviation < expected / 5,
            "file {id} drawn {count} times, expected about {expected}"
        );
    }
}
