//! Ordered associative container tests.
//!
//! Verifies the ordering law (iteration order is first-insertion order among
//! surviving keys), default-construction on access, and the recency
//! operations.

use cachesim_core::dstructures::LruDict;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn iteration_follows_insertion_order() {
    let mut dict: LruDict<u32, u32> = LruDict::new();
    dict.insert(3, 30);
    dict.insert(1, 10);
    dict.insert(2, 20);

    let keys: Vec<u32> = dict.keys().copied().collect();
    assert_eq!(keys, vec![3, 1, 2]);

    // Keys, values, and pairs agree on the single maintained order.
    let values: Vec<u32> = dict.values().copied().collect();
    assert_eq!(values, vec![30, 10, 20]);
    let pairs: Vec<(u32, u32)> = dict.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(pairs, vec![(3, 30), (1, 10), (2, 20)]);
}

#[test]
fn update_keeps_position() {
    let mut dict: LruDict<u32, u32> = LruDict::new();
    dict.insert(1, 10);
    dict.insert(2, 20);
    dict.insert(3, 30);

    assert_eq!(dict.insert(2, 99), Some(20));

    let pairs: Vec<(u32, u32)> = dict.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(pairs, vec![(1, 10), (2, 99), (3, 30)]);
}

#[test]
fn removal_does_not_reorder_survivors() {
    let mut dict: LruDict<u32, ()> = LruDict::new();
    for key in [5, 3, 8, 1, 9] {
        dict.insert(key, ());
    }

    assert_eq!(dict.remove(&8), Some(()));
    assert_eq!(dict.remove(&5), Some(()));
    assert_eq!(dict.remove(&7), None);

    let keys: Vec<u32> = dict.keys().copied().collect();
    assert_eq!(keys, vec![3, 1, 9]);
}

#[test]
fn default_access_is_indistinguishable_from_insert() {
    let mut dict: LruDict<u32, u64> = LruDict::new();
    dict.insert(1, 11);

    // First read of a missing key default-constructs at the end of order.
    assert_eq!(*dict.get_or_default(2), 0);
    *dict.get_or_default(2) += 5;
    dict.insert(3, 33);

    assert_eq!(dict.get(&2), Some(&5));
    let keys: Vec<u32> = dict.keys().copied().collect();
    assert_eq!(keys, vec![1, 2, 3]);
}

#[test]
fn get_or_insert_with_runs_factory_once() {
    let mut dict: LruDict<u32, String> = LruDict::new();
    assert_eq!(dict.get_or_insert_with(7, || "fresh".to_owned()), "fresh");
    // Present key: the factory result is discarded.
    assert_eq!(dict.get_or_insert_with(7, || "stale".to_owned()), "fresh");
    assert_eq!(dict.len(), 1);
}

#[test]
fn touch_moves_to_most_recent_position() {
    let mut dict: LruDict<u32, ()> = LruDict::new();
    for key in [1, 2, 3] {
        dict.insert(key, ());
    }

    assert!(dict.touch(&1));
    assert!(!dict.touch(&42));

    // 1 is now most recent; iteration yields most recent first.
    let keys: Vec<u32> = dict.keys().copied().collect();
    assert_eq!(keys, vec![1, 2, 3]);

    // pop takes from the opposite end.
    assert_eq!(dict.pop(), Some((3, ())));
    assert_eq!(dict.pop(), Some((2, ())));
    assert_eq!(dict.pop(), Some((1, ())));
    assert_eq!(dict.pop(), None);
    assert!(dict.is_empty());
}

#[test]
fn get_does_not_affect_order() {
    let mut dict: LruDict<u32, u32> = LruDict::new();
    dict.insert(1, 10);
    dict.insert(2, 20);

    assert_eq!(dict.get(&2), Some(&20));
    assert_eq!(dict.get_mut(&2), Some(&mut 20));
    assert_eq!(dict.pop(), Some((2, 20)));
}

/// One container mutation drawn by proptest.
#[derive(Clone, Debug)]
enum DictOp {
    Insert(u8, u32),
    DefaultAccess(u8),
    Remove(u8),
}

fn dict_op() -> impl Strategy<Value = DictOp> {
    prop_oneof![
        (0u8..8, any::<u32>()).prop_map(|(k, v)| DictOp::Insert(k, v)),
        (0u8..8).prop_map(DictOp::DefaultAccess),
        (0u8..8).prop_map(DictOp::Remove),
    ]
}

proptest! {
    /// For any sequence of inserts, default-accesses, and removals, the
    /// iteration order of the surviving keys is exactly their order of
    /// first insertion.
    #[test]
    fn ordering_law(ops in prop::collection::vec(dict_op(), 0..64)) {
        let mut dict: LruDict<u8, u32> = LruDict::new();
        let mut model: Vec<u8> = Vec::new();

        for op in ops {
            match op {
                DictOp::Insert(key, value) => {
                    if !model.contains(&key) {
                        model.push(key);
                    }
                    dict.insert(key, value);
                }
                DictOp::DefaultAccess(key) => {
                    if !model.contains(&key) {
                        model.push(key);
                    }
                    let _ = dict.get_or_default(key);
                }
                DictOp::Remove(key) => {
                    model.retain(|&k| k != key);
                    let _ = dict.remove(&key);
                }
            }

            let keys: Vec<u8> = dict.keys().copied().collect();
            prop_assert_eq!(&keys, &model);
            prop_assert_eq!(dict.len(), model.len());
        }
    }
}
