//! Ordered associative container with recency operations.
//!
//! This module implements `LruDict`, the mapping that backs order-sensitive
//! eviction policies. It provides:
//! 1. **Stable Order:** Keys keep a deterministic order through inserts,
//!    updates, and default-constructions; deletions remove a key without
//!    disturbing the relative order of the remainder.
//! 2. **Recency Operations:** O(1) move-to-front on access and O(1) pop of
//!    the least recently accessed entry.
//! 3. **Default on Access:** Reading a missing key can default-construct its
//!    value, indistinguishable from an explicit insert for ordering purposes.
//!
//! Internally a doubly linked list threaded through a slab of nodes, indexed
//! by a hash map for O(1) key lookup. Freed slots are recycled through a free
//! list.

use std::collections::HashMap;
use std::hash::Hash;

/// A linked-list node holding one key-value pair.
#[derive(Clone, Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ordered mapping from key to value with O(1) recency updates.
///
/// Iteration yields the most recently accessed entries first; entries that
/// were never [`touch`](LruDict::touch)ed appear in insertion order with the
/// first-inserted key first. New entries enter at the least-recent end and
/// [`pop`](LruDict::pop) removes from that end.
#[derive(Clone, Debug)]
pub struct LruDict<K, V> {
    nodes: Vec<Option<Node<K, V>>>,
    lookup: HashMap<K, usize>,
    free: Vec<usize>,
    /// Most recently accessed entry.
    head: Option<usize>,
    /// Least recently accessed entry; also where new entries enter.
    tail: Option<usize>,
}

impl<K, V> Default for LruDict<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> LruDict<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty container.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            lookup: HashMap::new(),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Whether the container holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Whether `key` is present. O(1).
    pub fn contains(&self, key: &K) -> bool {
        self.lookup.contains_key(key)
    }

    /// Returns a reference to the value of `key`, without affecting order.
    pub fn get(&self, key: &K) -> Option<&V> {
        let &index = self.lookup.get(key)?;
        self.nodes.get(index)?.as_ref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the value of `key`, without affecting
    /// order.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let &index = self.lookup.get(key)?;
        self.nodes.get_mut(index)?.as_mut().map(|node| &mut node.value)
    }

    /// Inserts or updates an entry.
    ///
    /// An existing key keeps its position in the order and the previous value
    /// is returned; a new key enters at the least-recent end.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&index) = self.lookup.get(&key) {
            return self
                .nodes
                .get_mut(index)?
                .as_mut()
                .map(|node| std::mem::replace(&mut node.value, value));
        }

        let index = self.alloc(key.clone(), value);
        self.attach_tail(index);
        self.lookup.insert(key, index);
        None
    }

    /// Returns the value of `key`, default-constructing and inserting it at
    /// the least-recent end if absent.
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Returns the value of `key`, inserting `make()` at the least-recent
    /// end if absent.
    ///
    /// For ordering purposes this is indistinguishable from an explicit
    /// [`insert`](LruDict::insert) of the constructed value.
    pub fn get_or_insert_with<F>(&mut self, key: K, make: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let index = if let Some(&index) = self.lookup.get(&key) {
            index
        } else {
            let index = self.alloc(key.clone(), make());
            self.attach_tail(index);
            self.lookup.insert(key, index);
            index
        };

        &mut self.occupied_mut(index).value
    }

    /// Removes `key`, returning its value.
    ///
    /// The relative order of the remaining entries is unchanged.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.lookup.remove(key)?;
        self.unlink(index);
        let node = self.nodes.get_mut(index)?.take()?;
        self.free.push(index);
        Some(node.value)
    }

    /// Moves `key` to the most-recent position.
    ///
    /// Returns whether the key was present; an absent key is a caller
    /// contract violation for order-sensitive policies and is reported
    /// rather than inserted.
    pub fn touch(&mut self, key: &K) -> bool {
        let Some(&index) = self.lookup.get(key) else {
            return false;
        };
        if self.head != Some(index) {
            self.unlink(index);
            self.attach_head(index);
        }
        true
    }

    /// Removes and returns the least recently accessed entry.
    pub fn pop(&mut self) -> Option<(K, V)> {
        let index = self.tail?;
        self.unlink(index);
        let node = self.nodes.get_mut(index)?.take()?;
        self.lookup.remove(&node.key);
        self.free.push(index);
        Some((node.key, node.value))
    }

    /// Iterates over entries, most recently accessed first.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            dict: self,
            next: self.head,
        }
    }

    /// Iterates over keys in the same order as [`iter`](LruDict::iter).
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates over values in the same order as [`iter`](LruDict::iter).
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Allocates a detached node, recycling a freed slot when available.
    fn alloc(&mut self, key: K, value: V) -> usize {
        let node = Node {
            key,
            value,
            prev: None,
            next: None,
        };
        if let Some(index) = self.free.pop() {
            self.nodes[index] = Some(node);
            index
        } else {
            self.nodes.push(Some(node));
            self.nodes.len() - 1
        }
    }

    /// Detaches a node from the list without freeing its slot.
    fn unlink(&mut self, index: usize) {
        let Some((prev, next)) = self
            .nodes
            .get(index)
            .and_then(|slot| slot.as_ref())
            .map(|node| (node.prev, node.next))
        else {
            return;
        };

        match prev {
            Some(prev_index) => self.occupied_mut(prev_index).next = next,
            None => self.head = next,
        }
        match next {
            Some(next_index) => self.occupied_mut(next_index).prev = prev,
            None => self.tail = prev,
        }
    }

    /// Links a detached node in at the most-recent end.
    fn attach_head(&mut self, index: usize) {
        let old_head = self.head;
        {
            let node = self.occupied_mut(index);
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(head_index) => self.occupied_mut(head_index).prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
    }

    /// Links a detached node in at the least-recent end.
    fn attach_tail(&mut self, index: usize) {
        let old_tail = self.tail;
        {
            let node = self.occupied_mut(index);
            node.prev = old_tail;
            node.next = None;
        }
        match old_tail {
            Some(tail_index) => self.occupied_mut(tail_index).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Mutable access to a slot known to be occupied.
    ///
    /// Every index reachable through `lookup`, `head`, `tail`, or a live
    /// link points at an occupied slot; a vacant slot here means the link
    /// structure is corrupt.
    fn occupied_mut(&mut self, index: usize) -> &mut Node<K, V> {
        match self.nodes[index].as_mut() {
            Some(node) => node,
            None => unreachable!("LruDict link to vacant slot"),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a LruDict<K, V>
where
    K: Eq + Hash + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of an [`LruDict`], most recent first.
#[derive(Clone, Debug)]
pub struct Iter<'a, K, V> {
    dict: &'a LruDict<K, V>,
    next: Option<usize>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let node = self.dict.nodes.get(index)?.as_ref()?;
        self.next = node.next;
        Some((&node.key, &node.value))
    }
}
