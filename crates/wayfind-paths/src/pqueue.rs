//! Min-priority queue with decrease-key and removal by identity.
//!
//! A classic array-backed binary heap (parent of slot `i` is
//! `(i + 1) / 2 - 1`, children are `2i + 1` and `2i + 2`) paired with an
//! identity → slot index. The index turns "find this element" from an O(n)
//! scan into a hash lookup, so changing the key of or removing an arbitrary
//! element costs O(log n).

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::QueueError;

/// One queued element.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<K, P, A = ()> {
    /// Identity; unique within the queue.
    pub id: K,
    /// Priority. Smaller keys come out first.
    pub key: P,
    /// Caller payload carried alongside the element.
    pub aux: A,
}

/// A binary min-heap whose elements can be looked up by identity.
///
/// Keys only need [`PartialOrd`], so plain floating-point costs work. Keys
/// that are unordered with respect to each other (NaN) leave the heap in an
/// unspecified but memory-safe order.
///
/// Operations whose precondition is the presence of an element (or a
/// non-empty queue) panic when it is violated: that is a bug in the caller,
/// not a recoverable condition. Use [`get`](Self::get) or
/// [`contains`](Self::contains) to check first.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<K, P, A = ()> {
    heap: Vec<Entry<K, P, A>>,
    index: HashMap<K, usize>,
}

impl<K, P, A> Default for IndexedPriorityQueue<K, P, A>
where
    K: Hash + Eq + Clone,
    P: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P, A> IndexedPriorityQueue<K, P, A>
where
    K: Hash + Eq + Clone,
    P: PartialOrd,
{
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether an element with identity `id` is queued.
    #[inline]
    pub fn contains(&self, id: &K) -> bool {
        self.index.contains_key(id)
    }

    /// The element with identity `id`, if queued.
    pub fn get(&self, id: &K) -> Option<&Entry<K, P, A>> {
        self.index.get(id).map(|&slot| &self.heap[slot])
    }

    /// The element with identity `id`.
    ///
    /// # Panics
    ///
    /// Panics if no such element is queued.
    pub fn get_element(&self, id: &K) -> &Entry<K, P, A> {
        &self.heap[self.slot_of(id)]
    }

    /// Iterate over all elements in unspecified (heap) order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, P, A>> {
        self.heap.iter()
    }

    /// Queue a new element.
    ///
    /// Fails with [`QueueError::DuplicateId`] if `id` is already queued; the
    /// queue is left untouched in that case.
    pub fn insert(&mut self, id: K, key: P, aux: A) -> Result<(), QueueError> {
        if self.index.contains_key(&id) {
            return Err(QueueError::DuplicateId);
        }
        let slot = self.heap.len();
        self.index.insert(id.clone(), slot);
        self.heap.push(Entry { id, key, aux });
        self.sift_up(slot);
        self.check_sizes();
        Ok(())
    }

    /// The element with the smallest key, without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn top(&self) -> &Entry<K, P, A> {
        assert!(!self.heap.is_empty(), "top() called on an empty priority queue");
        &self.heap[0]
    }

    /// Remove and return the element with the smallest key.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn pop(&mut self) -> Entry<K, P, A> {
        assert!(!self.heap.is_empty(), "pop() called on an empty priority queue");
        self.remove_at(0)
    }

    /// Remove the element with identity `id`, wherever it sits in the heap.
    ///
    /// # Panics
    ///
    /// Panics if no such element is queued.
    pub fn erase(&mut self, id: &K) -> Entry<K, P, A> {
        let slot = self.slot_of(id);
        self.remove_at(slot)
    }

    /// Replace the key of element `id` and restore heap order.
    ///
    /// Works in both directions: a smaller key moves the element toward the
    /// root, a larger one moves it toward the leaves.
    ///
    /// # Panics
    ///
    /// Panics if no such element is queued.
    pub fn update_key(&mut self, id: &K, key: P) {
        let slot = self.slot_of(id);
        let decreased = key < self.heap[slot].key;
        self.heap[slot].key = key;
        if decreased {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
        self.check_sizes();
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
        self.check_sizes();
    }

    // -----------------------------------------------------------------------
    // Heap internals
    // -----------------------------------------------------------------------

    fn slot_of(&self, id: &K) -> usize {
        match self.index.get(id) {
            Some(&slot) => slot,
            None => panic!("element is not in the priority queue"),
        }
    }

    fn remove_at(&mut self, slot: usize) -> Entry<K, P, A> {
        let entry = self.heap.swap_remove(slot);
        self.index.remove(&entry.id);
        if slot < self.heap.len() {
            // The former last element now occupies `slot`.
            self.set_slot(slot);
            if self.sift_up(slot) == slot {
                self.sift_down(slot);
            }
        }
        self.check_sizes();
        entry
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].key < self.heap[b].key
    }

    #[inline]
    fn set_slot(&mut self, slot: usize) {
        if let Some(s) = self.index.get_mut(&self.heap[slot].id) {
            *s = slot;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.set_slot(a);
        self.set_slot(b);
    }

    /// Move the element at `slot` toward the root; returns its final slot.
    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot + 1) / 2 - 1;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    #[inline]
    fn check_sizes(&self) {
        assert_eq!(
            self.index.len(),
            self.heap.len(),
            "priority queue index out of sync with heap"
        );
    }

    /// Full structural check: heap order plus an exact index mirror.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        if self.index.len() != self.heap.len() {
            return false;
        }
        let index_ok = self
            .heap
            .iter()
            .enumerate()
            .all(|(slot, e)| self.index.get(&e.id) == Some(&slot));
        let order_ok = (1..self.heap.len()).all(|i| !self.less(i, (i + 1) / 2 - 1));
        index_ok && order_ok
    }
}
