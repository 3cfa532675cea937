/*
Indexed binary min-heap.

Every key sits in at most one slot and the slot of each key is tracked in a map, so the
priority of a queued key can be changed in place (decrease-key) instead of pushing a
duplicate entry. Keys are expected to be small copyable ids.
*/

use hashbrown::HashMap;
use std::hash::Hash;

#[derive(Debug)]
pub struct IndexedMinHeap<K, P> {
    data: Vec<(K, P)>,
    slots: HashMap<K, usize>,
}

impl<K, P> Default for IndexedMinHeap<K, P>
where
    K: Copy + Eq + Hash,
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> IndexedMinHeap<K, P>
where
    K: Copy + Eq + Hash,
    P: Ord,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    pub fn priority(&self, key: &K) -> Option<&P> {
        self.slots.get(key).map(|&i| &self.data[i].1)
    }

    pub fn peek(&self) -> Option<&(K, P)> {
        self.data.first()
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.slots.clear();
    }

    /// Inserts `key`, or replaces its priority if it is already queued.
    pub fn push(&mut self, key: K, priority: P) {
        if let Some(&i) = self.slots.get(&key) {
            let lowered = priority < self.data[i].1;
            self.data[i].1 = priority;
            if lowered {
                self.sift_up(i);
            } else {
                self.sift_down(i);
            }
            return;
        }
        let i = self.data.len();
        self.data.push((key, priority));
        self.slots.insert(key, i);
        self.sift_up(i);
    }

    /// Lowers the priority of a queued key. Returns false when the key is absent or
    /// `priority` is not strictly lower than the current one.
    pub fn decrease_key(&mut self, key: &K, priority: P) -> bool {
        match self.slots.get(key) {
            Some(&i) if priority < self.data[i].1 => {
                self.data[i].1 = priority;
                self.sift_up(i);
                true
            }
            _ => false,
        }
    }

    pub fn pop(&mut self) -> Option<(K, P)> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.swap(0, last);
        let (key, priority) = self.data.pop()?;
        self.slots.remove(&key);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some((key, priority))
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.data.swap(a, b);
        self.slots.insert(self.data[a].0, a);
        self.slots.insert(self.data[b].0, b);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.data[i].1 >= self.data[parent].1 {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < n && self.data[left].1 < self.data[smallest].1 {
                smallest = left;
            }
            if right < n && self.data[right].1 < self.data[smallest].1 {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}
