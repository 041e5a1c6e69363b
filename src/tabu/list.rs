use std::collections::VecDeque;

/// Bounded FIFO of forbidden move keys.
///
/// Pushing onto a full list evicts the oldest key. Capacities are small
/// (single digits), so membership is a linear scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabuList<K> {
    keys: VecDeque<K>,
    capacity: usize,
}

impl<K: PartialEq> TabuList<K> {
    pub fn new(capacity: usize) -> Self {
        Self {
            keys: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends `key`, returning the evicted key if the list overflowed.
    pub fn push(&mut self, key: K) -> Option<K> {
        self.keys.push_back(key);
        if self.keys.len() > self.capacity {
            self.keys.pop_front()
        } else {
            None
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }
}
