//! Insertion-ordered tally
//!
//! Accumulates a value per key and ranks keys by value, descending. Ties
//! keep first-insertion order.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::AddAssign;

#[derive(Debug, Clone)]
pub(crate) struct Tally<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Tally<K, V>
where
    K: Eq + Hash + Clone,
    V: Ord + Default + AddAssign,
{
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add `value` to the total of `key`, registering the key on first sight.
    pub(crate) fn add(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Register `key` with a zero total if absent.
    pub(crate) fn touch(&mut self, key: K) {
        self.add(key, V::default());
    }

    /// Entries sorted by total, descending; stable on ties.
    pub(crate) fn into_ranked(self) -> Vec<(K, V)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl<K, V> Default for Tally<K, V>
where
    K: Eq + Hash + Clone,
    V: Ord + Default + AddAssign,
{
    fn default() -> Self {
        Self::new()
    }
}
