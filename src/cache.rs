//! Explicit memoization keyed by argument tuples.

use ahash::AHashMap;
use std::hash::Hash;

/// A memo table. Only successful computations are stored, so a failed
/// attempt is repeated on the next call.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    entries: AHashMap<K, V>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V: Clone> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored value for `key`, or run `compute` and store its `Ok` result.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: K,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(v) = self.entries.get(&key) {
            return Ok(v.clone());
        }
        let v = compute()?;
        self.entries.insert(key, v.clone());
        Ok(v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
