use crate::config::{DEFAULT_BUCKET_COUNT, MAX_LOAD_FACTOR};
use rustc_hash::FxHasher;
use std::hash::Hasher;

/// String-keyed hash table with separate chaining.
///
/// Each bucket is an append-ordered `Vec` of entries; lookup hashes the key
/// to a bucket and walks the chain comparing full keys, so hash collisions
/// only cost a longer scan. Once the load factor passes
/// [`MAX_LOAD_FACTOR`] after an insert, every entry is rehashed into
/// `2n + 1` buckets.
#[derive(Debug)]
pub struct HashTable<V> {
    buckets: Vec<Vec<Entry<V>>>,
    len: usize,
}

#[derive(Debug)]
struct Entry<V> {
    key: String,
    value: V,
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Creates a table with an explicit starting bucket count.
    ///
    /// A count of zero is allowed; the table grows on first insert and
    /// lookups on it simply return `None`.
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Inserts `value` under `key`, returning `true` if the key was new and
    /// `false` if an existing value was replaced. A replacement never
    /// changes the entry count or triggers a rehash.
    pub fn insert(&mut self, key: String, value: V) -> bool {
        if self.buckets.is_empty() {
            self.rehash(1);
        }
        let idx = self.bucket_for(&key);
        if let Some(entry) = self.buckets[idx].iter_mut().find(|e| e.key == key) {
            entry.value = value;
            return false;
        }
        self.buckets[idx].push(Entry { key, value });
        self.len += 1;
        if self.load_factor() > MAX_LOAD_FACTOR {
            self.rehash(self.buckets.len() * 2 + 1);
        }
        true
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        if self.buckets.is_empty() {
            return None;
        }
        self.buckets[self.bucket_for(key)]
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        if self.buckets.is_empty() {
            return None;
        }
        let idx = self.bucket_for(key);
        self.buckets[idx]
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry for `key` if present. Never shrinks the bucket
    /// array.
    pub fn remove(&mut self, key: &str) -> bool {
        if self.buckets.is_empty() {
            return false;
        }
        let idx = self.bucket_for(key);
        match self.buckets[idx].iter().position(|e| e.key == key) {
            Some(pos) => {
                self.buckets[idx].remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Entries divided by buckets; 0.0 for a table with no buckets.
    pub fn load_factor(&self) -> f64 {
        if self.buckets.is_empty() {
            0.0
        } else {
            self.len as f64 / self.buckets.len() as f64
        }
    }

    fn hash(key: &str) -> u64 {
        let mut h = FxHasher::default();
        h.write(key.as_bytes());
        h.finish()
    }

    fn bucket_for(&self, key: &str) -> usize {
        Self::hash(key) as usize % self.buckets.len()
    }

    /// Moves every entry into a fresh bucket array of `new_count` buckets.
    /// This is the only point at which an entry's bucket placement changes.
    fn rehash(&mut self, new_count: usize) {
        let mut new_buckets: Vec<Vec<Entry<V>>> = (0..new_count).map(|_| Vec::new()).collect();
        for bucket in self.buckets.drain(..) {
            for entry in bucket {
                let idx = Self::hash(&entry.key) as usize % new_count;
                new_buckets[idx].push(entry);
            }
        }
        self.buckets = new_buckets;
    }
}
