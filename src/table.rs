use std::{
    borrow::Borrow,
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
    mem,
};

use log::{debug, trace};

use crate::{
    bucket::Bucket,
    error::TableError,
    iter::{IntoIter, Iter, IterMut},
};

/// Number of slots allocated by [`ChainedHashMap::new`]
pub const DEFAULT_CAPACITY: usize = 16;

/// Load factor that an insertion of a new key is never allowed to reach
pub const LOAD_FACTOR_THRESHOLD: f64 = 0.5;

/// A hash table resolving collisions by separate chaining.
///
/// Every slot holds an optional chain of entries whose keys hash to that slot.
/// Chains are created the first time a key lands in an empty slot and are kept
/// afterwards, even once they become empty. Before a new key is inserted the
/// table doubles its capacity until the load factor stays below
/// [`LOAD_FACTOR_THRESHOLD`], reinserting every entry so each lands in the slot
/// for the new capacity. The table never shrinks.
///
/// Note: This implementation is not thread-safe.
pub struct ChainedHashMap<K, V> {
    /// The slots of the table, each owning an optional chain
    buckets: Vec<Option<Bucket<K, V>>>,
    /// Current number of entries across all chains
    len: usize,
}

impl<K, V> ChainedHashMap<K, V> {
    /// Returns the number of entries in the table
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current load factor of the table
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Removes every entry. The capacity is left untouched.
    pub fn clear(&mut self) {
        for slot in &mut self.buckets {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns an iterator visiting every entry once, slot by slot and
    /// head to tail within each chain
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.buckets, self.len)
    }

    /// Returns an iterator with mutable access to the values, in the same
    /// order as [`ChainedHashMap::iter`]
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.buckets, self.len)
    }

    /// Gives crate-internal access to the slots
    pub(crate) fn buckets(&self) -> &[Option<Bucket<K, V>>] {
        &self.buckets
    }

    /// Allocates `capacity` empty slots
    fn empty_slots(capacity: usize) -> Vec<Option<Bucket<K, V>>> {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        buckets
    }
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty table with [`DEFAULT_CAPACITY`] slots
    #[must_use]
    pub fn new() -> Self {
        Self { buckets: Self::empty_slots(DEFAULT_CAPACITY), len: 0 }
    }

    /// Creates an empty table with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ZeroCapacity`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        Ok(Self { buckets: Self::empty_slots(capacity), len: 0 })
    }

    /// Computes the hash for a key
    fn hash<Q: ?Sized + Hash>(key: &Q) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    /// Gets the slot index of a key for the current capacity
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    pub(crate) fn bucket_index<Q: ?Sized + Hash>(&self, key: &Q) -> usize {
        // The remainder is below the capacity, which came from a `usize`.
        (Self::hash(key) % self.capacity() as u64) as usize
    }

    /// Returns the chain a key belongs to, if that slot has one
    fn bucket<Q: ?Sized + Hash>(&self, key: &Q) -> Option<&Bucket<K, V>> {
        self.buckets.get(self.bucket_index(key))?.as_ref()
    }

    /// Returns the chain a key belongs to mutably, if that slot has one
    fn bucket_mut<Q: ?Sized + Hash>(&mut self, key: &Q) -> Option<&mut Bucket<K, V>> {
        let index = self.bucket_index(key);
        self.buckets.get_mut(index)?.as_mut()
    }

    /// Whether one more entry would bring the load factor to the threshold
    #[allow(clippy::cast_precision_loss)]
    fn needs_growth(&self, capacity: usize) -> bool {
        self.len.saturating_add(1) as f64 / capacity as f64 >= LOAD_FACTOR_THRESHOLD
    }

    /// Insert a key-value pair into the table.
    ///
    /// If the key is already present its value is replaced, the stored key is
    /// kept and the previous value returned. Otherwise the table grows if
    /// needed, the pair is appended to its chain and `None` is returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(mem::replace(slot, value));
        }

        let mut capacity = self.capacity();
        while self.needs_growth(capacity) {
            capacity = capacity.saturating_mul(2);
        }
        if capacity > self.capacity() {
            self.grow(capacity);
        }

        let index = self.bucket_index(&key);
        let slot = self.buckets.get_mut(index)?;
        let bucket = slot.get_or_insert_with(|| {
            trace!("creating bucket at slot {index}");
            Bucket::new()
        });
        let previous = bucket.insert_or_update(key, value);
        if previous.is_none() {
            self.len = self.len.saturating_add(1);
        }
        previous
    }

    /// Replaces the slots with `new_capacity` empty ones and reinserts every
    /// entry, walking the old slots in index order
    fn grow(&mut self, new_capacity: usize) {
        debug!(
            "growing table from {} to {} slots with {} entries",
            self.capacity(),
            new_capacity,
            self.len
        );

        let old_buckets = mem::replace(&mut self.buckets, Self::empty_slots(new_capacity));
        self.len = 0;

        for mut bucket in old_buckets.into_iter().flatten() {
            while let Some(entry) = bucket.pop_front() {
                let (key, value) = entry.into_pair();
                self.insert(key, value);
            }
        }
    }

    /// Retrieve a value for a given key
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bucket(key)?.lookup(key)
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.bucket_mut(key)?.lookup_mut(key)
    }

    /// Returns true if the table holds an entry for the key
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry for a key, returning its value.
    ///
    /// The chain the entry lived in stays allocated, even when it is left empty.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.bucket_mut(key)?.remove(key);
        if removed.is_some() {
            self.len = self.len.saturating_sub(1);
        }
        removed
    }
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for ChainedHashMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Clone for ChainedHashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        // Same capacity and traversal order reproduce every chain as-is.
        let mut table = Self { buckets: Self::empty_slots(self.capacity()), len: 0 };
        for (key, value) in self {
            table.insert(key.clone(), value.clone());
        }
        table
    }
}

impl<K, V> PartialEq for ChainedHashMap<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V> Eq for ChainedHashMap<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}

impl<K, V> Extend<(K, V)> for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a, K, V> IntoIterator for &'a ChainedHashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut ChainedHashMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V> IntoIterator for ChainedHashMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buckets, self.len)
    }
}
