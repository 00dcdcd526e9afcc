use std::mem;

/// A stored key-value pair. The key never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry<K, V> {
    /// The key, fixed for the lifetime of the entry
    key: K,
    /// The value, replaced in place on update
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new entry
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key of the entry
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value of the entry
    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    /// Splits the entry into a shared key and a mutable value
    pub(crate) fn split_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    /// Overwrites the value, returning the previous one
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }

    /// Consumes the entry, returning its key and value
    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
