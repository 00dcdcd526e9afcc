//! Utility functions and traits for `ChainedHashMap`

use crate::{ChainedHashMap, bucket::Bucket};

/// Extension trait for map implementations that provides additional utility methods
pub trait HashMapExtensions<K, V> {
    /// Returns the keys of the hash map as a Vec, in traversal order
    fn keys(&self) -> Vec<K>;

    /// Returns the values of the hash map as a Vec, in traversal order
    fn values(&self) -> Vec<V>;

    /// Returns the length of the chain in every slot, zero for slots that
    /// never received a chain
    fn chain_lengths(&self) -> Vec<usize>;

    /// Returns the length of the longest chain
    fn longest_chain(&self) -> usize {
        self.chain_lengths().into_iter().max().unwrap_or(0)
    }
}

impl<K, V> HashMapExtensions<K, V> for ChainedHashMap<K, V>
where
    K: Clone,
    V: Clone,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn chain_lengths(&self) -> Vec<usize> {
        self.buckets().iter().map(|slot| slot.as_ref().map_or(0, Bucket::len)).collect()
    }
}
