//! Traversal over the entries of a [`ChainedHashMap`](crate::ChainedHashMap)

use std::{iter::FusedIterator, vec};

use crate::bucket::{Bucket, Node};

/// Iterator over the key-value pairs of the table.
///
/// Acts as a cursor made of the next slot to scan and the node last yielded.
/// Each step either follows the current node's link or, at the end of a
/// chain, scans forward for the next slot holding a non-empty chain.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// The slots of the table
    buckets: &'a [Option<Bucket<K, V>>],
    /// Index of the next slot to scan once the current chain runs out
    next_bucket: usize,
    /// The node yielded by the previous step
    current: Option<&'a Node<K, V>>,
    /// Number of entries not yet yielded
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Creates a cursor positioned before the first entry
    pub(crate) const fn new(buckets: &'a [Option<Bucket<K, V>>], len: usize) -> Self {
        Self { buckets, next_bucket: 0, current: None, remaining: len }
    }

    /// Finds the next node in traversal order
    fn advance(&mut self) -> Option<&'a Node<K, V>> {
        if let Some(next) = self.current.and_then(|node| node.next.as_deref()) {
            return Some(next);
        }
        while let Some(slot) = self.buckets.get(self.next_bucket) {
            self.next_bucket = self.next_bucket.saturating_add(1);
            if let Some(head) = slot.as_ref().and_then(Bucket::head) {
                return Some(head);
            }
        }
        None
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.advance()?;
        self.current = Some(node);
        self.remaining = self.remaining.saturating_sub(1);
        Some((node.entry.key(), node.entry.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over the entries of the table with mutable access to the values
#[derive(Debug)]
pub struct IterMut<'a, K, V> {
    /// Slots not yet entered
    slots: std::slice::IterMut<'a, Option<Bucket<K, V>>>,
    /// The node to yield next within the current chain
    pending: Option<&'a mut Node<K, V>>,
    /// Number of entries not yet yielded
    remaining: usize,
}

impl<'a, K, V> IterMut<'a, K, V> {
    /// Creates an iterator positioned before the first entry
    pub(crate) fn new(buckets: &'a mut [Option<Bucket<K, V>>], len: usize) -> Self {
        Self { slots: buckets.iter_mut(), pending: None, remaining: len }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.pending.take() {
                let Node { entry, next } = node;
                self.pending = next.as_deref_mut();
                self.remaining = self.remaining.saturating_sub(1);
                return Some(entry.split_mut());
            }
            self.pending = self.slots.next()?.as_mut().and_then(Bucket::head_mut);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Owning iterator over the key-value pairs of the table
#[derive(Debug)]
pub struct IntoIter<K, V> {
    /// Slots not yet entered
    slots: vec::IntoIter<Option<Bucket<K, V>>>,
    /// The chain currently being drained
    current: Option<Bucket<K, V>>,
    /// Number of entries not yet yielded
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    /// Takes ownership of the slots of a table
    pub(crate) fn new(buckets: Vec<Option<Bucket<K, V>>>, len: usize) -> Self {
        Self { slots: buckets.into_iter(), current: None, remaining: len }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.as_mut().and_then(Bucket::pop_front) {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(entry.into_pair());
            }
            self.current = Some(self.slots.next()?.unwrap_or_else(Bucket::new));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
