use std::borrow::Borrow;

use crate::entry::Entry;

/// A link in a bucket chain. Each node exclusively owns its successor.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    /// The entry stored in this node
    pub(crate) entry: Entry<K, V>,
    /// The next node in the chain, if any
    pub(crate) next: Option<Box<Node<K, V>>>,
}

/// A singly linked chain of entries that share one slot of the table.
///
/// Nodes keep insertion order: new keys are appended at the tail and updates
/// happen in place, so a chain never holds two entries with equal keys.
#[derive(Debug)]
pub(crate) struct Bucket<K, V> {
    /// First node of the chain, `None` once every entry has been removed
    head: Option<Box<Node<K, V>>>,
}

impl<K, V> Bucket<K, V> {
    /// Creates an empty chain
    pub(crate) const fn new() -> Self {
        Self { head: None }
    }

    /// Returns the first node of the chain
    pub(crate) fn head(&self) -> Option<&Node<K, V>> {
        self.head.as_deref()
    }

    /// Returns the first node of the chain mutably
    pub(crate) fn head_mut(&mut self) -> Option<&mut Node<K, V>> {
        self.head.as_deref_mut()
    }

    /// Number of nodes in the chain
    pub(crate) fn len(&self) -> usize {
        let mut len = 0_usize;
        let mut current = self.head();
        while let Some(node) = current {
            len = len.saturating_add(1);
            current = node.next.as_deref();
        }
        len
    }

    /// Unlinks the head node and returns its entry
    pub(crate) fn pop_front(&mut self) -> Option<Entry<K, V>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        Some(node.entry)
    }
}

impl<K: Eq, V> Bucket<K, V> {
    /// Updates the value for `key` if it is already chained, otherwise appends
    /// a new node at the tail.
    ///
    /// Returns the previous value on update and `None` on append.
    pub(crate) fn insert_or_update(&mut self, key: K, value: V) -> Option<V> {
        let mut link = &mut self.head;
        while let Some(node) = link {
            if node.entry.key() == &key {
                return Some(node.entry.replace_value(value));
            }
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { entry: Entry::new(key, value), next: None }));
        None
    }

    /// Finds the value stored under `key`
    pub(crate) fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut current = self.head();
        while let Some(node) = current {
            if node.entry.key().borrow() == key {
                return Some(node.entry.value());
            }
            current = node.next.as_deref();
        }
        None
    }

    /// Finds the value stored under `key` mutably
    pub(crate) fn lookup_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut current = self.head_mut();
        while let Some(node) = current {
            let (node_key, value) = node.entry.split_mut();
            if node_key.borrow() == key {
                return Some(value);
            }
            current = node.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the node holding `key` and returns its value.
    ///
    /// The head is relinked directly; any later node is cut out by pointing
    /// its predecessor at its successor.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let head = self.head.as_mut()?;
        if head.entry.key().borrow() == key {
            return self.pop_front().map(|entry| entry.into_pair().1);
        }

        let mut prev = head;
        loop {
            let next = prev.next.as_ref()?;
            if next.entry.key().borrow() == key {
                let mut removed = prev.next.take()?;
                prev.next = removed.next.take();
                return Some(removed.entry.into_pair().1);
            }
            prev = prev.next.as_mut()?;
        }
    }
}

impl<K, V> Drop for Bucket<K, V> {
    fn drop(&mut self) {
        // Unlink one node at a time so long chains don't recurse through `Box` drops.
        while self.pop_front().is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(bucket: &Bucket<String, i32>) -> Vec<(String, i32)> {
        let mut pairs = Vec::new();
        let mut current = bucket.head();
        while let Some(node) = current {
            pairs.push((node.entry.key().clone(), *node.entry.value()));
            current = node.next.as_deref();
        }
        pairs
    }

    fn filled(keys: &[&str]) -> Bucket<String, i32> {
        let mut bucket = Bucket::new();
        for (value, key) in (1..).zip(keys) {
            assert_eq!(bucket.insert_or_update((*key).to_string(), value), None);
        }
        bucket
    }

    #[test]
    fn test_insert_appends_in_order() {
        let bucket = filled(&["a", "b", "c"]);
        assert_eq!(
            chain(&bucket),
            vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)]
        );
        assert_eq!(bucket.len(), 3);
    }

    #[test]
    fn test_update_in_place() {
        let mut bucket = filled(&["a", "b", "c"]);
        assert_eq!(bucket.insert_or_update("b".to_string(), 20), Some(2));
        assert_eq!(
            chain(&bucket),
            vec![("a".to_string(), 1), ("b".to_string(), 20), ("c".to_string(), 3)]
        );
    }

    #[test]
    fn test_lookup() {
        let mut bucket = filled(&["a", "b"]);
        assert_eq!(bucket.lookup("b"), Some(&2));
        assert_eq!(bucket.lookup("z"), None);

        if let Some(value) = bucket.lookup_mut("a") {
            *value = 100;
        }
        assert_eq!(bucket.lookup("a"), Some(&100));
        assert_eq!(bucket.lookup_mut("z"), None);
    }

    #[test]
    fn test_remove_head() {
        let mut bucket = filled(&["a", "b", "c"]);
        assert_eq!(bucket.remove("a"), Some(1));
        assert_eq!(chain(&bucket), vec![("b".to_string(), 2), ("c".to_string(), 3)]);
    }

    #[test]
    fn test_remove_interior_and_tail() {
        let mut bucket = filled(&["a", "b", "c", "d"]);
        assert_eq!(bucket.remove("b"), Some(2));
        assert_eq!(bucket.remove("d"), Some(4));
        assert_eq!(chain(&bucket), vec![("a".to_string(), 1), ("c".to_string(), 3)]);
    }

    #[test]
    fn test_remove_missing() {
        let mut empty: Bucket<String, i32> = Bucket::new();
        assert_eq!(empty.remove("a"), None);

        let mut bucket = filled(&["a", "b"]);
        assert_eq!(bucket.remove("z"), None);
        assert_eq!(bucket.len(), 2);
    }

    #[test]
    fn test_emptied_bucket_accepts_inserts() {
        let mut bucket = filled(&["a"]);
        assert_eq!(bucket.remove("a"), Some(1));
        assert!(bucket.head().is_none());
        assert_eq!(bucket.insert_or_update("a".to_string(), 5), None);
        assert_eq!(bucket.lookup("a"), Some(&5));
    }

    #[test]
    fn test_long_chain_drop() {
        let mut bucket = Bucket::new();
        for i in 0..200_000_u32 {
            // Prepend to keep construction linear.
            let next = bucket.head.take();
            bucket.head = Some(Box::new(Node { entry: Entry::new(i, i), next }));
        }
        assert_eq!(bucket.len(), 200_000);
        drop(bucket);
    }
}
