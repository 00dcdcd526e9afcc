//! # Chained Hash Map
//!
//! A Rust implementation of a hash table that resolves collisions by separate chaining.
//!
//! Every slot of the table owns an optional singly linked chain of entries. The
//! slot of a key is its hash modulo the number of slots. Before a new key would
//! bring the load factor to 0.5 the table doubles its number of slots and
//! reinserts every entry, so lookups stay amortized constant time.
//!
//! The table is single-threaded, never shrinks and gives no ordering
//! guarantees beyond a fixed traversal order for a fixed insertion history.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainhash::ChainedHashMap;
//!
//! // Create a new hash map
//! let mut map = ChainedHashMap::new();
//!
//! // Insert values
//! assert_eq!(map.insert("apple".to_string(), 1), None);
//! map.insert("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values, getting the old one back
//! assert_eq!(map.insert("apple".to_string(), 10), Some(1));
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! assert_eq!(map.remove("apple"), Some(10));
//! assert_eq!(map.get("apple"), None);
//! ```
//!
//! ## Capacity
//!
//! ```rust
//! use chainhash::{ChainedHashMap, TableError};
//!
//! let mut map = ChainedHashMap::with_capacity(4)?;
//! map.insert(1, "one");
//! map.insert(2, "two");
//! assert_eq!(map.capacity(), 8);
//!
//! assert_eq!(ChainedHashMap::<i32, i32>::with_capacity(0).err(), Some(TableError::ZeroCapacity));
//! # Ok::<(), TableError>(())
//! ```
//!
//! ## Traversal
//!
//! ```rust
//! use chainhash::ChainedHashMap;
//!
//! let map: ChainedHashMap<_, _> = (1..=3).map(|i| (i, i * i)).collect();
//!
//! let mut pairs: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
//! pairs.sort_unstable();
//! assert_eq!(pairs, vec![(1, 1), (2, 4), (3, 9)]);
//! ```

/// Module implementing the chain of entries stored in one slot
mod bucket;
/// Module implementing the stored key-value pair
mod entry;
/// Module defining construction errors
mod error;
/// Module implementing the iterators over the table
mod iter;
/// Module implementing the table itself
mod table;
/// Utility functions and traits for the hash map
mod utils;

pub use error::TableError;
pub use iter::{IntoIter, Iter, IterMut};
pub use table::{ChainedHashMap, DEFAULT_CAPACITY, LOAD_FACTOR_THRESHOLD};
pub use utils::HashMapExtensions;
