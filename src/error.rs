//! Errors raised by table construction

use thiserror::Error;

/// Error returned when a table cannot be built
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// A table needs at least one slot to index into
    #[error("initial capacity must be at least 1, got 0")]
    ZeroCapacity,
}
