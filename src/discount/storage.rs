//! Persistence capability injected into the discount workflow.
//!
//! The workflow only ever writes: it hands a finished value to
//! [`Storage::flush`] and reports whatever error comes back. Where the value
//! goes is the caller's business. [`InMemoryStorage`] records flushed values
//! and is what tests and benchmarks inject.

use parking_lot::Mutex;
use thiserror::Error;

/// Errors a storage backend may report from [`Storage::flush`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backend could not be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Another writer changed the same item.
    #[error("conflicting write for {id}")]
    Conflict {
        /// Identifier of the item that conflicted.
        id: String,
    },
    /// The backend refused the item.
    #[error("item rejected: {0}")]
    Rejected(String),
}

/// Durable persistence of domain values.
///
/// Implementations must be thread-safe (`Send + Sync`). Ordering between
/// concurrent `flush` calls is up to the implementation.
///
/// # Example Implementation
///
/// ```rust
/// use functional_refactoring::discount::{Storage, StorageError};
///
/// struct Discard;
///
/// impl<T> Storage<T> for Discard {
///     fn flush(&self, _item: T) -> Result<(), StorageError> {
///         Ok(())
///     }
/// }
/// ```
pub trait Storage<T>: Send + Sync {
    /// Persists `item`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the item could not be persisted.
    fn flush(&self, item: T) -> Result<(), StorageError>;
}

/// A [`Storage`] keeping every flushed item in memory, in flush order.
///
/// # Examples
///
/// ```rust
/// use functional_refactoring::discount::{InMemoryStorage, Storage};
///
/// let storage = InMemoryStorage::new();
/// storage.flush("first")?;
/// storage.flush("second")?;
///
/// assert_eq!(storage.flushed(), vec!["first", "second"]);
/// assert_eq!(storage.flush_count(), 2);
/// # Ok::<(), functional_refactoring::discount::StorageError>(())
/// ```
#[derive(Debug)]
pub struct InMemoryStorage<T> {
    items: Mutex<Vec<T>>,
}

impl<T> InMemoryStorage<T> {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Number of items flushed so far.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.items.lock().len()
    }

    /// Forgets every flushed item.
    pub fn clear(&self) {
        self.items.lock().clear();
    }
}

impl<T: Clone> InMemoryStorage<T> {
    /// Returns a copy of the flushed items, oldest first.
    #[must_use]
    pub fn flushed(&self) -> Vec<T> {
        self.items.lock().clone()
    }
}

impl<T> Default for InMemoryStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send> Storage<T> for InMemoryStorage<T> {
    fn flush(&self, item: T) -> Result<(), StorageError> {
        self.items.lock().push(item);
        Ok(())
    }
}
