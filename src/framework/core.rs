//! # Core Record Framework
//!
//! This module defines the generic building blocks shared by both services.
//!
//! ## Key Types
//!
//! - [`Record`]: The trait that all stored resource types must implement.
//! - [`RecordStore`]: The lock-guarded, in-memory store for one record type.
//! - [`RecordLookup`]: Async "does this id exist?" capability used for cross-service validation.
//! - [`LookupError`]: Transient failures a lookup can report.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any resource must implement to be held by a [`RecordStore`].
///
/// # Architecture Note
/// Users and orders are stored, looked up, replaced and removed in exactly the
/// same way. Writing that logic once against this trait means each resource
/// only has to describe its identifier and its required fields.
///
/// Identifiers are always caller-supplied strings. The store never generates one.
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// Human readable kind (e.g. `"User"`), used in log fields and messages.
    const KIND: &'static str;

    /// The error returned when a record fails its presence check.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The unique key of this record within its store.
    fn id(&self) -> &str;

    /// Overwrite the identifier (used when the path parameter wins over the body).
    fn set_id(&mut self, id: String);

    /// Check that every required field is present (non-empty).
    fn validate(&self) -> Result<(), Self::Error>;
}

// =============================================================================
// 2. LOOKUPS (Cross-Service Validation)
// =============================================================================

/// Transient failures of a [`RecordLookup`].
///
/// A lookup that completes and finds nothing is *not* an error; it returns `Ok(false)`.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum LookupError {
    /// The request could not be sent or no response was received.
    #[error("request failed: {0}")]
    Transport(String),

    /// The remote side answered with a status that is neither success nor 404.
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
}

/// Capability to check whether a record of type `T` exists.
///
/// The order service depends on this trait instead of a concrete HTTP client,
/// so tests can swap in [`RecordStore`] or [`MockLookup`](crate::framework::mock::MockLookup).
#[async_trait]
pub trait RecordLookup<T: Record>: Send + Sync {
    /// Returns `Ok(true)` if found, `Ok(false)` if absent, `Err` on a transient failure.
    async fn exists(&self, id: &str) -> Result<bool, LookupError>;
}

// =============================================================================
// 3. THE GENERIC STORE
// =============================================================================

/// The authoritative in-memory set of records for one entity type.
///
/// **Concurrency Model**:
/// A single reader/writer lock guards the whole map. Reads (`get`, `get_all`)
/// share the lock; writes (`create`, `update`, `delete`) are exclusive. Each
/// operation holds its guard for the whole map access and drops it before
/// returning, so a reader never sees a half-written record. No operation calls
/// another locking operation while holding a guard.
///
/// Cloning is cheap: clones share the same underlying map. Hand one clone to
/// each component that needs the store instead of reaching for a global.
#[derive(Debug)]
pub struct RecordStore<T: Record> {
    records: Arc<RwLock<HashMap<String, T>>>,
}

impl<T: Record> Clone for RecordStore<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    // Nothing runs user code while a guard is held, so a poisoned map is still whole.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, T>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, T>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts the record, silently overwriting any record with the same id.
    pub fn create(&self, record: T) {
        let id = record.id().to_owned();
        let size = {
            let mut records = self.write();
            records.insert(id.clone(), record);
            records.len()
        };
        info!(entity_type = T::KIND, %id, size, "Created");
    }

    /// Inserts every record under a single write lock.
    pub fn seed(&self, seed: impl IntoIterator<Item = T>) {
        let size = {
            let mut records = self.write();
            for record in seed {
                records.insert(record.id().to_owned(), record);
            }
            records.len()
        };
        info!(entity_type = T::KIND, size, "Seeded");
    }

    /// Returns a copy of the record, or `None` if the id is unknown.
    pub fn get(&self, id: &str) -> Option<T> {
        let item = self.read().get(id).cloned();
        debug!(entity_type = T::KIND, id, found = item.is_some(), "Get");
        item
    }

    /// Returns a snapshot of every record. Order is unspecified.
    pub fn get_all(&self) -> Vec<T> {
        let items: Vec<T> = self.read().values().cloned().collect();
        debug!(entity_type = T::KIND, count = items.len(), "GetAll");
        items
    }

    /// Whether a record with this id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    /// Replaces the record with the same id, if one exists.
    ///
    /// No field merge happens: the stored record becomes exactly `record`.
    /// Returns `false` (and inserts nothing) when the id is unknown.
    pub fn update(&self, record: T) -> bool {
        let id = record.id().to_owned();
        let replaced = match self.write().get_mut(&id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        };
        if replaced {
            info!(entity_type = T::KIND, %id, "Updated");
        } else {
            warn!(entity_type = T::KIND, %id, "Not found");
        }
        replaced
    }

    /// Removes the record if present. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> bool {
        let (removed, size) = {
            let mut records = self.write();
            let removed = records.remove(id).is_some();
            (removed, records.len())
        };
        if removed {
            info!(entity_type = T::KIND, id, size, "Deleted");
        } else {
            warn!(entity_type = T::KIND, id, "Not found");
        }
        removed
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[async_trait]
impl<T: Record> RecordLookup<T> for RecordStore<T> {
    async fn exists(&self, id: &str) -> Result<bool, LookupError> {
        Ok(self.contains(id))
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================
