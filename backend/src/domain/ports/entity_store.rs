//! Driven port for the storage engine holding one entity type.
//!
//! Adapters provide per-call atomicity only; the repository layers the
//! not-found semantics and id allocation on top.

use async_trait::async_trait;

use crate::domain::{Entity, EntityId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by entity store adapters.
    pub enum EntityStoreError {
        /// The store could not be reached.
        Connection { message: String } => "entity store connection failed: {message}",
        /// A read or mutation failed while executing.
        Query { message: String } => "entity store query failed: {message}",
        /// An insert collided with an existing record.
        DuplicateId { id: EntityId } => "entity id {id} is already taken",
    }
}

/// CRUD-capable storage keyed by integer id.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Snapshot of every stored record in store-defined order.
    async fn fetch_all(&self) -> Result<Vec<E>, EntityStoreError>;

    /// Fetch one record, `None` when no record has the id.
    async fn fetch(&self, id: EntityId) -> Result<Option<E>, EntityStoreError>;

    /// Insert a record under its current id.
    ///
    /// Adapters that can enforce uniqueness at insert time return
    /// [`EntityStoreError::DuplicateId`] instead of overwriting.
    async fn insert(&self, entity: E) -> Result<E, EntityStoreError>;

    /// Replace every field of the record with the same id.
    ///
    /// Returns `false` when no record has the id.
    async fn update(&self, entity: E) -> Result<bool, EntityStoreError>;

    /// Remove a record, returning `false` when no record has the id.
    async fn delete(&self, id: EntityId) -> Result<bool, EntityStoreError>;

    /// Whether a record with the id is present.
    async fn exists(&self, id: EntityId) -> Result<bool, EntityStoreError>;
}
