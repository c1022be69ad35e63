//! Generic CRUD repository over an [`EntityStore`].
//!
//! The repository owns id assignment and turns missing ids into
//! [`RepositoryError::NotFound`]. Every mutation goes straight to the store;
//! there is no batching or deferred flush.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::warn;

use super::entity::{Entity, EntityId};
use super::id_allocator::IdAllocator;
use super::ports::{EntityStore, EntityStoreError};

/// Failures raised by [`GenericRepository`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// No entity has the requested id.
    #[error("entity {id} not found")]
    NotFound {
        /// Identifier that was looked up.
        id: EntityId,
    },
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] EntityStoreError),
}

/// CRUD over one entity type with system-assigned ids.
pub struct GenericRepository<E, S: ?Sized> {
    store: Arc<S>,
    allocator: IdAllocator,
    _entity: PhantomData<fn() -> E>,
}

impl<E, S> GenericRepository<E, S>
where
    E: Entity,
    S: EntityStore<E> + ?Sized,
{
    /// Create a repository over `store`, assigning ids with `allocator`.
    pub fn new(store: Arc<S>, allocator: IdAllocator) -> Self {
        Self {
            store,
            allocator,
            _entity: PhantomData,
        }
    }

    /// Snapshot of all entities, order defined by the store.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Store`] when the store fails.
    pub async fn get_all(&self) -> Result<Vec<E>, RepositoryError> {
        Ok(self.store.fetch_all().await?)
    }

    /// One entity by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when no entity has `id`.
    pub async fn get(&self, id: EntityId) -> Result<E, RepositoryError> {
        self.store
            .fetch(id)
            .await?
            .ok_or(RepositoryError::NotFound { id })
    }

    /// Persist `entity` under a freshly allocated id, ignoring any id it
    /// already carries.
    ///
    /// When the store rejects the insert as a duplicate (another create won
    /// the race for the same id) a new id is allocated and the insert retried.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Store`] when allocation or insert fails.
    pub async fn create(&self, entity: E) -> Result<E, RepositoryError> {
        loop {
            let id = self.allocator.allocate::<E, S>(self.store.as_ref()).await?;
            match self.store.insert(entity.clone().with_id(id)).await {
                Ok(stored) => return Ok(stored),
                Err(EntityStoreError::DuplicateId { id }) => {
                    warn!(id, "id claimed concurrently, allocating another");
                }
                Err(error) => return Err(error.into()),
            }
        }
    }

    /// Replace every field of the stored entity with those of `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when `entity.id()` does not exist.
    pub async fn update(&self, entity: E) -> Result<(), RepositoryError> {
        let id = entity.id();
        if !self.store.exists(id).await? {
            return Err(RepositoryError::NotFound { id });
        }
        // A concurrent delete between the check and the write still surfaces
        // as not found.
        if self.store.update(entity).await? {
            Ok(())
        } else {
            Err(RepositoryError::NotFound { id })
        }
    }

    /// Remove the entity with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when `id` does not exist.
    pub async fn delete(&self, id: EntityId) -> Result<(), RepositoryError> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(RepositoryError::NotFound { id })
        }
    }
}
