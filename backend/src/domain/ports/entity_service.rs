//! Driving port used by inbound adapters to manage entities.

use async_trait::async_trait;

use crate::domain::{Entity, EntityId, ServiceError};

/// Validated CRUD operations over one entity type.
///
/// Every failure is one of the [`ServiceError`] kinds so adapters can map
/// them exhaustively.
#[async_trait]
pub trait EntityService<E: Entity>: Send + Sync {
    /// All stored entities, order unspecified.
    async fn get_all(&self) -> Result<Vec<E>, ServiceError>;

    /// One entity by id.
    async fn get(&self, id: EntityId) -> Result<E, ServiceError>;

    /// Validate and persist a new entity, returning it with its assigned id.
    async fn create(&self, entity: E) -> Result<E, ServiceError>;

    /// Validate and fully replace the entity with the same id.
    async fn update(&self, entity: E) -> Result<(), ServiceError>;

    /// Remove an entity by id.
    async fn delete(&self, id: EntityId) -> Result<(), ServiceError>;
}
