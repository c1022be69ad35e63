//! Validated CRUD service composing a repository and a validator.
//!
//! Creates and updates are validated before the repository is touched; reads
//! and deletes pass straight through. Repository and reference data failures
//! are folded into [`ServiceError`] so adapters only see the three kinds.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::entity::{Entity, EntityId};
use super::error::ServiceError;
use super::ports::{EntityService, EntityStore};
use super::reference_data::ReferenceDataError;
use super::repository::{GenericRepository, RepositoryError};
use super::validation::EntityValidator;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id } => Self::NotFound { id },
            RepositoryError::Store(store) => Self::infrastructure(store.to_string()),
        }
    }
}

impl From<ReferenceDataError> for ServiceError {
    fn from(err: ReferenceDataError) -> Self {
        Self::infrastructure(err.to_string())
    }
}

/// [`EntityService`] over a [`GenericRepository`] and an [`EntityValidator`].
pub struct GenericService<E, S: ?Sized, V: ?Sized> {
    repository: GenericRepository<E, S>,
    validator: Arc<V>,
}

impl<E, S, V> GenericService<E, S, V>
where
    E: Entity,
    S: EntityStore<E> + ?Sized,
    V: EntityValidator<E> + ?Sized,
{
    /// Compose a service from its repository and validator.
    pub fn new(repository: GenericRepository<E, S>, validator: Arc<V>) -> Self {
        Self {
            repository,
            validator,
        }
    }

    async fn ensure_valid(&self, entity: &E) -> Result<(), ServiceError> {
        let report = self.validator.validate(entity).await?;
        if report.is_valid() {
            Ok(())
        } else {
            info!(violations = report.len(), "entity rejected by validation");
            Err(ServiceError::Invalid(report))
        }
    }
}

#[async_trait]
impl<E, S, V> EntityService<E> for GenericService<E, S, V>
where
    E: Entity,
    S: EntityStore<E> + ?Sized,
    V: EntityValidator<E> + ?Sized,
{
    async fn get_all(&self) -> Result<Vec<E>, ServiceError> {
        Ok(self.repository.get_all().await?)
    }

    async fn get(&self, id: EntityId) -> Result<E, ServiceError> {
        Ok(self.repository.get(id).await?)
    }

    async fn create(&self, entity: E) -> Result<E, ServiceError> {
        self.ensure_valid(&entity).await?;
        let created = self.repository.create(entity).await?;
        info!(id = created.id(), "entity created");
        Ok(created)
    }

    async fn update(&self, entity: E) -> Result<(), ServiceError> {
        self.ensure_valid(&entity).await?;
        let id = entity.id();
        self.repository.update(entity).await?;
        info!(id, "entity updated");
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> Result<(), ServiceError> {
        self.repository.delete(id).await?;
        info!(id, "entity deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
