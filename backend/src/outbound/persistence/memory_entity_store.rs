//! In-memory [`EntityStore`] guarded by a tokio `RwLock`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{EntityStore, EntityStoreError};
use crate::domain::{Entity, EntityId};

/// Process-local store keyed by entity id.
///
/// Each call holds the lock for its whole read or write, so every operation
/// is atomic on its own. `insert` refuses an id that is already present,
/// which gives the repository an atomic check-and-reserve step.
///
/// # Examples
/// ```
/// use applicants::domain::ports::EntityStore;
/// use applicants::domain::{Applicant, Entity};
/// use applicants::outbound::persistence::InMemoryEntityStore;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let store = InMemoryEntityStore::new();
/// store.insert(Applicant::default().with_id(7)).await.expect("insert");
/// assert!(store.exists(7).await.expect("exists"));
/// assert!(store.insert(Applicant::default().with_id(7)).await.is_err());
/// # });
/// ```
#[derive(Debug)]
pub struct InMemoryEntityStore<E> {
    records: RwLock<BTreeMap<EntityId, E>>,
}

impl<E> InMemoryEntityStore<E> {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<E> Default for InMemoryEntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for InMemoryEntityStore<E> {
    async fn fetch_all(&self) -> Result<Vec<E>, EntityStoreError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn fetch(&self, id: EntityId) -> Result<Option<E>, EntityStoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn insert(&self, entity: E) -> Result<E, EntityStoreError> {
        let id = entity.id();
        let mut records = self.records.write().await;
        if records.contains_key(&id) {
            return Err(EntityStoreError::duplicate_id(id));
        }
        records.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<bool, EntityStoreError> {
        let mut records = self.records.write().await;
        match records.get_mut(&entity.id()) {
            Some(slot) => {
                *slot = entity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: EntityId) -> Result<bool, EntityStoreError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }

    async fn exists(&self, id: EntityId) -> Result<bool, EntityStoreError> {
        Ok(self.records.read().await.contains_key(&id))
    }
}
