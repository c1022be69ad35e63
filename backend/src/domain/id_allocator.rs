//! Random probe-until-unused id allocation.
//!
//! Candidates are drawn from an [`IdSource`] and checked against the store
//! until one is not taken. There is no retry bound, so allocation slows down
//! as the store fills up; this is only suitable while the store holds far
//! fewer records than the `i32` id space.
//!
//! The existence check and the later insert are separate store calls. Two
//! concurrent allocations can therefore pick the same id unless the store
//! rejects duplicate inserts, which the repository handles by re-allocating.

use std::sync::Arc;

use tracing::debug;

use super::entity::{Entity, EntityId, UNASSIGNED_ID};
use super::ports::{EntityStore, EntityStoreError, IdSource};

/// Allocates unused ids by probing an entity store.
pub struct IdAllocator {
    source: Arc<dyn IdSource>,
}

impl IdAllocator {
    /// Create an allocator drawing candidates from `source`.
    #[must_use]
    pub fn new(source: Arc<dyn IdSource>) -> Self {
        Self { source }
    }

    /// Return the first candidate that is neither [`UNASSIGNED_ID`] nor
    /// present in `store`.
    ///
    /// # Errors
    ///
    /// Propagates any [`EntityStoreError`] raised by the existence check.
    pub async fn allocate<E, S>(&self, store: &S) -> Result<EntityId, EntityStoreError>
    where
        E: Entity,
        S: EntityStore<E> + ?Sized,
    {
        let mut probes: u64 = 0;
        loop {
            let candidate = self.source.next_candidate();
            probes += 1;
            if candidate == UNASSIGNED_ID {
                continue;
            }
            if !store.exists(candidate).await? {
                if probes > 1 {
                    debug!(id = candidate, probes, "allocated id after collisions");
                }
                return Ok(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Applicant;
    use crate::domain::ports::MockIdSource;
    use crate::outbound::persistence::InMemoryEntityStore;
    use std::sync::Mutex;

    fn scripted_source(candidates: Vec<EntityId>) -> Arc<dyn IdSource> {
        let remaining = Mutex::new(candidates.into_iter());
        let mut source = MockIdSource::new();
        source.expect_next_candidate().returning(move || {
            remaining
                .lock()
                .expect("candidate lock")
                .next()
                .expect("script ran out of candidates")
        });
        Arc::new(source)
    }

    async fn store_with(ids: &[EntityId]) -> InMemoryEntityStore<Applicant> {
        let store = InMemoryEntityStore::new();
        for id in ids {
            store
                .insert(Applicant::default().with_id(*id))
                .await
                .expect("seed insert");
        }
        store
    }

    #[tokio::test]
    async fn returns_first_unused_candidate() {
        let store = store_with(&[]).await;
        let allocator = IdAllocator::new(scripted_source(vec![41]));

        let id = allocator.allocate(&store).await.expect("allocation succeeds");
        assert_eq!(id, 41);
    }

    #[tokio::test]
    async fn skips_candidates_already_taken() {
        let store = store_with(&[5, -9]).await;
        let allocator = IdAllocator::new(scripted_source(vec![5, -9, 5, 12]));

        let id = allocator.allocate(&store).await.expect("allocation succeeds");
        assert_eq!(id, 12);
    }

    #[tokio::test]
    async fn never_hands_out_the_unassigned_marker() {
        let store = store_with(&[]).await;
        let allocator = IdAllocator::new(scripted_source(vec![UNASSIGNED_ID, UNASSIGNED_ID, -3]));

        let id = allocator.allocate(&store).await.expect("allocation succeeds");
        assert_eq!(id, -3);
    }

    #[tokio::test]
    async fn negative_and_extreme_candidates_are_valid() {
        let store = store_with(&[]).await;
        let allocator = IdAllocator::new(scripted_source(vec![i32::MIN]));

        let id = allocator.allocate(&store).await.expect("allocation succeeds");
        assert_eq!(id, i32::MIN);
    }
}
