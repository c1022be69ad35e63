//! Driven port producing candidate ids for the allocator.

use crate::domain::EntityId;

/// Source of uniformly distributed id candidates over the full `i32` range.
#[cfg_attr(test, mockall::automock)]
pub trait IdSource: Send + Sync {
    /// Draw the next candidate. Candidates may repeat.
    fn next_candidate(&self) -> EntityId;
}
