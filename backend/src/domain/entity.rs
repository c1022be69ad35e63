//! Capability shared by every record the generic repository can manage.

/// Integer identifier assigned to persisted entities.
///
/// `0` marks an entity that has not been assigned an id yet; the allocator
/// never hands it out.
pub type EntityId = i32;

/// Identifier value carried by entities that have not been persisted.
pub const UNASSIGNED_ID: EntityId = 0;

/// A persistable record keyed by a system-assigned integer id.
///
/// # Examples
/// ```
/// use applicants::domain::{Entity, EntityId};
///
/// #[derive(Clone)]
/// struct Note {
///     id: EntityId,
///     text: String,
/// }
///
/// impl Entity for Note {
///     fn id(&self) -> EntityId {
///         self.id
///     }
///
///     fn with_id(mut self, id: EntityId) -> Self {
///         self.id = id;
///         self
///     }
/// }
///
/// let note = Note { id: 0, text: "hello".into() }.with_id(7);
/// assert_eq!(note.id(), 7);
/// ```
pub trait Entity: Clone + Send + Sync + 'static {
    /// Current identifier of the record.
    fn id(&self) -> EntityId;

    /// Return the record with its identifier replaced.
    #[must_use]
    fn with_id(self, id: EntityId) -> Self;
}
