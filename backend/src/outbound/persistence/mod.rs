//! Entity storage adapters.
//!
//! Only an in-process store exists today. It keeps records for the lifetime
//! of the process and loses them on restart.

mod memory_entity_store;

pub use memory_entity_store::InMemoryEntityStore;
