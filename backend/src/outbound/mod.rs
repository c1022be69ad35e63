//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **countries**: reqwest client for the country directory
//! - **persistence**: in-process entity store
//! - **id_source**: pseudo-random id candidates
//!
//! Adapters translate between domain types and infrastructure-specific
//! representations. They contain no business logic.

pub mod countries;
pub mod id_source;
pub mod persistence;
