//! Domain entities, ports and services.
//!
//! Purpose: hold the transport-agnostic core of the applicant service. The
//! generic pieces (repository, id allocation, service) work for any
//! [`Entity`]; the applicant-specific pieces are the entity itself and its
//! validator.
//!
//! Public surface:
//! - `Applicant`: the managed record and its JSON contract.
//! - `GenericRepository` / `GenericService`: CRUD with id assignment and
//!   validation.
//! - `ReferenceDataCache`: lazily loaded countries and top-level domains.
//! - `ApplicantValidator`: all-at-once field rules.
//! - `ServiceError` / `ErrorKind`: the three failure kinds adapters map.

pub mod applicant;
pub mod entity;
pub mod error;
pub mod id_allocator;
pub mod ports;
pub mod reference_data;
pub mod repository;
pub mod service;
pub mod trace_id;
pub mod validation;

pub use self::applicant::Applicant;
pub use self::entity::{Entity, EntityId, UNASSIGNED_ID};
pub use self::error::{ErrorKind, ServiceError};
pub use self::id_allocator::IdAllocator;
pub use self::reference_data::{
    ReferenceData, ReferenceDataCache, ReferenceDataError, GENERIC_TOP_LEVEL_DOMAINS,
};
pub use self::repository::{GenericRepository, RepositoryError};
pub use self::service::GenericService;
pub use self::trace_id::{TraceId, TRACE_ID_HEADER};
pub use self::validation::{
    ApplicantValidator, EntityValidator, ValidationReport, Violation, ViolationCode,
};
