//! Behaviour of the validated service over real in-memory adapters.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{EntityStoreError, FixtureCountryDirectory};
use crate::domain::{
    Applicant, ApplicantValidator, ErrorKind, IdAllocator, ReferenceDataCache, ViolationCode,
};
use crate::outbound::id_source::RandomIdSource;
use crate::outbound::persistence::InMemoryEntityStore;
use crate::test_support::{sample_applicant, FlakyCountryDirectory};

type ApplicantService =
    GenericService<Applicant, InMemoryEntityStore<Applicant>, ApplicantValidator>;

fn service_with(directory: Arc<dyn crate::domain::ports::CountryDirectory>) -> ApplicantService {
    let repository = GenericRepository::new(
        Arc::new(InMemoryEntityStore::new()),
        IdAllocator::new(Arc::new(RandomIdSource::from_seed(11))),
    );
    let cache = Arc::new(ReferenceDataCache::new(directory));
    GenericService::new(repository, Arc::new(ApplicantValidator::new(cache)))
}

#[fixture]
fn service() -> ApplicantService {
    service_with(Arc::new(FixtureCountryDirectory))
}

#[rstest]
#[tokio::test]
async fn valid_create_assigns_an_id(service: ApplicantService) {
    let created = service
        .create(sample_applicant())
        .await
        .expect("create succeeds");

    assert_ne!(created.id, 0);
    assert_eq!(created, sample_applicant().with_id(created.id));
    assert_eq!(service.get(created.id).await, Ok(created));
}

#[rstest]
#[tokio::test]
async fn invalid_create_leaves_the_repository_untouched(service: ApplicantService) {
    let applicant = Applicant {
        name: "Max".into(),
        age: 15,
        ..sample_applicant()
    };

    let error = service.create(applicant).await.expect_err("validation fails");

    let ServiceError::Invalid(report) = error else {
        panic!("expected validation failure, got {error:?}");
    };
    let codes: Vec<_> = report
        .iter()
        .map(|violation| (violation.field.as_str(), violation.code))
        .collect();
    assert_eq!(
        codes,
        vec![
            ("name", ViolationCode::MinLength(5)),
            ("age", ViolationCode::Range { min: 20, max: 60 }),
        ]
    );
    assert!(service.get_all().await.expect("list succeeds").is_empty());
}

#[rstest]
#[tokio::test]
async fn invalid_update_keeps_the_stored_entity(service: ApplicantService) {
    let created = service
        .create(sample_applicant())
        .await
        .expect("create succeeds");
    let broken = Applicant {
        country_of_origin: "Atlantis".into(),
        ..created.clone()
    };

    let error = service.update(broken).await.expect_err("validation fails");

    assert_eq!(error.kind(), ErrorKind::Invalid);
    assert_eq!(service.get(created.id).await, Ok(created));
}

#[rstest]
#[tokio::test]
async fn valid_update_replaces_the_entity(service: ApplicantService) {
    let created = service
        .create(sample_applicant())
        .await
        .expect("create succeeds");
    let changed = Applicant {
        hired: false,
        age: 41,
        ..created.clone()
    };

    service.update(changed.clone()).await.expect("update succeeds");

    assert_eq!(service.get(created.id).await, Ok(changed));
}

#[rstest]
#[tokio::test]
async fn missing_ids_map_to_not_found(service: ApplicantService) {
    assert_eq!(service.get(404).await, Err(ServiceError::not_found(404)));
    assert_eq!(service.delete(404).await, Err(ServiceError::not_found(404)));
    assert_eq!(
        service.update(sample_applicant().with_id(404)).await,
        Err(ServiceError::not_found(404))
    );
}

#[rstest]
#[tokio::test]
async fn delete_skips_validation_and_removes(service: ApplicantService) {
    let created = service
        .create(sample_applicant())
        .await
        .expect("create succeeds");

    service.delete(created.id).await.expect("delete succeeds");

    assert_eq!(
        service.get(created.id).await,
        Err(ServiceError::not_found(created.id))
    );
}

#[tokio::test]
async fn directory_outage_is_infrastructure_and_recovers() {
    let directory = Arc::new(FlakyCountryDirectory::unavailable());
    let service = service_with(directory.clone());

    let error = service
        .create(sample_applicant())
        .await
        .expect_err("directory is down");
    assert_eq!(error.kind(), ErrorKind::Infrastructure);
    assert!(service.get_all().await.expect("list succeeds").is_empty());

    directory.set_available(true);
    let created = service
        .create(sample_applicant())
        .await
        .expect("directory recovered");
    assert_ne!(created.id, 0);
    assert_eq!(directory.fetch_count(), 2);
}

struct UnreachableStore;

#[async_trait]
impl EntityStore<Applicant> for UnreachableStore {
    async fn fetch_all(&self) -> Result<Vec<Applicant>, EntityStoreError> {
        Err(EntityStoreError::connection("store offline"))
    }

    async fn fetch(&self, _id: EntityId) -> Result<Option<Applicant>, EntityStoreError> {
        Err(EntityStoreError::connection("store offline"))
    }

    async fn insert(&self, _entity: Applicant) -> Result<Applicant, EntityStoreError> {
        Err(EntityStoreError::connection("store offline"))
    }

    async fn update(&self, _entity: Applicant) -> Result<bool, EntityStoreError> {
        Err(EntityStoreError::connection("store offline"))
    }

    async fn delete(&self, _id: EntityId) -> Result<bool, EntityStoreError> {
        Err(EntityStoreError::connection("store offline"))
    }

    async fn exists(&self, _id: EntityId) -> Result<bool, EntityStoreError> {
        Err(EntityStoreError::connection("store offline"))
    }
}

#[tokio::test]
async fn store_failures_are_infrastructure() {
    let repository = GenericRepository::new(
        Arc::new(UnreachableStore),
        IdAllocator::new(Arc::new(RandomIdSource::from_seed(3))),
    );
    let cache = Arc::new(ReferenceDataCache::new(Arc::new(FixtureCountryDirectory)));
    let service = GenericService::new(repository, Arc::new(ApplicantValidator::new(cache)));

    let listing = service.get_all().await.expect_err("store offline");
    let creation = service
        .create(sample_applicant())
        .await
        .expect_err("store offline");

    assert_eq!(
        listing,
        ServiceError::infrastructure("entity store connection failed: store offline")
    );
    assert_eq!(creation.kind(), ErrorKind::Infrastructure);
}
