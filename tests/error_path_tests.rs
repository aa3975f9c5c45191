//! Error path testing for db/factory.rs, db/services.rs, and db/repository/error.rs
//!
//! These tests specifically trigger error conditions to ensure proper error handling,
//! error propagation, and error context enrichment throughout the stack.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use vanads::api::PanelId;
use vanads::db::factory::RepositoryType;
use vanads::db::repositories::LocalRepository;
use vanads::db::repository::{
    ErrorContext, MetricsRepository, PanelRepository, RepositoryError, RepositoryResult,
    ReservationRepository, RouteRepository,
};
use vanads::db::services;
use vanads::models::{
    NewReservation, NewRoutePoint, Panel, PanelSize, Reservation, RoutePoint, TransparencyMetrics,
};

mod support;

fn valid_reservation() -> NewReservation {
    NewReservation {
        panel_id: None,
        business_name: "Corner Bakery".to_string(),
        contact_name: "Dana Reyes".to_string(),
        email: "dana@cornerbakery.test".to_string(),
        phone: Some("(555) 123-4567".to_string()),
        panel_size_requested: PanelSize::Large,
        artwork_url: None,
        notes: None,
    }
}

/// Repository double whose insert path can be switched to fail, backed by a
/// real local repository for everything else.
struct FailingRepository {
    inner: LocalRepository,
    fail_inserts: AtomicBool,
}

impl FailingRepository {
    fn new() -> Self {
        Self {
            inner: LocalRepository::with_demo_data(),
            fail_inserts: AtomicBool::new(true),
        }
    }

    fn recover(&self) {
        self.fail_inserts.store(false, Ordering::SeqCst);
    }

    fn stored_reservations(&self) -> usize {
        self.inner.reservation_count()
    }
}

#[async_trait]
impl PanelRepository for FailingRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.inner.health_check().await
    }

    async fn list_panels(&self) -> RepositoryResult<Vec<Panel>> {
        self.inner.list_panels().await
    }

    async fn get_panel(&self, panel_id: PanelId) -> RepositoryResult<Panel> {
        self.inner.get_panel(panel_id).await
    }
}

#[async_trait]
impl ReservationRepository for FailingRepository {
    async fn insert_reservation(
        &self,
        reservation: &NewReservation,
    ) -> RepositoryResult<Reservation> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(RepositoryError::query_with_context(
                "duplicate key value violates unique constraint",
                ErrorContext::new("insert_reservation").with_entity("reservation"),
            ));
        }
        self.inner.insert_reservation(reservation).await
    }

    async fn list_reservations(&self) -> RepositoryResult<Vec<Reservation>> {
        self.inner.list_reservations().await
    }
}

#[async_trait]
impl RouteRepository for FailingRepository {
    async fn recent_route_points(&self, limit: usize) -> RepositoryResult<Vec<RoutePoint>> {
        self.inner.recent_route_points(limit).await
    }

    async fn store_route_point(&self, point: &NewRoutePoint) -> RepositoryResult<RoutePoint> {
        self.inner.store_route_point(point).await
    }
}

#[async_trait]
impl MetricsRepository for FailingRepository {
    async fn latest_metrics(&self) -> RepositoryResult<Option<TransparencyMetrics>> {
        self.inner.latest_metrics().await
    }
}

// =========================================================
// Factory Error Tests
// =========================================================

#[cfg(feature = "postgres-repo")]
#[tokio::test]
async fn test_factory_postgres_without_config() {
    use vanads::db::RepositoryFactory;

    let result = RepositoryFactory::create(RepositoryType::Postgres, None).await;

    assert!(result.is_err());
    if let Err(e) = result {
        assert!(matches!(e, RepositoryError::ConfigurationError { .. }));
        assert!(e.to_string().contains("Postgres"));
    }
}

#[test]
fn test_factory_repository_type_from_str() {
    assert_eq!(
        "postgres".parse::<RepositoryType>().unwrap(),
        RepositoryType::Postgres
    );
    assert_eq!(
        "pg".parse::<RepositoryType>().unwrap(),
        RepositoryType::Postgres
    );
    assert_eq!(
        "LOCAL".parse::<RepositoryType>().unwrap(),
        RepositoryType::Local
    );

    let result: Result<RepositoryType, _> = "sqlite".parse();
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Unknown repository type"));
}

#[test]
fn test_factory_repository_type_from_env_default() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", None),
            ("DATABASE_URL", None),
            ("PG_DATABASE_URL", None),
        ],
        || {
            // Should default to Local when no DB URL is set
            let repo_type = RepositoryType::from_env();
            assert_eq!(repo_type, RepositoryType::Local);
        },
    );
}

// =========================================================
// Services Error Tests
// =========================================================

#[tokio::test]
async fn test_services_health_check_unhealthy_repo() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);

    let result = services::health_check(&repo).await;

    // Health check reports Ok(false) rather than an error
    assert!(result.is_ok());
    assert!(!result.unwrap());
}

#[tokio::test]
async fn test_services_submit_reservation_unhealthy_repo() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);

    let result = services::submit_reservation(&repo, &valid_reservation()).await;

    assert!(result.is_err());
    if let Err(e) = result {
        assert!(matches!(e, RepositoryError::ConnectionError { .. }));
        assert!(e.is_retryable());
    }
}

#[tokio::test]
async fn test_services_submit_reservation_blank_business_name() {
    let repo = LocalRepository::with_demo_data();

    let mut request = valid_reservation();
    request.business_name = "   ".to_string();

    let result = services::submit_reservation(&repo, &request).await;
    assert!(matches!(
        result,
        Err(RepositoryError::ValidationError { .. })
    ));
    assert_eq!(repo.reservation_count(), 0);
}

#[tokio::test]
async fn test_services_submit_reservation_bad_email() {
    let repo = LocalRepository::with_demo_data();

    let mut request = valid_reservation();
    request.email = "not-an-email".to_string();

    let result = services::submit_reservation(&repo, &request).await;
    assert!(matches!(
        result,
        Err(RepositoryError::ValidationError { .. })
    ));
}

#[tokio::test]
async fn test_services_submit_reservation_remote_artwork_url() {
    let repo = LocalRepository::with_demo_data();

    let mut request = valid_reservation();
    request.artwork_url = Some("https://example.test/logo.png".to_string());

    let result = services::submit_reservation(&repo, &request).await;
    assert!(matches!(
        result,
        Err(RepositoryError::ValidationError { .. })
    ));
}

#[tokio::test]
async fn test_services_submit_reservation_unknown_panel_is_validation_error() {
    let repo = LocalRepository::with_demo_data();

    let mut request = valid_reservation();
    request.panel_id = Some(PanelId::new(9_999));

    let result = services::submit_reservation(&repo, &request).await;
    assert!(result.is_err());
    if let Err(e) = result {
        // A missing panel reference is the submitter's mistake, not a 404.
        assert!(matches!(e, RepositoryError::ValidationError { .. }));
        assert!(e.to_string().contains("9999"));
    }
}

#[tokio::test]
async fn test_failed_insert_stores_nothing_and_resubmit_succeeds() {
    let repo = FailingRepository::new();
    let request = valid_reservation();

    let first = services::submit_reservation(&repo, &request).await;
    assert!(matches!(first, Err(RepositoryError::QueryError { .. })));
    assert_eq!(repo.stored_reservations(), 0);

    // The identical payload goes through once the store recovers.
    repo.recover();
    let second = services::submit_reservation(&repo, &request).await.unwrap();
    assert_eq!(second.business_name, request.business_name);
    assert_eq!(repo.stored_reservations(), 1);
}

#[tokio::test]
async fn test_services_get_panel_not_found() {
    let repo = LocalRepository::new();

    let result = repo.get_panel(PanelId::new(404)).await;
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(matches!(e, RepositoryError::NotFound { .. }));
        assert!(e.to_string().contains("not found"));
    }
}

// =========================================================
// Repository Error Type Tests
// =========================================================

#[test]
fn test_error_context_builder_full() {
    let ctx = ErrorContext::new("submit_reservation")
        .with_entity("reservation")
        .with_entity_id(123)
        .with_details("connection timeout")
        .retryable();

    assert_eq!(ctx.operation.unwrap(), "submit_reservation");
    assert_eq!(ctx.entity.unwrap(), "reservation");
    assert_eq!(ctx.entity_id.unwrap(), "123");
    assert_eq!(ctx.details.unwrap(), "connection timeout");
    assert!(ctx.retryable);
}

#[test]
fn test_error_context_display_formatting() {
    let ctx = ErrorContext::new("list_panels")
        .with_entity("panel")
        .with_entity_id(456);

    let display = format!("{}", ctx);
    assert!(display.contains("operation=list_panels"));
    assert!(display.contains("entity=panel"));
    assert!(display.contains("id=456"));
}

#[test]
fn test_repository_error_connection_is_retryable() {
    let err = RepositoryError::connection("Failed to connect to database");

    assert!(matches!(err, RepositoryError::ConnectionError { .. }));
    assert!(err.is_retryable());

    let error_str = format!("{}", err);
    assert!(error_str.contains("Connection error"));
    assert!(error_str.contains("Failed to connect"));
}

#[test]
fn test_repository_error_validation_is_not_retryable() {
    let err = RepositoryError::validation("Business name is required");

    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    assert!(!err.is_retryable());
    assert!(err.to_string().contains("Business name"));
}

#[test]
fn test_repository_error_not_found() {
    let err = RepositoryError::not_found("Panel 123 not found");

    assert!(matches!(err, RepositoryError::NotFound { .. }));

    let error_str = format!("{}", err);
    assert!(error_str.contains("Not found"));
    assert!(error_str.contains("123"));
}

#[test]
fn test_repository_error_query_with_context() {
    let ctx = ErrorContext::new("recent_route_points").with_entity("route_point");
    let err = RepositoryError::query_with_context("Column not found", ctx);

    if let RepositoryError::QueryError { message, context } = err {
        assert_eq!(message, "Column not found");
        assert_eq!(context.operation.unwrap(), "recent_route_points");
    } else {
        panic!("Expected QueryError");
    }
}

#[test]
fn test_repository_error_with_operation() {
    let err = RepositoryError::internal("boom").with_operation("funding_report");
    assert_eq!(err.context().operation.as_deref(), Some("funding_report"));
}

#[test]
fn test_repository_error_from_string() {
    let err: RepositoryError = "something broke".to_string().into();
    assert!(matches!(err, RepositoryError::InternalError { .. }));

    let err: RepositoryError = "something else".into();
    assert!(matches!(err, RepositoryError::InternalError { .. }));
}

#[test]
fn test_timeout_error_is_retryable() {
    let err = RepositoryError::timeout("query exceeded 30s");
    assert!(err.is_retryable());
    assert!(err.to_string().contains("Timeout"));
}
