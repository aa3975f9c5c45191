//! HTTP handlers for the site and the REST API.
//!
//! Each handler corresponds to an endpoint and delegates to the service
//! layer for business logic. Page handlers tolerate repository failures by
//! rendering the affected section in its empty state; API handlers return
//! structured errors instead.

use axum::{
    extract::{ConnectInfo, Multipart, Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    response::Html,
    Json,
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{error, warn};

use super::dto::{
    ArtworkReceipt, FundingReport, HealthResponse, NewReservation, ReservationResponse,
    ReservePageQuery, RoutesQuery, TrackingPoint,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::checksum::calculate_checksum;
use crate::db::repository::RepositoryError;
use crate::db::services as db_services;
use crate::overlay::artwork::{ArtworkImage, MAX_ARTWORK_BYTES};
use crate::services::tracking::DEFAULT_ROUTE_LIMIT;
use crate::services::{build_catalog_data, build_funding_report, build_tracking_data};
use crate::site;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Seconds between repository polls while streaming route points.
const STREAM_POLL_SECONDS: u64 = 3;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and database is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Site Pages
// =============================================================================

/// GET /
///
/// The single marketing page. Every section that reads from the repository
/// falls back to its empty state when the read fails.
pub async fn index_page(State(state): State<AppState>) -> Html<String> {
    let repo = state.repository.as_ref();

    let catalog = db_services::catalog_data(repo).await.unwrap_or_else(|e| {
        warn!("catalog read failed, rendering empty tiers: {}", e);
        build_catalog_data(&[])
    });
    let tracking = db_services::tracking_data(repo, None)
        .await
        .unwrap_or_else(|e| {
            warn!("tracking read failed, rendering empty map: {}", e);
            build_tracking_data(&[])
        });
    let report = db_services::funding_report(repo).await.unwrap_or_else(|e| {
        warn!("metrics read failed, rendering estimates: {}", e);
        build_funding_report(None)
    });

    Html(site::render_index(&catalog, &tracking, &report))
}

/// GET /reserve
///
/// The reservation form page. `?submitted=1` renders the thank-you state.
pub async fn reserve_page(
    State(state): State<AppState>,
    Query(query): Query<ReservePageQuery>,
) -> Html<String> {
    let catalog = db_services::catalog_data(state.repository.as_ref())
        .await
        .unwrap_or_else(|e| {
            warn!("catalog read failed, rendering bare form: {}", e);
            build_catalog_data(&[])
        });

    let submitted = query.submitted == Some(1);
    Html(site::render_reserve_page(&catalog, submitted))
}

// =============================================================================
// Panel Catalog
// =============================================================================

/// GET /v1/panels
///
/// All panels cheapest-first plus the derived pricing tiers.
pub async fn list_panels(
    State(state): State<AppState>,
) -> HandlerResult<crate::api::CatalogData> {
    let catalog = db_services::catalog_data(state.repository.as_ref()).await?;
    Ok(Json(catalog))
}

// =============================================================================
// GPS Tracking
// =============================================================================

/// GET /v1/routes
///
/// Route samples newest-first with impression totals. `limit` is clamped
/// to the allowed window.
pub async fn get_routes(
    State(state): State<AppState>,
    Query(query): Query<RoutesQuery>,
) -> HandlerResult<crate::api::TrackingData> {
    let data = db_services::tracking_data(state.repository.as_ref(), query.limit).await?;
    Ok(Json(data))
}

/// GET /v1/routes/stream
///
/// Stream route samples via Server-Sent Events (SSE). The connection first
/// delivers the recent backlog, then emits each new sample as it is stored.
pub async fn stream_route_points(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let repository = state.repository.clone();
    let stream = async_stream::stream! {
        let mut last_id: Option<i64> = None;
        loop {
            match db_services::route_points_since(
                repository.as_ref(),
                last_id,
                DEFAULT_ROUTE_LIMIT,
            )
            .await
            {
                Ok(points) => {
                    for point in points {
                        last_id = Some(point.id.value());
                        let dto = TrackingPoint::from(&point);
                        let event_data = serde_json::to_string(&dto).unwrap_or_default();
                        yield Ok(Event::default().data(event_data));
                    }
                }
                Err(e) => {
                    warn!("route stream poll failed: {}", e);
                }
            }

            tokio::time::sleep(Duration::from_secs(STREAM_POLL_SECONDS)).await;
        }
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(1))
            .text("keep-alive"),
    )
}

// =============================================================================
// Transparency
// =============================================================================

/// GET /v1/transparency
///
/// The funding report: published metrics when available, launch estimates
/// otherwise.
pub async fn get_transparency(State(state): State<AppState>) -> HandlerResult<FundingReport> {
    let report = db_services::funding_report(state.repository.as_ref()).await?;
    Ok(Json(report))
}

// =============================================================================
// Reservations
// =============================================================================

/// POST /v1/reservations
///
/// Validate and store a reservation request. Returns 201 with the assigned
/// id, 400 for rejected requests, 429 when the client is rate limited, and
/// a generic 500 when the insert itself fails (the client may resubmit the
/// identical payload).
pub async fn submit_reservation(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(request): Json<NewReservation>,
) -> Result<(StatusCode, Json<ReservationResponse>), AppError> {
    if !state.limiter.check(addr.ip()) {
        return Err(AppError::RateLimited(
            "Too many requests. Please wait a minute and try again.".to_string(),
        ));
    }

    match db_services::submit_reservation(state.repository.as_ref(), &request).await {
        Ok(stored) => Ok((
            StatusCode::CREATED,
            Json(ReservationResponse {
                reservation_id: stored.id.value(),
                status: stored.status.as_str().to_string(),
                message: "Reservation received. We will reach out to schedule your consultation."
                    .to_string(),
            }),
        )),
        Err(e @ RepositoryError::ValidationError { .. }) => Err(AppError::Repository(e)),
        Err(e) => {
            error!("reservation insert failed: {}", e);
            Err(AppError::Internal(
                "Failed to submit reservation. Please try again.".to_string(),
            ))
        }
    }
}

// =============================================================================
// Artwork Upload
// =============================================================================

/// POST /v1/artwork
///
/// Multipart artwork upload for the preview tool. Accepts `image/*` only;
/// a non-image file is a quiet no-op (`accepted: false`, status 200).
/// Oversized uploads get 413.
pub async fn upload_artwork(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    mut multipart: Multipart,
) -> Result<Json<ArtworkReceipt>, AppError> {
    if !state.limiter.check(addr.ip()) {
        return Err(AppError::RateLimited(
            "Too many uploads. Please wait a minute and try again.".to_string(),
        ));
    }

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        if field.name() != Some("artwork") {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;

        if bytes.len() > MAX_ARTWORK_BYTES {
            return Err(AppError::PayloadTooLarge(format!(
                "Artwork must stay under {} bytes",
                MAX_ARTWORK_BYTES
            )));
        }

        let image = ArtworkImage::from_bytes(
            bytes.to_vec(),
            content_type.as_deref(),
            file_name.as_deref(),
        );
        let response = match image {
            Some(image) => ArtworkReceipt {
                accepted: true,
                data_url: Some(image.to_data_url()),
                content_type: Some(image.content_type().to_string()),
                size_bytes: Some(image.size_bytes()),
                checksum: Some(calculate_checksum(&bytes)),
            },
            None => ArtworkReceipt::rejected(),
        };
        return Ok(Json(response));
    }

    Err(AppError::BadRequest(
        "Missing 'artwork' field in upload".to_string(),
    ))
}
