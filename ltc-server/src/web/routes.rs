//! HTTP route handlers.

use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::domain::{RouteDirectory, StopRecord};
use crate::query::QueryParams;
use crate::service::UpstreamError;

use super::dto::*;
use super::state::AppState;

/// Message returned whenever the provider cannot be used.
const SERVICE_DOWN: &str = "LTC WebWatch service looks down";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/routes", get(list_routes))
        .route("/routes/", get(list_routes))
        .route("/routes/:route", get(route_stops))
        .route("/routes/:route/", get(route_stops))
        .layer(cors())
        .with_state(state)
}

/// Open CORS for read-only browser clients.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(60))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// API index listing resources and their parameters.
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse::new())
}

/// Route code to display name.
async fn list_routes(State(state): State<AppState>) -> Result<Json<RouteDirectory>, AppError> {
    let routes = state.service.get_routes().await?;
    Ok(Json(routes))
}

/// Stops on one route, filtered and optionally sorted by distance.
async fn route_stops(
    State(state): State<AppState>,
    Path(route): Path<String>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<StopRecord>>, AppError> {
    let stops = state.service.get_route_stops(&route, &params).await?;
    Ok(Json(stops))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The provider was unreachable or sent an unusable page.
    ServiceDown { message: String },
}

impl From<UpstreamError> for AppError {
    fn from(e: UpstreamError) -> Self {
        // Directory failures carry no route and get the bare message.
        let message = match e.route {
            Some(_) => format!("{SERVICE_DOWN} ({})", e.reason),
            None => SERVICE_DOWN.to_string(),
        };
        AppError::ServiceDown { message }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::ServiceDown { message } => (StatusCode::REQUEST_TIMEOUT, message),
        };

        warn!(status = status.as_u16(), %message, "request failed");

        let body = Json(ErrorResponse {
            message,
            status: status.as_u16(),
        });
        (status, body).into_response()
    }
}
