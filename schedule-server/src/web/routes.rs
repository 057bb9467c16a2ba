//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::{DomainError, Route, StationTimetable};
use crate::store::StoreError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/stations", get(list_stations))
        .route("/stations/:name", get(get_station).post(upsert_station))
        .route("/trains", get(list_trains).post(add_train))
        .route("/trains/:train_id", get(get_train))
        .route("/search", get(search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness message.
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "API is working".to_string(),
    })
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Names of all stations.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<String>> {
    let store = state.store.read().await;
    Json(store.list_stations())
}

/// Timetable of one station.
async fn get_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StationTimetable>, AppError> {
    debug!(station = %name, "station lookup");
    let store = state.store.read().await;
    let timetable = store.get_station(&name)?;
    Ok(Json(timetable.clone()))
}

/// Add or replace one train's entry at a station.
async fn upsert_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<StationScheduleResponse>, AppError> {
    let req: StationScheduleRequest = parse_body(&body)?;
    req.to_entry().validate()?;

    let mut store = state.store.write().await;
    store.upsert_station_schedule(
        &name,
        &req.train_id,
        &req.arrival,
        &req.departure,
        req.days.clone(),
    );

    Ok(Json(StationScheduleResponse {
        message: "Schedule updated".to_string(),
        schedule: req,
    }))
}

/// All trains with their station lists.
async fn list_trains(State(state): State<AppState>) -> Json<Vec<TrainSummaryResult>> {
    let store = state.store.read().await;
    Json(
        store
            .list_trains()
            .into_iter()
            .map(TrainSummaryResult::from)
            .collect(),
    )
}

/// Route of one train.
async fn get_train(
    State(state): State<AppState>,
    Path(train_id): Path<String>,
) -> Result<Json<Route>, AppError> {
    debug!(%train_id, "train lookup");
    let store = state.store.read().await;
    let route = store.get_train(&train_id)?;
    Ok(Json(route.clone()))
}

/// Register a new train.
async fn add_train(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AddTrainResponse>, AppError> {
    let req: AddTrainRequest = parse_body(&body)?;
    let train_id = req.train_id.unwrap_or_default();
    let schedule = req.schedule.unwrap_or_default();
    if train_id.is_empty() || schedule.is_empty() {
        return Err(StoreError::missing_train_fields().into());
    }

    for stop in schedule.stops() {
        stop.entry.validate().map_err(|e| AppError::BadRequest {
            message: format!("{}: {e}", stop.station),
        })?;
    }

    let mut store = state.store.write().await;
    let schedule = store.add_train(&train_id, schedule)?.clone();

    Ok(Json(AddTrainResponse {
        message: "Train added".to_string(),
        train_id,
        schedule,
    }))
}

/// Trains running from `from_station` to `to_station`.
async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchRequest>, QueryRejection>,
) -> Result<Json<Vec<SearchResult>>, AppError> {
    let Query(req) = query.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;
    let store = state.store.read().await;
    let results: Vec<SearchResult> = store
        .search(&req.from_station, &req.to_station)
        .into_iter()
        .map(SearchResult::from)
        .collect();
    debug!(
        from = %req.from_station,
        to = %req.to_station,
        matches = results.len(),
        "search"
    );
    Ok(Json(results))
}

/// Parse a JSON body, logging it on failure.
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "invalid JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::StationNotFound(_) | StoreError::TrainNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            // Conflict maps to 400, not 409.
            StoreError::InvalidArgument(_) | StoreError::Conflict(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
