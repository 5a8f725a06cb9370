use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::errors::{AppError, ErrorBody};
use crate::models::{Booking, BookingInput, BookingPatch};
use crate::services::Pagination;
use crate::state::AppState;

// Content-Type is not checked; clients sending form or no header still get
// their JSON decoded.
fn decode<T: DeserializeOwned>(payload: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(payload).map_err(|e| AppError::InvalidBody(e.to_string()))
}

// POST /bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    payload: Bytes,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let input: BookingInput = decode(&payload)?;
    let booking = state.bookings.create(input)?;
    Ok((StatusCode::CREATED, Json(booking)))
}

// GET /bookings
// Raw pairs so that neither `?limit=abc` nor a repeated key turns into a 400.
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<Booking>> {
    let first = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    let page = Pagination::from_raw(first("limit"), first("offset"));
    Json(state.bookings.list(page))
}

// GET /bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(state.bookings.get(&id)?))
}

// PUT /bookings/:id
pub async fn replace_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Bytes,
) -> Result<Json<Booking>, AppError> {
    // A missing booking is reported ahead of a malformed body.
    state.bookings.get(&id)?;
    let input: BookingInput = decode(&payload)?;
    Ok(Json(state.bookings.replace(&id, input)?))
}

// PATCH /bookings/:id
pub async fn patch_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Bytes,
) -> Result<Json<Booking>, AppError> {
    state.bookings.get(&id)?;
    let patch: BookingPatch = decode(&payload)?;
    Ok(Json(state.bookings.patch(&id, patch)?))
}

// DELETE /bookings/:id
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.bookings.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /bookings/:id/cancel
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(state.bookings.cancel(&id)?))
}

fn error_body(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            code: status.as_u16(),
            message: message.to_string(),
        }),
    )
}

pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    error_body(StatusCode::NOT_FOUND, "not found")
}

pub async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    error_body(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}
