use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::movie_id;
use crate::{error::AppError, models::Movie, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/booking/{id}", get(booking_page))
        .route("/create-order", post(create_order))
        .route("/confirm-booking", post(confirm_booking))
        .route("/api/booked/{movie_id}", get(booked_seats))
        .route("/reset-bookings", get(reset_bookings))
}

/* ---------- request bodies ---------- */

// Seat labels arrive as strings; any other JSON scalar is kept as its JSON text
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeatLabel {
    Text(String),
    Other(serde_json::Value),
}

impl From<SeatLabel> for String {
    fn from(label: SeatLabel) -> Self {
        match label {
            SeatLabel::Text(text) => text,
            SeatLabel::Other(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    movie_id: i64,
    // null and absent both mean no seats
    #[serde(default)]
    seats: Option<Vec<SeatLabel>>,
}

impl OrderRequest {
    fn into_parts(self) -> (i64, Vec<String>) {
        let seats = self.seats.unwrap_or_default();
        (self.movie_id, seats.into_iter().map(String::from).collect())
    }
}

fn parse_order(body: Result<Json<OrderRequest>, JsonRejection>) -> Result<(i64, Vec<String>), AppError> {
    let Json(req) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(req.into_parts())
}

/* ---------- responses ---------- */

#[derive(Debug, Serialize)]
pub struct BookingPageResponse {
    pub movie: Movie,
    pub booked: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub booking_id: i64,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ConfirmBookingResponse {
    pub ok: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BookedSeatsResponse {
    pub booked: Vec<String>,
}

/* ---------- handlers ---------- */

// GET /booking/{id}
async fn booking_page(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<BookingPageResponse>, AppError> {
    let id = movie_id(path)?;
    let movie = state
        .ledger
        .find_movie(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movie {id} not found")))?;
    let booked = state.ledger.list_occupied_seats(id).await?;

    Ok(Json(BookingPageResponse { movie, booked }))
}

// POST /create-order
async fn create_order(
    State(state): State<Arc<AppState>>,
    body: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<Json<CreateOrderResponse>, AppError> {
    let (movie_id, seats) = parse_order(body)?;
    let pending = state.ledger.create_pending_booking(movie_id, &seats).await?;

    Ok(Json(CreateOrderResponse {
        booking_id: pending.booking_id,
        message: pending.status,
    }))
}

// POST /confirm-booking
async fn confirm_booking(
    State(state): State<Arc<AppState>>,
    body: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<Json<ConfirmBookingResponse>, AppError> {
    let (movie_id, seats) = parse_order(body)?;
    let confirmation = state.ledger.confirm_booking(movie_id, &seats).await?;

    Ok(Json(ConfirmBookingResponse {
        ok: true,
        message: confirmation.message,
    }))
}

// GET /api/booked/{movie_id}
async fn booked_seats(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<BookedSeatsResponse>, AppError> {
    let booked = state.ledger.list_occupied_seats(movie_id(path)?).await?;
    Ok(Json(BookedSeatsResponse { booked }))
}

// GET /reset-bookings, no auth
async fn reset_bookings(State(state): State<Arc<AppState>>) -> Result<&'static str, AppError> {
    state.ledger.clear_all_bookings().await?;
    Ok("All bookings cleared!")
}
