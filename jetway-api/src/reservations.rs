use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use jetway_catalog::pricing::format_cents;
use jetway_catalog::SeatClass;
use jetway_core::input;
use jetway_order::{Reservation, ReservationStatus};
use jetway_shared::Passenger;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PassengerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub passport_number: String,
}

#[derive(Debug, Deserialize)]
pub struct ReserveRequest {
    pub flight_number: String,
    pub seat_number: String,
    pub passenger: PassengerRequest,
}

#[derive(Debug, Deserialize)]
pub struct ReservationQuery {
    pub flight: Option<String>,
}

/// Contact details stay server-side; only the name goes out.
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub flight_number: String,
    pub seat_number: String,
    pub seat_class: SeatClass,
    pub passenger_id: Uuid,
    pub passenger_name: String,
    pub status: ReservationStatus,
    pub total_price_cents: i64,
    pub total_price: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            passenger_id: reservation.passenger.id(),
            passenger_name: reservation.passenger.full_name(),
            flight_number: reservation.flight_number,
            seat_number: reservation.seat_number,
            seat_class: reservation.seat_class,
            status: reservation.status,
            total_price: format_cents(reservation.total_price_cents),
            total_price_cents: reservation.total_price_cents,
            created_at: reservation.created_at,
            updated_at: reservation.updated_at,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/reservations", get(list_reservations).post(reserve_seat))
        .route("/v1/reservations/{id}", get(get_reservation).delete(cancel_reservation))
        .route("/v1/reservations/{id}/check-in", post(check_in))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/reservations
/// Reserve one seat for one passenger. 409 if the seat is already taken.
async fn reserve_seat(
    State(state): State<AppState>,
    Json(req): Json<ReserveRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), AppError> {
    let flight_number = input::flight_number(&req.flight_number)?;
    let seat_number = input::seat_number(&req.seat_number)?;
    let passenger = Passenger::new(
        input::required("first name", &req.passenger.first_name)?,
        input::required("last name", &req.passenger.last_name)?,
        input::required("email", &req.passenger.email)?,
        req.passenger.phone.trim(),
        req.passenger.passport_number.trim(),
    );

    let reservation = state
        .registry
        .reserve(&flight_number, &seat_number, passenger)?;

    Ok((StatusCode::CREATED, Json(reservation.into())))
}

/// GET /v1/reservations?flight=TK001
async fn list_reservations(
    State(state): State<AppState>,
    Query(query): Query<ReservationQuery>,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    let reservations = match query.flight {
        Some(flight) => {
            let flight_number = input::flight_number(&flight)?;
            state.registry.reservations_for_flight(&flight_number)
        }
        None => state.registry.reservations(),
    };
    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

/// GET /v1/reservations/{id}
async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservationResponse>, AppError> {
    let reservation = state
        .registry
        .reservation(id)
        .ok_or_else(|| AppError::NotFoundError(format!("Reservation not found: {}", id)))?;
    Ok(Json(reservation.into()))
}

/// DELETE /v1/reservations/{id}
/// Releases the seat and returns the cancelled reservation.
async fn cancel_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservationResponse>, AppError> {
    let cancelled = state.registry.cancel(id)?;
    Ok(Json(cancelled.into()))
}

/// POST /v1/reservations/{id}/check-in
async fn check_in(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservationResponse>, AppError> {
    let reservation = state.registry.check_in(id)?;
    Ok(Json(reservation.into()))
}
