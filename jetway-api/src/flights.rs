use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use jetway_catalog::pricing::{fare_cents, format_cents};
use jetway_catalog::aircraft::MAX_ROWS;
use jetway_catalog::{Aircraft, AircraftType, Flight, FlightStatus, Seat, SeatClass};
use jetway_core::input;
use jetway_core::search::FlightSearchRequest;
use jetway_order::SeatMap;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct FlightResponse {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub route: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub status: FlightStatus,
    pub aircraft_model: String,
    pub base_price_cents: i64,
    pub base_price: String,
    pub total_seats: usize,
    pub available_seats: usize,
    pub reserved_seats: usize,
}

impl From<&Flight> for FlightResponse {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_number: flight.flight_number.clone(),
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            route: flight.route(),
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            status: flight.status,
            aircraft_model: flight.aircraft().model().to_string(),
            base_price_cents: flight.base_price_cents,
            base_price: format_cents(flight.base_price_cents),
            total_seats: flight.total_seats(),
            available_seats: flight.available_count(),
            reserved_seats: flight.reserved_count(),
        }
    }
}

/// Custom cabin. Seat classes follow the row bands.
#[derive(Debug, Deserialize)]
pub struct CabinLayout {
    pub model: String,
    pub rows: u32,
    pub columns: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateFlightRequest {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub base_price_cents: i64,
    /// Fleet preset; ignored when `layout` is given. Defaults to a 737.
    pub aircraft: Option<AircraftType>,
    pub layout: Option<CabinLayout>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct RescheduleRequest {
    pub departure_time: String,
    pub arrival_time: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriceRequest {
    pub base_price_cents: i64,
}

#[derive(Debug, Deserialize)]
pub struct SeatQuery {
    pub class: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SeatResponse {
    pub seat_number: String,
    pub seat_class: SeatClass,
    pub price_cents: i64,
    pub price: String,
}

impl SeatResponse {
    fn priced(seat: &Seat, base_price_cents: i64) -> Self {
        let price_cents = fare_cents(base_price_cents, seat.class());
        Self {
            seat_number: seat.number().to_string(),
            seat_class: seat.class(),
            price_cents,
            price: format_cents(price_cents),
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights", get(list_flights).post(create_flight))
        .route("/v1/flights/search", get(search_flights))
        .route("/v1/flights/today", get(todays_flights))
        .route("/v1/flights/tomorrow", get(tomorrows_flights))
        .route("/v1/flights/weekly", get(weekly_flights))
        .route("/v1/flights/upcoming", get(upcoming_flights))
        .route("/v1/flights/{number}", get(get_flight))
        .route("/v1/flights/{number}/status", post(update_status))
        .route("/v1/flights/{number}/schedule", post(reschedule))
        .route("/v1/flights/{number}/price", post(update_price))
        .route("/v1/flights/{number}/seats", get(available_seats))
        .route("/v1/flights/{number}/seat-map", get(seat_map))
}

fn respond(flights: Vec<Flight>) -> Json<Vec<FlightResponse>> {
    Json(flights.iter().map(FlightResponse::from).collect())
}

fn build_aircraft(flight_number: &str, req: &CreateFlightRequest) -> Result<Aircraft, AppError> {
    let Some(layout) = &req.layout else {
        return Ok(req.aircraft.unwrap_or(AircraftType::Boeing737).build());
    };

    if layout.rows == 0 || layout.columns.is_empty() {
        return Err(AppError::ValidationError(
            "layout needs at least one row and one column".to_string(),
        ));
    }
    if layout.rows > MAX_ROWS {
        return Err(AppError::ValidationError(format!(
            "layout rows must be at most {}",
            MAX_ROWS
        )));
    }
    if !layout
        .columns
        .iter()
        .all(|c| c.len() == 1 && c.chars().all(|ch| ch.is_ascii_alphabetic()))
    {
        return Err(AppError::ValidationError(
            "layout columns must be single letters".to_string(),
        ));
    }

    // Single letters, so at most 26 once duplicates are rejected.
    let columns: Vec<String> = layout.columns.iter().map(|c| c.to_ascii_uppercase()).collect();
    if columns.iter().enumerate().any(|(i, c)| columns[..i].contains(c)) {
        return Err(AppError::ValidationError(
            "layout columns must be unique".to_string(),
        ));
    }
    let columns: Vec<&str> = columns.iter().map(String::as_str).collect();
    let model = input::required("aircraft model", &layout.model)?;
    Ok(Aircraft::new(flight_number, model, layout.rows, &columns))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /v1/flights
async fn list_flights(State(state): State<AppState>) -> Json<Vec<FlightResponse>> {
    respond(state.registry.flights())
}

/// POST /v1/flights
/// Adds a flight, replacing any flight with the same number.
async fn create_flight(
    State(state): State<AppState>,
    Json(req): Json<CreateFlightRequest>,
) -> Result<(StatusCode, Json<FlightResponse>), AppError> {
    let flight_number = input::flight_number(&req.flight_number)?;
    let origin = input::airport_code(&req.origin)?;
    let destination = input::airport_code(&req.destination)?;
    let departure_time = input::parse_date_time(&req.departure_time)?;
    let arrival_time = input::parse_date_time(&req.arrival_time)?;
    input::schedule(departure_time, arrival_time)?;
    let base_price_cents = input::price_cents(req.base_price_cents)?;
    let aircraft = build_aircraft(&flight_number, &req)?;

    let flight = Flight::new(
        flight_number,
        origin,
        destination,
        departure_time,
        arrival_time,
        aircraft,
        base_price_cents,
    );
    let response = FlightResponse::from(&flight);
    state.registry.add_flight(flight);

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /v1/flights/{number}
async fn get_flight(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<FlightResponse>, AppError> {
    let number = input::flight_number(&number)?;
    let flight = state
        .registry
        .flight(&number)
        .ok_or_else(|| AppError::NotFoundError(format!("Flight not found: {}", number)))?;
    Ok(Json(FlightResponse::from(&flight)))
}

/// POST /v1/flights/{number}/status
async fn update_status(
    State(state): State<AppState>,
    Path(number): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<StatusCode, AppError> {
    let number = input::flight_number(&number)?;
    let status = req
        .status
        .parse::<FlightStatus>()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    state.registry.update_flight_status(&number, status)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/flights/{number}/schedule
async fn reschedule(
    State(state): State<AppState>,
    Path(number): Path<String>,
    Json(req): Json<RescheduleRequest>,
) -> Result<StatusCode, AppError> {
    let number = input::flight_number(&number)?;
    let departure_time = input::parse_date_time(&req.departure_time)?;
    let arrival_time = input::parse_date_time(&req.arrival_time)?;
    input::schedule(departure_time, arrival_time)?;
    state
        .registry
        .reschedule_flight(&number, departure_time, arrival_time)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /v1/flights/{number}/price
async fn update_price(
    State(state): State<AppState>,
    Path(number): Path<String>,
    Json(req): Json<UpdatePriceRequest>,
) -> Result<StatusCode, AppError> {
    let number = input::flight_number(&number)?;
    let base_price_cents = input::price_cents(req.base_price_cents)?;
    state.registry.update_base_price(&number, base_price_cents)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/flights/{number}/seats?class=BUSINESS
/// Available seats, priced at the flight's current base fare.
async fn available_seats(
    State(state): State<AppState>,
    Path(number): Path<String>,
    Query(query): Query<SeatQuery>,
) -> Result<Json<Vec<SeatResponse>>, AppError> {
    let number = input::flight_number(&number)?;
    let class = query
        .class
        .as_deref()
        .map(str::parse::<SeatClass>)
        .transpose()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let seats = state.registry.available_seats(&number, class)?;
    let base_price_cents = state
        .registry
        .flight(&number)
        .map(|flight| flight.base_price_cents)
        .ok_or_else(|| AppError::NotFoundError(format!("Flight not found: {}", number)))?;

    Ok(Json(
        seats
            .iter()
            .map(|seat| SeatResponse::priced(seat, base_price_cents))
            .collect(),
    ))
}

/// GET /v1/flights/{number}/seat-map
async fn seat_map(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<SeatMap>, AppError> {
    let number = input::flight_number(&number)?;
    Ok(Json(state.registry.seat_map(&number)?))
}

/// GET /v1/flights/search?date= | ?from=&to= | ?origin=&destination=&date=
async fn search_flights(
    State(state): State<AppState>,
    Query(req): Query<FlightSearchRequest>,
) -> Result<Json<Vec<FlightResponse>>, AppError> {
    let search = req.into_search()?;
    Ok(respond(state.registry.search(&search)))
}

/// GET /v1/flights/today
async fn todays_flights(State(state): State<AppState>) -> Json<Vec<FlightResponse>> {
    respond(state.registry.todays_flights())
}

/// GET /v1/flights/tomorrow
async fn tomorrows_flights(State(state): State<AppState>) -> Json<Vec<FlightResponse>> {
    respond(state.registry.tomorrows_flights())
}

/// GET /v1/flights/weekly
async fn weekly_flights(State(state): State<AppState>) -> Json<Vec<FlightResponse>> {
    respond(state.registry.weekly_flights())
}

/// GET /v1/flights/upcoming
/// Departures after now, soonest first.
async fn upcoming_flights(State(state): State<AppState>) -> Json<Vec<FlightResponse>> {
    respond(state.registry.upcoming_flights())
}
