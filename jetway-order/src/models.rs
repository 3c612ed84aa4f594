use chrono::{DateTime, Utc};
use jetway_catalog::{pricing, Flight, Seat, SeatClass};
use jetway_shared::Passenger;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Reservation status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
    CheckedIn,
    NoShow,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::Cancelled => "CANCELLED",
            ReservationStatus::CheckedIn => "CHECKED_IN",
            ReservationStatus::NoShow => "NO_SHOW",
        })
    }
}

/// A confirmed claim on one seat of one flight.
///
/// The price is fixed when the reservation is created; later fare changes on the
/// flight do not touch it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub flight_number: String,
    pub seat_number: String,
    pub seat_class: SeatClass,
    pub passenger: Passenger,
    pub status: ReservationStatus,
    pub total_price_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(flight: &Flight, seat: &Seat, passenger: Passenger) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            flight_number: flight.flight_number.clone(),
            seat_number: seat.number().to_string(),
            seat_class: seat.class(),
            passenger,
            status: ReservationStatus::Confirmed,
            total_price_cents: flight.fare_for(seat.class()),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_status(&mut self, new_status: ReservationStatus) {
        self.status = new_status;
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation {}: {} on Flight {}, Seat {} ({}) - {}",
            self.id,
            self.passenger.full_name(),
            self.flight_number,
            self.seat_number,
            self.seat_class,
            pricing::format_cents(self.total_price_cents)
        )
    }
}

impl PartialEq for Reservation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Point-in-time picture of a flight's cabin.
#[derive(Debug, Clone, Serialize)]
pub struct SeatMap {
    pub flight_number: String,
    pub aircraft_model: String,
    pub route: String,
    pub columns: Vec<String>,
    pub rows: Vec<SeatMapRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatMapRow {
    pub row: u32,
    pub seats: Vec<SeatCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatCell {
    pub seat_number: String,
    pub seat_class: SeatClass,
    pub reserved: bool,
}

impl SeatMap {
    pub fn from_flight(flight: &Flight) -> Self {
        let aircraft = flight.aircraft();
        let rows = aircraft
            .layout()
            .into_iter()
            .zip(1u32..)
            .map(|(seats, row)| SeatMapRow {
                row,
                seats: seats
                    .into_iter()
                    .map(|seat| SeatCell {
                        seat_number: seat.number().to_string(),
                        seat_class: seat.class(),
                        reserved: seat.is_reserved(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            flight_number: flight.flight_number.clone(),
            aircraft_model: aircraft.model().to_string(),
            route: flight.route(),
            columns: aircraft.columns().to_vec(),
            rows,
        }
    }
}

impl fmt::Display for SeatMap {
    /// Text grid, `O` for an open seat and `X` for a taken one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seat map for flight {}", self.flight_number)?;
        writeln!(f, "Aircraft: {} | Route: {}", self.aircraft_model, self.route)?;
        write!(f, "Row ")?;
        for column in &self.columns {
            write!(f, "{:>3}", column)?;
        }
        writeln!(f)?;
        for row in &self.rows {
            write!(f, "{:>3} ", row.row)?;
            for cell in &row.seats {
                write!(f, "{}", if cell.reserved { " X " } else { " O " })?;
            }
            writeln!(f)?;
        }
        write!(f, "Legend: O = Available, X = Reserved")
    }
}
