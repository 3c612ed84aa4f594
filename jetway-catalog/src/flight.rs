use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::aircraft::Aircraft;
use crate::pricing;
use crate::seat::SeatClass;

/// Operational status of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    Scheduled,
    Boarding,
    Departed,
    Arrived,
    Cancelled,
    Delayed,
}

impl FlightStatus {
    pub fn display_name(self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::Boarding => "Boarding",
            FlightStatus::Departed => "Departed",
            FlightStatus::Arrived => "Arrived",
            FlightStatus::Cancelled => "Cancelled",
            FlightStatus::Delayed => "Delayed",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown flight status: {0}")]
pub struct ParseFlightStatusError(pub String);

impl FromStr for FlightStatus {
    type Err = ParseFlightStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SCHEDULED" => Ok(FlightStatus::Scheduled),
            "BOARDING" => Ok(FlightStatus::Boarding),
            "DEPARTED" => Ok(FlightStatus::Departed),
            "ARRIVED" => Ok(FlightStatus::Arrived),
            "CANCELLED" => Ok(FlightStatus::Cancelled),
            "DELAYED" => Ok(FlightStatus::Delayed),
            other => Err(ParseFlightStatusError(other.to_string())),
        }
    }
}

/// A scheduled flight. The flight owns its aircraft and therefore its seats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub status: FlightStatus,
    pub base_price_cents: i64,
    aircraft: Aircraft,
}

impl Flight {
    pub fn new(
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
        aircraft: Aircraft,
        base_price_cents: i64,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            origin: origin.into(),
            destination: destination.into(),
            departure_time,
            arrival_time,
            status: FlightStatus::Scheduled,
            base_price_cents,
            aircraft,
        }
    }

    pub fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }

    pub fn aircraft_mut(&mut self) -> &mut Aircraft {
        &mut self.aircraft
    }

    pub fn route(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }

    pub fn departure_date(&self) -> NaiveDate {
        self.departure_time.date_naive()
    }

    pub fn departs_on(&self, date: NaiveDate) -> bool {
        self.departure_date() == date
    }

    pub fn departs_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let date = self.departure_date();
        start <= date && date <= end
    }

    /// Case-insensitive match on both airport codes.
    pub fn serves(&self, origin: &str, destination: &str) -> bool {
        self.origin.eq_ignore_ascii_case(origin) && self.destination.eq_ignore_ascii_case(destination)
    }

    pub fn fare_for(&self, class: SeatClass) -> i64 {
        pricing::fare_cents(self.base_price_cents, class)
    }

    pub fn total_seats(&self) -> usize {
        self.aircraft.total_seats()
    }

    pub fn available_count(&self) -> usize {
        self.aircraft.available_count()
    }

    pub fn reserved_count(&self) -> usize {
        self.aircraft.reserved_count()
    }
}

impl PartialEq for Flight {
    fn eq(&self, other: &Self) -> bool {
        self.flight_number == other.flight_number
    }
}
