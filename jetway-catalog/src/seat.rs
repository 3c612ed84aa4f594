use chrono::{DateTime, Utc};
use jetway_shared::Passenger;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cabin tier of a seat; decides the fare multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatClass {
    Economy,
    Business,
    First,
}

impl SeatClass {
    /// Rows 1-3 are first class, 4-10 business, everything behind economy.
    pub fn for_row(row: u32) -> Self {
        match row {
            0..=3 => SeatClass::First,
            4..=10 => SeatClass::Business,
            _ => SeatClass::Economy,
        }
    }

    pub fn price_multiplier(self) -> f64 {
        match self {
            SeatClass::Economy => 1.0,
            SeatClass::Business => 2.5,
            SeatClass::First => 4.0,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SeatClass::Economy => "Economy",
            SeatClass::Business => "Business",
            SeatClass::First => "First Class",
        }
    }
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown seat class: {0}")]
pub struct ParseSeatClassError(pub String);

impl FromStr for SeatClass {
    type Err = ParseSeatClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(SeatClass::Economy),
            "business" => Ok(SeatClass::Business),
            "first" | "first_class" | "first class" => Ok(SeatClass::First),
            other => Err(ParseSeatClassError(other.to_string())),
        }
    }
}

/// Who holds a seat and since when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatOccupant {
    pub passenger: Passenger,
    pub reserved_at: DateTime<Utc>,
}

/// A single bookable seat. A seat is reserved exactly when it has an occupant.
///
/// Mutation goes through `&mut self`, so whoever hands out the mutable borrow
/// (the registry, under its write lock) decides atomicity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    number: String,
    class: SeatClass,
    occupant: Option<SeatOccupant>,
}

impl Seat {
    pub fn new(number: impl Into<String>, class: SeatClass) -> Self {
        Self {
            number: number.into(),
            class,
            occupant: None,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn class(&self) -> SeatClass {
        self.class
    }

    pub fn is_reserved(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn is_available(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn occupant(&self) -> Option<&SeatOccupant> {
        self.occupant.as_ref()
    }

    pub fn passenger(&self) -> Option<&Passenger> {
        self.occupant.as_ref().map(|o| &o.passenger)
    }

    /// Returns `false` and leaves the seat untouched if it is already taken.
    pub fn reserve(&mut self, passenger: Passenger) -> bool {
        if self.occupant.is_some() {
            return false;
        }
        self.occupant = Some(SeatOccupant {
            passenger,
            reserved_at: Utc::now(),
        });
        true
    }

    /// Returns `false` if there was nothing to release.
    pub fn cancel_reservation(&mut self) -> bool {
        self.occupant.take().is_some()
    }
}

impl PartialEq for Seat {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}
