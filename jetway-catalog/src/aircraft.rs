use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::seat::{Seat, SeatClass};

/// Seat inventory of one aircraft, generated once from a row/column layout.
///
/// Listings come back in row-major order (1A, 1B, ..., 2A, ...) and reflect the
/// seat states at the time of the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    id: String,
    model: String,
    rows: u32,
    columns: Vec<String>,
    seats: HashMap<String, Seat>,
}

/// Largest row number a seat identifier can carry.
pub const MAX_ROWS: u32 = 999;

impl Aircraft {
    /// Standard cabin: seat class follows the row band (see [`SeatClass::for_row`]).
    pub fn new(id: impl Into<String>, model: impl Into<String>, rows: u32, columns: &[&str]) -> Self {
        Self::build(id.into(), model.into(), rows, columns, SeatClass::for_row)
    }

    /// Every seat in the same class, e.g. an all-economy regional jet.
    pub fn single_class(
        id: impl Into<String>,
        model: impl Into<String>,
        rows: u32,
        columns: &[&str],
        class: SeatClass,
    ) -> Self {
        Self::build(id.into(), model.into(), rows, columns, |_| class)
    }

    /// Repeated column labels are kept once.
    fn build(
        id: String,
        model: String,
        rows: u32,
        columns_in: &[&str],
        class_for_row: impl Fn(u32) -> SeatClass,
    ) -> Self {
        let mut columns: Vec<String> = Vec::with_capacity(columns_in.len());
        for label in columns_in {
            if !columns.iter().any(|c| c == label) {
                columns.push(label.to_string());
            }
        }
        let mut seats = HashMap::with_capacity(rows as usize * columns.len());

        for row in 1..=rows {
            let class = class_for_row(row);
            for column in &columns {
                let number = format!("{}{}", row, column);
                seats.insert(number.clone(), Seat::new(number, class));
            }
        }

        Self {
            id,
            model,
            rows,
            columns,
            seats,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn seat(&self, number: &str) -> Option<&Seat> {
        self.seats.get(number)
    }

    pub fn seat_mut(&mut self, number: &str) -> Option<&mut Seat> {
        self.seats.get_mut(number)
    }

    pub fn seats(&self) -> Vec<&Seat> {
        self.row_major().collect()
    }

    pub fn available_seats(&self) -> Vec<&Seat> {
        self.row_major().filter(|s| s.is_available()).collect()
    }

    pub fn reserved_seats(&self) -> Vec<&Seat> {
        self.row_major().filter(|s| s.is_reserved()).collect()
    }

    pub fn available_seats_by_class(&self, class: SeatClass) -> Vec<&Seat> {
        self.row_major()
            .filter(|s| s.class() == class && s.is_available())
            .collect()
    }

    pub fn total_seats(&self) -> usize {
        self.seats.len()
    }

    pub fn available_count(&self) -> usize {
        self.seats.values().filter(|s| s.is_available()).count()
    }

    pub fn reserved_count(&self) -> usize {
        self.seats.values().filter(|s| s.is_reserved()).count()
    }

    /// One inner vector per row, one seat per column label.
    pub fn layout(&self) -> Vec<Vec<&Seat>> {
        (1..=self.rows)
            .map(|row| {
                self.columns
                    .iter()
                    .filter_map(|column| self.seats.get(&format!("{}{}", row, column)))
                    .collect()
            })
            .collect()
    }

    fn row_major(&self) -> impl Iterator<Item = &Seat> + '_ {
        (1..=self.rows).flat_map(move |row| {
            self.columns
                .iter()
                .filter_map(move |column| self.seats.get(&format!("{}{}", row, column)))
        })
    }
}

/// Fleet presets used when a caller does not describe the cabin itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AircraftType {
    #[serde(rename = "B737")]
    Boeing737,
    #[serde(rename = "A320")]
    AirbusA320,
    #[serde(rename = "B777")]
    Boeing777,
}

const SIX_ABREAST: &[&str] = &["A", "B", "C", "D", "E", "F"];
const TEN_ABREAST: &[&str] = &["A", "B", "C", "D", "E", "F", "G", "H", "J", "K"];

impl AircraftType {
    pub fn code(self) -> &'static str {
        match self {
            AircraftType::Boeing737 => "B737",
            AircraftType::AirbusA320 => "A320",
            AircraftType::Boeing777 => "B777",
        }
    }

    pub fn model(self) -> &'static str {
        match self {
            AircraftType::Boeing737 => "Boeing 737-800",
            AircraftType::AirbusA320 => "Airbus A320",
            AircraftType::Boeing777 => "Boeing 777-300ER",
        }
    }

    /// Builds a fresh aircraft with every seat available.
    pub fn build(self) -> Aircraft {
        let (rows, columns) = match self {
            AircraftType::Boeing737 => (30, SIX_ABREAST),
            AircraftType::AirbusA320 => (28, SIX_ABREAST),
            AircraftType::Boeing777 => (42, TEN_ABREAST),
        };
        Aircraft::new(self.code(), self.model(), rows, columns)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown aircraft type: {0}")]
pub struct ParseAircraftTypeError(pub String);

impl FromStr for AircraftType {
    type Err = ParseAircraftTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "B737" => Ok(AircraftType::Boeing737),
            "A320" => Ok(AircraftType::AirbusA320),
            "B777" => Ok(AircraftType::Boeing777),
            other => Err(ParseAircraftTypeError(other.to_string())),
        }
    }
}
