//! Date and route filters over a set of flights.
//!
//! All filters keep the input order except [`departing_after`], which sorts by
//! departure time (stable, so equal departures keep their input order).

use chrono::{DateTime, NaiveDate, Utc};
use jetway_catalog::Flight;

pub fn on_date<'a>(flights: impl IntoIterator<Item = &'a Flight>, date: NaiveDate) -> Vec<Flight> {
    flights
        .into_iter()
        .filter(|f| f.departs_on(date))
        .cloned()
        .collect()
}

/// Both bounds inclusive.
pub fn between<'a>(
    flights: impl IntoIterator<Item = &'a Flight>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Flight> {
    flights
        .into_iter()
        .filter(|f| f.departs_between(start, end))
        .cloned()
        .collect()
}

pub fn on_route<'a>(
    flights: impl IntoIterator<Item = &'a Flight>,
    origin: &str,
    destination: &str,
    date: NaiveDate,
) -> Vec<Flight> {
    flights
        .into_iter()
        .filter(|f| f.serves(origin, destination) && f.departs_on(date))
        .cloned()
        .collect()
}

pub fn departing_after<'a>(flights: impl IntoIterator<Item = &'a Flight>, now: DateTime<Utc>) -> Vec<Flight> {
    let mut upcoming: Vec<Flight> = flights
        .into_iter()
        .filter(|f| f.departure_time > now)
        .cloned()
        .collect();
    upcoming.sort_by_key(|f| f.departure_time);
    upcoming
}
