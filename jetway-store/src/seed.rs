//! Demo schedule for local runs and front-end development.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use jetway_catalog::{AircraftType, Flight};
use jetway_order::ReservationRegistry;
use tracing::info;

/// (day offset, hour, minute) relative to midnight UTC of the seeding day.
type Slot = (i64, i64, i64);

/// Number, origin, destination, departure, arrival, aircraft, base fare in cents.
type SampleFlight = (&'static str, &'static str, &'static str, Slot, Slot, AircraftType, i64);

#[rustfmt::skip]
const SCHEDULE: &[SampleFlight] = &[
    ("TK001", "IST", "JFK", (0, 10, 30), (0, 18, 45), AircraftType::Boeing777, 89999),
    ("LH440", "FRA", "JFK", (0, 14, 15), (0, 22, 30), AircraftType::Boeing777, 75000),
    ("TK003", "IST", "LHR", (1, 8, 0), (1, 11, 30), AircraftType::Boeing737, 29999),
    ("BA100", "LHR", "JFK", (1, 12, 45), (1, 20, 15), AircraftType::Boeing777, 95000),
    ("AF007", "CDG", "JFK", (7, 9, 30), (7, 17, 45), AircraftType::Boeing777, 82550),
    ("TK011", "IST", "LAX", (7, 15, 20), (8, 8, 30), AircraftType::Boeing777, 125000),
];

/// Midnight UTC of `now`'s date, shifted by whole days plus a time of day.
fn slot(now: DateTime<Utc>, (days, hour, minute): Slot) -> DateTime<Utc> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    midnight + Duration::days(days) + Duration::minutes(hour * 60 + minute)
}

/// Loads the demo schedule relative to `now` and returns how many flights were added.
///
/// Every flight gets its own aircraft. The daily IST→DXB series starts two days
/// out and runs for `dated_days` days, numbered TK102, TK103, ...
pub fn seed_sample_flights(
    registry: &ReservationRegistry,
    now: DateTime<Utc>,
    dated_days: u32,
) -> usize {
    let mut added = 0;

    for &(number, origin, destination, departs, arrives, aircraft, base_price_cents) in SCHEDULE {
        registry.add_flight(Flight::new(
            number,
            origin,
            destination,
            slot(now, departs),
            slot(now, arrives),
            aircraft.build(),
            base_price_cents,
        ));
        added += 1;
    }

    for offset in 2..2 + i64::from(dated_days) {
        let hour = 6 + offset % 12;
        registry.add_flight(Flight::new(
            format!("TK{}", 100 + offset),
            "IST",
            "DXB",
            slot(now, (offset, hour, 0)),
            slot(now, (offset, hour + 4, 30)),
            AircraftType::AirbusA320.build(),
            19999 + offset * 5000,
        ));
        added += 1;
    }

    info!("Sample data loaded: {} flights", added);
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, TimeZone};

    #[test]
    fn test_seed_schedule() {
        let registry = ReservationRegistry::new();
        let now = Utc.with_ymd_and_hms(2024, 12, 20, 7, 0, 0).unwrap();

        let added = seed_sample_flights(&registry, now, 5);
        assert_eq!(added, 11);
        assert_eq!(registry.flights().len(), 11);

        let today = now.date_naive();
        assert_eq!(registry.todays_flights_at(today).len(), 2);
        assert_eq!(registry.tomorrows_flights_at(today).len(), 2);

        let day_after = today.checked_add_days(Days::new(2)).unwrap();
        let dxb = registry.search_flights("IST", "DXB", day_after);
        assert_eq!(dxb.len(), 1);
        assert_eq!(dxb[0].flight_number, "TK102");
        assert_eq!(dxb[0].total_seats(), 168);

        let lax = registry.flight("TK011").unwrap();
        assert_eq!(lax.arrival_time, Utc.with_ymd_and_hms(2024, 12, 28, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_seeded_flights_do_not_share_seats() {
        let registry = ReservationRegistry::new();
        seed_sample_flights(&registry, Utc::now(), 0);

        let passenger = sample_passenger();
        registry.reserve("TK001", "1A", passenger.clone()).unwrap();

        assert_eq!(registry.flight("TK001").unwrap().reserved_count(), 1);
        assert_eq!(registry.flight("LH440").unwrap().reserved_count(), 0);
        assert!(registry.reserve("LH440", "1A", passenger).is_ok());
    }

    fn sample_passenger() -> jetway_shared::Passenger {
        jetway_shared::Passenger::new("John", "Doe", "john@example.com", "+1234567890", "P123456")
    }
}
