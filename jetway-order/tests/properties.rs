use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use jetway_catalog::{Aircraft, Flight};
use jetway_order::ReservationRegistry;
use jetway_shared::Passenger;
use proptest::prelude::*;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap()
}

fn registry_from(departures: &[(i64, i64)]) -> ReservationRegistry {
    let registry = ReservationRegistry::new();
    for (i, (day, minute)) in departures.iter().enumerate() {
        let departure = base() + Duration::days(*day) + Duration::minutes(*minute);
        registry.add_flight(Flight::new(
            format!("TK{}", i + 1),
            "IST",
            "DXB",
            departure,
            departure + Duration::hours(4),
            Aircraft::new("T", "Test", 2, &["A", "B"]),
            19999,
        ));
    }
    registry
}

fn day(offset: i64) -> NaiveDate {
    (base() + Duration::days(offset)).date_naive()
}

proptest! {
    #[test]
    fn by_date_returns_exactly_matching_flights(
        departures in prop::collection::vec((0i64..20, 0i64..1440), 0..30),
        query in 0i64..20,
    ) {
        let registry = registry_from(&departures);
        let date = day(query);

        let found: Vec<String> = registry.flights_by_date(date).into_iter().map(|f| f.flight_number).collect();
        let expected: Vec<String> = registry
            .flights()
            .into_iter()
            .filter(|f| f.departure_time.date_naive() == date)
            .map(|f| f.flight_number)
            .collect();

        prop_assert_eq!(found, expected);
    }

    #[test]
    fn by_date_range_is_inclusive(
        departures in prop::collection::vec((0i64..20, 0i64..1440), 0..30),
        a in 0i64..20,
        len in 0i64..10,
    ) {
        let registry = registry_from(&departures);
        let (start, end) = (day(a), day(a + len));

        let found = registry.flights_by_date_range(start, end);
        prop_assert!(found.iter().all(|f| start <= f.departure_date() && f.departure_date() <= end));

        let expected = registry
            .flights()
            .iter()
            .filter(|f| start <= f.departure_date() && f.departure_date() <= end)
            .count();
        prop_assert_eq!(found.len(), expected);
    }

    #[test]
    fn upcoming_is_strictly_future_and_sorted(
        departures in prop::collection::vec((0i64..20, 0i64..1440), 0..30),
        now_minutes in 0i64..(20 * 1440),
    ) {
        let registry = registry_from(&departures);
        let now = base() + Duration::minutes(now_minutes);

        let upcoming = registry.upcoming_flights_from(now);
        prop_assert!(upcoming.iter().all(|f| f.departure_time > now));
        prop_assert!(upcoming.windows(2).all(|w| w[0].departure_time <= w[1].departure_time));

        let expected = registry.flights().iter().filter(|f| f.departure_time > now).count();
        prop_assert_eq!(upcoming.len(), expected);
    }

    #[test]
    fn stats_stay_consistent(
        departures in prop::collection::vec((0i64..5, 0i64..1440), 0..6),
        attempts in prop::collection::vec((0usize..6, 0usize..4, any::<bool>()), 0..40),
    ) {
        let registry = registry_from(&departures);
        let seats = ["1A", "1B", "2A", "2B"];

        for (flight, seat, cancel) in attempts {
            let number = format!("TK{}", flight + 1);
            let passenger = Passenger::new("Prop", "Test", "prop@example.com", "+1", "P1");
            if let Ok(reservation) = registry.reserve(&number, seats[seat], passenger) {
                if cancel {
                    prop_assert!(registry.cancel(reservation.id).is_ok());
                }
            }
        }

        let stats = registry.statistics();
        prop_assert_eq!(stats.available_seats + stats.reserved_seats, stats.total_seats);
        prop_assert_eq!(stats.reserved_seats, stats.total_reservations);
        prop_assert!((0.0..=100.0).contains(&stats.occupancy_rate));
        if stats.total_seats == 0 {
            prop_assert_eq!(stats.occupancy_rate, 0.0);
        }
    }
}
