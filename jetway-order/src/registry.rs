use crate::models::{Reservation, ReservationStatus, SeatMap};
use crate::schedule;
use crate::stats::SystemStats;
use chrono::{DateTime, Days, NaiveDate, Utc};
use jetway_catalog::{Flight, FlightStatus, Seat, SeatClass};
use jetway_core::search::FlightSearch;
use jetway_shared::Passenger;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{info, warn};
use uuid::Uuid;

/// Thread-safe flight catalog and reservation ledger.
///
/// Both maps sit behind one read-write lock. Every mutation (adding flights,
/// reserving, cancelling, administrative updates) takes the write lock for its
/// whole duration, seat mutation included, so two callers racing for the same
/// seat are serialized and the second sees it taken. Reads take the shared lock
/// and hand back owned copies.
pub struct ReservationRegistry {
    ledger: RwLock<Ledger>,
}

#[derive(Default)]
struct Ledger {
    flights: HashMap<String, Flight>,
    /// Flight numbers in the order they were first added.
    flight_order: Vec<String>,
    reservations: HashMap<Uuid, Reservation>,
}

impl Ledger {
    fn flights(&self) -> impl Iterator<Item = &Flight> + '_ {
        self.flight_order.iter().filter_map(|number| self.flights.get(number))
    }

    fn flight_mut(&mut self, flight_number: &str) -> Result<&mut Flight, ReservationError> {
        self.flights
            .get_mut(flight_number)
            .ok_or_else(|| ReservationError::FlightNotFound(flight_number.to_string()))
    }

    fn flight(&self, flight_number: &str) -> Result<&Flight, ReservationError> {
        self.flights
            .get(flight_number)
            .ok_or_else(|| ReservationError::FlightNotFound(flight_number.to_string()))
    }
}

impl ReservationRegistry {
    pub fn new() -> Self {
        Self {
            ledger: RwLock::new(Ledger::default()),
        }
    }

    /// Insert a flight, replacing any flight with the same number.
    ///
    /// A replacement comes with a fresh aircraft, so reservations held on the
    /// old one are dropped from the ledger.
    pub fn add_flight(&self, flight: Flight) {
        let mut ledger = self.ledger.write();
        let number = flight.flight_number.clone();
        let route = flight.route();

        if ledger.flights.insert(number.clone(), flight).is_none() {
            ledger.flight_order.push(number.clone());
            info!("Flight added: {} ({})", number, route);
            return;
        }

        let before = ledger.reservations.len();
        ledger.reservations.retain(|_, r| r.flight_number != number);
        let dropped = before - ledger.reservations.len();
        if dropped > 0 {
            warn!(
                flight = %number,
                "Flight replaced with {} reservations on the old aircraft dropped", dropped
            );
        }
        info!("Flight replaced: {} ({})", number, route);
    }

    /// Reserve one seat on one flight.
    ///
    /// Fails with `FlightNotFound` / `SeatNotFound` for unknown keys and with
    /// `SeatAlreadyReserved` if someone else holds the seat. The ledger is only
    /// touched on success.
    pub fn reserve(
        &self,
        flight_number: &str,
        seat_number: &str,
        passenger: Passenger,
    ) -> Result<Reservation, ReservationError> {
        let mut ledger = self.ledger.write();
        let thread = thread_label();
        info!(
            "{} attempting to reserve seat {} on flight {} for passenger {}",
            thread,
            seat_number,
            flight_number,
            passenger.full_name()
        );

        let flight = ledger.flight_mut(flight_number).inspect_err(|_| {
            warn!("{} - Flight {} not found", thread, flight_number);
        })?;

        let seat = flight.aircraft_mut().seat_mut(seat_number).ok_or_else(|| {
            warn!("{} - Seat {} not found on flight {}", thread, seat_number, flight_number);
            ReservationError::SeatNotFound {
                flight: flight_number.to_string(),
                seat: seat_number.to_string(),
            }
        })?;

        if !seat.reserve(passenger.clone()) {
            warn!(
                "{} failed to reserve seat {} on flight {} - seat already reserved",
                thread, seat_number, flight_number
            );
            return Err(ReservationError::SeatAlreadyReserved {
                flight: flight_number.to_string(),
                seat: seat_number.to_string(),
            });
        }

        let seat = seat.clone();
        let reservation = Reservation::new(flight, &seat, passenger);
        ledger.reservations.insert(reservation.id, reservation.clone());

        info!(
            reservation = %reservation.id,
            price_cents = reservation.total_price_cents,
            "{} successfully reserved seat {} on flight {} for {}",
            thread,
            seat_number,
            flight_number,
            reservation.passenger.full_name()
        );
        Ok(reservation)
    }

    /// Cancel a reservation and release its seat.
    ///
    /// Returns the removed reservation marked `CANCELLED`. A checked-in
    /// reservation cannot be cancelled. If the seat turns out to be free already
    /// the call fails with `SeatNotReserved` and the ledger entry stays.
    pub fn cancel(&self, reservation_id: Uuid) -> Result<Reservation, ReservationError> {
        let mut ledger = self.ledger.write();
        let thread = thread_label();
        info!("{} attempting to cancel reservation {}", thread, reservation_id);

        let (flight_number, seat_number, status, holder) = match ledger.reservations.get(&reservation_id) {
            Some(r) => (r.flight_number.clone(), r.seat_number.clone(), r.status, r.passenger.id()),
            None => {
                warn!("{} - Reservation {} not found", thread, reservation_id);
                return Err(ReservationError::ReservationNotFound(reservation_id));
            }
        };

        if status != ReservationStatus::Confirmed {
            warn!(
                "{} cannot cancel reservation {} in status {}",
                thread, reservation_id, status
            );
            return Err(ReservationError::InvalidTransition {
                from: status,
                to: ReservationStatus::Cancelled,
            });
        }

        // Only release the seat if this reservation's passenger still holds it.
        let released = ledger
            .flight_mut(&flight_number)?
            .aircraft_mut()
            .seat_mut(&seat_number)
            .filter(|seat| seat.passenger().map(Passenger::id) == Some(holder))
            .is_some_and(Seat::cancel_reservation);

        if !released {
            warn!(
                "{} failed to cancel reservation {} - seat not reserved",
                thread, reservation_id
            );
            return Err(ReservationError::SeatNotReserved {
                flight: flight_number,
                seat: seat_number,
            });
        }

        let mut reservation = ledger
            .reservations
            .remove(&reservation_id)
            .ok_or(ReservationError::ReservationNotFound(reservation_id))?;
        reservation.update_status(ReservationStatus::Cancelled);

        info!(
            "{} successfully cancelled reservation {} for seat {}",
            thread, reservation_id, seat_number
        );
        Ok(reservation)
    }

    /// Transition: Confirmed → CheckedIn
    pub fn check_in(&self, reservation_id: Uuid) -> Result<Reservation, ReservationError> {
        let mut ledger = self.ledger.write();
        let reservation = ledger
            .reservations
            .get_mut(&reservation_id)
            .ok_or(ReservationError::ReservationNotFound(reservation_id))?;

        if reservation.status != ReservationStatus::Confirmed {
            warn!(
                "Check-in rejected for reservation {} in status {}",
                reservation_id, reservation.status
            );
            return Err(ReservationError::InvalidTransition {
                from: reservation.status,
                to: ReservationStatus::CheckedIn,
            });
        }

        reservation.update_status(ReservationStatus::CheckedIn);
        info!("Reservation {} checked in", reservation_id);
        Ok(reservation.clone())
    }

    pub fn update_flight_status(&self, flight_number: &str, status: FlightStatus) -> Result<(), ReservationError> {
        let mut ledger = self.ledger.write();
        let flight = ledger.flight_mut(flight_number)?;
        let previous = flight.status;
        flight.status = status;
        info!("Flight {} status changed: {} -> {}", flight_number, previous, status);
        Ok(())
    }

    pub fn reschedule_flight(
        &self,
        flight_number: &str,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
    ) -> Result<(), ReservationError> {
        let mut ledger = self.ledger.write();
        let flight = ledger.flight_mut(flight_number)?;
        flight.departure_time = departure_time;
        flight.arrival_time = arrival_time;
        info!("Flight {} rescheduled to depart {}", flight_number, departure_time);
        Ok(())
    }

    /// Existing reservations keep the price they were booked at.
    pub fn update_base_price(&self, flight_number: &str, base_price_cents: i64) -> Result<(), ReservationError> {
        let mut ledger = self.ledger.write();
        let flight = ledger.flight_mut(flight_number)?;
        flight.base_price_cents = base_price_cents;
        info!("Flight {} base price set to {} cents", flight_number, base_price_cents);
        Ok(())
    }

    pub fn flight(&self, flight_number: &str) -> Option<Flight> {
        self.ledger.read().flights.get(flight_number).cloned()
    }

    /// All flights, in the order they were added.
    pub fn flights(&self) -> Vec<Flight> {
        self.ledger.read().flights().cloned().collect()
    }

    pub fn reservation(&self, reservation_id: Uuid) -> Option<Reservation> {
        self.ledger.read().reservations.get(&reservation_id).cloned()
    }

    /// All reservations in the ledger, oldest first.
    pub fn reservations(&self) -> Vec<Reservation> {
        let mut all: Vec<Reservation> = self.ledger.read().reservations.values().cloned().collect();
        all.sort_by_key(|r| (r.created_at, r.id));
        all
    }

    pub fn reservations_for_flight(&self, flight_number: &str) -> Vec<Reservation> {
        let mut matching: Vec<Reservation> = self
            .ledger
            .read()
            .reservations
            .values()
            .filter(|r| r.flight_number == flight_number)
            .cloned()
            .collect();
        matching.sort_by_key(|r| (r.created_at, r.id));
        matching
    }

    pub fn seat_map(&self, flight_number: &str) -> Result<SeatMap, ReservationError> {
        let ledger = self.ledger.read();
        Ok(SeatMap::from_flight(ledger.flight(flight_number)?))
    }

    /// Open seats on a flight, optionally limited to one class.
    pub fn available_seats(&self, flight_number: &str, class: Option<SeatClass>) -> Result<Vec<Seat>, ReservationError> {
        let ledger = self.ledger.read();
        let aircraft = ledger.flight(flight_number)?.aircraft();
        let seats = match class {
            Some(class) => aircraft.available_seats_by_class(class),
            None => aircraft.available_seats(),
        };
        Ok(seats.into_iter().cloned().collect())
    }

    pub fn flights_by_date(&self, date: NaiveDate) -> Vec<Flight> {
        schedule::on_date(self.ledger.read().flights(), date)
    }

    pub fn flights_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Flight> {
        schedule::between(self.ledger.read().flights(), start, end)
    }

    pub fn search_flights(&self, origin: &str, destination: &str, date: NaiveDate) -> Vec<Flight> {
        schedule::on_route(self.ledger.read().flights(), origin, destination, date)
    }

    pub fn search(&self, search: &FlightSearch) -> Vec<Flight> {
        match search {
            FlightSearch::OnDate(date) => self.flights_by_date(*date),
            FlightSearch::Between { start, end } => self.flights_by_date_range(*start, *end),
            FlightSearch::Route {
                origin,
                destination,
                date,
            } => self.search_flights(origin, destination, *date),
        }
    }

    pub fn todays_flights(&self) -> Vec<Flight> {
        self.todays_flights_at(today())
    }

    pub fn todays_flights_at(&self, today: NaiveDate) -> Vec<Flight> {
        self.flights_by_date(today)
    }

    pub fn tomorrows_flights(&self) -> Vec<Flight> {
        self.tomorrows_flights_at(today())
    }

    pub fn tomorrows_flights_at(&self, today: NaiveDate) -> Vec<Flight> {
        match today.checked_add_days(Days::new(1)) {
            Some(tomorrow) => self.flights_by_date(tomorrow),
            None => Vec::new(),
        }
    }

    /// Flights departing from today through the same weekday next week.
    pub fn weekly_flights(&self) -> Vec<Flight> {
        self.weekly_flights_from(today())
    }

    pub fn weekly_flights_from(&self, today: NaiveDate) -> Vec<Flight> {
        let end = today.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX);
        self.flights_by_date_range(today, end)
    }

    pub fn upcoming_flights(&self) -> Vec<Flight> {
        self.upcoming_flights_from(Utc::now())
    }

    /// Flights departing strictly after `now`, earliest first.
    pub fn upcoming_flights_from(&self, now: DateTime<Utc>) -> Vec<Flight> {
        schedule::departing_after(self.ledger.read().flights(), now)
    }

    pub fn statistics(&self) -> SystemStats {
        let ledger = self.ledger.read();
        SystemStats::collect(ledger.flights(), ledger.reservations.len())
    }
}

impl Default for ReservationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn thread_label() -> String {
    let current = std::thread::current();
    match current.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", current.id()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    #[error("Flight not found: {0}")]
    FlightNotFound(String),

    #[error("Seat {seat} not found on flight {flight}")]
    SeatNotFound {
        flight: String,
        seat: String,
    },

    #[error("Reservation not found: {0}")]
    ReservationNotFound(Uuid),

    #[error("Seat {seat} on flight {flight} is already reserved")]
    SeatAlreadyReserved {
        flight: String,
        seat: String,
    },

    #[error("Seat {seat} on flight {flight} is not reserved")]
    SeatNotReserved {
        flight: String,
        seat: String,
    },

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition {
        from: ReservationStatus,
        to: ReservationStatus,
    },
}

impl ReservationError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ReservationError::FlightNotFound(_)
                | ReservationError::SeatNotFound { .. }
                | ReservationError::ReservationNotFound(_)
        )
    }

    pub fn is_conflict(&self) -> bool {
        !self.is_not_found()
    }
}
