use jetway_catalog::Flight;
use serde::Serialize;

/// Aggregate counters over every flight in the registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStats {
    pub total_flights: usize,
    pub total_reservations: usize,
    pub total_seats: usize,
    pub available_seats: usize,
    pub reserved_seats: usize,
    /// Percentage in `[0, 100]`; zero when there are no seats at all.
    pub occupancy_rate: f64,
}

impl SystemStats {
    pub fn new(total_flights: usize, total_reservations: usize, total_seats: usize, available_seats: usize) -> Self {
        let reserved_seats = total_seats.saturating_sub(available_seats);
        let occupancy_rate = if total_seats == 0 {
            0.0
        } else {
            reserved_seats as f64 / total_seats as f64 * 100.0
        };

        Self {
            total_flights,
            total_reservations,
            total_seats,
            available_seats,
            reserved_seats,
            occupancy_rate,
        }
    }

    pub fn collect<'a>(flights: impl IntoIterator<Item = &'a Flight>, total_reservations: usize) -> Self {
        let (count, total, available) = flights.into_iter().fold((0, 0, 0), |(n, total, available), f| {
            (n + 1, total + f.total_seats(), available + f.available_count())
        });
        Self::new(count, total_reservations, total, available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy() {
        let stats = SystemStats::new(2, 3, 200, 150);
        assert_eq!(stats.reserved_seats, 50);
        assert!((stats.occupancy_rate - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_seats_means_zero_occupancy() {
        let stats = SystemStats::new(0, 0, 0, 0);
        assert_eq!(stats.reserved_seats, 0);
        assert_eq!(stats.occupancy_rate, 0.0);
    }
}
