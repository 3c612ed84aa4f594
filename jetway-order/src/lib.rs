pub mod models;
pub mod registry;
pub mod schedule;
pub mod stats;

pub use models::{Reservation, ReservationStatus, SeatMap};
pub use registry::{ReservationError, ReservationRegistry};
pub use stats::SystemStats;
