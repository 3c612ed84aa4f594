pub mod seat;
pub mod aircraft;
pub mod flight;
pub mod pricing;

pub use seat::{Seat, SeatClass, SeatOccupant};
pub use aircraft::{Aircraft, AircraftType};
pub use flight::{Flight, FlightStatus};
