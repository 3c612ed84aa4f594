pub mod pii;
pub mod models;

pub use models::passenger::Passenger;
pub use pii::Masked;
