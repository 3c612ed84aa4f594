use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pii::Masked;

/// A traveller. Identity fields are fixed once the passenger is created; seats and
/// reservations hold their own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: Masked<String>,
    phone: String,
    passport_number: Masked<String>,
    registered_at: DateTime<Utc>,
}

impl Passenger {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        passport_number: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: Masked::new(email.into()),
            phone: phone.into(),
            passport_number: Masked::new(passport_number.into()),
            registered_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> &Masked<String> {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn passport_number(&self) -> &Masked<String> {
        &self.passport_number
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_identity() {
        let a = Passenger::new("John", "Doe", "john@example.com", "+1234567890", "P123456");
        let b = Passenger::new("John", "Doe", "john@example.com", "+1234567890", "P123456");

        assert_eq!(a.full_name(), "John Doe");
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_output_masks_contact_data() {
        let passenger = Passenger::new("Jane", "Smith", "jane@example.com", "+0987654321", "P654321");
        let debug = format!("{:?}", passenger);

        assert!(debug.contains("Jane"));
        assert!(!debug.contains("jane@example.com"));
        assert!(!debug.contains("P654321"));
    }
}
