use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A wrapper for passenger data that must not show up in logs.
///
/// `Debug` and `Display` print a fixed mask; serialization writes the real value
/// so API responses stay usable.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl From<String> for Masked<String> {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Masked<String> {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_hides_value_in_debug_and_display() {
        let email = Masked::new("jane@example.com".to_string());

        assert_eq!(format!("{:?}", email), "********");
        assert_eq!(email.to_string(), "********");
        assert_eq!(email.expose(), "jane@example.com");
    }

    #[test]
    fn test_masked_serializes_real_value() {
        let passport: Masked<String> = "P123456".into();
        let json = serde_json::to_string(&passport).unwrap();
        assert_eq!(json, "\"P123456\"");

        let back: Masked<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, passport);
    }
}
