//! Parsing and validation of caller-supplied values.
//!
//! Every function here normalises its input (trim, upper-case codes) and returns a
//! [`CoreError`] for anything malformed, so the registry only ever sees clean keys.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::{CoreError, CoreResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn parse_date(input: &str) -> CoreResult<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| CoreError::InvalidDate(trimmed.to_string()))
}

/// Accepts either `YYYY-MM-DD HH:MM` (read as UTC) or a full RFC 3339 timestamp.
pub fn parse_date_time(input: &str) -> CoreResult<DateTime<Utc>> {
    let trimmed = input.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| CoreError::InvalidDateTime(trimmed.to_string()))
}

/// Two-character airline designator, 1-4 digit number, optional suffix letter.
pub fn flight_number(input: &str) -> CoreResult<String> {
    let normalized = input.trim().to_ascii_uppercase();
    let bytes = normalized.as_bytes();

    if bytes.len() < 3 || bytes.len() > 7 {
        return Err(CoreError::field("flight number", format!("'{}' must be 3-7 characters", normalized)));
    }
    if !bytes[..2].iter().all(u8::is_ascii_alphanumeric) {
        return Err(CoreError::field("flight number", format!("'{}' has an invalid airline designator", normalized)));
    }

    let rest = &normalized[2..];
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    let suffix = &rest[digits..];
    if digits == 0 || digits > 4 || suffix.len() > 1 || !suffix.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::field("flight number", format!("'{}' is not a valid flight number", normalized)));
    }

    Ok(normalized)
}

/// Three-letter IATA airport code.
pub fn airport_code(input: &str) -> CoreResult<String> {
    let normalized = input.trim().to_ascii_uppercase();
    if normalized.len() != 3 || !normalized.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::field("airport code", format!("'{}' must be three letters", input.trim())));
    }
    Ok(normalized)
}

/// Row number followed by a single column letter, e.g. `14C`.
pub fn seat_number(input: &str) -> CoreResult<String> {
    let normalized = input.trim().to_ascii_uppercase();
    let digits = normalized.chars().take_while(char::is_ascii_digit).count();
    let column = &normalized[digits..];

    let row_ok = (1..=3).contains(&digits) && !normalized.starts_with('0');
    let column_ok = column.len() == 1 && column.chars().all(|c| c.is_ascii_alphabetic());
    if !row_ok || !column_ok {
        return Err(CoreError::field("seat number", format!("'{}' must look like 14C", input.trim())));
    }
    Ok(normalized)
}

pub fn required(field: &'static str, input: &str) -> CoreResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoreError::field(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

pub fn price_cents(value: i64) -> CoreResult<i64> {
    if value < 0 {
        return Err(CoreError::field("base price", format!("{} must not be negative", value)));
    }
    Ok(value)
}

pub fn schedule(departure: DateTime<Utc>, arrival: DateTime<Utc>) -> CoreResult<()> {
    if arrival < departure {
        return Err(CoreError::ValidationError(format!(
            "arrival {} is before departure {}",
            arrival.format(DATE_TIME_FORMAT),
            departure.format(DATE_TIME_FORMAT)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(" 2024-12-25 ").unwrap(), NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
        assert_eq!(parse_date("25/12/2024"), Err(CoreError::InvalidDate("25/12/2024".to_string())));
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_parse_date_time_formats() {
        let plain = parse_date_time("2024-12-25 10:30").unwrap();
        assert_eq!(plain, Utc.with_ymd_and_hms(2024, 12, 25, 10, 30, 0).unwrap());

        let offset = parse_date_time("2024-12-25T12:30:00+02:00").unwrap();
        assert_eq!(offset.hour(), 10);

        assert!(matches!(parse_date_time("tomorrow"), Err(CoreError::InvalidDateTime(_))));
    }

    #[test]
    fn test_flight_number() {
        assert_eq!(flight_number(" tk001 ").unwrap(), "TK001");
        assert_eq!(flight_number("LH440").unwrap(), "LH440");
        assert_eq!(flight_number("U21234A").unwrap(), "U21234A");
        assert!(flight_number("TK").is_err());
        assert!(flight_number("TKABC").is_err());
        assert!(flight_number("TK12345").is_err());
        assert!(flight_number("T-001").is_err());
    }

    #[test]
    fn test_airport_code() {
        assert_eq!(airport_code("ist").unwrap(), "IST");
        assert!(airport_code("IS").is_err());
        assert!(airport_code("J1K").is_err());
    }

    #[test]
    fn test_seat_number() {
        assert_eq!(seat_number("14c").unwrap(), "14C");
        assert_eq!(seat_number("1A").unwrap(), "1A");
        assert!(seat_number("A1").is_err());
        assert!(seat_number("0A").is_err());
        assert!(seat_number("12").is_err());
        assert!(seat_number("12AB").is_err());
    }

    #[test]
    fn test_schedule_and_price() {
        let departure = Utc.with_ymd_and_hms(2024, 12, 25, 10, 0, 0).unwrap();
        let arrival = Utc.with_ymd_and_hms(2024, 12, 25, 18, 0, 0).unwrap();

        assert!(schedule(departure, arrival).is_ok());
        assert!(schedule(arrival, departure).is_err());
        assert!(price_cents(0).is_ok());
        assert!(price_cents(-1).is_err());
        assert!(required("first name", "   ").is_err());
    }
}
