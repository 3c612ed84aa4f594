use chrono::NaiveDate;
use serde::Deserialize;

use crate::input;
use crate::{CoreError, CoreResult};

/// Raw search parameters as a front end collects them (query string, form input).
#[derive(Debug, Default, Deserialize)]
pub struct FlightSearchRequest {
    pub date: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
}

/// A validated flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightSearch {
    OnDate(NaiveDate),
    Between { start: NaiveDate, end: NaiveDate },
    Route {
        origin: String,
        destination: String,
        date: NaiveDate,
    },
}

impl FlightSearchRequest {
    pub fn into_search(self) -> CoreResult<FlightSearch> {
        match (self.origin, self.destination) {
            (Some(origin), Some(destination)) => {
                let date = self
                    .date
                    .ok_or_else(|| CoreError::ValidationError("route search needs a date".to_string()))?;
                return Ok(FlightSearch::Route {
                    origin: input::airport_code(&origin)?,
                    destination: input::airport_code(&destination)?,
                    date: input::parse_date(&date)?,
                });
            }
            (None, None) => {}
            _ => {
                return Err(CoreError::ValidationError(
                    "origin and destination must be given together".to_string(),
                ))
            }
        }

        match (self.date, self.from, self.to) {
            (Some(date), None, None) => Ok(FlightSearch::OnDate(input::parse_date(&date)?)),
            (None, Some(from), Some(to)) => {
                let start = input::parse_date(&from)?;
                let end = input::parse_date(&to)?;
                if end < start {
                    return Err(CoreError::ValidationError(format!("range end {} is before start {}", end, start)));
                }
                Ok(FlightSearch::Between { start, end })
            }
            _ => Err(CoreError::ValidationError(
                "expected either date, or from and to".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, d).unwrap()
    }

    #[test]
    fn test_search_request_deserialization() {
        let json = r#"{ "origin": "ist", "destination": "jfk", "date": "2024-12-25" }"#;
        let req: FlightSearchRequest = serde_json::from_str(json).expect("Failed to deserialize");

        assert_eq!(
            req.into_search().unwrap(),
            FlightSearch::Route {
                origin: "IST".to_string(),
                destination: "JFK".to_string(),
                date: day(25),
            }
        );
    }

    #[test]
    fn test_date_and_range() {
        let on_date = FlightSearchRequest { date: Some("2024-12-24".into()), ..Default::default() };
        assert_eq!(on_date.into_search().unwrap(), FlightSearch::OnDate(day(24)));

        let range = FlightSearchRequest {
            from: Some("2024-12-20".into()),
            to: Some("2024-12-27".into()),
            ..Default::default()
        };
        assert_eq!(range.into_search().unwrap(), FlightSearch::Between { start: day(20), end: day(27) });
    }

    #[test]
    fn test_rejects_incomplete_or_malformed_requests() {
        assert!(FlightSearchRequest::default().into_search().is_err());

        let reversed = FlightSearchRequest {
            from: Some("2024-12-27".into()),
            to: Some("2024-12-20".into()),
            ..Default::default()
        };
        assert!(reversed.into_search().is_err());

        let half_route = FlightSearchRequest {
            origin: Some("IST".into()),
            date: Some("2024-12-25".into()),
            ..Default::default()
        };
        assert!(half_route.into_search().is_err());

        let bad_date = FlightSearchRequest { date: Some("12/25/2024".into()), ..Default::default() };
        assert_eq!(bad_date.into_search(), Err(CoreError::InvalidDate("12/25/2024".to_string())));
    }
}
