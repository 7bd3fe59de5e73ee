use crate::error::ProtoError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The calendar date a batch of orders is scoped to, always rendered as
/// ISO `YYYY-MM-DD` on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyDate(NaiveDate);

impl PartyDate {
    /// Parse an ISO date without any bound check. Used for dates that
    /// were already validated when they were stored.
    pub fn parse(input: &str) -> Result<Self, ProtoError> {
        if input.is_empty() {
            return Err(ProtoError::EmptyDate);
        }
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(PartyDate)
            .map_err(|_| ProtoError::InvalidDate(input.to_string()))
    }

    /// Validate a user-selected date against the minimum bound: party
    /// dates may not lie in the past relative to `today`.
    pub fn select(input: &str, today: NaiveDate) -> Result<Self, ProtoError> {
        let date = Self::parse(input)?;
        if date.0 < today {
            return Err(ProtoError::PastDate(date.0));
        }
        Ok(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for PartyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn select_rejects_past_dates() {
        let today = day("2026-08-27");
        assert_eq!(
            PartyDate::select("2026-08-26", today),
            Err(ProtoError::PastDate(day("2026-08-26")))
        );
        assert!(PartyDate::select("2026-08-27", today).is_ok());
        assert!(PartyDate::select("2026-09-15", today).is_ok());
    }

    #[test]
    fn select_rejects_empty_and_garbage() {
        let today = day("2026-08-27");
        assert_eq!(PartyDate::select("", today), Err(ProtoError::EmptyDate));
        assert!(matches!(
            PartyDate::select("next friday", today),
            Err(ProtoError::InvalidDate(_))
        ));
    }

    #[test]
    fn round_trips_iso_format() {
        let date = PartyDate::parse("2026-09-01").unwrap();
        assert_eq!(date.to_string(), "2026-09-01");
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2026-09-01\"");
    }
}
