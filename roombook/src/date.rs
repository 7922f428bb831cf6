//! Calendar dates for whole-day reservations.
//!
//! Reservations carry a date with no time component. Operators type dates
//! as eight digits (`YYYYMMDD`); the store keeps them as ISO `YYYY-MM-DD`
//! text so that lexicographic order is chronological order.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Storage and display format for reservation dates.
const ISO_FORMAT: &str = "%Y-%m-%d";

/// A calendar date a room can be reserved for.
///
/// # Examples
///
/// ```
/// use roombook::ReservationDate;
///
/// let date = ReservationDate::parse("20301231").unwrap();
/// assert_eq!(date.to_string(), "2030-12-31");
///
/// assert!(ReservationDate::parse("2030-12-31").is_err());
/// assert!(ReservationDate::parse("20300230").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReservationDate(NaiveDate);

impl ReservationDate {
    /// Parses operator input in strict `YYYYMMDD` form.
    ///
    /// The text must be exactly eight ASCII digits naming a real calendar
    /// day. No separators, signs or surrounding whitespace are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateFormat`] if the text has the wrong
    /// length, contains non-digits, or names an impossible date.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidDateFormat {
            input: text.to_string(),
        };

        if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        // All bytes are ASCII digits, so these slices are on char boundaries.
        let year: i32 = text[0..4].parse().map_err(|_| invalid())?;
        let month: u32 = text[4..6].parse().map_err(|_| invalid())?;
        let day: u32 = text[6..8].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Rejects dates strictly before `today`.
    ///
    /// Booking for the current day is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PastDate`] if this date is earlier than `today`.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::ReservationDate;
    ///
    /// let today = ReservationDate::parse("20300115").unwrap();
    /// assert!(today.ensure_not_past(today).is_ok());
    /// assert!(ReservationDate::parse("20300114").unwrap().ensure_not_past(today).is_err());
    /// ```
    pub fn ensure_not_past(self, today: Self) -> Result<Self> {
        if self < today {
            return Err(Error::PastDate { date: self, today });
        }
        Ok(self)
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Returns the date `days` days later, if representable.
    #[must_use]
    pub fn plus_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    /// Returns the date `days` days earlier, if representable.
    #[must_use]
    pub fn minus_days(self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(Self)
    }

    /// Formats the date in the operator's `YYYYMMDD` input form.
    #[must_use]
    pub fn to_compact(self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// Converts the date to its stored text form.
    pub(crate) fn to_storage(self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    /// Reads a date back from its stored text form.
    pub(crate) fn from_storage(value: &str) -> Result<Self> {
        NaiveDate::parse_from_str(value, ISO_FORMAT)
            .map(Self)
            .map_err(|e| Error::DatabaseCorruption {
                details: format!("invalid stored date '{value}': {e}"),
            })
    }
}

impl From<NaiveDate> for ReservationDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ReservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl Serialize for ReservationDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_valid() {
        let date = ReservationDate::parse("20241016").unwrap();
        assert_eq!(date.as_naive(), NaiveDate::from_ymd_opt(2024, 10, 16).unwrap());
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(ReservationDate::parse("20240229").is_ok());
        assert!(ReservationDate::parse("20230229").is_err());
    }

    #[test]
    fn test_parse_wrong_length() {
        for input in ["", "2024101", "202410160", "2024-10-16"] {
            let err = ReservationDate::parse(input).unwrap_err();
            assert!(matches!(err, Error::InvalidDateFormat { .. }), "{input}");
        }
    }

    #[test]
    fn test_parse_non_digits() {
        for input in ["2024101a", "+2024101", " 2024101", "２０２４１０１６"] {
            assert!(ReservationDate::parse(input).is_err(), "{input}");
        }
    }

    #[test]
    fn test_parse_impossible_dates() {
        for input in ["20241301", "20241000", "20240431", "20241032"] {
            assert!(ReservationDate::parse(input).is_err(), "{input}");
        }
    }

    #[test]
    fn test_ensure_not_past() {
        let today = ReservationDate::parse("20300601").unwrap();
        let yesterday = today.minus_days(1).unwrap();
        let tomorrow = today.plus_days(1).unwrap();

        assert!(today.ensure_not_past(today).is_ok());
        assert!(tomorrow.ensure_not_past(today).is_ok());
        assert!(matches!(
            yesterday.ensure_not_past(today),
            Err(Error::PastDate { .. })
        ));
    }

    #[test]
    fn test_storage_round_trip() {
        let date = ReservationDate::parse("20300102").unwrap();
        assert_eq!(date.to_storage(), "2030-01-02");
        assert_eq!(ReservationDate::from_storage("2030-01-02").unwrap(), date);
        assert!(ReservationDate::from_storage("20300102").is_err());
    }

    #[test]
    fn test_compact_form() {
        let date = ReservationDate::parse("20300102").unwrap();
        assert_eq!(date.to_compact(), "20300102");
    }

    #[test]
    fn test_serialize_as_iso() {
        let date = ReservationDate::parse("20300102").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2030-01-02\"");
    }

    proptest! {
        // Every real date survives formatting to YYYYMMDD and parsing back
        #[test]
        fn prop_compact_form_parses_back(days in 0u64..200_000) {
            let base = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
            let date = ReservationDate::from(base.checked_add_days(Days::new(days)).unwrap());
            prop_assert_eq!(ReservationDate::parse(&date.to_compact()).unwrap(), date);
        }

        // Storage order agrees with date order
        #[test]
        fn prop_storage_order_is_chronological(a in 0u64..100_000, b in 0u64..100_000) {
            let base = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
            let da = ReservationDate::from(base.checked_add_days(Days::new(a)).unwrap());
            let db = ReservationDate::from(base.checked_add_days(Days::new(b)).unwrap());
            prop_assert_eq!(da.cmp(&db), da.to_storage().cmp(&db.to_storage()));
        }

        // Anything that is not eight ASCII digits is rejected
        #[test]
        fn prop_rejects_non_eight_digit_text(text in "[0-9]{0,7}|[0-9]{9,12}|[a-z0-9]{8}") {
            let is_eight_digits = text.len() == 8 && text.bytes().all(|b| b.is_ascii_digit());
            if !is_eight_digits {
                prop_assert!(ReservationDate::parse(&text).is_err());
            }
        }
    }
}
