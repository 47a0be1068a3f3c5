//! Month-year reporting periods
//!
//! Scorecard rows stamp each observation with a "Jan-2024" style period.
//! Periods order chronologically, so the latest period of a series is just
//! its maximum.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use thiserror::Error;

/// Error for period texts that do not parse as month-year.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid period `{text}` (expected month-year such as `Jan-2024`)")]
pub struct PeriodParseError {
    pub text: String,
}

/// A reporting period: one calendar month.
///
/// Stored as the first day of the month so chronological ordering and
/// equality come straight from the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(NaiveDate);

impl Period {
    /// Parse a "Jan-2024" style month-year text.
    ///
    /// Month abbreviations are matched case-insensitively ("jan-2024" and
    /// "JAN-2024" both parse). Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, PeriodParseError> {
        let trimmed = text.trim();
        NaiveDate::parse_from_str(&format!("01-{trimmed}"), "%d-%b-%Y")
            .map(Self)
            .map_err(|_| PeriodParseError {
                text: trimmed.to_string(),
            })
    }

    /// Construct from a year and 1-based month number.
    ///
    /// Returns `None` for month numbers outside 1..=12.
    pub fn from_ym(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%b-%Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_year() {
        let period = Period::parse("Jan-2024").unwrap();
        assert_eq!(period.year(), 2024);
        assert_eq!(period.month(), 1);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let lower = Period::parse("mar-2023").unwrap();
        let upper = Period::parse("MAR-2023").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.month(), 3);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let period = Period::parse("  Dec-2022 ").unwrap();
        assert_eq!(period.year(), 2022);
        assert_eq!(period.month(), 12);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Period::parse("2024-01").is_err());
        assert!(Period::parse("January2024").is_err());
        assert!(Period::parse("Foo-2024").is_err());
        assert!(Period::parse("").is_err());
    }

    #[test]
    fn test_parse_error_carries_text() {
        let err = Period::parse("Smarch-2024").unwrap_err();
        assert_eq!(err.text, "Smarch-2024");
        assert!(err.to_string().contains("Smarch-2024"));
    }

    #[test]
    fn test_periods_order_chronologically() {
        let jan = Period::parse("Jan-2024").unwrap();
        let feb = Period::parse("Feb-2024").unwrap();
        let dec_prior = Period::parse("Dec-2023").unwrap();

        assert!(dec_prior < jan);
        assert!(jan < feb);
        assert_eq!(vec![feb, dec_prior, jan].iter().max(), Some(&feb));
    }

    #[test]
    fn test_display_round_trips() {
        for text in ["Jan-2024", "Jun-1999", "Dec-2030"] {
            let period = Period::parse(text).unwrap();
            assert_eq!(period.to_string(), text);
        }
    }

    #[test]
    fn test_from_ym() {
        let period = Period::from_ym(2024, 2).unwrap();
        assert_eq!(period.to_string(), "Feb-2024");
        assert!(Period::from_ym(2024, 13).is_none());
        assert!(Period::from_ym(2024, 0).is_none());
    }
}
