//! Error types for zmanim-engine operations.

use thiserror::Error;

/// Errors raised while constructing calendar and location values.
///
/// Zman computations never fail with an error: a missing sunrise or sunset
/// propagates as `None` instead.
#[derive(Error, Debug)]
pub enum ZmanimError {
    /// The Hebrew year/month/day triple does not name a real day.
    #[error("Invalid Hebrew date: year {year}, month {month}, day {day}")]
    InvalidHebrewDate { year: i32, month: u8, day: u8 },

    /// The Gregorian date falls outside the supported range.
    #[error("Invalid Gregorian date: {0}")]
    InvalidGregorianDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Latitude, longitude or elevation out of range.
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// Solar event data could not be parsed.
    #[error("Solar data error: {0}")]
    SolarData(#[from] serde_json::Error),
}

/// Convenience alias used throughout zmanim-engine.
pub type Result<T> = std::result::Result<T, ZmanimError>;
