//! The solar event primitives zmanim are derived from.
//!
//! An [`AstronomicalCalendar`] answers for one civil date at one location.
//! Computing solar position is left to implementors; this crate ships a
//! data-backed implementation in [`crate::solar_table`].

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::geo::GeoLocation;

/// Zenith of the geometric horizon, in degrees.
pub const GEOMETRIC_ZENITH: f64 = 90.0;

/// Sunrise, sunset and related events for a single date and location.
///
/// Every event is `None` when it does not occur that day (polar day or
/// night, or a degree offset the sun never reaches).
pub trait AstronomicalCalendar {
    fn geo_location(&self) -> &GeoLocation;

    fn date(&self) -> NaiveDate;

    /// Sunrise adjusted for the location's elevation.
    fn sunrise(&self) -> Option<DateTime<Utc>>;

    fn sea_level_sunrise(&self) -> Option<DateTime<Utc>>;

    /// Sunset adjusted for the location's elevation.
    fn sunset(&self) -> Option<DateTime<Utc>>;

    fn sea_level_sunset(&self) -> Option<DateTime<Utc>>;

    /// Time in the morning when the sun's center is at `offset_zenith` degrees.
    fn sunrise_offset_by_degrees(&self, offset_zenith: f64) -> Option<DateTime<Utc>>;

    /// Time in the evening when the sun's center is at `offset_zenith` degrees.
    fn sunset_offset_by_degrees(&self, offset_zenith: f64) -> Option<DateTime<Utc>>;

    /// Solar noon.
    fn sun_transit(&self) -> Option<DateTime<Utc>>;

    /// One twelfth of the span from `start` to `end`.
    fn temporal_hour(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Option<Duration> {
        Some((end? - start?) / 12)
    }
}
