//! Geographic locations for zmanim and molad calculations.

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};

use crate::error::{Result, ZmanimError};

/// A named point on the earth with its civil timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    name: String,
    latitude: f64,
    longitude: f64,
    /// Meters above sea level.
    elevation: f64,
    time_zone: Tz,
}

impl GeoLocation {
    /// # Errors
    /// Returns `ZmanimError::InvalidLocation` if latitude is outside ±90°,
    /// longitude outside ±180°, or elevation is negative or not finite.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        time_zone: Tz,
    ) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ZmanimError::InvalidLocation(format!(
                "latitude {} outside -90..=90",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ZmanimError::InvalidLocation(format!(
                "longitude {} outside -180..=180",
                longitude
            )));
        }
        if !elevation.is_finite() || elevation < 0.0 {
            return Err(ZmanimError::InvalidLocation(format!(
                "elevation {} must be a non-negative number of meters",
                elevation
            )));
        }

        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
            elevation,
            time_zone,
        })
    }

    /// Like [`GeoLocation::new`], with the timezone given as an IANA name.
    ///
    /// # Errors
    /// Returns `ZmanimError::InvalidTimezone` if the name is not a valid IANA identifier.
    pub fn with_timezone_name(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        timezone: &str,
    ) -> Result<Self> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| ZmanimError::InvalidTimezone(timezone.to_string()))?;
        Self::new(name, latitude, longitude, elevation, tz)
    }

    /// Har Habayis, the reference point for the molad.
    pub fn jerusalem() -> Self {
        Self {
            name: "Jerusalem, Israel".to_string(),
            latitude: 31.778,
            longitude: 35.2354,
            elevation: 0.0,
            time_zone: chrono_tz::Asia::Jerusalem,
        }
    }

    /// Greenwich, at sea level.
    pub fn gmt() -> Self {
        Self {
            name: "Greenwich, England".to_string(),
            latitude: 51.4772,
            longitude: 0.0,
            elevation: 0.0,
            time_zone: chrono_tz::Etc::GMT,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Degrees north, negative south.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Degrees east, negative west.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Meters above sea level.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Civil timezone of the location.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// UTC offset of the zone at `at`, ignoring daylight saving time.
    pub fn standard_time_offset(&self, at: DateTime<Utc>) -> Duration {
        self.time_zone
            .offset_from_utc_datetime(&at.naive_utc())
            .base_utc_offset()
    }

    /// Local mean time relative to UTC: four minutes per degree east of Greenwich.
    pub fn longitude_time_offset(&self) -> Duration {
        Duration::microseconds((self.longitude * 4.0 * 60.0 * 1_000_000.0).round() as i64)
    }

    /// How far local mean time runs ahead of the zone's standard time at `at`.
    pub fn local_mean_time_offset(&self, at: DateTime<Utc>) -> Duration {
        self.longitude_time_offset() - self.standard_time_offset(at)
    }
}
