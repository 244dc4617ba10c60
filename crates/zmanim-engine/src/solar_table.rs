//! Precomputed solar events, loaded from JSON.
//!
//! A [`SolarTable`] holds the events an ephemeris produced for one date at
//! one location. Degree-offset events are looked up by zenith.
//!
//! ```json
//! {
//!   "date": "2024-03-20",
//!   "sea_level_sunrise": "2024-03-20T11:00:00Z",
//!   "sea_level_sunset": "2024-03-20T23:00:00Z",
//!   "degree_events": [
//!     { "zenith": 98.5, "sunset": "2024-03-20T23:40:00Z" }
//!   ]
//! }
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::astronomical::AstronomicalCalendar;
use crate::error::Result;
use crate::geo::GeoLocation;

/// Two zeniths closer than this are the same lookup key.
const ZENITH_TOLERANCE: f64 = 1e-6;

/// Morning and evening times for one zenith.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeEvent {
    pub zenith: f64,
    #[serde(default)]
    pub sunrise: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sunset: Option<DateTime<Utc>>,
}

/// Solar events for one date. Missing fields deserialize as absent events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarEvents {
    pub date: NaiveDate,
    #[serde(default)]
    pub sunrise: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sea_level_sunrise: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sunset: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sea_level_sunset: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sun_transit: Option<DateTime<Utc>>,
    #[serde(default)]
    pub degree_events: Vec<DegreeEvent>,
}

impl SolarEvents {
    /// A day with no events at all.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            sunrise: None,
            sea_level_sunrise: None,
            sunset: None,
            sea_level_sunset: None,
            sun_transit: None,
            degree_events: Vec::new(),
        }
    }
}

/// An [`AstronomicalCalendar`] backed by precomputed [`SolarEvents`].
#[derive(Debug, Clone, PartialEq)]
pub struct SolarTable {
    location: GeoLocation,
    events: SolarEvents,
}

impl SolarTable {
    /// Table for `events` observed at `location`.
    pub fn new(location: GeoLocation, events: SolarEvents) -> Self {
        Self { location, events }
    }

    /// Parse a [`SolarEvents`] JSON document for `location`.
    ///
    /// # Errors
    /// Returns `ZmanimError::SolarData` if the JSON is malformed or a
    /// timestamp is not RFC 3339.
    pub fn from_json(location: GeoLocation, json: &str) -> Result<Self> {
        let events: SolarEvents = serde_json::from_str(json)?;
        Ok(Self::new(location, events))
    }

    /// The raw events backing this table.
    pub fn events(&self) -> &SolarEvents {
        &self.events
    }

    fn degree_event(&self, zenith: f64) -> Option<&DegreeEvent> {
        let found = self
            .events
            .degree_events
            .iter()
            .find(|e| (e.zenith - zenith).abs() < ZENITH_TOLERANCE);
        if found.is_none() {
            tracing::debug!(zenith, date = %self.events.date, "no solar event recorded for zenith");
        }
        found
    }
}

impl AstronomicalCalendar for SolarTable {
    fn geo_location(&self) -> &GeoLocation {
        &self.location
    }

    fn date(&self) -> NaiveDate {
        self.events.date
    }

    fn sunrise(&self) -> Option<DateTime<Utc>> {
        self.events.sunrise
    }

    fn sea_level_sunrise(&self) -> Option<DateTime<Utc>> {
        self.events.sea_level_sunrise
    }

    fn sunset(&self) -> Option<DateTime<Utc>> {
        self.events.sunset
    }

    fn sea_level_sunset(&self) -> Option<DateTime<Utc>> {
        self.events.sea_level_sunset
    }

    fn sunrise_offset_by_degrees(&self, offset_zenith: f64) -> Option<DateTime<Utc>> {
        self.degree_event(offset_zenith)?.sunrise
    }

    fn sunset_offset_by_degrees(&self, offset_zenith: f64) -> Option<DateTime<Utc>> {
        self.degree_event(offset_zenith)?.sunset
    }

    fn sun_transit(&self) -> Option<DateTime<Utc>> {
        self.events.sun_transit
    }
}
