//! Halachic times (zmanim) derived from an [`AstronomicalCalendar`].
//!
//! Most zmanim are a number of shaos zmaniyos (temporal hours, 1/12 of the
//! day) after the start of the day, where the day runs either from sunrise
//! to sunset (GRA) or from alos to tzais at 72 minutes (MGA). Every method
//! returns `None` when a sunrise or sunset it depends on does not occur.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::astronomical::{AstronomicalCalendar, GEOMETRIC_ZENITH};
use crate::hebrew_date::JewishDate;
use crate::jewish_calendar::{CalendarConfig, JewishCalendar};

/// Engine settings read on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZmanimConfig {
    /// Minutes before sea-level sunset that candles are lit.
    pub candle_lighting_offset_minutes: f64,
    /// Use elevation-adjusted sunrise/sunset instead of sea level.
    pub use_elevation: bool,
}

impl Default for ZmanimConfig {
    fn default() -> Self {
        Self {
            candle_lighting_offset_minutes: 18.0,
            use_elevation: false,
        }
    }
}

/// How alos or tzais is computed.
///
/// A zero `degrees` means plain sunrise/sunset. When `zmanis_offset_minutes`
/// is non-zero it is applied and `offset_minutes` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ZmanOptions {
    /// Degrees below the geometric horizon.
    #[serde(default)]
    pub degrees: f64,
    /// Fixed clock minutes.
    #[serde(default)]
    pub offset_minutes: f64,
    /// Minutes scaled by the ratio of the GRA shaah zmanis to 60 minutes.
    #[serde(default)]
    pub zmanis_offset_minutes: f64,
}

impl ZmanOptions {
    /// Tzais when the sun is 8.5° below the horizon.
    pub const TZAIS_DEFAULT: Self = Self::degrees(8.5);

    /// Alos when the sun is 16.1° below the horizon.
    pub const ALOS_DEFAULT: Self = Self::degrees(16.1);

    pub const fn degrees(degrees: f64) -> Self {
        Self {
            degrees,
            offset_minutes: 0.0,
            zmanis_offset_minutes: 0.0,
        }
    }

    pub const fn offset(offset_minutes: f64) -> Self {
        Self {
            degrees: 0.0,
            offset_minutes,
            zmanis_offset_minutes: 0.0,
        }
    }

    pub const fn zmanis_offset(zmanis_offset_minutes: f64) -> Self {
        Self {
            degrees: 0.0,
            offset_minutes: 0.0,
            zmanis_offset_minutes,
        }
    }
}

/// Which tzais closes the day in [`ZmanimCalendar::is_assur_bemelacha`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Tzais {
    /// [`ZmanOptions::TZAIS_DEFAULT`].
    #[default]
    Default,
    /// Computed from these options.
    Options(ZmanOptions),
    /// A tzais the caller already knows.
    At(DateTime<Utc>),
}

/// Computes zmanim for the date and location of an [`AstronomicalCalendar`].
///
/// The calendar is immutable. A configuration change builds a new value via
/// [`ZmanimCalendar::with_config`].
#[derive(Debug, Clone)]
pub struct ZmanimCalendar<A> {
    astronomical: A,
    config: ZmanimConfig,
}

impl<A: AstronomicalCalendar> ZmanimCalendar<A> {
    /// Engine with [`ZmanimConfig::default`].
    pub fn new(astronomical: A) -> Self {
        Self {
            astronomical,
            config: ZmanimConfig::default(),
        }
    }

    /// Same solar data under a different config.
    pub fn with_config(self, config: ZmanimConfig) -> Self {
        Self { config, ..self }
    }

    /// The config every zman reads.
    pub fn config(&self) -> ZmanimConfig {
        self.config
    }

    /// The solar primitives zmanim are derived from.
    pub fn astronomical(&self) -> &A {
        &self.astronomical
    }

    // -----------------------------------------------------------------------
    // Sunrise and sunset
    // -----------------------------------------------------------------------

    /// Sea-level sunrise, or elevation-adjusted sunrise when `use_elevation` is set.
    pub fn elevation_adjusted_sunrise(&self) -> Option<DateTime<Utc>> {
        if self.config.use_elevation {
            self.astronomical.sunrise()
        } else {
            self.astronomical.sea_level_sunrise()
        }
    }

    /// Sea-level sunset, or elevation-adjusted sunset when `use_elevation` is set.
    pub fn elevation_adjusted_sunset(&self) -> Option<DateTime<Utc>> {
        if self.config.use_elevation {
            self.astronomical.sunset()
        } else {
            self.astronomical.sea_level_sunset()
        }
    }

    /// Sunrise; alias of [`Self::elevation_adjusted_sunrise`].
    pub fn hanetz(&self) -> Option<DateTime<Utc>> {
        self.elevation_adjusted_sunrise()
    }

    /// Sunset; alias of [`Self::elevation_adjusted_sunset`].
    pub fn shkia(&self) -> Option<DateTime<Utc>> {
        self.elevation_adjusted_sunset()
    }

    // -----------------------------------------------------------------------
    // Alos and tzais
    // -----------------------------------------------------------------------

    /// Nightfall. See [`ZmanOptions`] for how the options combine.
    pub fn tzais(&self, opts: ZmanOptions) -> Option<DateTime<Utc>> {
        let sunset = if opts.degrees == 0.0 {
            self.elevation_adjusted_sunset()
        } else {
            self.astronomical
                .sunset_offset_by_degrees(GEOMETRIC_ZENITH + opts.degrees)
        };

        if opts.zmanis_offset_minutes != 0.0 {
            self.offset_by_minutes_zmanis(sunset, opts.zmanis_offset_minutes)
        } else {
            offset_by_minutes(sunset, opts.offset_minutes)
        }
    }

    /// Rabbeinu Tam: 72 fixed minutes after sunset.
    pub fn tzais_72(&self) -> Option<DateTime<Utc>> {
        self.tzais(ZmanOptions::offset(72.0))
    }

    /// Dawn. Offsets count backwards from sunrise.
    pub fn alos(&self, opts: ZmanOptions) -> Option<DateTime<Utc>> {
        let sunrise = if opts.degrees == 0.0 {
            self.elevation_adjusted_sunrise()
        } else {
            self.astronomical
                .sunrise_offset_by_degrees(GEOMETRIC_ZENITH + opts.degrees)
        };

        if opts.zmanis_offset_minutes != 0.0 {
            self.offset_by_minutes_zmanis(sunrise, -opts.zmanis_offset_minutes)
        } else {
            offset_by_minutes(sunrise, -opts.offset_minutes)
        }
    }

    /// 72 fixed minutes before sunrise.
    pub fn alos_72(&self) -> Option<DateTime<Utc>> {
        self.alos(ZmanOptions::offset(72.0))
    }

    /// Solar noon.
    pub fn chatzos(&self) -> Option<DateTime<Utc>> {
        self.astronomical.sun_transit()
    }

    /// `candle_lighting_offset_minutes` before sea-level sunset, on any day of the week.
    pub fn candle_lighting(&self) -> Option<DateTime<Utc>> {
        offset_by_minutes(
            self.astronomical.sea_level_sunset(),
            -self.config.candle_lighting_offset_minutes,
        )
    }

    // -----------------------------------------------------------------------
    // Shema and tefila
    // -----------------------------------------------------------------------

    /// Latest Shema: 3 shaos zmaniyos into the given day.
    pub fn sof_zman_shma(
        &self,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        self.shaos_into_day(Some(day_start), Some(day_end), 3.0)
    }

    /// Latest Shema over a sunrise-to-sunset day.
    pub fn sof_zman_shma_gra(&self) -> Option<DateTime<Utc>> {
        self.sof_zman_shma(
            self.elevation_adjusted_sunrise()?,
            self.elevation_adjusted_sunset()?,
        )
    }

    /// Latest Shema over a day from `alos_72` to `tzais_72`.
    pub fn sof_zman_shma_mga(&self) -> Option<DateTime<Utc>> {
        self.sof_zman_shma(self.alos_72()?, self.tzais_72()?)
    }

    /// Latest morning prayer: 4 shaos zmaniyos into the given day.
    pub fn sof_zman_tfila(
        &self,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        self.shaos_into_day(Some(day_start), Some(day_end), 4.0)
    }

    /// Latest tefila over a sunrise-to-sunset day.
    pub fn sof_zman_tfila_gra(&self) -> Option<DateTime<Utc>> {
        self.sof_zman_tfila(
            self.elevation_adjusted_sunrise()?,
            self.elevation_adjusted_sunset()?,
        )
    }

    /// Latest tefila over a day from `alos_72` to `tzais_72`.
    pub fn sof_zman_tfila_mga(&self) -> Option<DateTime<Utc>> {
        self.sof_zman_tfila(self.alos_72()?, self.tzais_72()?)
    }

    // -----------------------------------------------------------------------
    // Mincha
    // -----------------------------------------------------------------------

    /// Earliest mincha, 6.5 shaos zmaniyos into the day. Missing bounds
    /// default to elevation-adjusted sunrise and sunset.
    pub fn mincha_gedola(
        &self,
        day_start: Option<DateTime<Utc>>,
        day_end: Option<DateTime<Utc>>,
    ) -> Option<DateTime<Utc>> {
        self.shaos_into_day_or_sun(day_start, day_end, 6.5)
    }

    /// Preferred mincha, 9.5 shaos zmaniyos into the day.
    pub fn mincha_ketana(
        &self,
        day_start: Option<DateTime<Utc>>,
        day_end: Option<DateTime<Utc>>,
    ) -> Option<DateTime<Utc>> {
        self.shaos_into_day_or_sun(day_start, day_end, 9.5)
    }

    /// 10.75 shaos zmaniyos into the day, 1.25 before its end.
    pub fn plag_hamincha(
        &self,
        day_start: Option<DateTime<Utc>>,
        day_end: Option<DateTime<Utc>>,
    ) -> Option<DateTime<Utc>> {
        self.shaos_into_day_or_sun(day_start, day_end, 10.75)
    }

    // -----------------------------------------------------------------------
    // Shaah zmanis
    // -----------------------------------------------------------------------

    /// One twelfth of the day from `day_start` to `day_end`.
    pub fn shaah_zmanis(
        &self,
        day_start: Option<DateTime<Utc>>,
        day_end: Option<DateTime<Utc>>,
    ) -> Option<Duration> {
        self.astronomical.temporal_hour(day_start, day_end)
    }

    /// Sunrise to sunset.
    pub fn shaah_zmanis_gra(&self) -> Option<Duration> {
        self.shaah_zmanis(
            self.elevation_adjusted_sunrise(),
            self.elevation_adjusted_sunset(),
        )
    }

    /// 72 minutes before sunrise to 72 minutes after sunset.
    pub fn shaah_zmanis_mga(&self) -> Option<Duration> {
        self.shaah_zmanis(self.alos_72(), self.tzais_72())
    }

    /// Day bounded by alos and tzais computed with the same degrees and fixed offset.
    pub fn shaah_zmanis_by_degrees_and_offset(
        &self,
        degrees: f64,
        offset_minutes: f64,
    ) -> Option<Duration> {
        let opts = ZmanOptions {
            degrees,
            offset_minutes,
            zmanis_offset_minutes: 0.0,
        };
        self.shaah_zmanis(self.alos(opts), self.tzais(opts))
    }

    // -----------------------------------------------------------------------
    // Melacha
    // -----------------------------------------------------------------------

    /// Whether melacha is forbidden at `current_time`.
    ///
    /// True before `tzais` on a Shabbos or Yom Tov, or from sunset on the
    /// eve of one. The Hebrew date is the civil date of `current_time` in the
    /// location's timezone. Returns `None` when sunset or tzais is missing.
    pub fn is_assur_bemelacha(
        &self,
        current_time: DateTime<Utc>,
        tzais: Tzais,
        in_israel: bool,
    ) -> Option<bool> {
        let tzais_time = match tzais {
            Tzais::Default => self.tzais(ZmanOptions::TZAIS_DEFAULT),
            Tzais::Options(opts) => self.tzais(opts),
            Tzais::At(time) => Some(time),
        }?;
        let sunset = self.elevation_adjusted_sunset()?;

        let local_date = current_time
            .with_timezone(&self.astronomical.geo_location().time_zone())
            .date_naive();
        let jewish_date = match JewishDate::from_gregorian(local_date) {
            Ok(date) => date,
            Err(e) => {
                tracing::debug!(error = %e, "cannot classify date for melacha check");
                return None;
            }
        };
        let config = CalendarConfig {
            in_israel,
            ..CalendarConfig::default()
        };
        let calendar = JewishCalendar::new(jewish_date, config);

        Some(
            (current_time <= tzais_time && calendar.is_assur_bemelacha())
                || (current_time >= sunset && calendar.is_tomorrow_assur_bemelacha()),
        )
    }

    // -----------------------------------------------------------------------
    // Arithmetic
    // -----------------------------------------------------------------------

    fn shaos_into_day_or_sun(
        &self,
        day_start: Option<DateTime<Utc>>,
        day_end: Option<DateTime<Utc>>,
        shaos: f64,
    ) -> Option<DateTime<Utc>> {
        let day_start = day_start.or_else(|| self.elevation_adjusted_sunrise());
        let day_end = day_end.or_else(|| self.elevation_adjusted_sunset());
        self.shaos_into_day(day_start, day_end, shaos)
    }

    fn shaos_into_day(
        &self,
        day_start: Option<DateTime<Utc>>,
        day_end: Option<DateTime<Utc>>,
        shaos: f64,
    ) -> Option<DateTime<Utc>> {
        let shaah_zmanis = self.astronomical.temporal_hour(day_start, day_end)?;
        let start = day_start?;
        let micros = shaah_zmanis.num_microseconds()? as f64 * shaos;
        Some(start + Duration::microseconds(micros.round() as i64))
    }

    /// Shift `time` by `minutes` scaled to the length of the GRA shaah zmanis.
    fn offset_by_minutes_zmanis(
        &self,
        time: Option<DateTime<Utc>>,
        minutes: f64,
    ) -> Option<DateTime<Utc>> {
        let time = time?;
        let Some(shaah_zmanis) = self.shaah_zmanis_gra() else {
            tracing::debug!(date = %self.astronomical.date(), "no shaah zmanis; zmanis offset unavailable");
            return None;
        };
        let skew = shaah_zmanis.num_microseconds()? as f64 / HOUR_MICROS;
        offset_by_minutes(Some(time), minutes * skew)
    }
}

const HOUR_MICROS: f64 = 3_600_000_000.0;

fn minutes_to_duration(minutes: f64) -> Duration {
    Duration::microseconds((minutes * 60_000_000.0).round() as i64)
}

fn offset_by_minutes(time: Option<DateTime<Utc>>, minutes: f64) -> Option<DateTime<Utc>> {
    match time {
        Some(time) => Some(time + minutes_to_duration(minutes)),
        None => {
            tracing::debug!("base sunrise/sunset missing; zman unavailable");
            None
        }
    }
}
