//! # zmanim-engine
//!
//! Hebrew calendar holiday classification and halachic zmanim.
//!
//! The engine has two halves. The calendar half converts civil dates to
//! Hebrew dates and classifies them into holidays, fasts, Rosh Chodesh and
//! special Shabbosos, for Israel or the Diaspora. The zmanim half turns
//! sunrise/sunset primitives into halachic times using shaah zmanis
//! (temporal hour) arithmetic.
//!
//! ## Modules
//!
//! - [`hebrew_date`] — Hebrew date arithmetic, molad reckoning, `HebrewDateProvider`
//! - [`significant_day`] — Holiday/fast/special-Shabbos classifier
//! - [`jewish_calendar`] — Date + locale config with Yom Tov, melacha and Omer predicates
//! - [`molad`] — Molad instant and Kiddush Levana window
//! - [`geo`] — Locations and local mean time
//! - [`astronomical`] — `AstronomicalCalendar` solar primitives
//! - [`solar_table`] — JSON-loaded precomputed solar events
//! - [`zmanim`] — Zmanim derived from an `AstronomicalCalendar`
//! - [`limudim`] — Perek Mishnayos Yomi learning cycle
//! - [`error`] — Error types

pub mod astronomical;
pub mod error;
pub mod geo;
pub mod hebrew_date;
pub mod jewish_calendar;
pub mod limudim;
pub mod molad;
pub mod significant_day;
pub mod solar_table;
pub mod zmanim;

pub use astronomical::AstronomicalCalendar;
pub use error::ZmanimError;
pub use geo::GeoLocation;
pub use hebrew_date::{HebrewDateProvider, JewishDate, JewishMonth, Molad};
pub use jewish_calendar::{CalendarConfig, JewishCalendar};
pub use limudim::{Limud, PerekMishnayosYomi};
pub use significant_day::{SignificantDay, SignificantShabbos};
pub use solar_table::{SolarEvents, SolarTable};
pub use zmanim::{Tzais, ZmanOptions, ZmanimCalendar, ZmanimConfig};
