//! Molad as an instant, and the Kiddush Levana window derived from it.
//!
//! The molad is reckoned in Jerusalem local mean time. It is first read as
//! a civil time at a fixed UTC+2, then shifted by Jerusalem's local-mean-time
//! offset from UTC+2, then expressed in UTC. The zone's own offset history
//! plays no part.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::geo::GeoLocation;
use crate::hebrew_date::{HebrewDateProvider, Molad, CHALAKIM_PER_MONTH};
use crate::jewish_calendar::JewishCalendar;

/// Fixed offset (Etc/GMT-2) the molad's clock time is read at.
const MOLAD_REFERENCE_OFFSET_HOURS: i64 = 2;

/// One chelek is 10/3 of a second.
fn chalakim_to_duration(chalakim: i64) -> Duration {
    Duration::nanoseconds(chalakim * 10_000_000_000 / 3)
}

/// The UTC instant of a molad.
pub fn molad_instant(molad: &Molad) -> DateTime<Utc> {
    let local_mean = molad.date.and_time(NaiveTime::MIN)
        + Duration::hours(i64::from(molad.hours))
        + Duration::minutes(i64::from(molad.minutes))
        + chalakim_to_duration(i64::from(molad.chalakim));

    let reference = Duration::hours(MOLAD_REFERENCE_OFFSET_HOURS);
    let lmt_offset = GeoLocation::jerusalem().longitude_time_offset() - reference;
    let standard = local_mean - lmt_offset;

    (standard - reference).and_utc()
}

impl<D: HebrewDateProvider> JewishCalendar<D> {
    /// Molad of the current month as a UTC instant.
    pub fn molad_as_datetime(&self) -> Option<DateTime<Utc>> {
        self.date().molad().map(|molad| molad_instant(&molad))
    }

    /// Earliest Kiddush Levana, three days after the molad.
    pub fn techilas_zman_kiddush_levana_3_days(&self) -> Option<DateTime<Utc>> {
        self.molad_as_datetime().map(|m| m + Duration::days(3))
    }

    /// Earliest Kiddush Levana, seven days after the molad.
    pub fn techilas_zman_kiddush_levana_7_days(&self) -> Option<DateTime<Utc>> {
        self.molad_as_datetime().map(|m| m + Duration::days(7))
    }

    /// Latest Kiddush Levana, halfway between this molad and the next.
    pub fn sof_zman_kiddush_levana_between_moldos(&self) -> Option<DateTime<Utc>> {
        let half_month = chalakim_to_duration(CHALAKIM_PER_MONTH) / 2;
        self.molad_as_datetime().map(|m| m + half_month)
    }

    /// Latest Kiddush Levana, fifteen days after the molad.
    pub fn sof_zman_kiddush_levana_15_days(&self) -> Option<DateTime<Utc>> {
        self.molad_as_datetime().map(|m| m + Duration::days(15))
    }
}
