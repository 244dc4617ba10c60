//! Hebrew calendar arithmetic -- Gregorian ↔ Hebrew conversion and molad reckoning.
//!
//! All conversions go through absolute day numbers (Rata Die, where
//! 0001-01-01 Gregorian is day 1, matching `chrono`'s `num_days_from_ce`).
//! Time within the lunar cycle is counted in chalakim (parts), 1080 to the hour.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ZmanimError};

pub const CHALAKIM_PER_MINUTE: i64 = 18;
pub const CHALAKIM_PER_HOUR: i64 = 1080;
pub const CHALAKIM_PER_DAY: i64 = 25_920;
/// Mean lunation: 29 days, 12 hours and 793 chalakim.
pub const CHALAKIM_PER_MONTH: i64 = 765_433;

/// Molad of Tishrei in the year 1 (BaHaRaD), counted from the epoch.
const CHALAKIM_MOLAD_TOHU: i64 = 31_524;

/// Absolute day offset of the Hebrew epoch.
const JEWISH_EPOCH: i64 = -1_373_429;

/// Hebrew months, numbered from Nissan as the Torah counts them.
///
/// `AdarII` only exists in leap years; `Adar` is Adar I in a leap year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JewishMonth {
    Nissan = 1,
    Iyar = 2,
    Sivan = 3,
    Tammuz = 4,
    Av = 5,
    Elul = 6,
    Tishrei = 7,
    Cheshvan = 8,
    Kislev = 9,
    Teves = 10,
    Shevat = 11,
    Adar = 12,
    AdarII = 13,
}

impl JewishMonth {
    /// Month number, 1 (Nissan) through 13 (Adar II).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Inverse of [`JewishMonth::number`]; `None` outside 1..=13.
    pub fn from_number(number: u8) -> Option<Self> {
        use JewishMonth::*;
        let month = match number {
            1 => Nissan,
            2 => Iyar,
            3 => Sivan,
            4 => Tammuz,
            5 => Av,
            6 => Elul,
            7 => Tishrei,
            8 => Cheshvan,
            9 => Kislev,
            10 => Teves,
            11 => Shevat,
            12 => Adar,
            13 => AdarII,
            _ => return None,
        };
        Some(month)
    }

    /// Snake-case transliterated name, e.g. `"adar_ii"`.
    pub fn name(self) -> &'static str {
        use JewishMonth::*;
        match self {
            Nissan => "nissan",
            Iyar => "iyar",
            Sivan => "sivan",
            Tammuz => "tammuz",
            Av => "av",
            Elul => "elul",
            Tishrei => "tishrei",
            Cheshvan => "cheshvan",
            Kislev => "kislev",
            Teves => "teves",
            Shevat => "shevat",
            Adar => "adar",
            AdarII => "adar_ii",
        }
    }
}

/// Length classification of Cheshvan and Kislev for a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheshvanKislevKeviah {
    /// Both months have 29 days.
    Chaseirim,
    /// Cheshvan 29, Kislev 30.
    Kesidran,
    /// Both months have 30 days.
    Shelaimim,
}

/// The molad (mean conjunction) of a month, in Jerusalem mean time.
///
/// `date` is the civil date of the molad; hours are counted from civil
/// midnight, not from the 18:00 start of the Hebrew day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Molad {
    pub date: NaiveDate,
    pub hours: u8,
    pub minutes: u8,
    pub chalakim: u8,
}

/// The Hebrew date fields the holiday classifier and molad calculator read.
///
/// Implementors supply the year/month/day triple, the weekday and the civil
/// date. Everything else has a default derived from the year and month.
pub trait HebrewDateProvider {
    fn jewish_year(&self) -> i32;
    fn jewish_month(&self) -> JewishMonth;
    fn jewish_day(&self) -> u8;
    fn day_of_week(&self) -> Weekday;
    fn gregorian_date(&self) -> NaiveDate;

    fn is_leap_year(&self) -> bool {
        is_jewish_leap_year(self.jewish_year())
    }

    /// 12 in a common year, 13 in a leap year.
    fn months_in_year(&self) -> u8 {
        months_in_jewish_year(self.jewish_year())
    }

    fn is_cheshvan_long(&self) -> bool {
        is_cheshvan_long(self.jewish_year())
    }

    fn is_kislev_short(&self) -> bool {
        is_kislev_short(self.jewish_year())
    }

    /// Molad of the current month. `None` only when the molad falls outside
    /// the range `chrono` can represent.
    fn molad(&self) -> Option<Molad> {
        molad_for(self.jewish_year(), self.jewish_month())
    }
}

/// A validated Hebrew calendar date paired with its Gregorian equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JewishDate {
    year: i32,
    month: JewishMonth,
    day: u8,
    gregorian: NaiveDate,
}

impl JewishDate {
    /// Build a date from Hebrew fields.
    ///
    /// # Errors
    /// `ZmanimError::InvalidHebrewDate` if the year is before 1, the month
    /// does not exist in that year (Adar II in a common year), or the day is
    /// past the end of the month.
    pub fn new(year: i32, month: JewishMonth, day: u8) -> Result<Self> {
        let invalid = || ZmanimError::InvalidHebrewDate {
            year,
            month: month.number(),
            day,
        };
        if year < 1 || month.number() > months_in_jewish_year(year) {
            tracing::debug!(year, month = month.name(), "month not in Hebrew year");
            return Err(invalid());
        }
        if day < 1 || day > days_in_jewish_month(month, year) {
            tracing::debug!(year, month = month.name(), day, "day out of range for month");
            return Err(invalid());
        }

        let absolute = jewish_date_to_absolute(year, month, day);
        let gregorian = absolute_to_gregorian(absolute).ok_or_else(invalid)?;
        Ok(Self {
            year,
            month,
            day,
            gregorian,
        })
    }

    /// Convert a Gregorian date into the Hebrew date it begins at midnight.
    ///
    /// # Errors
    /// `ZmanimError::InvalidGregorianDate` for dates before Hebrew year 1.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self> {
        let absolute = i64::from(date.num_days_from_ce());
        if absolute < jewish_date_to_absolute(1, JewishMonth::Tishrei, 1) {
            return Err(ZmanimError::InvalidGregorianDate(format!(
                "{} precedes the Hebrew epoch",
                date
            )));
        }

        let (year, month, day) = absolute_to_jewish(absolute);
        Ok(Self {
            year,
            month,
            day,
            gregorian: date,
        })
    }

    /// Number of days in this date's month (29 or 30).
    pub fn days_in_month(&self) -> u8 {
        days_in_jewish_month(self.month, self.year)
    }

    /// Number of days in this date's year (353-355 or 383-385).
    pub fn days_in_year(&self) -> i64 {
        days_in_jewish_year(self.year)
    }

    /// Cheshvan/Kislev lengths for this date's year.
    pub fn cheshvan_kislev_keviah(&self) -> CheshvanKislevKeviah {
        cheshvan_kislev_keviah(self.year)
    }

    /// The date `days` days later.
    ///
    /// # Errors
    /// `ZmanimError::InvalidGregorianDate` if the result leaves the supported range.
    pub fn forward(&self, days: i64) -> Result<Self> {
        let target = self
            .gregorian
            .checked_add_signed(Duration::days(days))
            .ok_or_else(|| {
                ZmanimError::InvalidGregorianDate(format!("{} + {} days", self.gregorian, days))
            })?;
        Self::from_gregorian(target)
    }

    /// The date `days` days earlier.
    pub fn back(&self, days: i64) -> Result<Self> {
        self.forward(-days)
    }
}

impl HebrewDateProvider for JewishDate {
    fn jewish_year(&self) -> i32 {
        self.year
    }

    fn jewish_month(&self) -> JewishMonth {
        self.month
    }

    fn jewish_day(&self) -> u8 {
        self.day
    }

    fn day_of_week(&self) -> Weekday {
        self.gregorian.weekday()
    }

    fn gregorian_date(&self) -> NaiveDate {
        self.gregorian
    }
}

// ---------------------------------------------------------------------------
// Year structure
// ---------------------------------------------------------------------------

/// Years 3, 6, 8, 11, 14, 17 and 19 of the 19-year cycle are leap years.
pub fn is_jewish_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

pub fn months_in_jewish_year(year: i32) -> u8 {
    if is_jewish_leap_year(year) {
        13
    } else {
        12
    }
}

/// Days from the epoch to Rosh Hashana of `year`, after the postponement rules.
pub fn jewish_calendar_elapsed_days(year: i32) -> i64 {
    let chalakim = chalakim_since_molad_tohu(year, JewishMonth::Tishrei);
    let molad_day = chalakim / CHALAKIM_PER_DAY;
    let molad_parts = chalakim - molad_day * CHALAKIM_PER_DAY;
    add_dechiyos(year, molad_day, molad_parts)
}

fn add_dechiyos(year: i32, molad_day: i64, molad_parts: i64) -> i64 {
    let mut rosh_hashana_day = molad_day;

    // Molad zaken (noon or later), GaTRaD, BeTUTaKPaT.
    if molad_parts >= 19_440
        || (molad_day % 7 == 2 && molad_parts >= 9_924 && !is_jewish_leap_year(year))
        || (molad_day % 7 == 1 && molad_parts >= 16_789 && is_jewish_leap_year(year - 1))
    {
        rosh_hashana_day += 1;
    }

    // Lo ADU Rosh: never on Sunday, Wednesday or Friday.
    if matches!(rosh_hashana_day % 7, 0 | 3 | 5) {
        rosh_hashana_day += 1;
    }

    rosh_hashana_day
}

pub fn days_in_jewish_year(year: i32) -> i64 {
    jewish_calendar_elapsed_days(year + 1) - jewish_calendar_elapsed_days(year)
}

pub fn is_cheshvan_long(year: i32) -> bool {
    days_in_jewish_year(year) % 10 == 5
}

pub fn is_kislev_short(year: i32) -> bool {
    days_in_jewish_year(year) % 10 == 3
}

pub fn cheshvan_kislev_keviah(year: i32) -> CheshvanKislevKeviah {
    if is_cheshvan_long(year) {
        CheshvanKislevKeviah::Shelaimim
    } else if is_kislev_short(year) {
        CheshvanKislevKeviah::Chaseirim
    } else {
        CheshvanKislevKeviah::Kesidran
    }
}

pub fn days_in_jewish_month(month: JewishMonth, year: i32) -> u8 {
    use JewishMonth::*;
    let short = match month {
        Iyar | Tammuz | Elul | Teves | AdarII => true,
        Cheshvan => !is_cheshvan_long(year),
        Kislev => is_kislev_short(year),
        Adar => !is_jewish_leap_year(year),
        _ => false,
    };
    if short {
        29
    } else {
        30
    }
}

// ---------------------------------------------------------------------------
// Molad
// ---------------------------------------------------------------------------

/// Position of `month` within the year counting from Tishrei = 1.
fn month_of_year(year: i32, month: JewishMonth) -> i64 {
    let (shift, months) = if is_jewish_leap_year(year) {
        (6, 13)
    } else {
        (5, 12)
    };
    (i64::from(month.number()) + shift) % months + 1
}

pub fn chalakim_since_molad_tohu(year: i32, month: JewishMonth) -> i64 {
    let prior_years = i64::from(year) - 1;
    let months_elapsed = 235 * prior_years.div_euclid(19)
        + 12 * prior_years.rem_euclid(19)
        + (7 * prior_years.rem_euclid(19) + 1) / 19
        + (month_of_year(year, month) - 1);
    CHALAKIM_MOLAD_TOHU + CHALAKIM_PER_MONTH * months_elapsed
}

/// Molad of `month` in `year`.
pub fn molad_for(year: i32, month: JewishMonth) -> Option<Molad> {
    let chalakim = chalakim_since_molad_tohu(year, month);
    let conjunction_day = chalakim / CHALAKIM_PER_DAY;
    let mut parts = chalakim - conjunction_day * CHALAKIM_PER_DAY;

    let hours = parts / CHALAKIM_PER_HOUR;
    parts -= hours * CHALAKIM_PER_HOUR;
    let minutes = parts / CHALAKIM_PER_MINUTE;
    parts -= minutes * CHALAKIM_PER_MINUTE;

    // Parts are counted from 18:00 of the previous civil day.
    let mut date = absolute_to_gregorian(conjunction_day + JEWISH_EPOCH)?;
    if hours >= 6 {
        date = date.succ_opt()?;
    }

    Some(Molad {
        date,
        hours: ((hours + 18) % 24) as u8,
        minutes: minutes as u8,
        chalakim: parts as u8,
    })
}

// ---------------------------------------------------------------------------
// Absolute day conversion
// ---------------------------------------------------------------------------

fn absolute_to_gregorian(absolute: i64) -> Option<NaiveDate> {
    i32::try_from(absolute)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

fn days_since_start_of_jewish_year(year: i32, month: JewishMonth, day: u8) -> i64 {
    let mut elapsed = i64::from(day);
    let months_before = |from: u8, to: u8| -> i64 {
        (from..to)
            .filter_map(JewishMonth::from_number)
            .map(|m| i64::from(days_in_jewish_month(m, year)))
            .sum()
    };

    let tishrei = JewishMonth::Tishrei.number();
    if month.number() < tishrei {
        elapsed += months_before(tishrei, months_in_jewish_year(year) + 1);
        elapsed += months_before(JewishMonth::Nissan.number(), month.number());
    } else {
        elapsed += months_before(tishrei, month.number());
    }
    elapsed
}

fn jewish_date_to_absolute(year: i32, month: JewishMonth, day: u8) -> i64 {
    days_since_start_of_jewish_year(year, month, day)
        + jewish_calendar_elapsed_days(year)
        + JEWISH_EPOCH
}

fn absolute_to_jewish(absolute: i64) -> (i32, JewishMonth, u8) {
    // Approximation from below, then walk forward.
    let mut year = ((absolute - JEWISH_EPOCH) / 366) as i32;
    while absolute >= jewish_date_to_absolute(year + 1, JewishMonth::Tishrei, 1) {
        year += 1;
    }

    let mut month = if absolute < jewish_date_to_absolute(year, JewishMonth::Nissan, 1) {
        JewishMonth::Tishrei
    } else {
        JewishMonth::Nissan
    };
    while absolute > jewish_date_to_absolute(year, month, days_in_jewish_month(month, year)) {
        match JewishMonth::from_number(month.number() + 1) {
            Some(next) => month = next,
            None => break,
        }
    }

    let day = absolute - jewish_date_to_absolute(year, month, 1) + 1;
    (year, month, day as u8)
}
