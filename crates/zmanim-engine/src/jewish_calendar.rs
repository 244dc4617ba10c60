//! Hebrew date plus locale configuration, with the holiday predicates built on it.
//!
//! Every predicate recomputes from the underlying date and the
//! [`CalendarConfig`]; nothing is cached. A calendar with a different
//! configuration is a new value (see [`JewishCalendar::with_config`]).

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hebrew_date::{HebrewDateProvider, JewishDate, JewishMonth};
use crate::significant_day::{self, DayFields, SignificantDay, SignificantShabbos};

/// Locale and feature switches for holiday classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Israel observes one day of Yom Tov where the Diaspora observes two.
    pub in_israel: bool,
    /// Compute Yom HaShoah, Yom HaZikaron, Yom HaAtzmaut and Yom Yerushalayim.
    pub use_modern_holidays: bool,
}

impl CalendarConfig {
    /// Two-day Yom Tov, no modern holidays.
    pub fn diaspora() -> Self {
        Self::default()
    }

    /// One-day Yom Tov, no modern holidays.
    pub fn israel() -> Self {
        Self {
            in_israel: true,
            ..Self::default()
        }
    }

    /// Same config with the modern Israeli holidays switched on or off.
    pub fn with_modern_holidays(self, use_modern_holidays: bool) -> Self {
        Self {
            use_modern_holidays,
            ..self
        }
    }
}

/// A Hebrew date classified under a fixed [`CalendarConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JewishCalendar<D = JewishDate> {
    date: D,
    config: CalendarConfig,
}

impl JewishCalendar<JewishDate> {
    /// Calendar for the Hebrew date that begins at midnight of `date`.
    pub fn from_gregorian(date: NaiveDate, config: CalendarConfig) -> Result<Self> {
        Ok(Self::new(JewishDate::from_gregorian(date)?, config))
    }

    /// Calendar for a Hebrew year/month/day.
    ///
    /// # Errors
    /// `ZmanimError::InvalidHebrewDate` if the date does not exist.
    pub fn from_jewish_date(
        year: i32,
        month: JewishMonth,
        day: u8,
        config: CalendarConfig,
    ) -> Result<Self> {
        Ok(Self::new(JewishDate::new(year, month, day)?, config))
    }
}

impl<D: HebrewDateProvider> JewishCalendar<D> {
    /// Wrap any [`HebrewDateProvider`] with a config.
    pub fn new(date: D, config: CalendarConfig) -> Self {
        Self { date, config }
    }

    /// The underlying Hebrew date.
    pub fn date(&self) -> &D {
        &self.date
    }

    /// The config every predicate reads.
    pub fn config(&self) -> CalendarConfig {
        self.config
    }

    /// Same date under a different config.
    pub fn with_config(self, config: CalendarConfig) -> Self {
        Self { config, ..self }
    }

    fn fields(&self) -> DayFields {
        DayFields::from_provider(&self.date)
    }

    fn month(&self) -> JewishMonth {
        self.date.jewish_month()
    }

    fn day(&self) -> u8 {
        self.date.jewish_day()
    }

    fn day_of_week(&self) -> Weekday {
        self.date.day_of_week()
    }

    /// Holiday or fast tag for this day, `None` for ordinary days.
    pub fn significant_day(&self) -> Option<SignificantDay> {
        significant_day::significant_day(&self.fields(), self.config)
    }

    /// Special Shabbos tag, only ever set on a Saturday.
    pub fn significant_shabbos(&self) -> Option<SignificantShabbos> {
        significant_day::significant_shabbos(&self.fields())
    }

    // -----------------------------------------------------------------------
    // Yom Tov
    // -----------------------------------------------------------------------

    /// A tagged day that is neither an erev nor a fast, except Yom Kippur.
    ///
    /// Chol Hamoed, Chanukah, Purim and the modern holidays all count.
    pub fn is_yom_tov(&self) -> bool {
        match self.significant_day() {
            Some(day) => {
                !day.is_erev() && (!day.is_fast() || day == SignificantDay::YomKippur)
            }
            None => false,
        }
    }

    /// One of the seven Yom Tov tags on which melacha is forbidden.
    pub fn is_yom_tov_assur_bemelacha(&self) -> bool {
        self.significant_day()
            .is_some_and(SignificantDay::is_assur_bemelacha)
    }

    /// Erev Yom Tov, Hoshana Rabbah, or the sixth day of Pesach (erev of the seventh).
    pub fn is_erev_yom_tov(&self) -> bool {
        match self.significant_day() {
            Some(SignificantDay::HoshanaRabbah) => true,
            Some(SignificantDay::CholHamoedPesach) => self.day() == 20,
            Some(day) => day.is_erev(),
            None => false,
        }
    }

    /// The second day of a two-day Yom Tov.
    ///
    /// The second day of Rosh Hashana counts everywhere; the other second
    /// days only outside Israel.
    pub fn is_yom_tov_sheni(&self) -> bool {
        let (month, day) = (self.month(), self.day());
        (month == JewishMonth::Tishrei && day == 2)
            || (!self.config.in_israel
                && match month {
                    JewishMonth::Tishrei => matches!(day, 16 | 23),
                    JewishMonth::Nissan => matches!(day, 16 | 22),
                    JewishMonth::Sivan => day == 7,
                    _ => false,
                })
    }

    /// The first day of a two-day Yom Tov, i.e. the eve of Yom Tov Sheni.
    pub fn is_erev_yom_tov_sheni(&self) -> bool {
        let (month, day) = (self.month(), self.day());
        (month == JewishMonth::Tishrei && day == 1)
            || (!self.config.in_israel
                && match month {
                    JewishMonth::Tishrei => matches!(day, 15 | 22),
                    JewishMonth::Nissan => matches!(day, 15 | 21),
                    JewishMonth::Sivan => day == 6,
                    _ => false,
                })
    }

    /// Chol Hamoed of Pesach or Succos, Hoshana Rabbah included.
    pub fn is_chol_hamoed(&self) -> bool {
        self.significant_day().is_some_and(|day| {
            day.is_chol_hamoed() || day == SignificantDay::HoshanaRabbah
        })
    }

    /// One of the six public fasts, Yom Kippur included.
    pub fn is_taanis(&self) -> bool {
        self.significant_day().is_some_and(SignificantDay::is_fast)
    }

    /// Fast of the firstborn: Erev Pesach, or the preceding Thursday when
    /// Erev Pesach is Shabbos.
    pub fn is_taanis_bechorim(&self) -> bool {
        self.month() == JewishMonth::Nissan
            && ((self.day() == 14 && self.day_of_week() != Weekday::Sat)
                || (self.day() == 12 && self.day_of_week() == Weekday::Thu))
    }

    // -----------------------------------------------------------------------
    // Melacha and candle lighting
    // -----------------------------------------------------------------------

    /// Shabbos or a Yom Tov on which melacha is forbidden.
    pub fn is_assur_bemelacha(&self) -> bool {
        self.day_of_week() == Weekday::Sat || self.is_yom_tov_assur_bemelacha()
    }

    /// Friday, Erev Yom Tov, or the first day of a two-day Yom Tov.
    pub fn is_tomorrow_assur_bemelacha(&self) -> bool {
        self.day_of_week() == Weekday::Fri || self.is_erev_yom_tov() || self.is_erev_yom_tov_sheni()
    }

    /// Candles are lit tonight for a Shabbos or Yom Tov beginning.
    pub fn has_candle_lighting(&self) -> bool {
        self.is_tomorrow_assur_bemelacha()
    }

    /// Candles are lit after nightfall from an existing flame when today is
    /// itself a day of rest leading into another.
    pub fn has_delayed_candle_lighting(&self) -> bool {
        self.day_of_week() != Weekday::Fri && self.has_candle_lighting() && self.is_assur_bemelacha()
    }

    // -----------------------------------------------------------------------
    // Months, Chanukah, Omer
    // -----------------------------------------------------------------------

    /// Day 30 of any month, or day 1 of any month but Tishrei.
    pub fn is_rosh_chodesh(&self) -> bool {
        self.day() == 30 || (self.day() == 1 && self.month() != JewishMonth::Tishrei)
    }

    /// Day 29 of any month but Elul.
    pub fn is_erev_rosh_chodesh(&self) -> bool {
        self.day() == 29 && self.month() != JewishMonth::Elul
    }

    /// The Shabbos before Rosh Chodesh, when the new month is announced.
    /// Not observed before Tishrei.
    pub fn is_shabbos_mevorchim(&self) -> bool {
        self.day_of_week() == Weekday::Sat
            && self.month() != JewishMonth::Elul
            && (23..=29).contains(&self.day())
    }

    /// One of the eight days from 25 Kislev.
    pub fn is_chanukah(&self) -> bool {
        self.significant_day() == Some(SignificantDay::Chanukah)
    }

    /// 1 through 8 during Chanukah, `None` otherwise.
    pub fn day_of_chanukah(&self) -> Option<u8> {
        if !self.is_chanukah() {
            return None;
        }
        if self.month() == JewishMonth::Kislev {
            Some(self.day() - 24)
        } else if self.date.is_kislev_short() {
            Some(self.day() + 5)
        } else {
            Some(self.day() + 6)
        }
    }

    /// 1 (16 Nissan) through 49 (5 Sivan), `None` outside the Omer.
    pub fn day_of_omer(&self) -> Option<u8> {
        let day = self.day();
        match self.month() {
            JewishMonth::Nissan if day > 15 => Some(day - 15),
            JewishMonth::Iyar => Some(day + 15),
            JewishMonth::Sivan if day < 6 => Some(day + 44),
            _ => None,
        }
    }
}
