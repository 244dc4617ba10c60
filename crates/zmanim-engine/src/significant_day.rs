//! Holiday, fast and special-Shabbos classification.
//!
//! Classification is a pure function of the day's Hebrew fields and a
//! [`CalendarConfig`]. Each Hebrew month has one rule function; the rules of
//! a month cover disjoint day ranges, so at most one tag is ever produced.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::hebrew_date::{HebrewDateProvider, JewishMonth};
use crate::jewish_calendar::CalendarConfig;

/// Holidays, fasts and other days of note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignificantDay {
    ErevRoshHashana,
    RoshHashana,
    TzomGedalyah,
    ErevYomKippur,
    YomKippur,
    ErevSuccos,
    Succos,
    CholHamoedSuccos,
    HoshanaRabbah,
    SheminiAtzeres,
    SimchasTorah,
    Chanukah,
    TenthOfTeves,
    TuBeshvat,
    TaanisEsther,
    Purim,
    ShushanPurim,
    PurimKatan,
    ShushanPurimKatan,
    ErevPesach,
    Pesach,
    CholHamoedPesach,
    PesachSheni,
    LagBaomer,
    ErevShavuos,
    Shavuos,
    SeventeenOfTammuz,
    TishaBeav,
    TuBeav,
    YomHashoah,
    YomHazikaron,
    YomHaatzmaut,
    YomYerushalayim,
}

impl SignificantDay {
    /// Snake-case tag name, matching the serde representation.
    pub fn name(self) -> &'static str {
        use SignificantDay::*;
        match self {
            ErevRoshHashana => "erev_rosh_hashana",
            RoshHashana => "rosh_hashana",
            TzomGedalyah => "tzom_gedalyah",
            ErevYomKippur => "erev_yom_kippur",
            YomKippur => "yom_kippur",
            ErevSuccos => "erev_succos",
            Succos => "succos",
            CholHamoedSuccos => "chol_hamoed_succos",
            HoshanaRabbah => "hoshana_rabbah",
            SheminiAtzeres => "shemini_atzeres",
            SimchasTorah => "simchas_torah",
            Chanukah => "chanukah",
            TenthOfTeves => "tenth_of_teves",
            TuBeshvat => "tu_beshvat",
            TaanisEsther => "taanis_esther",
            Purim => "purim",
            ShushanPurim => "shushan_purim",
            PurimKatan => "purim_katan",
            ShushanPurimKatan => "shushan_purim_katan",
            ErevPesach => "erev_pesach",
            Pesach => "pesach",
            CholHamoedPesach => "chol_hamoed_pesach",
            PesachSheni => "pesach_sheni",
            LagBaomer => "lag_baomer",
            ErevShavuos => "erev_shavuos",
            Shavuos => "shavuos",
            SeventeenOfTammuz => "seventeen_of_tammuz",
            TishaBeav => "tisha_beav",
            TuBeav => "tu_beav",
            YomHashoah => "yom_hashoah",
            YomHazikaron => "yom_hazikaron",
            YomHaatzmaut => "yom_haatzmaut",
            YomYerushalayim => "yom_yerushalayim",
        }
    }

    /// The day before Rosh Hashana, Yom Kippur, Succos, Pesach or Shavuos.
    pub fn is_erev(self) -> bool {
        use SignificantDay::*;
        matches!(
            self,
            ErevRoshHashana | ErevYomKippur | ErevSuccos | ErevPesach | ErevShavuos
        )
    }

    /// Chol Hamoed of Pesach or Succos.
    pub fn is_chol_hamoed(self) -> bool {
        matches!(
            self,
            SignificantDay::CholHamoedSuccos | SignificantDay::CholHamoedPesach
        )
    }

    /// The six public fasts, Yom Kippur included.
    pub fn is_fast(self) -> bool {
        use SignificantDay::*;
        matches!(
            self,
            SeventeenOfTammuz | TishaBeav | TzomGedalyah | YomKippur | TenthOfTeves | TaanisEsther
        )
    }

    /// Yom Tov days on which melacha is forbidden.
    pub fn is_assur_bemelacha(self) -> bool {
        use SignificantDay::*;
        matches!(
            self,
            Pesach | Shavuos | RoshHashana | YomKippur | Succos | SheminiAtzeres | SimchasTorah
        )
    }
}

/// Shabbosos with a special reading or name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignificantShabbos {
    ParshasHachodesh,
    ShabbosHagadol,
    ShabbosShuva,
    ParshasShekalim,
    ParshasZachor,
    ParshasParah,
}

impl SignificantShabbos {
    /// Snake-case tag name, matching the serde representation.
    pub fn name(self) -> &'static str {
        use SignificantShabbos::*;
        match self {
            ParshasHachodesh => "parshas_hachodesh",
            ShabbosHagadol => "shabbos_hagadol",
            ShabbosShuva => "shabbos_shuva",
            ParshasShekalim => "parshas_shekalim",
            ParshasZachor => "parshas_zachor",
            ParshasParah => "parshas_parah",
        }
    }
}

/// The Hebrew-date fields the classifier reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayFields {
    pub month: JewishMonth,
    pub day: u8,
    pub day_of_week: Weekday,
    pub is_leap_year: bool,
    pub months_in_year: u8,
    pub is_kislev_short: bool,
}

impl DayFields {
    /// Read the fields from any [`HebrewDateProvider`].
    pub fn from_provider<D: HebrewDateProvider + ?Sized>(date: &D) -> Self {
        Self {
            month: date.jewish_month(),
            day: date.jewish_day(),
            day_of_week: date.day_of_week(),
            is_leap_year: date.is_leap_year(),
            months_in_year: date.months_in_year(),
            is_kislev_short: date.is_kislev_short(),
        }
    }
}

type MonthRule = fn(&DayFields, CalendarConfig) -> Option<SignificantDay>;

fn rule_for(month: JewishMonth) -> MonthRule {
    use JewishMonth::*;
    match month {
        Nissan => nissan,
        Iyar => iyar,
        Sivan => sivan,
        Tammuz => tammuz,
        Av => av,
        Elul => elul,
        Tishrei => tishrei,
        Cheshvan => cheshvan,
        Kislev => kislev,
        Teves => teves,
        Shevat => shevat,
        Adar => adar,
        AdarII => purim_season,
    }
}

/// Classify a day. Returns `None` for ordinary days.
pub fn significant_day(fields: &DayFields, config: CalendarConfig) -> Option<SignificantDay> {
    rule_for(fields.month)(fields, config)
}

/// Special Shabbos tag, only ever set on a Saturday.
pub fn significant_shabbos(fields: &DayFields) -> Option<SignificantShabbos> {
    use SignificantShabbos::*;

    if fields.day_of_week != Weekday::Sat {
        return None;
    }

    let month = fields.month.number();
    let day = fields.day;
    if fields.month == JewishMonth::Nissan {
        match day {
            1 => Some(ParshasHachodesh),
            8..=14 => Some(ShabbosHagadol),
            _ => None,
        }
    } else if fields.month == JewishMonth::Tishrei && (3..=9).contains(&day) {
        Some(ShabbosShuva)
    } else if month == fields.months_in_year - 1 && (25..=30).contains(&day) {
        Some(ParshasShekalim)
    } else if month == fields.months_in_year {
        match day {
            1 => Some(ParshasShekalim),
            7..=13 => Some(ParshasZachor),
            17..=23 => Some(ParshasParah),
            24..=29 => Some(ParshasHachodesh),
            _ => None,
        }
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Month rules
// ---------------------------------------------------------------------------

fn nissan(f: &DayFields, config: CalendarConfig) -> Option<SignificantDay> {
    let pesach = matches!(f.day, 15 | 21) || (!config.in_israel && matches!(f.day, 16 | 22));

    match f.day {
        14 => Some(SignificantDay::ErevPesach),
        _ if pesach => Some(SignificantDay::Pesach),
        16..=20 => Some(SignificantDay::CholHamoedPesach),
        _ if config.use_modern_holidays => yom_hashoah(f),
        _ => None,
    }
}

/// Yom HaShoah moves off Friday and Sunday so neither it nor its eve touches Shabbos.
fn yom_hashoah(f: &DayFields) -> Option<SignificantDay> {
    let observed = match f.day {
        26 => f.day_of_week == Weekday::Thu,
        27 => !matches!(f.day_of_week, Weekday::Sun | Weekday::Fri),
        28 => f.day_of_week == Weekday::Mon,
        _ => false,
    };
    observed.then_some(SignificantDay::YomHashoah)
}

fn iyar(f: &DayFields, config: CalendarConfig) -> Option<SignificantDay> {
    match f.day {
        14 => Some(SignificantDay::PesachSheni),
        18 => Some(SignificantDay::LagBaomer),
        _ if config.use_modern_holidays => israeli_national_days(f),
        _ => None,
    }
}

// Current rules, last revised in 5764. Earlier years may not match what was observed.
fn israeli_national_days(f: &DayFields) -> Option<SignificantDay> {
    use Weekday::*;
    match (f.day, f.day_of_week) {
        (2 | 3, Wed) | (4, Tue) | (5, Mon) => Some(SignificantDay::YomHazikaron),
        (3 | 4, Thu) | (5, Wed) | (6, Tue) => Some(SignificantDay::YomHaatzmaut),
        (28, _) => Some(SignificantDay::YomYerushalayim),
        _ => None,
    }
}

fn sivan(f: &DayFields, config: CalendarConfig) -> Option<SignificantDay> {
    match f.day {
        5 => Some(SignificantDay::ErevShavuos),
        6 => Some(SignificantDay::Shavuos),
        7 if !config.in_israel => Some(SignificantDay::Shavuos),
        _ => None,
    }
}

/// A fast on `day` that is pushed to Sunday when `day` is Shabbos.
fn deferred_fast(f: &DayFields, day: u8, fast: SignificantDay) -> Option<SignificantDay> {
    let observed = (f.day == day && f.day_of_week != Weekday::Sat)
        || (f.day == day + 1 && f.day_of_week == Weekday::Sun);
    observed.then_some(fast)
}

fn tammuz(f: &DayFields, _config: CalendarConfig) -> Option<SignificantDay> {
    deferred_fast(f, 17, SignificantDay::SeventeenOfTammuz)
}

fn av(f: &DayFields, _config: CalendarConfig) -> Option<SignificantDay> {
    deferred_fast(f, 9, SignificantDay::TishaBeav).or(match f.day {
        15 => Some(SignificantDay::TuBeav),
        _ => None,
    })
}

fn elul(f: &DayFields, _config: CalendarConfig) -> Option<SignificantDay> {
    (f.day == 29).then_some(SignificantDay::ErevRoshHashana)
}

fn tishrei(f: &DayFields, config: CalendarConfig) -> Option<SignificantDay> {
    use SignificantDay::*;

    let succos = f.day == 15 || (!config.in_israel && f.day == 16);
    match f.day {
        1 | 2 => Some(RoshHashana),
        3 | 4 => deferred_fast(f, 3, TzomGedalyah),
        9 => Some(ErevYomKippur),
        10 => Some(YomKippur),
        14 => Some(ErevSuccos),
        _ if succos => Some(Succos),
        16..=20 => Some(CholHamoedSuccos),
        21 => Some(HoshanaRabbah),
        22 => Some(SheminiAtzeres),
        23 if !config.in_israel => Some(SimchasTorah),
        _ => None,
    }
}

fn cheshvan(_f: &DayFields, _config: CalendarConfig) -> Option<SignificantDay> {
    None
}

fn kislev(f: &DayFields, _config: CalendarConfig) -> Option<SignificantDay> {
    (f.day >= 25).then_some(SignificantDay::Chanukah)
}

fn teves(f: &DayFields, _config: CalendarConfig) -> Option<SignificantDay> {
    match f.day {
        1 | 2 => Some(SignificantDay::Chanukah),
        3 if f.is_kislev_short => Some(SignificantDay::Chanukah),
        10 => Some(SignificantDay::TenthOfTeves),
        _ => None,
    }
}

fn shevat(f: &DayFields, _config: CalendarConfig) -> Option<SignificantDay> {
    (f.day == 15).then_some(SignificantDay::TuBeshvat)
}

/// Adar of a common year holds Purim; Adar I of a leap year holds Purim Katan.
fn adar(f: &DayFields, config: CalendarConfig) -> Option<SignificantDay> {
    if !f.is_leap_year {
        return purim_season(f, config);
    }
    match f.day {
        14 => Some(SignificantDay::PurimKatan),
        15 => Some(SignificantDay::ShushanPurimKatan),
        _ => None,
    }
}

/// Taanis Esther moves back to Thursday when the 13th is Shabbos.
fn purim_season(f: &DayFields, _config: CalendarConfig) -> Option<SignificantDay> {
    match (f.day, f.day_of_week) {
        (13, dow) if dow != Weekday::Sat => Some(SignificantDay::TaanisEsther),
        (11, Weekday::Thu) => Some(SignificantDay::TaanisEsther),
        (14, _) => Some(SignificantDay::Purim),
        (15, _) => Some(SignificantDay::ShushanPurim),
        _ => None,
    }
}
