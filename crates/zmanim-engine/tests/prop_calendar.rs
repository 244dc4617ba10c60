//! Property-based tests for the Hebrew calendar and classifier using proptest.
//!
//! These check invariants that hold for any date or year, not just the
//! fixtures in `significant_day_tests.rs`.

use chrono::{Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use zmanim_engine::hebrew_date::{days_in_jewish_year, CHALAKIM_PER_MONTH};
use zmanim_engine::{
    CalendarConfig, HebrewDateProvider, JewishCalendar, JewishDate, JewishMonth, SignificantDay,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A civil date between 1900 and 2099.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..73_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn arb_year() -> impl Strategy<Value = i32> {
    5700i32..=5900
}

fn arb_config() -> impl Strategy<Value = CalendarConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(in_israel, modern)| CalendarConfig {
        in_israel,
        use_modern_holidays: modern,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

fn year_config() -> ProptestConfig {
    ProptestConfig {
        cases: 24,
        ..ProptestConfig::default()
    }
}

/// Every day of a Hebrew year, Tishrei 1 onward.
fn whole_year(year: i32, config: CalendarConfig) -> Vec<JewishCalendar> {
    let start = JewishDate::new(year, JewishMonth::Tishrei, 1).unwrap();
    (0..days_in_jewish_year(year))
        .map(|i| JewishCalendar::new(start.forward(i).unwrap(), config))
        .collect()
}

fn count(days: &[JewishCalendar], tag: SignificantDay) -> usize {
    days.iter()
        .filter(|d| d.significant_day() == Some(tag))
        .count()
}

// ---------------------------------------------------------------------------
// Property 1: Gregorian and Hebrew fields describe the same day
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn hebrew_fields_round_trip(date in arb_date()) {
        let jd = JewishDate::from_gregorian(date).unwrap();
        let rebuilt = JewishDate::new(jd.jewish_year(), jd.jewish_month(), jd.jewish_day()).unwrap();
        prop_assert_eq!(rebuilt.gregorian_date(), date);
        prop_assert_eq!(rebuilt.day_of_week(), chrono::Datelike::weekday(&date));

        let next = jd.forward(1).unwrap();
        prop_assert_eq!(next.gregorian_date(), date + Duration::days(1));
    }
}

// ---------------------------------------------------------------------------
// Property 2: Fasts never land on Shabbos
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn fasts_avoid_shabbos(date in arb_date(), cal_config in arb_config()) {
        let cal = JewishCalendar::from_gregorian(date, cal_config).unwrap();
        let dow = cal.date().day_of_week();

        if cal.is_taanis() && cal.significant_day() != Some(SignificantDay::YomKippur) {
            prop_assert_ne!(dow, Weekday::Sat, "{:?} on Shabbos", cal.significant_day());
        }
        if cal.significant_day() == Some(SignificantDay::TaanisEsther) {
            prop_assert_ne!(dow, Weekday::Fri);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Special Shabbos tags only on Saturday
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn special_shabbos_only_on_saturday(date in arb_date()) {
        let cal = JewishCalendar::from_gregorian(date, CalendarConfig::diaspora()).unwrap();
        if cal.significant_shabbos().is_some() {
            prop_assert_eq!(cal.date().day_of_week(), Weekday::Sat);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Only the second day of Rosh Hashana is Yom Tov Sheni in Israel
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn israel_yom_tov_sheni_is_rosh_hashana(date in arb_date()) {
        let cal = JewishCalendar::from_gregorian(date, CalendarConfig::israel()).unwrap();
        if cal.is_yom_tov_sheni() {
            prop_assert_eq!(cal.date().jewish_month(), JewishMonth::Tishrei);
            prop_assert_eq!(cal.date().jewish_day(), 2);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Chanukah is eight consecutive days from 25 Kislev
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn chanukah_lasts_eight_days(year in arb_year()) {
        let start = JewishDate::new(year, JewishMonth::Kislev, 25).unwrap();
        for i in 0..10u8 {
            let cal = JewishCalendar::new(start.forward(i64::from(i)).unwrap(), CalendarConfig::diaspora());
            let expected = if i < 8 { Some(i + 1) } else { None };
            prop_assert_eq!(cal.day_of_chanukah(), expected, "year {} offset {}", year, i);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Yom Tov and fast counts over a whole year
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(year_config())]

    #[test]
    fn diaspora_doubles_yom_tov(year in arb_year()) {
        let days = whole_year(year, CalendarConfig::diaspora());
        prop_assert_eq!(count(&days, SignificantDay::RoshHashana), 2);
        prop_assert_eq!(count(&days, SignificantDay::Succos), 2);
        prop_assert_eq!(count(&days, SignificantDay::SimchasTorah), 1);
        prop_assert_eq!(count(&days, SignificantDay::Pesach), 4);
        prop_assert_eq!(count(&days, SignificantDay::Shavuos), 2);
        prop_assert_eq!(days.iter().filter(|d| d.is_yom_tov_sheni()).count(), 6);
    }

    #[test]
    fn israel_keeps_one_day(year in arb_year()) {
        let days = whole_year(year, CalendarConfig::israel());
        prop_assert_eq!(count(&days, SignificantDay::RoshHashana), 2);
        prop_assert_eq!(count(&days, SignificantDay::Succos), 1);
        prop_assert_eq!(count(&days, SignificantDay::SimchasTorah), 0);
        prop_assert_eq!(count(&days, SignificantDay::Pesach), 2);
        prop_assert_eq!(count(&days, SignificantDay::Shavuos), 1);
    }

    #[test]
    fn each_fast_once_a_year(year in arb_year()) {
        let days = whole_year(year, CalendarConfig::diaspora());
        for fast in [
            SignificantDay::TzomGedalyah,
            SignificantDay::YomKippur,
            SignificantDay::TenthOfTeves,
            SignificantDay::TaanisEsther,
            SignificantDay::SeventeenOfTammuz,
            SignificantDay::TishaBeav,
        ] {
            prop_assert_eq!(count(&days, fast), 1, "{:?} in {}", fast, year);
        }
        prop_assert_eq!(count(&days, SignificantDay::Chanukah), 8);
        prop_assert_eq!(days.iter().filter(|d| d.is_taanis_bechorim()).count(), 1);
        prop_assert_eq!(days.iter().filter_map(|d| d.day_of_omer()).count(), 49);
    }
}

// ---------------------------------------------------------------------------
// Property 7: Molad spacing and the Kiddush Levana window
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn consecutive_moldos_one_lunar_month_apart(date in arb_date()) {
        let jd = JewishDate::from_gregorian(date).unwrap();
        let first = jd.back(i64::from(jd.jewish_day()) - 1).unwrap();
        let next = first.forward(i64::from(first.days_in_month())).unwrap();

        let this_molad = JewishCalendar::new(first, CalendarConfig::diaspora()).molad_as_datetime().unwrap();
        let next_molad = JewishCalendar::new(next, CalendarConfig::diaspora()).molad_as_datetime().unwrap();

        let lunar_month = Duration::nanoseconds(CHALAKIM_PER_MONTH * 10_000_000_000 / 3);
        let drift = (next_molad - this_molad - lunar_month).num_microseconds().unwrap().abs();
        prop_assert!(drift <= 1, "drift {}us", drift);
    }

    #[test]
    fn kiddush_levana_window_is_ordered(date in arb_date()) {
        let cal = JewishCalendar::from_gregorian(date, CalendarConfig::diaspora()).unwrap();
        let molad = cal.molad_as_datetime().unwrap();
        let start = cal.techilas_zman_kiddush_levana_3_days().unwrap();
        let end = cal.sof_zman_kiddush_levana_15_days().unwrap();

        prop_assert_eq!(end - molad, Duration::days(15));
        prop_assert!(molad < start);
        prop_assert!(start < cal.techilas_zman_kiddush_levana_7_days().unwrap());
        prop_assert!(cal.sof_zman_kiddush_levana_between_moldos().unwrap() < end);
    }
}
