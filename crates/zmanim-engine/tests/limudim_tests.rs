//! Tests for the Perek Mishnayos Yomi cycle.

use chrono::NaiveDate;
use zmanim_engine::PerekMishnayosYomi;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn cycle_is_525_perakim() {
    assert_eq!(PerekMishnayosYomi.cycle_length(), 525);
}

#[test]
fn first_day_is_berachos_1() {
    let limud = PerekMishnayosYomi.limud(date(1947, 5, 20)).unwrap();
    assert_eq!(limud.description(), "berachos 1");
    assert_eq!(limud.start_date(), date(1947, 5, 20));
    assert_eq!(limud.end_date(), date(1947, 5, 20));
}

#[test]
fn known_day() {
    let limud = PerekMishnayosYomi.limud(date(2017, 12, 28)).unwrap();
    assert_eq!(limud.unit().maseches, "chalah");
    assert_eq!(limud.unit().perek, 2);
}

#[test]
fn cycle_wraps_from_uktzin_to_berachos() {
    assert_eq!(
        PerekMishnayosYomi.limud(date(2019, 4, 1)).unwrap().description(),
        "uktzin 3"
    );
    assert_eq!(
        PerekMishnayosYomi.limud(date(2019, 4, 2)).unwrap().description(),
        "berachos 1"
    );
}

#[test]
fn nothing_before_the_first_cycle() {
    assert!(PerekMishnayosYomi.limud(date(1947, 1, 1)).is_none());
    assert!(PerekMishnayosYomi.limud(date(1947, 5, 19)).is_none());
}
