//! Daily learning schedules.
//!
//! [`PerekMishnayosYomi`] assigns one perek (chapter) of Mishna per day,
//! working through all 63 tractates in order. A cycle is 525 days and the
//! first one began on 20 May 1947.

use chrono::NaiveDate;

/// Tractates in order with their number of perakim.
const MASECHTOS: [(&str, u16); 63] = [
    // Zeraim
    ("berachos", 9),
    ("peah", 8),
    ("demai", 7),
    ("kilayim", 9),
    ("sheviis", 10),
    ("terumos", 11),
    ("maasros", 5),
    ("maaser_sheni", 5),
    ("chalah", 4),
    ("orlah", 3),
    ("bikurim", 4),
    // Moed
    ("shabbos", 24),
    ("eruvin", 10),
    ("pesachim", 10),
    ("shekalim", 8),
    ("yoma", 8),
    ("succah", 5),
    ("beitzah", 5),
    ("rosh_hashanah", 4),
    ("taanis", 4),
    ("megillah", 4),
    ("moed_katan", 3),
    ("chagigah", 3),
    // Nashim
    ("yevamos", 16),
    ("kesubos", 13),
    ("nedarim", 11),
    ("nazir", 9),
    ("sotah", 9),
    ("gitin", 9),
    ("kiddushin", 4),
    // Nezikin
    ("bava_kamma", 10),
    ("bava_metzia", 10),
    ("bava_basra", 10),
    ("sanhedrin", 11),
    ("makos", 3),
    ("shevuos", 8),
    ("eduyos", 8),
    ("avodah_zarah", 5),
    ("avos", 6),
    ("horayos", 3),
    // Kodashim
    ("zevachim", 14),
    ("menachos", 13),
    ("chullin", 12),
    ("bechoros", 9),
    ("arachin", 9),
    ("temurah", 7),
    ("kerisos", 6),
    ("meilah", 6),
    ("tamid", 7),
    ("midos", 5),
    ("kinnim", 3),
    // Taharos
    ("keilim", 30),
    ("ohalos", 18),
    ("negaim", 14),
    ("parah", 12),
    ("taharos", 10),
    ("mikvaos", 10),
    ("niddah", 10),
    ("machshirin", 6),
    ("zavim", 5),
    ("tevul_yom", 4),
    ("yadayim", 4),
    ("uktzin", 3),
];

/// One unit of study: a perek of a tractate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimudUnit {
    pub maseches: &'static str,
    pub perek: u16,
}

/// The unit assigned to a span of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limud {
    start_date: NaiveDate,
    end_date: NaiveDate,
    unit: LimudUnit,
}

impl Limud {
    /// First day of the unit.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of the unit.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// The tractate and perek studied.
    pub fn unit(&self) -> LimudUnit {
        self.unit
    }

    /// e.g. `"chalah 2"`.
    pub fn description(&self) -> String {
        format!("{} {}", self.unit.maseches, self.unit.perek)
    }
}

/// One perek of Mishna a day.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerekMishnayosYomi;

impl PerekMishnayosYomi {
    /// 20 May 1947, the first day of the first cycle.
    pub fn initial_cycle_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(1947, 5, 20)
    }

    /// Total perakim, which is also the cycle length in days.
    pub fn cycle_length(&self) -> i64 {
        MASECHTOS.iter().map(|&(_, perakim)| i64::from(perakim)).sum()
    }

    /// The perek learned on `date`, or `None` before the first cycle.
    pub fn limud(&self, date: NaiveDate) -> Option<Limud> {
        let start = self.initial_cycle_date()?;
        if date < start {
            return None;
        }

        let index = (date - start).num_days() % self.cycle_length();
        let unit = unit_at(index)?;
        Some(Limud {
            start_date: date,
            end_date: date,
            unit,
        })
    }
}

fn unit_at(mut index: i64) -> Option<LimudUnit> {
    for &(maseches, perakim) in MASECHTOS.iter() {
        let perakim = i64::from(perakim);
        if index < perakim {
            return Some(LimudUnit {
                maseches,
                perek: (index + 1) as u16,
            });
        }
        index -= perakim;
    }
    None
}
