use core::fmt;
use core::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::BccrError;

/// Sampling frequency of a series, ordered from finest to coarsest.
///
/// The derived `Ord` is the coarsening order: `Daily < Weekly < Monthly <
/// Quarterly < Semiannual < Annual`. Resampling is only defined from a
/// frequency to itself or to a greater one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// One observation per calendar day.
    Daily,
    /// One observation per ISO week (weeks start on Monday).
    Weekly,
    /// One observation per calendar month.
    Monthly,
    /// One observation per calendar quarter.
    Quarterly,
    /// One observation per half-year (January and July starts).
    Semiannual,
    /// One observation per calendar year.
    Annual,
}

impl Frequency {
    /// Every frequency, finest first.
    pub const ALL: [Self; 6] = [
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Quarterly,
        Self::Semiannual,
        Self::Annual,
    ];

    /// Lower-case English name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Semiannual => "semiannual",
            Self::Annual => "annual",
        }
    }

    /// True when data at `self` can be aggregated into `target` without
    /// inventing sub-period values.
    #[must_use]
    pub fn can_coarsen_to(self, target: Self) -> bool {
        self <= target
    }

    /// First day of the period of this frequency that contains `date`.
    ///
    /// This is the period key: every date maps to exactly one period and two
    /// dates share a period iff they map to the same start.
    #[must_use]
    pub fn period_start(self, date: NaiveDate) -> NaiveDate {
        let first_of = |month: u32| NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date);
        match self {
            Self::Daily => date,
            Self::Weekly => {
                let back = u64::from(date.weekday().num_days_from_monday());
                date.checked_sub_days(Days::new(back)).unwrap_or(date)
            }
            Self::Monthly => first_of(date.month()),
            Self::Quarterly => first_of((date.month0() / 3) * 3 + 1),
            Self::Semiannual => first_of(if date.month() <= 6 { 1 } else { 7 }),
            Self::Annual => first_of(1),
        }
    }

    /// Human-readable label of the period that contains `date`.
    ///
    /// `2020-01-15` (daily), `2020-W03` (weekly), `2020-01` (monthly),
    /// `2020Q1`, `2020H1`, `2020`.
    #[must_use]
    pub fn label(self, date: NaiveDate) -> String {
        let start = self.period_start(date);
        match self {
            Self::Daily => start.format("%Y-%m-%d").to_string(),
            Self::Weekly => {
                let week = start.iso_week();
                format!("{}-W{:02}", week.year(), week.week())
            }
            Self::Monthly => start.format("%Y-%m").to_string(),
            Self::Quarterly => format!("{}Q{}", start.year(), start.month0() / 3 + 1),
            Self::Semiannual => format!("{}H{}", start.year(), start.month0() / 6 + 1),
            Self::Annual => start.year().to_string(),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = BccrError;

    /// Case- and accent-insensitive. Accepts English names, the source's Spanish periodicity names and
    /// the short codes `D`, `W`, `M`, `Q`, `6M`/`S`, `A`/`Y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = crate::text::normalize_text(s.trim());
        let f = match key.as_str() {
            "d" | "daily" | "day" | "diaria" | "diario" => Self::Daily,
            "w" | "weekly" | "week" | "semanal" | "nueva semanal" => Self::Weekly,
            "m" | "monthly" | "month" | "mensual" => Self::Monthly,
            "q" | "quarterly" | "quarter" | "trimestral" => Self::Quarterly,
            "6m" | "s" | "h" | "semiannual" | "semestral" => Self::Semiannual,
            "a" | "y" | "annual" | "yearly" | "anual" => Self::Annual,
            _ => {
                return Err(BccrError::InvalidArg(format!(
                    "unrecognized frequency '{}'",
                    s.trim()
                )));
            }
        };
        Ok(f)
    }
}
