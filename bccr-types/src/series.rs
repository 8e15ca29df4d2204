//! Series at the three stages of the alignment pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::code::IndicatorCode;
use crate::config::FillPolicy;
use crate::frequency::Frequency;

/// One period of a series; `value` is `None` when the slot is missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Start date of the period.
    pub period: NaiveDate,
    /// Observed value, if any.
    pub value: Option<f64>,
}

impl Observation {
    /// Build an observation; non-finite values are stored as missing.
    #[must_use]
    pub fn new(period: NaiveDate, value: Option<f64>) -> Self {
        Self {
            period,
            value: value.filter(|v| v.is_finite()),
        }
    }

    /// Build a missing observation.
    #[must_use]
    pub const fn missing(period: NaiveDate) -> Self {
        Self {
            period,
            value: None,
        }
    }
}

/// A series as delivered by a connector, at its native frequency.
///
/// Construction normalizes the payload: dates are mapped to their period
/// start, observations are sorted chronologically, and when a period occurs
/// more than once the first occurrence is kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawSeries {
    code: IndicatorCode,
    frequency: Frequency,
    observations: Vec<Observation>,
    duplicates_dropped: usize,
}

impl RawSeries {
    /// Build a normalized raw series.
    pub fn new(
        code: impl Into<IndicatorCode>,
        frequency: Frequency,
        observations: impl IntoIterator<Item = Observation>,
    ) -> Self {
        let mut keyed: Vec<(usize, Observation)> = observations
            .into_iter()
            .map(|o| Observation::new(frequency.period_start(o.period), o.value))
            .enumerate()
            .collect();
        // stable on the original index so the first occurrence survives dedup
        keyed.sort_by_key(|(i, o)| (o.period, *i));
        let before = keyed.len();
        keyed.dedup_by_key(|(_, o)| o.period);
        let duplicates_dropped = before - keyed.len();

        Self {
            code: code.into(),
            frequency,
            observations: keyed.into_iter().map(|(_, o)| o).collect(),
            duplicates_dropped,
        }
    }

    /// Build a series from `(date, value)` pairs.
    pub fn from_pairs(
        code: impl Into<IndicatorCode>,
        frequency: Frequency,
        pairs: impl IntoIterator<Item = (NaiveDate, Option<f64>)>,
    ) -> Self {
        Self::new(
            code,
            frequency,
            pairs.into_iter().map(|(d, v)| Observation::new(d, v)),
        )
    }

    /// Indicator code of the series.
    #[must_use]
    pub const fn code(&self) -> &IndicatorCode {
        &self.code
    }

    /// Native frequency of the series.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Observations in chronological order, one per period.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of observations discarded because their period repeated.
    #[must_use]
    pub const fn duplicates_dropped(&self) -> usize {
        self.duplicates_dropped
    }

    /// Number of periods in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// True when the series has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Keep the periods that overlap the inclusive range `[start, end]`.
    #[must_use]
    pub fn within(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let first = start.map(|d| self.frequency.period_start(d));
        self.observations.retain(|o| {
            first.is_none_or(|f| o.period >= f) && end.is_none_or(|e| o.period <= e)
        });
        self
    }

    /// Decompose into code, frequency and observations.
    #[must_use]
    pub fn into_parts(self) -> (IndicatorCode, Frequency, Vec<Observation>) {
        (self.code, self.frequency, self.observations)
    }
}

/// A raw series after gap filling; same frequency and periods as its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilledSeries {
    /// Indicator code of the series.
    pub code: IndicatorCode,
    /// Native frequency, unchanged by filling.
    pub frequency: Frequency,
    /// Policy that produced the values.
    pub policy: FillPolicy,
    /// Observations in chronological order.
    pub observations: Vec<Observation>,
}

/// A series at the output frequency, carrying its output column name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResampledSeries {
    /// Caller-supplied column name.
    pub name: String,
    /// Output frequency.
    pub frequency: Frequency,
    /// One observation per output period, chronological.
    pub observations: Vec<Observation>,
}
