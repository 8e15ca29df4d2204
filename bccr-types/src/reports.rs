//! Report envelopes produced by the search and hierarchy entry points.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::IndicatorMeta;
use crate::code::IndicatorCode;
use crate::frequency::Frequency;

/// One row of a [`SearchReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRow {
    /// Indicator code.
    pub code: IndicatorCode,
    /// Long description.
    pub description: String,
    /// Native frequency.
    pub frequency: Frequency,
    /// Unit of measure.
    pub unit: String,
}

impl From<&IndicatorMeta> for SearchRow {
    fn from(m: &IndicatorMeta) -> Self {
        Self {
            code: m.code.clone(),
            description: m.description.clone(),
            frequency: m.frequency,
            unit: m.unit.clone(),
        }
    }
}

/// Ranked search results laid out as a table (code, description, frequency, unit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SearchReport {
    /// Rows in rank order.
    pub rows: Vec<SearchRow>,
}

impl SearchReport {
    /// Codes in rank order.
    #[must_use]
    pub fn codes(&self) -> Vec<IndicatorCode> {
        self.rows.iter().map(|r| r.code.clone()).collect()
    }

    /// Number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "code\tdescription\tfrequency\tunit")?;
        for r in &self.rows {
            writeln!(
                f,
                "{}\t{}\t{}\t{}",
                r.code, r.description, r.frequency, r.unit
            )?;
        }
        Ok(())
    }
}

/// Identity card of one indicator with its position in the catalog tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoReport {
    /// The indicator itself.
    pub indicator: IndicatorMeta,
    /// Ancestors from the root down to the direct parent.
    pub lineage: Vec<IndicatorMeta>,
}

impl WhoReport {
    /// Descriptions from the root down to the indicator itself.
    #[must_use]
    pub fn description_chain(&self) -> Vec<&str> {
        self.lineage
            .iter()
            .chain(core::iter::once(&self.indicator))
            .map(|m| m.description.as_str())
            .collect()
    }
}

impl fmt::Display for WhoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.indicator;
        writeln!(f, "Indicator {} >>>", m.code)?;
        if let Some(name) = &m.name {
            writeln!(f, "   Name       : {name}")?;
        }
        writeln!(f, "   Description: {}", m.description)?;
        writeln!(f, "   Unit       : {}", m.unit)?;
        writeln!(f, "   Frequency  : {}", m.frequency)?;
        for (depth, text) in self.description_chain().into_iter().enumerate() {
            writeln!(f, "|{} {}", "-".repeat(3 * (depth + 1)), text)?;
        }
        Ok(())
    }
}
