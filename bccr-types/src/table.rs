//! The rectangular result of a merge.

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::frequency::Frequency;

/// One row of a [`ResultTable`]: a period and one cell per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Start date of the period.
    pub period: NaiveDate,
    /// Cells in column order; `None` marks a missing value.
    pub values: Vec<Option<f64>>,
}

/// Tidy table: one row per period (chronological), one column per indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    /// Frequency shared by every row.
    pub frequency: Frequency,
    /// Column names in request order.
    pub columns: Vec<String>,
    /// Rows in strictly ascending period order.
    pub rows: Vec<TableRow>,
}

impl ResultTable {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no series contributed any period.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row index (period start dates).
    #[must_use]
    pub fn periods(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|r| r.period).collect()
    }

    /// Row labels rendered at the table frequency (e.g. `2020-01`).
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| self.frequency.label(r.period))
            .collect()
    }

    /// Position of a column by name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of one column, aligned with [`periods`](Self::periods).
    #[must_use]
    pub fn column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r.values[idx]).collect())
    }

    /// Cell lookup; `None` if the row or column does not exist or the cell is missing.
    #[must_use]
    pub fn get(&self, period: NaiveDate, name: &str) -> Option<f64> {
        let idx = self.column_index(name)?;
        let row = self
            .rows
            .binary_search_by_key(&period, |r| r.period)
            .ok()?;
        self.rows[row].values[idx]
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "period")?;
        for c in &self.columns {
            write!(f, "\t{c}")?;
        }
        writeln!(f)?;
        for row in &self.rows {
            write!(f, "{}", self.frequency.label(row.period))?;
            for v in &row.values {
                match v {
                    Some(v) => write!(f, "\t{v}")?,
                    None => write!(f, "\t")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
