use std::collections::{BTreeMap, HashSet};

use bccr_types::{BccrError, Frequency, ResampledSeries, ResultTable, TableRow};
use chrono::NaiveDate;

/// Outer-join resampled series on period into one table.
///
/// - Rows are the sorted union of every period of every input series.
/// - Columns follow input order and carry each series' name.
/// - A cell is missing when its series has no observation for that row.
///
/// # Errors
/// - `BccrError::DuplicateName` if two inputs share a name.
/// - `BccrError::InvalidArg` if `series` is empty.
/// - `BccrError::Data` if the inputs are not all at the same frequency.
pub fn merge<I>(series: I) -> Result<ResultTable, BccrError>
where
    I: IntoIterator<Item = ResampledSeries>,
{
    let series: Vec<ResampledSeries> = series.into_iter().collect();
    let Some(frequency) = series.first().map(|s| s.frequency) else {
        return Err(BccrError::InvalidArg("nothing to merge".into()));
    };

    let mut seen: HashSet<&str> = HashSet::new();
    for s in &series {
        if !seen.insert(s.name.as_str()) {
            return Err(BccrError::duplicate_name(&s.name));
        }
        if s.frequency != frequency {
            return Err(mixed_frequencies(&s.name, s.frequency, frequency));
        }
    }

    let width = series.len();
    let mut rows: BTreeMap<NaiveDate, Vec<Option<f64>>> = BTreeMap::new();
    for (col, s) in series.iter().enumerate() {
        for obs in &s.observations {
            rows.entry(obs.period).or_insert_with(|| vec![None; width])[col] = obs.value;
        }
    }

    Ok(ResultTable {
        frequency,
        columns: series.into_iter().map(|s| s.name).collect(),
        rows: rows
            .into_iter()
            .map(|(period, values)| TableRow { period, values })
            .collect(),
    })
}

fn mixed_frequencies(name: &str, got: Frequency, expected: Frequency) -> BccrError {
    BccrError::Data(format!(
        "series '{name}' is {got} but the table is {expected}"
    ))
}
