use bccr_types::{
    BccrError, FilledSeries, Frequency, MissingMode, Observation, Reducer, ResampledSeries,
};
use chrono::NaiveDate;

/// Generic resampler that groups chronologically sorted observations by a
/// bucket function and reduces each bucket to one value.
///
/// Buckets are contiguous runs sharing the same key, so the input must be
/// sorted by period (which `RawSeries` guarantees).
fn resample_by<F>(
    observations: Vec<Observation>,
    bucket_of: F,
    reducer: Reducer,
    missing: MissingMode,
) -> Vec<Observation>
where
    F: Fn(NaiveDate) -> NaiveDate,
{
    let mut out: Vec<Observation> = Vec::new();
    let mut iter = observations.into_iter();
    let Some(first) = iter.next() else {
        return out;
    };

    let mut cur_bucket = bucket_of(first.period);
    let mut values: Vec<Option<f64>> = vec![first.value];

    for obs in iter {
        let bucket = bucket_of(obs.period);
        if bucket == cur_bucket {
            values.push(obs.value);
        } else {
            out.push(Observation::new(cur_bucket, reduce(&values, reducer, missing)));
            cur_bucket = bucket;
            values.clear();
            values.push(obs.value);
        }
    }
    out.push(Observation::new(cur_bucket, reduce(&values, reducer, missing)));

    out
}

/// Reduce one bucket; `None` when the bucket has no usable value.
fn reduce(values: &[Option<f64>], reducer: Reducer, missing: MissingMode) -> Option<f64> {
    if missing == MissingMode::Propagate && values.iter().any(Option::is_none) {
        return None;
    }
    let mut present = values.iter().filter_map(|v| *v);

    match reducer {
        Reducer::First => present.next(),
        Reducer::Last => present.last(),
        Reducer::Sum => {
            let mut any = false;
            let total = present.inspect(|_| any = true).sum::<f64>();
            any.then_some(total)
        }
        Reducer::Mean => {
            let (sum, n) = present.fold((0.0_f64, 0_u32), |(s, n), v| (s + v, n + 1));
            (n > 0).then(|| sum / f64::from(n))
        }
        Reducer::Min => present.reduce(f64::min),
        Reducer::Max => present.reduce(f64::max),
    }
}

/// Convert a filled series to `target`, naming the result `name`.
///
/// When the series is already at `target` the observations are copied
/// unchanged. Otherwise every observation is assigned to the `target`
/// period that calendar-contains it (weekly observations by their week
/// start), and each group is reduced with `reducer`:
///
/// - `MissingMode::Propagate`: a missing value anywhere in a group makes
///   the group missing.
/// - `MissingMode::Ignore`: missing values are skipped; a group with no
///   value at all is missing.
///
/// # Errors
/// Returns `BccrError::UnsupportedFrequencyRefinement` if `target` is finer
/// than the series' frequency.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "bccr_core::timeseries::resample",
        skip(series, name),
        fields(code = %series.code, from = %series.frequency, to = %target, len = series.observations.len()),
    )
)]
pub fn resample(
    series: FilledSeries,
    name: impl Into<String>,
    target: Frequency,
    reducer: Reducer,
    missing: MissingMode,
) -> Result<ResampledSeries, BccrError> {
    let native = series.frequency;
    if !native.can_coarsen_to(target) {
        return Err(BccrError::UnsupportedFrequencyRefinement {
            requested: target,
            native,
        });
    }

    let observations = if native == target {
        series.observations
    } else {
        resample_by(
            series.observations,
            |d| target.period_start(d),
            reducer,
            missing,
        )
    };

    Ok(ResampledSeries {
        name: name.into(),
        frequency: target,
        observations,
    })
}
