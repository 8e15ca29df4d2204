use bccr_types::{FillPolicy, FilledSeries, Observation, RawSeries};

/// Fill the missing slots of a raw series according to `policy`.
///
/// Filling runs at the native frequency, before any resampling, so a gap is
/// measured in native sampling intervals. Periods are never added or
/// removed; only missing values are replaced.
///
/// - `None`: values are copied unchanged.
/// - `Forward`: each missing slot takes the last known value before it;
///   slots before the first known value stay missing.
/// - `Backward`: each missing slot takes the next known value after it;
///   slots after the last known value stay missing.
#[must_use]
pub fn fill(series: RawSeries, policy: FillPolicy) -> FilledSeries {
    let (code, frequency, mut observations) = series.into_parts();

    match policy {
        FillPolicy::None => {}
        FillPolicy::Forward => carry(observations.iter_mut()),
        FillPolicy::Backward => carry(observations.iter_mut().rev()),
    }

    FilledSeries {
        code,
        frequency,
        policy,
        observations,
    }
}

fn carry<'a, I>(slots: I)
where
    I: Iterator<Item = &'a mut Observation>,
{
    let mut last: Option<f64> = None;
    for slot in slots {
        match slot.value {
            Some(v) => last = Some(v),
            None => slot.value = last,
        }
    }
}
