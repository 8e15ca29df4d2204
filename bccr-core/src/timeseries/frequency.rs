use bccr_types::{BccrError, Frequency};

/// Determine the single output frequency of a merge.
///
/// - Without `requested`, the result is the coarsest native frequency, so
///   every series can be aggregated without fabricating finer data.
/// - With `requested`, it must be coarser than or equal to every native
///   frequency and is returned as is.
///
/// # Errors
/// - `BccrError::UnsupportedFrequencyRefinement` if `requested` is finer than
///   some native frequency (the coarsest offending one is reported).
/// - `BccrError::InvalidArg` if there are no native frequencies and nothing
///   was requested.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "bccr_core::timeseries::resolve",
        skip(native),
        fields(requested = ?requested),
    )
)]
pub fn resolve<I>(native: I, requested: Option<Frequency>) -> Result<Frequency, BccrError>
where
    I: IntoIterator<Item = Frequency>,
{
    let coarsest = native.into_iter().max();

    let resolved = match (requested, coarsest) {
        (Some(req), Some(native)) if !native.can_coarsen_to(req) => {
            return Err(BccrError::UnsupportedFrequencyRefinement {
                requested: req,
                native,
            });
        }
        (Some(req), _) => req,
        (None, Some(native)) => native,
        (None, None) => {
            return Err(BccrError::InvalidArg(
                "cannot resolve an output frequency without any series".into(),
            ));
        }
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(frequency = %resolved, "resolved output frequency");

    Ok(resolved)
}
