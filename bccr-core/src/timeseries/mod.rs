//! Series alignment, leaf-first:
//! - `frequency`: pick the single output frequency for a merge
//! - `fill`: fill gaps of one series at its native frequency
//! - `resample`: coarsen one filled series with a reducer
//! - `merge`: outer-join resampled series into a tidy table
/// Output frequency resolution.
pub mod frequency;
/// Gap filling at the native frequency.
pub mod fill;
/// Merge of resampled series into a result table.
pub mod merge;
/// Calendar resampling with configurable reducers.
pub mod resample;
