//! Configuration types shared by the engine and the orchestrator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::frequency::Frequency;

/// How the values of one coarse period are reduced to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reducer {
    /// Arithmetic mean of the group.
    #[default]
    Mean,
    /// Sum of the group.
    Sum,
    /// Chronologically last value.
    Last,
    /// Chronologically first value.
    First,
    /// Smallest value.
    Min,
    /// Largest value.
    Max,
}

/// Treatment of missing values inside a resampling group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingMode {
    /// Exclude missing values; a group with no values reduces to missing.
    #[default]
    Ignore,
    /// Any missing value makes the whole group missing.
    Propagate,
}

/// Gap filling policy applied at the native frequency, before resampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillPolicy {
    /// Missing slots stay missing.
    #[default]
    None,
    /// Carry the last known value forward; leading gaps stay missing.
    Forward,
    /// Carry the next known value backward; trailing gaps stay missing.
    Backward,
}

/// Defaults applied to every table request issued through the orchestrator.
///
/// Each field can be overridden per request; a request field left as `None`
/// falls back to the value configured here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BccrConfig {
    /// Output frequency; `None` picks the coarsest native frequency.
    pub frequency: Option<Frequency>,
    /// Reducer used when a series has to be coarsened.
    pub reducer: Reducer,
    /// Missing value handling inside resampling groups.
    pub missing_mode: MissingMode,
    /// Gap filling policy applied before resampling.
    pub fill_policy: FillPolicy,
    /// Timeout for a single series fetch.
    pub fetch_timeout: Duration,
    /// Optional deadline for fetching every series of one request.
    pub request_timeout: Option<Duration>,
}

impl Default for BccrConfig {
    fn default() -> Self {
        Self {
            frequency: None,
            reducer: Reducer::Mean,
            missing_mode: MissingMode::Ignore,
            fill_policy: FillPolicy::None,
            fetch_timeout: Duration::from_secs(30),
            request_timeout: None,
        }
    }
}
