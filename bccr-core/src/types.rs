//! Re-export of foundational types from `bccr-types`.
// Consolidated re-exports so downstream crates can depend on `bccr-core` only

pub use bccr_types::{BccrConfig, BccrError, FillPolicy, MissingMode, Reducer};

pub use bccr_types::{CatalogQuery, CatalogRecord, IndicatorCode, IndicatorMeta, SearchMode};

pub use bccr_types::{FilledSeries, Frequency, Observation, RawSeries, ResampledSeries};

pub use bccr_types::{ResultTable, SearchReport, SearchRow, TableRow, WhoReport};
