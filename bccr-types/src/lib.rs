//! Data transfer objects, configuration primitives and the unified error type
//! shared by every crate of the bccr workspace.
#![warn(missing_docs)]

mod catalog;
mod code;
mod config;
mod error;
mod frequency;
mod query;
mod reports;
mod series;
mod table;
mod text;

pub use catalog::{CatalogRecord, IndicatorMeta};
pub use code::IndicatorCode;
pub use config::{BccrConfig, FillPolicy, MissingMode, Reducer};
pub use error::BccrError;
pub use frequency::Frequency;
pub use query::{CatalogQuery, SearchMode};
pub use reports::{SearchReport, SearchRow, WhoReport};
pub use series::{FilledSeries, Observation, RawSeries, ResampledSeries};
pub use table::{ResultTable, TableRow};
pub use text::normalize_text;
