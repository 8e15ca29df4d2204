//! bccr-core
//!
//! The synchronous engine behind the bccr toolkit, plus the traits that
//! describe its external collaborators.
//!
//! - `catalog`: the indicator forest (`Catalog`) and free-text search over it.
//! - `timeseries`: frequency resolution, gap filling, resampling and the
//!   outer-join table merger.
//! - `connector`: the `BccrConnector` trait and the series/catalog provider
//!   role traits implemented by transports.
//! - `dates`: parsing of loose date bounds (`2010`, `2010/03`, `15/03/2010`).
//!
//! Nothing in this crate blocks or suspends except the connector traits,
//! which are async because they sit on the network boundary. Every other
//! function is a pure transformation of already retrieved values, and a
//! loaded `Catalog` is immutable, so it can be shared across threads without
//! locking.
#![warn(missing_docs)]

/// Indicator catalog and catalog search.
pub mod catalog;
/// Connector capability traits and the primary `BccrConnector` interface.
pub mod connector;
/// Loose date bound parsing.
pub mod dates;
/// Series alignment: frequency resolution, filling, resampling, merging.
pub mod timeseries;
pub mod types;

pub use catalog::Catalog;
pub use catalog::search::{normalize_text, search};
pub use connector::{BccrConnector, CatalogProvider, SeriesProvider};
pub use dates::{DateBound, parse_date_bound};
pub use timeseries::fill::fill;
pub use timeseries::frequency::resolve;
pub use timeseries::merge::merge;
pub use timeseries::resample::resample;
pub use types::*;
