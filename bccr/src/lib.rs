//! bccr searches an economic indicator catalog and merges indicator series
//! published at different frequencies into one tidy table.
//!
//! Overview
//! - A `Bccr` owns an immutable [`Catalog`] and one connector implementing
//!   the `bccr_core` connector traits (the transport to the remote service).
//! - The search entry points (`search`, `who`, `subaccounts`) are read-only
//!   queries over the catalog.
//! - The pipeline entry point (`table`, or the fluent `download()` builder)
//!   fetches every requested series, fills gaps at native frequency,
//!   resamples to a single output frequency and outer-joins the results.
//!
//! Key behaviors and trade-offs
//! - Output frequency: the coarsest native frequency unless one is requested;
//!   a requested frequency finer than some input fails instead of inventing
//!   sub-period data.
//! - Aggregation: `Mean` by default; `Sum`, `First`, `Last`, `Min`, `Max`
//!   are available per request or per column. Missing values are ignored by
//!   default, or can poison their whole group (`MissingMode::Propagate`).
//! - Failure policy: no partial tables. An unknown code, a failed fetch or a
//!   timeout aborts the request; nothing is retried.
//!
//! Examples
//! Building an orchestrator from a connector that also serves the catalog:
//! ```rust,ignore
//! use std::sync::Arc;
//! use bccr::{Bccr, Reducer};
//!
//! let bccr = Bccr::builder()
//!     .with_connector(Arc::new(MyConnector::new()))
//!     .reducer(Reducer::Mean)
//!     .build_with_remote_catalog()
//!     .await?;
//! ```
//!
//! Searching, then downloading a merged table:
//! ```rust,ignore
//! use bccr::CatalogQuery;
//!
//! let hits = bccr.search(&CatalogQuery::all_words("tipo cambio"))?;
//! println!("{hits}");
//!
//! let table = bccr
//!     .download()
//!     .indicator("compra", 317)?
//!     .indicator("ipc", 25482)?
//!     .since("2020")?
//!     .run()
//!     .await?;
//! println!("{table}");
//! ```
//!
//! See `bccr/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Bccr, BccrBuilder};
pub use router::download::{DownloadBuilder, IndicatorSpec, TableRequest};
pub use router::util::join_with_deadline;

// Re-export core types for convenience
pub use bccr_core::{
    BccrConfig,
    BccrConnector,
    BccrError,
    Catalog,
    CatalogQuery,
    CatalogRecord,
    FillPolicy,
    Frequency,
    IndicatorCode,
    IndicatorMeta,
    MissingMode,
    Observation,
    RawSeries,
    Reducer,
    ResultTable,
    SearchMode,
    SearchReport,
    SearchRow,
    TableRow,
    WhoReport,
};
