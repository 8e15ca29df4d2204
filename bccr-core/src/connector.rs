use async_trait::async_trait;
use chrono::NaiveDate;

use bccr_types::{BccrError, CatalogRecord, IndicatorCode, RawSeries};

/// Focused role trait for connectors that serve indicator series.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Fetch one raw series at its native frequency.
    ///
    /// `start`/`end` bound the requested dates (inclusive) when set. An
    /// unknown code should be reported as `BccrError::UnknownCode`; any
    /// transport, authentication or payload failure as `BccrError::Fetch`
    /// (other errors are tagged into `Fetch` by the orchestrator). The
    /// engine never retries a failed fetch.
    async fn series(
        &self,
        code: &IndicatorCode,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<RawSeries, BccrError>;
}

/// Focused role trait for connectors that can deliver the indicator catalog.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the flat list of catalog records, fed to `Catalog::load`.
    async fn catalog_dump(&self) -> Result<Vec<CatalogRecord>, BccrError>;
}

/// Main connector trait implemented by transports to the remote source.
#[async_trait]
pub trait BccrConnector: Send + Sync {
    /// A stable identifier used in logs and errors (e.g. "bccr-mock").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise series capability by returning a usable trait object reference when supported.
    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        None
    }

    /// Advertise catalog capability by returning a usable trait object reference when supported.
    fn as_catalog_provider(&self) -> Option<&dyn CatalogProvider> {
        None
    }
}
