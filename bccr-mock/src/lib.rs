//! Deterministic connectors for bccr tests and demos.
#![warn(missing_docs)]

use async_trait::async_trait;
use bccr_core::connector::{BccrConnector, CatalogProvider, SeriesProvider};
use bccr_core::{BccrError, CatalogRecord, IndicatorCode, RawSeries};
use chrono::NaiveDate;

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior, SeriesCall};

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
///
/// The fixture catalog is a small Spanish-language forest (prices, production,
/// exchange rates). Two special codes exercise failure paths: `FAIL` always
/// fails with `BccrError::Fetch`, and `TIMEOUT` answers after a short delay.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector over the built-in fixture catalog and series.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The fixture catalog dump, as served by `catalog_dump`.
    #[must_use]
    pub fn catalog_records() -> Vec<CatalogRecord> {
        fixtures::catalog::records()
    }

    async fn maybe_fail_or_timeout(code: &IndicatorCode) -> Result<(), BccrError> {
        match code.as_str() {
            "FAIL" => Err(BccrError::fetch(code.clone(), "forced failure")),
            "TIMEOUT" => {
                // Short enough for tests; long enough to trip a tight fetch timeout.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl BccrConnector for MockConnector {
    fn name(&self) -> &'static str {
        "bccr-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }
    fn as_catalog_provider(&self) -> Option<&dyn CatalogProvider> {
        Some(self as &dyn CatalogProvider)
    }
}

#[async_trait]
impl SeriesProvider for MockConnector {
    async fn series(
        &self,
        code: &IndicatorCode,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<RawSeries, BccrError> {
        Self::maybe_fail_or_timeout(code).await?;
        let known = fixtures::catalog::records()
            .iter()
            .any(|r| r.code.as_ref() == Some(code));
        match fixtures::series::by_code(code.as_str()) {
            Some(s) => Ok(s.within(start, end)),
            None if known => Err(BccrError::fetch(code.clone(), "no data published")),
            None => Err(BccrError::unknown_code(code.clone())),
        }
    }
}

#[async_trait]
impl CatalogProvider for MockConnector {
    async fn catalog_dump(&self) -> Result<Vec<CatalogRecord>, BccrError> {
        Ok(fixtures::catalog::records())
    }
}
