use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use bccr::{BccrConnector, BccrError, CatalogRecord, IndicatorCode, RawSeries};
use bccr_core::connector::{CatalogProvider, SeriesProvider};
use chrono::NaiveDate;

/// In-test connector serving a fixed set of series and an optional catalog dump.
pub struct MockConnector {
    pub name: &'static str,
    pub series: HashMap<IndicatorCode, RawSeries>,
    pub catalog: Option<Vec<CatalogRecord>>,
    pub calls: AtomicUsize,
}

impl MockConnector {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            series: HashMap::new(),
            catalog: None,
            calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn with_series(mut self, s: RawSeries) -> Self {
        self.series.insert(s.code().clone(), s);
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, records: Vec<CatalogRecord>) -> Self {
        self.catalog = Some(records);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl BccrConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }

    fn as_catalog_provider(&self) -> Option<&dyn CatalogProvider> {
        self.catalog.as_ref().map(|_| self as &dyn CatalogProvider)
    }
}

#[async_trait::async_trait]
impl SeriesProvider for MockConnector {
    async fn series(
        &self,
        code: &IndicatorCode,
        _start: Option<NaiveDate>,
        _end: Option<NaiveDate>,
    ) -> Result<RawSeries, BccrError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.series
            .get(code)
            .cloned()
            .ok_or_else(|| BccrError::unknown_code(code.clone()))
    }
}

#[async_trait::async_trait]
impl CatalogProvider for MockConnector {
    async fn catalog_dump(&self) -> Result<Vec<CatalogRecord>, BccrError> {
        self.catalog
            .clone()
            .ok_or_else(|| BccrError::unsupported("catalog"))
    }
}

/// Connector that advertises no capability at all.
pub struct Inert;

#[async_trait::async_trait]
impl BccrConnector for Inert {
    fn name(&self) -> &'static str {
        "inert"
    }
}

/// Connector whose series call returns a non-fetch error.
pub struct Garbled;

#[async_trait::async_trait]
impl BccrConnector for Garbled {
    fn name(&self) -> &'static str {
        "garbled"
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }
}

#[async_trait::async_trait]
impl SeriesProvider for Garbled {
    async fn series(
        &self,
        _code: &IndicatorCode,
        _start: Option<NaiveDate>,
        _end: Option<NaiveDate>,
    ) -> Result<RawSeries, BccrError> {
        Err(BccrError::Data("unparsable payload".into()))
    }
}
