use std::sync::Arc;
use std::time::Duration;

use bccr_core::{BccrConnector, BccrError, Catalog, IndicatorCode, RawSeries};
use bccr_types::{BccrConfig, FillPolicy, Frequency, MissingMode, Reducer};
use chrono::NaiveDate;

/// Orchestrator that owns the catalog and routes series requests to a connector.
///
/// The catalog is immutable once built and shared behind an `Arc`, so a
/// `Bccr` can serve concurrent searches and table requests without locking.
pub struct Bccr {
    pub(crate) connector: Arc<dyn BccrConnector>,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) cfg: BccrConfig,
}

/// Builder for constructing a `Bccr` orchestrator with custom configuration.
pub struct BccrBuilder {
    connector: Option<Arc<dyn BccrConnector>>,
    catalog: Option<Arc<Catalog>>,
    cfg: BccrConfig,
}

impl Default for BccrBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BccrBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Defaults: output frequency inferred from the inputs, `Mean` reducer,
    /// missing values ignored, no gap filling, 30s per-fetch timeout and no
    /// overall deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            catalog: None,
            cfg: BccrConfig::default(),
        }
    }

    /// Register the connector that serves series (and optionally the catalog).
    ///
    /// A `Bccr` talks to exactly one source; registering again replaces the
    /// previous connector.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn BccrConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Use an already loaded catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: impl Into<Arc<Catalog>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: BccrConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Default output frequency; `None` infers the coarsest native one.
    #[must_use]
    pub const fn frequency(mut self, frequency: Option<Frequency>) -> Self {
        self.cfg.frequency = frequency;
        self
    }

    /// Default reducer used when coarsening a series.
    #[must_use]
    pub const fn reducer(mut self, reducer: Reducer) -> Self {
        self.cfg.reducer = reducer;
        self
    }

    /// Default treatment of missing values inside a resampling group.
    #[must_use]
    pub const fn missing_mode(mut self, mode: MissingMode) -> Self {
        self.cfg.missing_mode = mode;
        self
    }

    /// Default gap-filling policy, applied at native frequency.
    #[must_use]
    pub const fn fill_policy(mut self, policy: FillPolicy) -> Self {
        self.cfg.fill_policy = policy;
        self
    }

    /// Bound each individual series fetch.
    ///
    /// A fetch that exceeds it fails the whole request with `BccrError::Fetch`.
    #[must_use]
    pub const fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.fetch_timeout = timeout;
        self
    }

    /// Set an overall deadline for the concurrent fetch phase of a request.
    ///
    /// When exceeded, the request fails with `BccrError::RequestTimeout`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Bccr` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector or no catalog was provided, or if
    /// the per-fetch timeout is zero.
    pub fn build(self) -> Result<Bccr, BccrError> {
        let connector = self.connector.ok_or_else(|| {
            BccrError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            )
        })?;
        let catalog = self.catalog.ok_or_else(|| {
            BccrError::InvalidArg(
                "no catalog provided; use catalog(...) or build_with_remote_catalog()".to_string(),
            )
        })?;
        if self.cfg.fetch_timeout.is_zero() {
            return Err(BccrError::InvalidArg("fetch timeout must be positive".into()));
        }

        Ok(Bccr {
            connector,
            catalog,
            cfg: self.cfg,
        })
    }

    /// Fetch the catalog through the connector, then [`build`](Self::build).
    ///
    /// A catalog set with [`catalog`](Self::catalog) is replaced.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector is registered, `Unsupported` if it
    /// cannot serve a catalog, `CatalogFormat` if the dump is malformed, or
    /// any error the connector reports.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "bccr::core::build_with_remote_catalog", skip(self), err)
    )]
    pub async fn build_with_remote_catalog(mut self) -> Result<Bccr, BccrError> {
        let connector = self.connector.clone().ok_or_else(|| {
            BccrError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            )
        })?;
        let provider = connector
            .as_catalog_provider()
            .ok_or_else(|| BccrError::unsupported("catalog"))?;

        let records = Bccr::call_with_timeout(self.cfg.fetch_timeout, provider.catalog_dump())
            .await
            .map_err(|_| BccrError::request_timeout("catalog"))??;
        self.catalog = Some(Arc::new(Catalog::load(records)?));
        self.build()
    }
}

impl Bccr {
    /// Start building a new `Bccr` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use bccr::{Bccr, Catalog};
    ///
    /// let bccr = Bccr::builder()
    ///     .with_connector(Arc::new(MyConnector::new()))
    ///     .catalog(Catalog::from_json(&dump)?)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> BccrBuilder {
        BccrBuilder::new()
    }

    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Configuration defaults applied to every request.
    #[must_use]
    pub const fn config(&self) -> &BccrConfig {
        &self.cfg
    }

    /// Name of the registered connector.
    #[must_use]
    pub fn connector_name(&self) -> &'static str {
        self.connector.name()
    }

    async fn call_with_timeout<T, Fut>(
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, tokio::time::error::Elapsed>
    where
        Fut: core::future::Future<Output = T>,
    {
        tokio::time::timeout(timeout, fut).await
    }

    /// Fetch one raw series, bounded by the per-fetch timeout.
    ///
    /// Errors are tagged with the failing code; a timeout becomes `Fetch`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "bccr::core::fetch_series",
            skip(self, code),
            fields(
                connector = self.connector.name(),
                code = %code,
                timeout_ms = u64::try_from(self.cfg.fetch_timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn fetch_series(
        &self,
        code: &IndicatorCode,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<RawSeries, BccrError> {
        let provider = self
            .connector
            .as_series_provider()
            .ok_or_else(|| BccrError::unsupported("series"))?;
        let timeout = self.cfg.fetch_timeout;

        match Self::call_with_timeout(timeout, provider.series(code, start, end)).await {
            Ok(res) => res.map_err(|e| e.tag_fetch(code)),
            Err(_) => Err(BccrError::fetch(
                code.clone(),
                format!("timed out after {}ms", timeout.as_millis()),
            )),
        }
    }
}
