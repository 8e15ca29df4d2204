use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use bccr_core::connector::{BccrConnector, CatalogProvider, SeriesProvider};
use bccr_core::{BccrError, CatalogRecord, IndicatorCode, RawSeries};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(BccrError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

/// One recorded `series` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesCall {
    /// Requested code.
    pub code: IndicatorCode,
    /// Requested start bound.
    pub start: Option<NaiveDate>,
    /// Requested end bound.
    pub end: Option<NaiveDate>,
}

#[derive(Default)]
struct InternalState {
    series_rules: HashMap<IndicatorCode, MockBehavior<RawSeries>>,
    catalog: Option<MockBehavior<Vec<CatalogRecord>>>,
    series_calls: Vec<SeriesCall>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `series` calls for a specific code.
    pub async fn set_series_behavior(
        &self,
        code: impl Into<IndicatorCode>,
        behavior: MockBehavior<RawSeries>,
    ) {
        let mut guard = self.state.lock().await;
        guard.series_rules.insert(code.into(), behavior);
    }

    /// Set the behavior for `catalog_dump` calls.
    pub async fn set_catalog_behavior(&self, behavior: MockBehavior<Vec<CatalogRecord>>) {
        let mut guard = self.state.lock().await;
        guard.catalog = Some(behavior);
    }

    /// Return a copy of the `series` request log, in call order.
    pub async fn series_calls(&self) -> Vec<SeriesCall> {
        let guard = self.state.lock().await;
        guard.series_calls.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.series_rules.clear();
        guard.catalog = None;
        guard.series_calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Codes without a configured behavior answer `BccrError::UnknownCode`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn BccrConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn BccrConnector>, controller)
    }
}

async fn play<T>(behavior: Option<MockBehavior<T>>, missing: BccrError) -> Result<T, BccrError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => {
            std::future::pending::<()>().await;
            unreachable!()
        }
        None => Err(missing),
    }
}

#[async_trait]
impl BccrConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }
    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }
    fn as_catalog_provider(&self) -> Option<&dyn CatalogProvider> {
        Some(self as &dyn CatalogProvider)
    }
}

#[async_trait]
impl SeriesProvider for DynamicMockConnector {
    async fn series(
        &self,
        code: &IndicatorCode,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<RawSeries, BccrError> {
        // Log and snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.series_calls.push(SeriesCall {
                code: code.clone(),
                start,
                end,
            });
            guard.series_rules.get(code).cloned()
        };
        play(behavior, BccrError::unknown_code(code.clone())).await
    }
}

#[async_trait]
impl CatalogProvider for DynamicMockConnector {
    async fn catalog_dump(&self) -> Result<Vec<CatalogRecord>, BccrError> {
        let behavior = {
            let guard = self.state.lock().await;
            guard.catalog.clone()
        };
        play(behavior, BccrError::unsupported("catalog")).await
    }
}
