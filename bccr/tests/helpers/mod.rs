// Re-export helpers so tests can `use helpers::*;`
pub mod mock_connector;

use std::sync::Arc;

pub use mock_connector::{Garbled, Inert, MockConnector};

use bccr::{Bccr, Catalog, CatalogRecord, Frequency, RawSeries};
use chrono::{Days, NaiveDate};

// ---------- Lightweight fixtures and helpers for tests ----------

/// Codes of the small two-series catalog.
pub const A: &str = "1";
pub const B: &str = "2";
pub const Q: &str = "3";

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("invalid date")
}

/// A daily, B monthly, Q quarterly.
pub fn small_catalog_records() -> Vec<CatalogRecord> {
    vec![
        CatalogRecord::new(A, "Serie diaria A", "Diaria", "u"),
        CatalogRecord::new(B, "Serie mensual B", "Mensual", "u"),
        CatalogRecord::new(Q, "Serie trimestral Q", "Trimestral", "u"),
    ]
}

/// A: every day of January 2020 equals 1. B: January 2020 equals 30.
pub fn daily_a() -> RawSeries {
    RawSeries::from_pairs(
        A,
        Frequency::Daily,
        (0..31).map(|i| (d(2020, 1, 1) + Days::new(i), Some(1.0))),
    )
}

pub fn monthly_b() -> RawSeries {
    RawSeries::from_pairs(B, Frequency::Monthly, [(d(2020, 1, 1), Some(30.0))])
}

pub fn quarterly_q() -> RawSeries {
    RawSeries::from_pairs(
        Q,
        Frequency::Quarterly,
        [(d(2019, 10, 1), Some(4.0)), (d(2020, 1, 1), Some(8.0))],
    )
}

pub fn small_connector() -> Arc<MockConnector> {
    Arc::new(
        MockConnector::new("small")
            .with_series(daily_a())
            .with_series(monthly_b())
            .with_series(quarterly_q())
            .with_catalog(small_catalog_records()),
    )
}

pub fn small_bccr(conn: Arc<MockConnector>) -> Bccr {
    Bccr::builder()
        .with_connector(conn)
        .catalog(Catalog::load(small_catalog_records()).expect("catalog"))
        .build()
        .expect("bccr")
}

/// Orchestrator over the `bccr-mock` fixture connector.
pub async fn fixture_bccr() -> Bccr {
    Bccr::builder()
        .with_connector(Arc::new(bccr_mock::MockConnector::new()))
        .build_with_remote_catalog()
        .await
        .expect("fixture bccr")
}
