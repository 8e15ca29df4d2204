use std::sync::Arc;
use std::time::Duration;

use crate::helpers::{Inert, small_catalog_records, small_connector};
use bccr::{Bccr, BccrConfig, BccrError, Catalog, FillPolicy, MissingMode, Reducer};
use bccr_mock::{DynamicMockConnector, MockBehavior};

#[test]
fn build_requires_connector_and_catalog() {
    let no_conn = Bccr::builder()
        .catalog(Catalog::load(small_catalog_records()).unwrap())
        .build();
    assert!(matches!(no_conn, Err(BccrError::InvalidArg(_))));

    let no_catalog = Bccr::builder().with_connector(small_connector()).build();
    assert!(matches!(no_catalog, Err(BccrError::InvalidArg(_))));
}

#[test]
fn zero_fetch_timeout_is_rejected() {
    let res = Bccr::builder()
        .with_connector(small_connector())
        .catalog(Catalog::load(small_catalog_records()).unwrap())
        .fetch_timeout(Duration::ZERO)
        .build();
    assert!(matches!(res, Err(BccrError::InvalidArg(_))));
}

#[test]
fn builder_defaults_reach_config() {
    let bccr = Bccr::builder()
        .with_connector(small_connector())
        .catalog(Catalog::load(small_catalog_records()).unwrap())
        .reducer(Reducer::Last)
        .missing_mode(MissingMode::Propagate)
        .fill_policy(FillPolicy::Forward)
        .request_timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let cfg = bccr.config();
    assert_eq!(cfg.reducer, Reducer::Last);
    assert_eq!(cfg.missing_mode, MissingMode::Propagate);
    assert_eq!(cfg.fill_policy, FillPolicy::Forward);
    assert_eq!(cfg.request_timeout, Some(Duration::from_secs(5)));
    assert_eq!(cfg.frequency, None);
    assert_eq!(bccr.connector_name(), "small");
    assert_eq!(bccr.catalog().len(), 3);

    let plain = Bccr::builder()
        .with_connector(small_connector())
        .catalog(Catalog::load(small_catalog_records()).unwrap())
        .build()
        .unwrap();
    assert_eq!(plain.config(), &BccrConfig::default());
}

#[tokio::test]
async fn remote_catalog_comes_from_connector() {
    let bccr = Bccr::builder()
        .with_connector(small_connector())
        .build_with_remote_catalog()
        .await
        .unwrap();
    assert_eq!(bccr.catalog().len(), 3);
}

#[tokio::test]
async fn remote_catalog_requires_provider() {
    let err = Bccr::builder()
        .with_connector(Arc::new(Inert))
        .build_with_remote_catalog()
        .await
        .err()
        .unwrap();
    assert_eq!(err, BccrError::unsupported("catalog"));
}

#[tokio::test]
async fn malformed_remote_catalog_is_rejected() {
    let (conn, controller) = DynamicMockConnector::new_with_controller("dyn");
    let mut records = small_catalog_records();
    records[1] = records[1].clone().with_parent("999");
    controller
        .set_catalog_behavior(MockBehavior::Return(records))
        .await;
    let err = Bccr::builder()
        .with_connector(conn)
        .build_with_remote_catalog()
        .await
        .err()
        .unwrap();
    assert!(matches!(err, BccrError::CatalogFormat { .. }), "{err:?}");
}

#[tokio::test]
async fn hanging_catalog_dump_times_out() {
    let (conn, controller) = DynamicMockConnector::new_with_controller("dyn");
    controller.set_catalog_behavior(MockBehavior::Hang).await;
    let err = Bccr::builder()
        .with_connector(conn)
        .fetch_timeout(Duration::from_millis(20))
        .build_with_remote_catalog()
        .await
        .err()
        .unwrap();
    assert_eq!(err, BccrError::request_timeout("catalog"));
}
