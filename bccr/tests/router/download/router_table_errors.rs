use std::sync::Arc;
use std::time::Duration;

use crate::helpers::{A, B, Garbled, Inert, d, small_bccr, small_catalog_records, small_connector};
use bccr::{Bccr, BccrError, Catalog, Frequency, IndicatorSpec, RawSeries, TableRequest};
use bccr_mock::{DynamicMockConnector, MockBehavior};

#[tokio::test]
async fn duplicate_name_rejected_by_builder_and_request() {
    let conn = small_connector();
    let bccr = small_bccr(conn.clone());

    let err = bccr
        .download()
        .indicator("ipc", A)
        .unwrap()
        .indicator("ipc", B)
        .err()
        .unwrap();
    assert_eq!(err, BccrError::duplicate_name("ipc"));

    let req = TableRequest {
        indicators: vec![IndicatorSpec::new("ipc", A), IndicatorSpec::new("ipc", B)],
        ..TableRequest::default()
    };
    assert_eq!(
        bccr.table(req).await.unwrap_err(),
        BccrError::duplicate_name("ipc")
    );
    assert_eq!(conn.call_count(), 0, "validation must precede fetching");
}

#[tokio::test]
async fn unknown_code_fails_before_any_fetch() {
    let conn = small_connector();
    let bccr = small_bccr(conn.clone());
    let err = bccr
        .download()
        .indicator("a", A)
        .unwrap()
        .indicator("x", "404")
        .unwrap()
        .run()
        .await
        .unwrap_err();
    assert_eq!(err, BccrError::unknown_code("404"));
    assert_eq!(conn.call_count(), 0);
}

#[tokio::test]
async fn refinement_is_rejected_before_fetching() {
    let conn = small_connector();
    let bccr = small_bccr(conn.clone());
    let err = bccr
        .download()
        .indicator("b", B)
        .unwrap()
        .frequency(Frequency::Daily)
        .run()
        .await
        .unwrap_err();
    assert_eq!(
        err,
        BccrError::UnsupportedFrequencyRefinement {
            requested: Frequency::Daily,
            native: Frequency::Monthly,
        }
    );
    assert_eq!(conn.call_count(), 0);
}

#[tokio::test]
async fn empty_request_and_reversed_dates_are_invalid() {
    let bccr = small_bccr(small_connector());
    assert!(matches!(
        bccr.table(TableRequest::default()).await,
        Err(BccrError::InvalidArg(_))
    ));
    let res = bccr
        .download()
        .indicator("a", A)
        .unwrap()
        .period(d(2020, 2, 1), d(2020, 1, 1))
        .run()
        .await;
    assert!(matches!(res, Err(BccrError::InvalidArg(_))));
    assert!(matches!(
        bccr.download().since("first of May"),
        Err(BccrError::InvalidArg(_))
    ));
}

#[tokio::test]
async fn first_failure_in_input_order_wins() {
    let (conn, controller) = DynamicMockConnector::new_with_controller("dyn");
    controller
        .set_series_behavior(A, MockBehavior::Fail(BccrError::fetch(A, "first")))
        .await;
    controller
        .set_series_behavior(B, MockBehavior::Fail(BccrError::fetch(B, "second")))
        .await;
    let bccr = Bccr::builder()
        .with_connector(conn)
        .catalog(Catalog::load(small_catalog_records()).unwrap())
        .build()
        .unwrap();

    let err = bccr
        .download()
        .indicator("b", B)
        .unwrap()
        .indicator("a", A)
        .unwrap()
        .run()
        .await
        .unwrap_err();
    assert_eq!(err, BccrError::fetch(B, "second"));
    // Both fetches were issued concurrently regardless.
    assert_eq!(controller.series_calls().await.len(), 2);
}

#[tokio::test]
async fn fetch_timeout_maps_to_fetch_error() {
    let (conn, controller) = DynamicMockConnector::new_with_controller("dyn");
    controller.set_series_behavior(A, MockBehavior::Hang).await;
    let bccr = Bccr::builder()
        .with_connector(conn)
        .catalog(Catalog::load(small_catalog_records()).unwrap())
        .fetch_timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    let err = bccr
        .download()
        .indicator("a", A)
        .unwrap()
        .run()
        .await
        .unwrap_err();
    match err {
        BccrError::Fetch { code, cause } => {
            assert_eq!(code.as_str(), A);
            assert!(cause.contains("timed out"), "{cause}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn request_deadline_maps_to_request_timeout() {
    let (conn, controller) = DynamicMockConnector::new_with_controller("dyn");
    controller.set_series_behavior(A, MockBehavior::Hang).await;
    controller
        .set_series_behavior(
            B,
            MockBehavior::Return(RawSeries::new(B, Frequency::Monthly, Vec::new())),
        )
        .await;
    let bccr = Bccr::builder()
        .with_connector(conn)
        .catalog(Catalog::load(small_catalog_records()).unwrap())
        .request_timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    let err = bccr
        .download()
        .indicators([("a", A), ("b", B)])
        .unwrap()
        .run()
        .await
        .unwrap_err();
    assert_eq!(err, BccrError::request_timeout("table"));
}

#[tokio::test]
async fn connector_errors_are_tagged_with_code() {
    let bccr = Bccr::builder()
        .with_connector(Arc::new(Garbled))
        .catalog(Catalog::load(small_catalog_records()).unwrap())
        .build()
        .unwrap();
    let err = bccr
        .download()
        .indicator("a", A)
        .unwrap()
        .run()
        .await
        .unwrap_err();
    assert_eq!(
        err,
        BccrError::fetch(A, "data issue: unparsable payload")
    );
}

#[tokio::test]
async fn connector_without_series_is_unsupported() {
    let bccr = Bccr::builder()
        .with_connector(Arc::new(Inert))
        .catalog(Catalog::load(small_catalog_records()).unwrap())
        .build()
        .unwrap();
    let err = bccr
        .download()
        .indicator("a", A)
        .unwrap()
        .run()
        .await
        .unwrap_err();
    assert_eq!(err, BccrError::unsupported("series"));
}

#[tokio::test]
async fn fixture_fail_code_aborts_table() {
    let bccr = crate::helpers::fixture_bccr().await;
    let err = bccr
        .download()
        .indicator("ok", 317)
        .unwrap()
        .indicator("bad", "FAIL")
        .unwrap()
        .run()
        .await
        .unwrap_err();
    assert!(matches!(err, BccrError::Fetch { code, .. } if code.as_str() == "FAIL"));
}
