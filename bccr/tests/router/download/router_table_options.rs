use std::sync::Arc;

use crate::helpers::{MockConnector, d, fixture_bccr};
use bccr::{Bccr, Catalog, CatalogRecord, FillPolicy, Frequency, MissingMode, RawSeries, Reducer};

const GAPPY: &str = "900";

/// Monthly series: Jan 5, Feb missing, Mar missing, Apr 8, May missing.
fn gappy_bccr() -> Bccr {
    let series = RawSeries::from_pairs(
        GAPPY,
        Frequency::Monthly,
        [
            (d(2020, 1, 1), Some(5.0)),
            (d(2020, 2, 1), None),
            (d(2020, 3, 1), None),
            (d(2020, 4, 1), Some(8.0)),
            (d(2020, 5, 1), None),
        ],
    );
    let records = vec![CatalogRecord::new(GAPPY, "Serie con huecos", "Mensual", "u")];
    Bccr::builder()
        .with_connector(Arc::new(MockConnector::new("gappy").with_series(series)))
        .catalog(Catalog::load(records).unwrap())
        .build()
        .unwrap()
}

async fn column(bccr: &Bccr, fill: FillPolicy) -> Vec<Option<f64>> {
    bccr.download()
        .indicator("x", GAPPY)
        .unwrap()
        .fill(fill)
        .run()
        .await
        .unwrap()
        .column("x")
        .unwrap()
}

#[tokio::test]
async fn fill_policies_apply_at_native_frequency() {
    let bccr = gappy_bccr();
    assert_eq!(
        column(&bccr, FillPolicy::None).await,
        vec![Some(5.0), None, None, Some(8.0), None]
    );
    assert_eq!(
        column(&bccr, FillPolicy::Forward).await,
        vec![Some(5.0), Some(5.0), Some(5.0), Some(8.0), Some(8.0)]
    );
    assert_eq!(
        column(&bccr, FillPolicy::Backward).await,
        vec![Some(5.0), Some(8.0), Some(8.0), Some(8.0), None]
    );
}

#[tokio::test]
async fn missing_mode_controls_group_reduction() {
    let bccr = gappy_bccr();
    let run = |mode| {
        bccr.download()
            .indicator("x", GAPPY)
            .unwrap()
            .frequency(Frequency::Quarterly)
            .reducer(Reducer::Sum)
            .missing_mode(mode)
            .run()
    };
    let ignore = run(MissingMode::Ignore).await.unwrap();
    assert_eq!(ignore.column("x").unwrap(), vec![Some(5.0), Some(8.0)]);
    let propagate = run(MissingMode::Propagate).await.unwrap();
    assert_eq!(propagate.column("x").unwrap(), vec![None, None]);
}

#[tokio::test]
async fn fill_runs_before_resampling() {
    let bccr = gappy_bccr();
    let table = bccr
        .download()
        .indicator("x", GAPPY)
        .unwrap()
        .frequency(Frequency::Quarterly)
        .reducer(Reducer::Sum)
        .missing_mode(MissingMode::Propagate)
        .fill(FillPolicy::Forward)
        .run()
        .await
        .unwrap();
    assert_eq!(table.column("x").unwrap(), vec![Some(15.0), Some(16.0)]);
}

#[tokio::test]
async fn loose_date_bounds_clip_rows() {
    let bccr = fixture_bccr().await;
    let table = bccr
        .download()
        .indicator("ipc", 25482)
        .unwrap()
        .since("2019/11")
        .unwrap()
        .until("2020-02")
        .unwrap()
        .run()
        .await
        .unwrap();
    assert_eq!(table.labels(), vec!["2019-11", "2019-12", "2020-01", "2020-02"]);
}

#[tokio::test]
async fn fixture_daily_and_quarterly_align() {
    let bccr = fixture_bccr().await;
    let table = bccr
        .download()
        .indicator("compra", 317)
        .unwrap()
        .indicator("produccion", 33439)
        .unwrap()
        .until("2020")
        .unwrap()
        .run()
        .await
        .unwrap();
    assert_eq!(table.frequency, Frequency::Quarterly);
    assert_eq!(table.columns, vec!["compra", "produccion"]);
    // Daily data covers only the first half of 2020.
    let compra = table.column("compra").unwrap();
    let present: Vec<String> = table
        .labels()
        .into_iter()
        .zip(compra)
        .filter_map(|(l, v)| v.map(|_| l))
        .collect();
    assert_eq!(present, vec!["2020Q1", "2020Q2"]);
}
