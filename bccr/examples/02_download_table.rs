mod common;
use bccr::{Bccr, FillPolicy, Frequency, IndicatorSpec, Reducer, TableRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    let bccr = Bccr::builder()
        .with_connector(common::get_connector())
        .build_with_remote_catalog()
        .await?;

    // Daily exchange rate and monthly CPI, aligned to the coarsest (monthly) frequency.
    let monthly = bccr
        .download()
        .indicator("compra", 317)?
        .indicator("ipc", 25482)?
        .since("2020")?
        .until("2020/06")?
        .run()
        .await?;
    println!("## monthly, mean of daily values\n{monthly}");

    // Same inputs plus GDP, quarterly; the exchange rate keeps its last quote.
    let req = TableRequest {
        indicators: vec![
            IndicatorSpec::new("compra", 317).with_reducer(Reducer::Last),
            IndicatorSpec::new("ipc", 25482),
            IndicatorSpec::new("pib", 33783),
        ],
        frequency: Some(Frequency::Quarterly),
        fill: Some(FillPolicy::Forward),
        ..TableRequest::default()
    };
    let quarterly = bccr.table(req).await?;
    println!("## quarterly\n{quarterly}");

    // Refining quarterly GDP to months is refused rather than invented.
    let err = bccr
        .download()
        .indicator("pib", 33783)?
        .frequency(Frequency::Monthly)
        .run()
        .await
        .unwrap_err();
    println!("refinement rejected: {err}");

    Ok(())
}
