mod common;
use bccr::{Bccr, CatalogQuery, Frequency};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();

    // 1. The connector serves the catalog dump as well as the series.
    let bccr = Bccr::builder()
        .with_connector(common::get_connector())
        .build_with_remote_catalog()
        .await?;

    // 2. Every word must match; accents and case do not matter.
    let hits = bccr.search(&CatalogQuery::all_words("indice precios"))?;
    println!("## all words: 'indice precios'\n{hits}");

    // 3. Any word, restricted to quarterly indicators.
    let quarterly =
        bccr.search(&CatalogQuery::any_word("producción precios").with_frequency(Frequency::Quarterly))?;
    println!("## any word, quarterly only\n{quarterly}");

    // 4. Where does the inflation series sit in the tree?
    println!("{}", bccr.who(25483)?);

    // 5. Everything under the production branch.
    print!("{}", bccr.subaccount_tree(200)?);

    Ok(())
}
