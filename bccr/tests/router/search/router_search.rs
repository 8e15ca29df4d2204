use crate::helpers::fixture_bccr;
use bccr::{BccrError, CatalogQuery, Frequency, IndicatorCode};

fn codes(ids: &[&str]) -> Vec<IndicatorCode> {
    ids.iter().map(|c| IndicatorCode::from(*c)).collect()
}

#[tokio::test]
async fn all_words_ignores_case_and_accents() {
    let bccr = fixture_bccr().await;
    let hits = bccr.search(&CatalogQuery::all_words("INDICE Precios")).unwrap();
    assert_eq!(hits.codes(), codes(&["25482", "25483"]));
}

#[tokio::test]
async fn any_word_ranks_by_terms_matched_then_code() {
    let bccr = fixture_bccr().await;
    let hits = bccr.search(&CatalogQuery::any_word("índice precios")).unwrap();
    assert_eq!(
        hits.codes(),
        codes(&["25482", "25483", "100", "33439", "33783", "35449"])
    );
}

#[tokio::test]
async fn exact_phrase_and_frequency_filter() {
    let bccr = fixture_bccr().await;
    let phrase = bccr
        .search(&CatalogQuery::exact_phrase("tipo de cambio"))
        .unwrap();
    assert_eq!(phrase.codes(), codes(&["300", "317", "318"]));

    let quarterly = bccr
        .search(&CatalogQuery::any_word("indice").with_frequency(Frequency::Quarterly))
        .unwrap();
    assert_eq!(quarterly.codes(), codes(&["33439"]));
}

#[tokio::test]
async fn no_match_is_empty_and_blank_query_is_an_error() {
    let bccr = fixture_bccr().await;
    let none = bccr.search(&CatalogQuery::all_words("petróleo")).unwrap();
    assert!(none.is_empty());
    assert_eq!(none.to_string(), "code\tdescription\tfrequency\tunit\n");

    assert_eq!(
        bccr.search(&CatalogQuery::any_word("  ¿? ")).unwrap_err(),
        BccrError::EmptyQuery
    );
}

#[tokio::test]
async fn who_reports_lineage_from_root() {
    let bccr = fixture_bccr().await;
    let who = bccr.who("25483").unwrap();
    assert_eq!(who.indicator.code, IndicatorCode::from("25483"));
    assert_eq!(
        who.description_chain(),
        vec![
            "Precios",
            "Índice de precios al consumidor",
            "Variación interanual del índice de precios al consumidor",
        ]
    );
    let text = who.to_string();
    assert!(text.starts_with("Indicator 25483 >>>\n"), "{text}");
    assert!(text.contains("|--- Precios\n"), "{text}");
    assert!(text.contains("|------ Índice de precios al consumidor\n"), "{text}");

    let ipc = bccr.who(25482).unwrap();
    assert!(ipc.to_string().contains("Name       : IPC"));

    assert_eq!(bccr.who("404").unwrap_err(), BccrError::unknown_code("404"));
}

#[tokio::test]
async fn subaccounts_and_tree() {
    let bccr = fixture_bccr().await;
    let children: Vec<_> = bccr
        .subaccounts(200)
        .unwrap()
        .into_iter()
        .map(|m| m.code)
        .collect();
    assert_eq!(children, codes(&["33439", "33783", "35449"]));
    assert!(bccr.subaccounts(317).unwrap().is_empty());

    assert_eq!(
        bccr.subaccount_tree(100).unwrap(),
        "Precios [100]\n  \
         Índice de precios al consumidor [25482]\n    \
         Variación interanual del índice de precios al consumidor [25483]\n"
    );
    assert!(matches!(
        bccr.subaccount_tree("404"),
        Err(BccrError::UnknownCode { .. })
    ));
}
