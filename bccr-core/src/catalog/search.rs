//! Free-text search over catalog descriptions.

use std::cmp::Reverse;

use bccr_types::{BccrError, CatalogQuery, IndicatorMeta, SearchMode};
pub use bccr_types::normalize_text;

use super::Catalog;

fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

/// Match quality of one description; compared field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Score {
    distinct: usize,
    hits: usize,
}

fn score(mode: SearchMode, terms: &[String], phrase: &str, description: &str) -> Option<Score> {
    let text = normalize_text(description);

    if mode == SearchMode::ExactPhrase {
        let flat = words(&text).collect::<Vec<_>>().join(" ");
        let hits = flat.match_indices(phrase).count();
        return (hits > 0).then_some(Score { distinct: terms.len(), hits });
    }

    let tokens: Vec<&str> = words(&text).collect();
    let mut distinct = 0;
    let mut hits = 0;
    for term in terms {
        let n = tokens.iter().filter(|t| **t == term.as_str()).count();
        if n > 0 {
            distinct += 1;
            hits += n;
        }
    }

    let matched = match mode {
        SearchMode::AllWords => distinct == terms.len(),
        _ => distinct > 0,
    };
    matched.then_some(Score { distinct, hits })
}

/// Rank the catalog entries matching `query`.
///
/// Descriptions and terms are case-folded and diacritic-normalized, then
/// split into words on anything that is not a letter or digit. Results are
/// ordered by number of distinct terms matched, then by total hits, then by
/// code. Zero matches is an empty result, not an error.
///
/// # Errors
/// Returns `BccrError::EmptyQuery` if the query carries no word.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "bccr_core::catalog::search",
        skip(catalog),
        fields(mode = ?query.mode, terms = query.terms.len()),
    )
)]
pub fn search<'a>(
    catalog: &'a Catalog,
    query: &CatalogQuery,
) -> Result<Vec<&'a IndicatorMeta>, BccrError> {
    let mut terms: Vec<String> = Vec::new();
    for raw in &query.terms {
        let norm = normalize_text(raw);
        for w in words(&norm) {
            // Phrase terms keep their order and repeats.
            if query.mode == SearchMode::ExactPhrase || !terms.iter().any(|t| t == w) {
                terms.push(w.to_string());
            }
        }
    }
    if terms.is_empty() {
        return Err(BccrError::EmptyQuery);
    }
    let phrase = terms.join(" ");

    let mut ranked: Vec<(Score, &IndicatorMeta)> = catalog
        .iter()
        .filter(|m| query.frequency.is_none_or(|f| m.frequency == f))
        .filter_map(|m| score(query.mode, &terms, &phrase, &m.description).map(|s| (s, m)))
        .collect();
    ranked.sort_by(|(sa, a), (sb, b)| {
        (Reverse(sa), &a.code).cmp(&(Reverse(sb), &b.code))
    });

    Ok(ranked.into_iter().map(|(_, m)| m).collect())
}
