use crate::Bccr;
use bccr_core::{
    BccrError, CatalogQuery, IndicatorCode, IndicatorMeta, SearchReport, SearchRow, WhoReport,
};

impl Bccr {
    /// Search the catalog descriptions.
    ///
    /// Behavior:
    /// - Matching is case- and accent-insensitive, on whole words (or a
    ///   contiguous phrase for `SearchMode::ExactPhrase`).
    /// - Rows are ranked by terms matched, then hits, then code.
    /// - No match yields an empty report.
    ///
    /// # Errors
    /// Returns `EmptyQuery` if the query has no term.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "bccr::router::search",
            skip(self, query),
            fields(mode = ?query.mode, terms = ?query.terms),
        )
    )]
    pub fn search(&self, query: &CatalogQuery) -> Result<SearchReport, BccrError> {
        let rows = self
            .catalog
            .search(query)?
            .into_iter()
            .map(SearchRow::from)
            .collect();
        Ok(SearchReport { rows })
    }

    /// Describe one indicator and its position in the catalog tree.
    ///
    /// # Errors
    /// Returns `UnknownCode` if the code is not in the catalog.
    pub fn who(&self, code: impl Into<IndicatorCode>) -> Result<WhoReport, BccrError> {
        let code = code.into();
        let indicator = self.catalog.lookup(&code)?.clone();
        let lineage = self
            .catalog
            .ancestors_of(&code)?
            .into_iter()
            .cloned()
            .collect();
        Ok(WhoReport { indicator, lineage })
    }

    /// Direct children of an indicator, ordered by code.
    ///
    /// # Errors
    /// Returns `UnknownCode` if the code is not in the catalog.
    pub fn subaccounts(&self, code: impl Into<IndicatorCode>) -> Result<Vec<IndicatorMeta>, BccrError> {
        Ok(self
            .catalog
            .children_of(&code.into())?
            .into_iter()
            .cloned()
            .collect())
    }

    /// Indented tree of the whole subtree rooted at `code`.
    ///
    /// # Errors
    /// Returns `UnknownCode` if the code is not in the catalog.
    pub fn subaccount_tree(&self, code: impl Into<IndicatorCode>) -> Result<String, BccrError> {
        self.catalog.render_tree(&code.into())
    }
}
