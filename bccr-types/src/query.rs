use serde::{Deserialize, Serialize};

use crate::frequency::Frequency;

/// Matching mode of a catalog search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Every term must occur as a whole word, in any order.
    AllWords,
    /// At least one term must occur as a whole word.
    AnyWord,
    /// The terms, joined by single spaces, must occur as a contiguous substring.
    ExactPhrase,
}

/// A catalog search request.
///
/// Terms are stored as the caller wrote them; the search engine applies
/// case folding and diacritic normalization before comparing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Matching mode.
    pub mode: SearchMode,
    /// Words (or, for `ExactPhrase`, the pieces of the phrase).
    pub terms: Vec<String>,
    /// Optional native-frequency filter.
    pub frequency: Option<Frequency>,
}

impl CatalogQuery {
    /// Build a query by splitting `text` on whitespace.
    pub fn new(mode: SearchMode, text: &str) -> Self {
        Self {
            mode,
            terms: text.split_whitespace().map(str::to_string).collect(),
            frequency: None,
        }
    }

    /// Every word of `text` must match.
    #[must_use]
    pub fn all_words(text: &str) -> Self {
        Self::new(SearchMode::AllWords, text)
    }

    /// Any word of `text` may match.
    #[must_use]
    pub fn any_word(text: &str) -> Self {
        Self::new(SearchMode::AnyWord, text)
    }

    /// `text` must appear literally.
    #[must_use]
    pub fn exact_phrase(text: &str) -> Self {
        Self::new(SearchMode::ExactPhrase, text)
    }

    /// Restrict results to indicators published at `frequency`.
    #[must_use]
    pub const fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }
}
