//! Text folding shared by catalog search and name parsing.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Case-fold and strip diacritics (`"Índice"` becomes `"indice"`).
///
/// Text is lowercased, decomposed (NFD) and stripped of combining marks, so
/// precomposed `í` and decomposed `i` + U+0301 fold to the same `i`.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
