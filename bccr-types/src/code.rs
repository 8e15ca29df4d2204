//! Indicator identifiers.

use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque identifier of one indicator at the remote source.
///
/// Codes are published either as integers (`317`) or strings (`"E01.02"`),
/// so the value is kept as trimmed text. Ordering is numeric-aware: two
/// all-digit codes compare by value (`9 < 10`), digits sort before text,
/// and ties fall back to the raw text so that `Ord` agrees with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndicatorCode(String);

impl IndicatorCode {
    /// Construct a code from text, trimming surrounding whitespace.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_string())
    }

    /// Borrow the code text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the code carries no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn numeric(&self) -> Option<u64> {
        if self.0.bytes().all(|b| b.is_ascii_digit()) {
            self.0.parse().ok()
        } else {
            None
        }
    }
}

impl Ord for IndicatorCode {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_value = match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_value.then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for IndicatorCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for IndicatorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IndicatorCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for IndicatorCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&IndicatorCode> for IndicatorCode {
    fn from(c: &IndicatorCode) -> Self {
        c.clone()
    }
}

impl From<u64> for IndicatorCode {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<u32> for IndicatorCode {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl From<i32> for IndicatorCode {
    fn from(n: i32) -> Self {
        Self(n.to_string())
    }
}

impl Serialize for IndicatorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCode {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for IndicatorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawCode::deserialize(deserializer)? {
            RawCode::Number(n) => Self::from(n),
            RawCode::Text(s) => Self::new(s),
        })
    }
}
