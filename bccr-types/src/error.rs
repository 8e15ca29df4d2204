use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::code::IndicatorCode;
use crate::frequency::Frequency;

/// Unified error type for the bccr workspace.
///
/// The first six variants are the failure kinds of the alignment engine and
/// catalog; the rest cover caller mistakes, malformed connector payloads and
/// orchestration limits. None of them is ever downgraded to a warning.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[non_exhaustive]
pub enum BccrError {
    /// The catalog dump is malformed; no partial catalog is published.
    #[error("malformed catalog: {reason}")]
    CatalogFormat {
        /// Human-readable description of the offending record.
        reason: String,
    },

    /// The code is not present in the catalog (or unknown to the remote source).
    #[error("unknown indicator code: {code}")]
    UnknownCode {
        /// Code that could not be resolved.
        code: IndicatorCode,
    },

    /// A catalog search was issued without any term.
    #[error("search query has no terms")]
    EmptyQuery,

    /// The requested output frequency is finer than a native frequency.
    #[error("cannot refine {native} data to {requested}")]
    UnsupportedFrequencyRefinement {
        /// Output frequency requested by the caller.
        requested: Frequency,
        /// Native frequency that would have to be refined.
        native: Frequency,
    },

    /// Two requested indicators share one output column name.
    #[error("duplicate output name '{name}'")]
    DuplicateName {
        /// The repeated column name.
        name: String,
    },

    /// Retrieving one series failed at the transport/remote boundary.
    #[error("fetching {code} failed: {cause}")]
    Fetch {
        /// Code whose retrieval failed.
        code: IndicatorCode,
        /// Underlying cause reported by the connector.
        cause: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the data returned by a connector.
    #[error("data issue: {0}")]
    Data(String),

    /// The registered connector does not implement the capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label, e.g. "series" or "catalog".
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },
}

impl BccrError {
    /// Helper: build a `CatalogFormat` error.
    pub fn catalog_format(reason: impl Into<String>) -> Self {
        Self::CatalogFormat {
            reason: reason.into(),
        }
    }

    /// Helper: build an `UnknownCode` error.
    pub fn unknown_code(code: impl Into<IndicatorCode>) -> Self {
        Self::UnknownCode { code: code.into() }
    }

    /// Helper: build a `Fetch` error with the failing code and its cause.
    pub fn fetch(code: impl Into<IndicatorCode>, cause: impl Into<String>) -> Self {
        Self::Fetch {
            code: code.into(),
            cause: cause.into(),
        }
    }

    /// Helper: build a `DuplicateName` error.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Attach the failing code to an error coming out of a connector.
    ///
    /// `UnknownCode` and `Fetch` already name a code and pass through; every
    /// other variant is folded into `Fetch` with its message as the cause.
    #[must_use]
    pub fn tag_fetch(self, code: &IndicatorCode) -> Self {
        match self {
            e @ (Self::UnknownCode { .. } | Self::Fetch { .. }) => e,
            other => Self::fetch(code.clone(), other.to_string()),
        }
    }
}
