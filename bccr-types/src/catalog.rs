//! Catalog records and indicator metadata.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::code::IndicatorCode;
use crate::frequency::Frequency;

/// One flat record of a catalog dump, as delivered by the catalog source.
///
/// Every field is optional at this stage; `Catalog::load` decides which
/// ones are required. Field aliases accept the source's Spanish column names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Indicator code.
    #[serde(default, alias = "codigo")]
    pub code: Option<IndicatorCode>,
    /// Short name.
    #[serde(default, alias = "nombre")]
    pub name: Option<String>,
    /// Long description, the text searched by the catalog.
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
    /// Native periodicity as published (`"Mensual"`, `"M"`, `"monthly"`, ...).
    #[serde(default, alias = "periodo", alias = "periodicidad")]
    pub frequency: Option<String>,
    /// Unit of measure.
    #[serde(default, alias = "unidad")]
    pub unit: Option<String>,
    /// Code of the parent indicator, if any.
    #[serde(default, alias = "padre", alias = "parent_code")]
    pub parent: Option<IndicatorCode>,
}

impl CatalogRecord {
    /// Convenience constructor for a fully populated record.
    pub fn new(
        code: impl Into<IndicatorCode>,
        description: impl Into<String>,
        frequency: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            code: Some(code.into()),
            name: None,
            description: Some(description.into()),
            frequency: Some(frequency.into()),
            unit: Some(unit.into()),
            parent: None,
        }
    }

    /// Set the parent code.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<IndicatorCode>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the short name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Validated metadata of one indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorMeta {
    /// Indicator code.
    pub code: IndicatorCode,
    /// Optional short name.
    pub name: Option<String>,
    /// Long description.
    pub description: String,
    /// Native frequency.
    pub frequency: Frequency,
    /// Unit of measure.
    pub unit: String,
    /// Parent in the catalog forest.
    pub parent_code: Option<IndicatorCode>,
    /// Direct children, ordered by code.
    pub child_codes: BTreeSet<IndicatorCode>,
}
