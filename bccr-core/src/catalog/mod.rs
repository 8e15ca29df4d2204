//! In-memory indicator catalog: a validated forest of `IndicatorMeta`.
//!
//! The catalog is built once from a flat dump and is read-only afterwards,
//! so it can be shared behind an `Arc` and queried concurrently.

pub mod search;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use bccr_types::{BccrError, CatalogRecord, CatalogQuery, Frequency, IndicatorCode, IndicatorMeta};

/// Validated indicator catalog keyed by code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<IndicatorCode, IndicatorMeta>,
    roots: BTreeSet<IndicatorCode>,
}

impl Catalog {
    /// Build a catalog from a flat record list.
    ///
    /// Every record needs a code, a description, a recognizable frequency
    /// and a unit (which may be empty). Parents must exist in the same dump.
    ///
    /// # Errors
    /// Returns `BccrError::CatalogFormat` if a record is missing a required
    /// field, has an unrecognized frequency, repeats a code, names an unknown
    /// parent, or takes part in a parent cycle. Nothing is published on error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "bccr_core::catalog::load", skip(records), err)
    )]
    pub fn load<I>(records: I) -> Result<Self, BccrError>
    where
        I: IntoIterator<Item = CatalogRecord>,
    {
        let mut entries: BTreeMap<IndicatorCode, IndicatorMeta> = BTreeMap::new();

        for (idx, rec) in records.into_iter().enumerate() {
            let meta = validate(idx, rec)?;
            if entries.contains_key(&meta.code) {
                return Err(BccrError::catalog_format(format!(
                    "duplicate code {}",
                    meta.code
                )));
            }
            entries.insert(meta.code.clone(), meta);
        }

        let mut roots = BTreeSet::new();
        let mut links: Vec<(IndicatorCode, IndicatorCode)> = Vec::new();
        for meta in entries.values() {
            match &meta.parent_code {
                None => {
                    roots.insert(meta.code.clone());
                }
                Some(parent) if !entries.contains_key(parent) => {
                    return Err(BccrError::catalog_format(format!(
                        "record {} references unknown parent {parent}",
                        meta.code
                    )));
                }
                Some(parent) => links.push((parent.clone(), meta.code.clone())),
            }
        }
        for (parent, child) in links {
            if let Some(p) = entries.get_mut(&parent) {
                p.child_codes.insert(child);
            }
        }

        let catalog = Self { entries, roots };
        catalog.check_acyclic()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(entries = catalog.len(), roots = catalog.roots.len(), "catalog loaded");

        Ok(catalog)
    }

    /// Parse a JSON array of catalog records and [`load`](Self::load) it.
    ///
    /// # Errors
    /// Returns `BccrError::CatalogFormat` on malformed JSON or any `load` failure.
    pub fn from_json(text: &str) -> Result<Self, BccrError> {
        let records: Vec<CatalogRecord> = serde_json::from_str(text)
            .map_err(|e| BccrError::catalog_format(format!("invalid JSON: {e}")))?;
        Self::load(records)
    }

    fn check_acyclic(&self) -> Result<(), BccrError> {
        // A parent chain longer than the catalog must revisit a node.
        let limit = self.entries.len();
        for meta in self.entries.values() {
            let mut cur = meta.parent_code.as_ref();
            let mut steps = 0usize;
            while let Some(code) = cur {
                steps += 1;
                if code == &meta.code || steps > limit {
                    return Err(BccrError::catalog_format(format!(
                        "parent cycle through {}",
                        meta.code
                    )));
                }
                cur = self.entries.get(code).and_then(|m| m.parent_code.as_ref());
            }
        }
        Ok(())
    }

    /// Metadata of one indicator.
    ///
    /// # Errors
    /// Returns `BccrError::UnknownCode` if the code is not in the catalog.
    pub fn lookup(&self, code: &IndicatorCode) -> Result<&IndicatorMeta, BccrError> {
        self.entries
            .get(code)
            .ok_or_else(|| BccrError::unknown_code(code.clone()))
    }

    /// Direct children of `code`, ordered by code.
    ///
    /// # Errors
    /// Returns `BccrError::UnknownCode` if the code is not in the catalog.
    pub fn children_of(&self, code: &IndicatorCode) -> Result<Vec<&IndicatorMeta>, BccrError> {
        let meta = self.lookup(code)?;
        Ok(meta
            .child_codes
            .iter()
            .filter_map(|c| self.entries.get(c))
            .collect())
    }

    /// Ancestors of `code` from the root down to its direct parent.
    ///
    /// # Errors
    /// Returns `BccrError::UnknownCode` if the code is not in the catalog.
    pub fn ancestors_of(&self, code: &IndicatorCode) -> Result<Vec<&IndicatorMeta>, BccrError> {
        let mut chain = Vec::new();
        let mut cur = self.lookup(code)?.parent_code.as_ref();
        while let Some(parent) = cur.and_then(|c| self.entries.get(c)) {
            chain.push(parent);
            cur = parent.parent_code.as_ref();
        }
        chain.reverse();
        Ok(chain)
    }

    /// Full subtree below `code` in depth-first pre-order, excluding `code`.
    ///
    /// # Errors
    /// Returns `BccrError::UnknownCode` if the code is not in the catalog.
    pub fn descendants_of(&self, code: &IndicatorCode) -> Result<Vec<&IndicatorMeta>, BccrError> {
        let mut out = Vec::new();
        self.walk(self.lookup(code)?, 0, &mut |m, _| out.push(m));
        out.remove(0);
        Ok(out)
    }

    /// Indented rendering of the subtree rooted at `code`.
    ///
    /// One line per node, `description [code]`, indented two spaces per level.
    ///
    /// # Errors
    /// Returns `BccrError::UnknownCode` if the code is not in the catalog.
    pub fn render_tree(&self, code: &IndicatorCode) -> Result<String, BccrError> {
        let mut out = String::new();
        self.walk(self.lookup(code)?, 0, &mut |m, depth| {
            let _ = writeln!(out, "{:indent$}{} [{}]", "", m.description, m.code, indent = depth * 2);
        });
        Ok(out)
    }

    fn walk<'a, F>(&'a self, meta: &'a IndicatorMeta, depth: usize, visit: &mut F)
    where
        F: FnMut(&'a IndicatorMeta, usize),
    {
        visit(meta, depth);
        for child in meta.child_codes.iter().filter_map(|c| self.entries.get(c)) {
            self.walk(child, depth + 1, visit);
        }
    }

    /// Indicators without a parent, ordered by code.
    pub fn roots(&self) -> impl Iterator<Item = &IndicatorMeta> {
        self.roots.iter().filter_map(|c| self.entries.get(c))
    }

    /// All indicators, ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = &IndicatorMeta> {
        self.entries.values()
    }

    /// Number of indicators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no indicator.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shorthand for [`search::search`] over this catalog.
    ///
    /// # Errors
    /// Returns `BccrError::EmptyQuery` if the query has no usable term.
    pub fn search(&self, query: &CatalogQuery) -> Result<Vec<&IndicatorMeta>, BccrError> {
        search::search(self, query)
    }
}

fn validate(idx: usize, rec: CatalogRecord) -> Result<IndicatorMeta, BccrError> {
    let missing = |field: &str| {
        let who = rec
            .code
            .as_ref()
            .map_or_else(|| format!("record #{idx}"), |c| format!("record {c}"));
        BccrError::catalog_format(format!("{who} is missing '{field}'"))
    };

    let code = rec
        .code
        .clone()
        .filter(|c| !c.is_empty())
        .ok_or_else(|| missing("code"))?;
    let description = non_blank(rec.description.as_deref()).ok_or_else(|| missing("description"))?;
    let freq_text = non_blank(rec.frequency.as_deref()).ok_or_else(|| missing("frequency"))?;
    let unit = rec.unit.as_deref().map(str::trim).ok_or_else(|| missing("unit"))?;

    let frequency: Frequency = freq_text.parse().map_err(|_| {
        BccrError::catalog_format(format!(
            "record {code} has unrecognized frequency '{freq_text}'"
        ))
    })?;

    Ok(IndicatorMeta {
        name: non_blank(rec.name.as_deref()).map(str::to_string),
        description: description.to_string(),
        frequency,
        unit: unit.to_string(),
        parent_code: rec.parent.clone().filter(|p| !p.is_empty()),
        child_codes: BTreeSet::new(),
        code,
    })
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
