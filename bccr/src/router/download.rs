use std::collections::HashSet;

use crate::Bccr;
use crate::router::util::join_with_deadline;
use bccr_core::{
    BccrError, DateBound, FillPolicy, Frequency, IndicatorCode, MissingMode, RawSeries, Reducer,
    ResampledSeries, ResultTable, fill, merge, parse_date_bound, resample, resolve,
};
use chrono::NaiveDate;

/// One requested column: output name, indicator code, optional reducer override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorSpec {
    /// Output column name.
    pub name: String,
    /// Catalog code to fetch.
    pub code: IndicatorCode,
    /// Reducer for this column only; falls back to the request's reducer.
    pub reducer: Option<Reducer>,
    /// Also add one column per catalog descendant, named by its code.
    pub sublevels: bool,
}

impl IndicatorSpec {
    /// Column `name` backed by `code`.
    pub fn new(name: impl Into<String>, code: impl Into<IndicatorCode>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            reducer: None,
            sublevels: false,
        }
    }

    /// Column named after its own code.
    pub fn from_code(code: impl Into<IndicatorCode>) -> Self {
        let code = code.into();
        Self {
            name: code.to_string(),
            code,
            reducer: None,
            sublevels: false,
        }
    }

    /// Override the reducer for this column.
    #[must_use]
    pub const fn with_reducer(mut self, reducer: Reducer) -> Self {
        self.reducer = Some(reducer);
        self
    }

    /// Expand this column into the indicator plus every indicator below it
    /// in the catalog tree (depth-first, children by code).
    #[must_use]
    pub const fn with_sublevels(mut self) -> Self {
        self.sublevels = true;
        self
    }
}

/// A pipeline invocation. Every `None` falls back to the orchestrator's `BccrConfig`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRequest {
    /// Requested columns, in output order.
    pub indicators: Vec<IndicatorSpec>,
    /// Inclusive lower date bound.
    pub start: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub end: Option<NaiveDate>,
    /// Output frequency; must not be finer than any native frequency.
    pub frequency: Option<Frequency>,
    /// Reducer for columns without an override.
    pub reducer: Option<Reducer>,
    /// Missing-value treatment inside resampling groups.
    pub missing_mode: Option<MissingMode>,
    /// Gap-filling policy at native frequency.
    pub fill: Option<FillPolicy>,
    /// Expand every indicator into its catalog subtree.
    pub sublevels: bool,
}

/// Fluent builder for a [`TableRequest`] bound to a `Bccr` instance.
pub struct DownloadBuilder<'a> {
    pub(crate) bccr: &'a Bccr,
    pub(crate) req: TableRequest,
}

impl<'a> DownloadBuilder<'a> {
    /// Create a new builder bound to a `Bccr` instance, with no indicators.
    #[must_use]
    pub fn new(bccr: &'a Bccr) -> Self {
        Self {
            bccr,
            req: TableRequest::default(),
        }
    }

    /// Append a column.
    ///
    /// # Errors
    /// Returns `DuplicateName` if a column with this name was already added.
    pub fn add(mut self, spec: IndicatorSpec) -> Result<Self, BccrError> {
        if self.req.indicators.iter().any(|s| s.name == spec.name) {
            return Err(BccrError::duplicate_name(spec.name));
        }
        self.req.indicators.push(spec);
        Ok(self)
    }

    /// Append a column `name` backed by `code`.
    ///
    /// # Errors
    /// Returns `DuplicateName` if a column with this name was already added.
    pub fn indicator(
        self,
        name: impl Into<String>,
        code: impl Into<IndicatorCode>,
    ) -> Result<Self, BccrError> {
        self.add(IndicatorSpec::new(name, code))
    }

    /// Append a column named after its code.
    ///
    /// # Errors
    /// Returns `DuplicateName` if the code was already added under its own name.
    pub fn code(self, code: impl Into<IndicatorCode>) -> Result<Self, BccrError> {
        self.add(IndicatorSpec::from_code(code))
    }

    /// Replace the column list with `(name, code)` pairs.
    ///
    /// # Errors
    /// Returns `DuplicateName` if two pairs share a name.
    pub fn indicators<I, N, C>(mut self, pairs: I) -> Result<Self, BccrError>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<IndicatorCode>,
    {
        self.req.indicators.clear();
        pairs
            .into_iter()
            .try_fold(self, |b, (n, c)| b.indicator(n, c))
    }

    /// Lower bound as loose text (`2010`, `2010/03`, `15/03/2010`).
    ///
    /// # Errors
    /// Returns `InvalidArg` if the text is not a recognizable date.
    pub fn since(mut self, text: &str) -> Result<Self, BccrError> {
        self.req.start = Some(parse_date_bound(text, DateBound::Start)?);
        Ok(self)
    }

    /// Upper bound as loose text; a bare year or month runs to its last day.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the text is not a recognizable date.
    pub fn until(mut self, text: &str) -> Result<Self, BccrError> {
        self.req.end = Some(parse_date_bound(text, DateBound::End)?);
        Ok(self)
    }

    /// Explicit inclusive date range.
    #[must_use]
    pub const fn period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.req.start = Some(start);
        self.req.end = Some(end);
        self
    }

    /// Requested output frequency.
    #[must_use]
    pub const fn frequency(mut self, frequency: Frequency) -> Self {
        self.req.frequency = Some(frequency);
        self
    }

    /// Reducer for columns without an override.
    #[must_use]
    pub const fn reducer(mut self, reducer: Reducer) -> Self {
        self.req.reducer = Some(reducer);
        self
    }

    /// Missing-value treatment inside resampling groups.
    #[must_use]
    pub const fn missing_mode(mut self, mode: MissingMode) -> Self {
        self.req.missing_mode = Some(mode);
        self
    }

    /// Gap-filling policy at native frequency.
    #[must_use]
    pub const fn fill(mut self, policy: FillPolicy) -> Self {
        self.req.fill = Some(policy);
        self
    }

    /// Expand every indicator into its catalog subtree; descendants are
    /// named by code.
    #[must_use]
    pub const fn sublevels(mut self, on: bool) -> Self {
        self.req.sublevels = on;
        self
    }

    /// The request assembled so far.
    #[must_use]
    pub const fn request(&self) -> &TableRequest {
        &self.req
    }

    /// Execute the request; see [`Bccr::table`].
    ///
    /// # Errors
    /// Any error of [`Bccr::table`].
    pub async fn run(self) -> Result<ResultTable, BccrError> {
        self.bccr.table(self.req).await
    }
}

/// Everything resolved before the first fetch is issued.
struct Plan {
    target: Frequency,
    requested: Option<Frequency>,
    fill: FillPolicy,
    missing: MissingMode,
    columns: Vec<(IndicatorSpec, Frequency, Reducer)>,
}

impl Bccr {
    /// Begin building a table request.
    ///
    /// Typical usage: chain `indicator`/`since`/`frequency` then call `run()`.
    #[must_use]
    pub fn download(&'_ self) -> DownloadBuilder<'_> {
        DownloadBuilder::new(self)
    }

    /// Replace every sublevel-flagged column by itself plus one column per
    /// catalog descendant, named by code and sharing the reducer override.
    fn expand_sublevels(&self, req: &TableRequest) -> Result<Vec<IndicatorSpec>, BccrError> {
        let mut out = Vec::with_capacity(req.indicators.len());
        for spec in &req.indicators {
            let expand = spec.sublevels || req.sublevels;
            let mut head = spec.clone();
            head.sublevels = false;
            out.push(head);
            if !expand {
                continue;
            }
            for meta in self.catalog.descendants_of(&spec.code)? {
                out.push(IndicatorSpec {
                    reducer: spec.reducer,
                    ..IndicatorSpec::from_code(&meta.code)
                });
            }
        }
        Ok(out)
    }

    fn plan(&self, req: &TableRequest) -> Result<Plan, BccrError> {
        if req.indicators.is_empty() {
            return Err(BccrError::InvalidArg("no indicators requested".into()));
        }
        if let (Some(s), Some(e)) = (req.start, req.end)
            && s > e
        {
            return Err(BccrError::InvalidArg(format!(
                "start {s} is after end {e}"
            )));
        }

        let specs = self.expand_sublevels(req)?;
        let mut seen = HashSet::new();
        for spec in &specs {
            if !seen.insert(spec.name.as_str()) {
                return Err(BccrError::duplicate_name(&spec.name));
            }
        }

        let default_reducer = req.reducer.unwrap_or(self.cfg.reducer);
        let mut columns = Vec::with_capacity(specs.len());
        for spec in specs {
            let meta = self.catalog.lookup(&spec.code)?;
            let reducer = spec.reducer.unwrap_or(default_reducer);
            let frequency = meta.frequency;
            columns.push((spec, frequency, reducer));
        }

        let requested = req.frequency.or(self.cfg.frequency);
        let target = resolve(columns.iter().map(|(_, f, _)| *f), requested)?;

        Ok(Plan {
            target,
            requested,
            fill: req.fill.unwrap_or(self.cfg.fill_policy),
            missing: req.missing_mode.unwrap_or(self.cfg.missing_mode),
            columns,
        })
    }

    /// Fetch, fill, resample and merge the requested indicators into one table.
    ///
    /// Behavior:
    /// - Validation (non-empty list, unique names, ordered dates), catalog
    ///   lookups and output-frequency resolution all happen before any fetch.
    /// - Series are fetched concurrently, each bounded by the per-fetch
    ///   timeout, and clipped to the requested range.
    /// - Indicators flagged for sublevels expand into their catalog subtree
    ///   before names are checked.
    /// - Each series is gap-filled at its native frequency, then resampled to
    ///   the resolved frequency with its column's reducer. Without a requested
    ///   frequency, the output frequency is re-resolved from the fetched
    ///   series, so a series published coarser than its catalog entry still
    ///   merges.
    /// - Any failure aborts the whole request; with several failures the one
    ///   of the earliest column is returned.
    ///
    /// # Errors
    /// `InvalidArg`, `DuplicateName`, `UnknownCode`,
    /// `UnsupportedFrequencyRefinement`, `Unsupported` (connector cannot
    /// serve series), `Fetch`, or `RequestTimeout` when the overall deadline
    /// elapses.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "bccr::router::table",
            skip(self, req),
            fields(indicators = req.indicators.len(), frequency = ?req.frequency),
        )
    )]
    pub async fn table(&self, req: TableRequest) -> Result<ResultTable, BccrError> {
        let plan = self.plan(&req)?;
        if self.connector.as_series_provider().is_none() {
            return Err(BccrError::unsupported("series"));
        }

        let tasks = plan
            .columns
            .iter()
            .map(|(spec, _, _)| self.fetch_series(&spec.code, req.start, req.end));
        let fetched = join_with_deadline(tasks, self.cfg.request_timeout, "table").await?;

        let mut raws: Vec<RawSeries> = Vec::with_capacity(fetched.len());
        for ((spec, catalog_freq, _), result) in plan.columns.iter().zip(fetched) {
            let raw = result?.within(req.start, req.end);
            log_fetched(&spec.code, *catalog_freq, &raw);
            raws.push(raw);
        }

        // An inferred target follows the fetched frequencies; an explicit one
        // stays and refuses series that turned out coarser.
        let target = match plan.requested {
            Some(_) => plan.target,
            None => resolve(raws.iter().map(RawSeries::frequency), None)?,
        };

        let mut resampled: Vec<ResampledSeries> = Vec::with_capacity(raws.len());
        for ((spec, _, reducer), raw) in plan.columns.into_iter().zip(raws) {
            let filled = fill(raw, plan.fill);
            resampled.push(resample(filled, spec.name, target, reducer, plan.missing)?);
        }

        merge(resampled)
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn log_fetched(code: &IndicatorCode, catalog: Frequency, raw: &RawSeries) {
    #[cfg(feature = "tracing")]
    {
        if raw.frequency() != catalog {
            tracing::warn!(
                code = %code,
                catalog = %catalog,
                fetched = %raw.frequency(),
                "fetched frequency disagrees with catalog; using fetched"
            );
        }
        if raw.duplicates_dropped() > 0 {
            tracing::warn!(
                code = %code,
                dropped = raw.duplicates_dropped(),
                "dropped duplicate periods"
            );
        }
    }
}
