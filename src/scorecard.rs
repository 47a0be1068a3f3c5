//! Scorecard table ingestion and the observation data model
//!
//! A scorecard is a CSV table of metric observations: one row per
//! (pavilion, metric, period). Ingestion is header-driven, so the required
//! columns may appear in any order and extra columns are ignored. The
//! one-observation-per-period invariant is enforced up front so the
//! analysis layer never sees a malformed series.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::period::{Period, PeriodParseError};

/// Required scorecard columns, matched case-insensitively.
const COLUMN_PAVILION: &str = "pavilion";
const COLUMN_METRIC: &str = "metric";
const COLUMN_ABBREV: &str = "abbrev";
const COLUMN_PERIOD: &str = "period";
const COLUMN_VALUE: &str = "value";

/// Errors raised while ingesting a scorecard table.
///
/// All row-level variants carry the 1-based line number of the offending
/// row so the user can go straight to it.
#[derive(Error, Debug)]
pub enum ScorecardError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("line {line}: expected {expected} fields, got {actual}")]
    RaggedRow {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("line {line}: {source}")]
    BadPeriod {
        line: usize,
        #[source]
        source: PeriodParseError,
    },

    #[error("line {line}: invalid value `{text}` (expected a number or an empty field)")]
    BadValue { line: usize, text: String },

    #[error("line {line}: duplicate period {period} for `{metric}` at `{pavilion}`")]
    DuplicatePeriod {
        line: usize,
        metric: String,
        pavilion: String,
        period: Period,
    },

    #[error("scorecard has a header but no data rows")]
    EmptyTable,
}

/// A single ingested measurement. Immutable once built.
///
/// `value` is `None` when the CSV field was blank: the period was reported
/// but no number came in. That is data to classify (as missing), not an
/// ingestion error.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub pavilion: String,
    pub metric: String,
    pub abbrev: String,
    pub period: Period,
    pub value: Option<f64>,
}

/// Identity of one tracked series: a metric within a pavilion.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesKey {
    pub metric: String,
    pub pavilion: String,
}

/// Time-ordered observations sharing one [`SeriesKey`].
///
/// Invariant: observations are sorted by period ascending and no two share
/// a period. Ingestion enforces the latter; [`Series::new`] enforces the
/// former.
#[derive(Debug, Clone)]
pub struct Series {
    key: SeriesKey,
    observations: Vec<Observation>,
}

impl Series {
    /// Build a series from observations, sorting them by period.
    ///
    /// Callers are responsible for period uniqueness; table ingestion has
    /// already rejected duplicates.
    pub fn new(key: SeriesKey, mut observations: Vec<Observation>) -> Self {
        observations.sort_by_key(|o| o.period);
        Self { key, observations }
    }

    pub fn key(&self) -> &SeriesKey {
        &self.key
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// The observation at the maximum period, if the series is non-empty.
    pub fn latest(&self) -> Option<&Observation> {
        self.observations.last()
    }
}

/// The full ingested table.
#[derive(Debug, Clone, Default)]
pub struct Scorecard {
    observations: Vec<Observation>,
}

impl Scorecard {
    /// Load a scorecard from a CSV file on disk.
    pub fn from_csv_path(path: &Path) -> Result<Self, ScorecardError> {
        let text = fs::read_to_string(path).map_err(|source| ScorecardError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_csv_str(&text)
    }

    /// Parse a scorecard from CSV text.
    ///
    /// The header row names the columns; `pavilion`, `metric`, `abbrev`,
    /// `period` and `value` are required (any order, any case). Blank lines
    /// are skipped. A blank value field ingests as a missing value.
    pub fn from_csv_str(text: &str) -> Result<Self, ScorecardError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
            .filter(|(_, line)| !line.trim().is_empty());

        let (_, header_line) = lines.next().ok_or(ScorecardError::EmptyTable)?;
        let header = split_fields(header_line);
        let pavilion_col = column_index(&header, COLUMN_PAVILION)?;
        let metric_col = column_index(&header, COLUMN_METRIC)?;
        let abbrev_col = column_index(&header, COLUMN_ABBREV)?;
        let period_col = column_index(&header, COLUMN_PERIOD)?;
        let value_col = column_index(&header, COLUMN_VALUE)?;

        let mut observations = Vec::new();
        let mut seen: BTreeSet<(String, String, Period)> = BTreeSet::new();

        for (line, row_text) in lines {
            let row = split_fields(row_text);
            if row.len() != header.len() {
                return Err(ScorecardError::RaggedRow {
                    line,
                    expected: header.len(),
                    actual: row.len(),
                });
            }

            let pavilion = row[pavilion_col].trim().to_string();
            let metric = row[metric_col].trim().to_string();
            let abbrev = row[abbrev_col].trim().to_string();
            let period = Period::parse(&row[period_col])
                .map_err(|source| ScorecardError::BadPeriod { line, source })?;
            let value = parse_value(&row[value_col])
                .map_err(|text| ScorecardError::BadValue { line, text })?;

            if !seen.insert((metric.clone(), pavilion.clone(), period)) {
                return Err(ScorecardError::DuplicatePeriod {
                    line,
                    metric,
                    pavilion,
                    period,
                });
            }

            observations.push(Observation {
                pavilion,
                metric,
                abbrev,
                period,
                value,
            });
        }

        if observations.is_empty() {
            return Err(ScorecardError::EmptyTable);
        }

        tracing::debug!(
            "ingested {} observations across {} series",
            observations.len(),
            seen.iter()
                .map(|(m, p, _)| (m, p))
                .collect::<BTreeSet<_>>()
                .len()
        );

        Ok(Self { observations })
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Group observations into per-key series, ordered by key.
    pub fn series(&self) -> Vec<Series> {
        let mut grouped: BTreeMap<SeriesKey, Vec<Observation>> = BTreeMap::new();
        for obs in &self.observations {
            let key = SeriesKey {
                metric: obs.metric.clone(),
                pavilion: obs.pavilion.clone(),
            };
            grouped.entry(key).or_default().push(obs.clone());
        }
        grouped
            .into_iter()
            .map(|(key, observations)| Series::new(key, observations))
            .collect()
    }
}

/// Parse one value field: blank means missing, a trailing `%` is allowed.
fn parse_value(field: &str) -> Result<Option<f64>, String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let numeric = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    numeric
        .parse::<f64>()
        .map(Some)
        .map_err(|_| trimmed.to_string())
}

fn column_index(header: &[String], name: &'static str) -> Result<usize, ScorecardError> {
    header
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or(ScorecardError::MissingColumn(name))
}

/// Split one CSV line into fields (handle commas, quotes, embedded quotes).
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                // Doubled quote inside a quoted field is a literal quote
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}
