//! JSON output format for classification results
//!
//! `--format json` implementation: a machine-readable mirror of the text
//! report, results plus a tier summary.

use serde::{Deserialize, Serialize};

use crate::analysis::{ClassificationResult, TierCounts};
use crate::classify::Tier;

/// A single classified pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResult {
    pub pavilion: String,
    pub metric: String,
    pub abbrev: String,
    /// Latest period, rendered as "Jun-2024"
    pub period: String,
    /// Absent when the period was reported without a value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub tier: Tier,
    pub mean: f64,
    pub std_dev: f64,
}

/// Tier distribution over the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    pub pairs: usize,
    pub sane: usize,
    pub borderline: usize,
    pub insane: usize,
    pub data_missing: usize,
    pub unclassified: usize,
}

/// Top-level report document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub results: Vec<JsonResult>,
    pub summary: JsonSummary,
}

impl JsonReport {
    pub fn from_results(results: &[ClassificationResult]) -> Self {
        let counts = TierCounts::tally(results);
        Self {
            results: results.iter().map(JsonResult::from_result).collect(),
            summary: JsonSummary {
                pairs: counts.total(),
                sane: counts.sane,
                borderline: counts.borderline(),
                insane: counts.insane,
                data_missing: counts.data_missing,
                unclassified: counts.unclassified,
            },
        }
    }
}

impl JsonResult {
    fn from_result(result: &ClassificationResult) -> Self {
        Self {
            pavilion: result.pavilion.clone(),
            metric: result.metric.clone(),
            abbrev: result.abbrev.clone(),
            period: result.period.to_string(),
            value: result.value,
            tier: result.tier,
            mean: result.baseline.mean,
            std_dev: result.baseline.std_dev,
        }
    }
}

/// Serialize the report as pretty-printed JSON.
pub fn to_json(results: &[ClassificationResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from_results(results))
}
