//! Analysis driver: baseline + classification per (metric, pavilion) pair
//!
//! Walks every series in the scorecard, computes its trailing baseline and
//! classifies the latest observation. Baselines and results are pair-local,
//! so nothing here shares mutable state between pairs.

use crate::baseline::{compute_baseline, Baseline};
use crate::classify::{classify, Tier};
use crate::period::Period;
use crate::scorecard::{Scorecard, SeriesKey};

/// One classified (metric, pavilion) pair.
#[derive(Debug, Clone)]
pub struct ClassificationResult {
    pub pavilion: String,
    pub metric: String,
    pub abbrev: String,
    /// The latest period in the series, the one being judged.
    pub period: Period,
    pub value: Option<f64>,
    pub tier: Tier,
    /// Baseline the tier was judged against.
    pub baseline: Baseline,
}

/// Optional restriction of the analysis to matching keys.
#[derive(Debug, Clone, Default)]
pub struct AnalysisFilter {
    pub pavilion: Option<String>,
    pub metric: Option<String>,
}

impl AnalysisFilter {
    /// Case-insensitive exact match; `None` fields match everything.
    pub fn matches(&self, key: &SeriesKey) -> bool {
        let pavilion_ok = self
            .pavilion
            .as_ref()
            .is_none_or(|p| p.eq_ignore_ascii_case(&key.pavilion));
        let metric_ok = self
            .metric
            .as_ref()
            .is_none_or(|m| m.eq_ignore_ascii_case(&key.metric));
        pavilion_ok && metric_ok
    }
}

/// Classify every (metric, pavilion) pair in the scorecard.
pub fn analyze(scorecard: &Scorecard) -> Vec<ClassificationResult> {
    analyze_filtered(scorecard, &AnalysisFilter::default())
}

/// Classify the pairs selected by `filter`.
///
/// Pairs without a defined baseline (history of fewer than two reported
/// values) are skipped with a debug log and produce no result row. A
/// missing latest value with a valid baseline still produces a
/// `DataMissing` row. Results come back sorted by (pavilion, metric).
pub fn analyze_filtered(scorecard: &Scorecard, filter: &AnalysisFilter) -> Vec<ClassificationResult> {
    let mut results = Vec::new();

    for series in scorecard.series() {
        if !filter.matches(series.key()) {
            continue;
        }
        let Some(baseline) = compute_baseline(&series) else {
            tracing::debug!(
                "skipping `{}` at `{}`: fewer than 2 historical values",
                series.key().metric,
                series.key().pavilion
            );
            continue;
        };
        // A baseline implies history, so the series is non-empty
        let Some(latest) = series.latest() else {
            continue;
        };

        let tier = classify(latest.value, &baseline);
        results.push(ClassificationResult {
            pavilion: latest.pavilion.clone(),
            metric: latest.metric.clone(),
            abbrev: latest.abbrev.clone(),
            period: latest.period,
            value: latest.value,
            tier,
            baseline,
        });
    }

    results.sort_by(|a, b| {
        (a.pavilion.as_str(), a.metric.as_str()).cmp(&(b.pavilion.as_str(), b.metric.as_str()))
    });
    results
}

/// Per-tier result counts for summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub sane: usize,
    pub borderline_low: usize,
    pub borderline_high: usize,
    pub insane: usize,
    pub data_missing: usize,
    pub unclassified: usize,
}

impl TierCounts {
    pub fn tally(results: &[ClassificationResult]) -> Self {
        let mut counts = Self::default();
        for result in results {
            match result.tier {
                Tier::Sane => counts.sane += 1,
                Tier::BorderlineLow => counts.borderline_low += 1,
                Tier::BorderlineHigh => counts.borderline_high += 1,
                Tier::Insane => counts.insane += 1,
                Tier::DataMissing => counts.data_missing += 1,
                Tier::Unclassified => counts.unclassified += 1,
            }
        }
        counts
    }

    /// Low and high borderline counts combined, as summaries report them.
    pub fn borderline(&self) -> usize {
        self.borderline_low + self.borderline_high
    }

    pub fn total(&self) -> usize {
        self.sane + self.borderline() + self.insane + self.data_missing + self.unclassified
    }
}
