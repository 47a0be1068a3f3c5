//! Human-readable text report
//!
//! One aligned row per classified pair, a tier distribution, then the
//! explicit band ranges for everything flagged, which is the part a
//! reviewer actually acts on.

use crate::analysis::{ClassificationResult, TierCounts};

/// Render the full text report.
pub fn render(results: &[ClassificationResult]) -> String {
    let mut out = String::new();

    if results.is_empty() {
        out.push_str("No metric series had enough history to classify.\n");
        return out;
    }

    let pavilion_w = column_width("pavilion", results.iter().map(|r| r.pavilion.len()));
    let metric_w = column_width("metric", results.iter().map(|r| r.abbrev.len()));

    out.push_str(&format!(
        "{:<pavilion_w$}  {:<metric_w$}  {:<8}  {:>8}  {:>8}  {:>8}  tier\n",
        "pavilion", "metric", "period", "value", "mean", "std-dev",
    ));
    out.push_str(&format!(
        "{}  {}  {}  {}  {}  {}  {}\n",
        "-".repeat(pavilion_w),
        "-".repeat(metric_w),
        "-".repeat(8),
        "-".repeat(8),
        "-".repeat(8),
        "-".repeat(8),
        "-".repeat(17),
    ));

    for result in results {
        out.push_str(&format!(
            "{:<pavilion_w$}  {:<metric_w$}  {:<8}  {:>8}  {:>7.2}%  {:>7.2}%  {}\n",
            result.pavilion,
            result.abbrev,
            result.period.to_string(),
            format_value(result.value),
            result.baseline.mean,
            result.baseline.std_dev,
            result.tier.label(),
        ));
    }

    let counts = TierCounts::tally(results);
    out.push('\n');
    out.push_str(&format!(
        "{} pairs classified: {} sane, {} borderline, {} insane, {} missing, {} unclassified\n",
        counts.total(),
        counts.sane,
        counts.borderline(),
        counts.insane,
        counts.data_missing,
        counts.unclassified,
    ));

    let flagged: Vec<&ClassificationResult> =
        results.iter().filter(|r| r.tier.is_flagged()).collect();
    if !flagged.is_empty() {
        out.push_str("\nFlagged metrics:\n");
        for result in flagged {
            out.push_str(&flagged_line(result));
            out.push('\n');
        }
    }

    out
}

fn column_width(header: &str, lens: impl Iterator<Item = usize>) -> usize {
    lens.chain(std::iter::once(header.len())).max().unwrap_or(0)
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => "missing".to_string(),
    }
}

/// One explanation line for a flagged result, with the band ranges the
/// value was judged against.
fn flagged_line(result: &ClassificationResult) -> String {
    let context = format!(
        "  {} at {} ({})",
        result.abbrev, result.pavilion, result.period
    );
    match result.value {
        None => format!("{context}: value missing"),
        Some(value) => {
            let mean = result.baseline.mean;
            let sigma = result.baseline.std_dev;
            format!(
                "{context}: {value:.2}% (sane {:.2}% to {:.2}%, borderline {:.2}% to {:.2}%)",
                mean - sigma,
                mean + sigma,
                mean - 2.0 * sigma,
                mean + 2.0 * sigma,
            )
        }
    }
}
