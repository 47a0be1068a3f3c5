//! CSV output format for classification results
//!
//! `--format csv` implementation for spreadsheet analysis and machine
//! parsing. One row per classified pair.

use crate::analysis::ClassificationResult;

const HEADER: &str = "pavilion,metric,abbrev,period,value,mean,std_dev,tier";

/// Render results as CSV, header first.
pub fn to_csv(results: &[ClassificationResult]) -> String {
    let mut output = String::new();
    output.push_str(HEADER);
    output.push('\n');

    for result in results {
        output.push_str(&format_row(result));
        output.push('\n');
    }

    output
}

fn format_row(result: &ClassificationResult) -> String {
    let value = match result.value {
        Some(v) => format!("{v}"),
        None => String::new(),
    };
    [
        escape_field(&result.pavilion),
        escape_field(&result.metric),
        escape_field(&result.abbrev),
        result.period.to_string(),
        value,
        format!("{}", result.baseline.mean),
        format!("{}", result.baseline.std_dev),
        format!("{:?}", result.tier),
    ]
    .join(",")
}

/// Escape CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
