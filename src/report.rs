//! JSON rendering of comparison reports.

use crate::error::{Error, Result};
use crate::model::ComparisonReport;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a report to JSON.
pub fn to_json(report: &ComparisonReport, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentSummary, PageOutcome, PageResult};
    use chrono::Utc;
    use std::path::PathBuf;

    fn sample_report() -> ComparisonReport {
        ComparisonReport {
            first: DocumentSummary {
                path: PathBuf::from("before.pdf"),
                page_count: 2,
            },
            second: DocumentSummary {
                path: PathBuf::from("after.pdf"),
                page_count: 2,
            },
            dpi: 100.0,
            threshold: 0.1,
            output_dir: PathBuf::from("diff_results"),
            pages: vec![
                PageResult::new(1, PageOutcome::Identical),
                PageResult::new(2, PageOutcome::Mismatch { pixels: 120 })
                    .with_diff_image("diff_results/diff_page_2.png")
                    .with_resized_from((827, 1169)),
            ],
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_report(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"before.pdf\""));
        assert!(json.contains("\"mismatch\""));
        assert!(json.contains("diff_page_2.png"));
        assert!(json.contains('\n')); // Pretty has newlines
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_report(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n')); // Compact has no newlines
    }

    #[test]
    fn test_json_roundtrip_keeps_outcomes() {
        let json = to_json(&sample_report(), JsonFormat::Compact).unwrap();
        let parsed: ComparisonReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.pages[1].outcome, PageOutcome::Mismatch { pixels: 120 });
        assert_eq!(parsed.pages[1].resized_from, Some((827, 1169)));
        assert!(parsed.differences_found());
    }
}
