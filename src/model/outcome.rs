//! Per-page outcomes and the aggregate comparison report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which of the two compared documents a page belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSide {
    First,
    Second,
}

/// Result of comparing one page index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageOutcome {
    /// No pixel exceeded the threshold
    Identical,
    /// Only one document has this page
    Missing { present_in: DocumentSide },
    /// Number of pixels that differ
    Mismatch { pixels: u64 },
}

impl PageOutcome {
    /// Check if the page counts as a difference.
    pub fn is_difference(&self) -> bool {
        !matches!(self, PageOutcome::Identical)
    }
}

/// Outcome of a single page, plus the artifacts written for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Page number (1-indexed)
    pub number: u32,

    pub outcome: PageOutcome,

    /// Diff image written for this page, if any
    pub diff_image: Option<PathBuf>,

    /// Original (width, height) of the second page when it was resized
    /// to match the first before diffing
    pub resized_from: Option<(u32, u32)>,
}

impl PageResult {
    /// Create a result with no artifacts attached.
    pub fn new(number: u32, outcome: PageOutcome) -> Self {
        Self {
            number,
            outcome,
            diff_image: None,
            resized_from: None,
        }
    }

    /// Attach the path of the written diff image.
    pub fn with_diff_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.diff_image = Some(path.into());
        self
    }

    /// Record that the second page was resized from `size`.
    pub fn with_resized_from(mut self, size: (u32, u32)) -> Self {
        self.resized_from = Some(size);
        self
    }
}

/// Source document summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub path: PathBuf,
    pub page_count: usize,
}

/// Full result of comparing two documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub first: DocumentSummary,
    pub second: DocumentSummary,

    /// Render resolution in dots per inch
    pub dpi: f32,

    /// Pixel diff sensitivity
    pub threshold: f64,

    /// Directory diff images are written to
    pub output_dir: PathBuf,

    /// One entry per page index of the longer document
    pub pages: Vec<PageResult>,

    pub generated_at: DateTime<Utc>,
}

impl ComparisonReport {
    /// Check whether the documents have different page counts.
    pub fn page_count_mismatch(&self) -> bool {
        self.first.page_count != self.second.page_count
    }

    /// True if any page differs or the page counts differ.
    pub fn differences_found(&self) -> bool {
        self.page_count_mismatch() || self.pages.iter().any(|p| p.outcome.is_difference())
    }

    /// Pages that differ, in page order.
    pub fn differing_pages(&self) -> impl Iterator<Item = &PageResult> {
        self.pages.iter().filter(|p| p.outcome.is_difference())
    }

    /// Sum of mismatched pixels over all compared pages.
    pub fn total_mismatch_pixels(&self) -> u64 {
        self.pages
            .iter()
            .map(|p| match p.outcome {
                PageOutcome::Mismatch { pixels } => pixels,
                _ => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(first_pages: usize, second_pages: usize, pages: Vec<PageResult>) -> ComparisonReport {
        ComparisonReport {
            first: DocumentSummary {
                path: PathBuf::from("a.pdf"),
                page_count: first_pages,
            },
            second: DocumentSummary {
                path: PathBuf::from("b.pdf"),
                page_count: second_pages,
            },
            dpi: 100.0,
            threshold: 0.1,
            output_dir: PathBuf::from("diff_results"),
            pages,
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_identical_report() {
        let r = report(
            2,
            2,
            vec![
                PageResult::new(1, PageOutcome::Identical),
                PageResult::new(2, PageOutcome::Identical),
            ],
        );
        assert!(!r.differences_found());
        assert_eq!(r.differing_pages().count(), 0);
        assert_eq!(r.total_mismatch_pixels(), 0);
    }

    #[test]
    fn test_mismatch_report() {
        let r = report(
            2,
            2,
            vec![
                PageResult::new(1, PageOutcome::Identical),
                PageResult::new(2, PageOutcome::Mismatch { pixels: 42 })
                    .with_diff_image("diff_results/diff_page_2.png"),
            ],
        );
        assert!(r.differences_found());
        let differing: Vec<_> = r.differing_pages().map(|p| p.number).collect();
        assert_eq!(differing, vec![2]);
        assert_eq!(r.total_mismatch_pixels(), 42);
    }

    #[test]
    fn test_page_count_mismatch_alone_is_difference() {
        // Outcomes alone would say identical; the count mismatch still counts
        let r = report(1, 0, vec![PageResult::new(1, PageOutcome::Identical)]);
        assert!(r.page_count_mismatch());
        assert!(r.differences_found());
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&PageOutcome::Missing {
            present_in: DocumentSide::First,
        })
        .unwrap();
        assert_eq!(json, r#"{"status":"missing","present_in":"first"}"#);

        let json = serde_json::to_string(&PageOutcome::Mismatch { pixels: 7 }).unwrap();
        assert_eq!(json, r#"{"status":"mismatch","pixels":7}"#);
    }
}
