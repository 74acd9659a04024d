//! Data model for a comparison run.
//!
//! Rendered documents and page pairs live only in memory; outcomes and the
//! report are serializable so they can be emitted as JSON.

mod document;
mod outcome;
mod pair;

pub use document::RasterDocument;
pub use outcome::{ComparisonReport, DocumentSide, DocumentSummary, PageOutcome, PageResult};
pub use pair::{pair_pages, PagePair, PairedPages};
