//! Document comparison.

mod comparator;
mod options;

pub use comparator::{diff_file_name, PdfComparator};
pub use options::{CompareOptions, DEFAULT_DPI, DEFAULT_OUTPUT_DIR};
