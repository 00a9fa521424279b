//! Pipeline stage implementations

pub mod classify;
pub mod extract;
pub mod resplit;

pub use classify::{ClassifyReport, classify_lines, run_classify};
pub use extract::{ExtractConfig, ExtractReport, run_extract, sample_words};
pub use resplit::{ResplitReport, resplit_words, run_resplit};
