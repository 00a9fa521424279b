//! Terminal output formatting

pub mod display;

pub use display::{print_classify_report, print_extract_report, print_resplit_report};
