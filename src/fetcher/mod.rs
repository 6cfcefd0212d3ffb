//! Fetch and load operations for the bulletin dataset.
//!
//! This module retrieves the published bulletin document (over HTTP or from a local
//! file), persists optional raw snapshots, and selects bulletins by publication date.
//! The main entry points are [`load_dataset`] and [`filter_boletines_by_range`].

mod date_filter;
mod document_fetcher;

// Re-export public API
pub use date_filter::{filter_boletines_by_range, validate_date_bound};
pub use document_fetcher::{fetch_document, load_dataset};
