//! boletines-cli library
//!
//! This crate provides the core functionality for the `boletines-cli` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle different aspects of the bulletin
//! data pipeline:
//!
//! - [`fetcher`] - Loads the published bulletin document (remote fetch with retry, or
//!   local file) and selects bulletins by publication date
//! - [`aggregator`] - Pure derived-statistics functions: summary totals, time series,
//!   category distributions, and flattened record views
//! - [`report`] - Writes each derived view as a JSON document for the dashboard
//! - [`cli`] - Command-line interface orchestrating the load, filter, aggregate, and
//!   report workflow
//! - [`models`] - Typed bulletin document and record structures
//! - [`config`] - Runtime defaults and TOML-file configuration
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! The typical workflow involves loading the document, filtering it to a date range,
//! and computing the derived views:
//!
//! ```no_run
//! use boletines_cli::{aggregator, config::ResolvedConfig, fetcher, models::DatasetSource};
//! use boletines_cli::errors::AppResult;
//!
//! # async fn example() -> AppResult<()> {
//! let config = ResolvedConfig::default();
//! let client = reqwest::Client::new();
//! let source = DatasetSource::from(config.data_source.as_str());
//!
//! let dataset = fetcher::load_dataset(&client, &source, &config).await?;
//! let summary = aggregator::compute_summary(&dataset.boletines);
//! println!("{} boletines", summary.total_boletines);
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod fetcher;
pub mod models;
pub mod report;
