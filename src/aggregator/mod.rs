//! Derived statistics over the bulletin collection.
//!
//! Pure, synchronous transformations: no I/O, no logging, no mutation of the
//! input, and identical output for identical input. Malformed records were
//! already defaulted at the parse boundary, so every function here is total.

mod distribution;
mod flatten;
mod summary;
mod time_series;

// Re-export public API
pub use distribution::{distribution_by_giro, distribution_by_municipio, CategoryCount};
pub use flatten::{flatten_proyectos, flatten_resolutivos, FlatRecord};
pub use summary::{compute_summary, NameCount, Summary};
pub use time_series::{compute_time_series, TimeSeriesPoint};
