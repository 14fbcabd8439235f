//! Concrete metrics formats.
//!
//! Each submodule implements [`MetricFormat`](crate::MetricFormat) for one
//! binary file produced by the instrument's diagnostics, along with the typed
//! record the file decodes into. The framework in [`crate::reader`] treats
//! them uniformly; nothing here is special-cased.

mod error;
mod quality;
mod tile;

pub use error::{ErrorMetric, ErrorMetricsFormat};
pub use quality::{QualityMetric, QualityMetricsFormat, QUALITY_BUCKETS};
pub use tile::{TileMetric, TileMetricsFormat};
