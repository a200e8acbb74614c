mod core;
mod metrics;

pub use core::{DEFAULT_CAPACITY, DocumentCache};
pub use metrics::{CacheMetrics, CacheMetricsSnapshot};
