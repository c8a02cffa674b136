pub mod calculator;
pub mod exporters;
pub mod query;

pub use calculator::{round2, MetricsCalculator, RegionMetrics, DEFAULT_THRESHOLD_MS};
pub use query::{MetricsQuery, MetricsReport};
