pub mod dataset;
pub mod error;
pub mod sample;

pub use dataset::Dataset;
pub use error::{Result, TelemetryError};
pub use sample::Sample;
