pub mod config;
pub mod parser;

pub use config::{CorsConfig, ServiceConfig};
pub use parser::{
    load_dataset, load_dataset_or_empty, parse_dataset_from_str, DatasetFormat,
};
