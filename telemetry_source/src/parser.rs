use std::path::Path;
use telemetry_core::{Dataset, Result, TelemetryError};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
    Toml,
}

impl DatasetFormat {
    /// Picks the format from the file extension. Anything unrecognised is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(TelemetryError::UnsupportedFormat(name.to_string())),
        }
    }
}

/// Reads and parses a dataset file, surfacing every failure.
pub async fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path).await?;
    parse_dataset_from_str(&contents, DatasetFormat::from_path(path))
}

/// Startup loader: a missing or corrupt file is logged and yields an empty dataset.
pub async fn load_dataset_or_empty(path: impl AsRef<Path>) -> Dataset {
    let path = path.as_ref();
    match load_dataset(path).await {
        Ok(dataset) => {
            info!(
                "Loaded telemetry dataset from {}: {} regions, {} samples",
                path.display(),
                dataset.len(),
                dataset.total_samples()
            );
            dataset
        }
        Err(e) => {
            warn!(
                "Error loading telemetry data from {}: {}; continuing with an empty dataset",
                path.display(),
                e
            );
            Dataset::empty()
        }
    }
}

pub fn parse_dataset_from_str(content: &str, format: DatasetFormat) -> Result<Dataset> {
    let dataset: Dataset = match format {
        DatasetFormat::Json => serde_json::from_str(content)?,
        DatasetFormat::Yaml => serde_yaml::from_str(content)?,
        DatasetFormat::Toml => toml::from_str(content)?,
    };
    Ok(dataset)
}
