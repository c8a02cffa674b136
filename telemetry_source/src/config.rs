use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use telemetry_core::{Result, TelemetryError};

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8000";
pub const DEFAULT_DATASET_PATH: &str = "q-vercel-latency.json";
pub const DEFAULT_MESSAGE: &str = "eShopCo Metrics API";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
    #[serde(default = "default_message")]
    pub message: String,
    #[serde(with = "humantime_serde", default = "default_request_timeout")]
    pub request_timeout: Duration,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// `"*"` mirrors whatever origin the request carries.
    #[serde(default = "default_allow_origins")]
    pub allow_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allow_origins: default_allow_origins(),
        }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allow_origins.iter().any(|o| o == "*")
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            dataset_path: default_dataset_path(),
            message: default_message(),
            request_timeout: default_request_timeout(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;

        let extension = path.extension().and_then(|s| s.to_str());
        let format = match extension {
            Some("yaml") | Some("yml") => "yaml",
            Some("toml") => "toml",
            Some("json") => "json",
            _ => {
                return Err(TelemetryError::UnsupportedFormat(format!(
                    "{}: use .yaml, .yml, .toml, or .json",
                    path.display()
                )))
            }
        };
        Self::from_str_with_format(&contents, format)
    }

    pub fn from_str_with_format(content: &str, format: &str) -> Result<Self> {
        let config: ServiceConfig = match format.to_lowercase().as_str() {
            "yaml" | "yml" => serde_yaml::from_str(content)?,
            "toml" => toml::from_str(content)?,
            "json" => serde_json::from_str(content)?,
            other => return Err(TelemetryError::UnsupportedFormat(other.to_string())),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            TelemetryError::InvalidConfig(format!("Invalid listen address '{}': {}", self.listen, e))
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;

        if self.dataset_path.as_os_str().is_empty() {
            return Err(TelemetryError::InvalidConfig(
                "dataset_path cannot be empty".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(TelemetryError::InvalidConfig(
                "request_timeout must be > 0".to_string(),
            ));
        }

        if self.cors.enabled && self.cors.allow_origins.is_empty() {
            return Err(TelemetryError::InvalidConfig(
                "cors.allow_origins cannot be empty while CORS is enabled".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_listen() -> String {
    DEFAULT_LISTEN.to_string()
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_PATH)
}

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_allow_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_true() -> bool {
    true
}

mod humantime_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        humantime::parse_duration(&s).map_err(serde::de::Error::custom)
    }
}
