use serde::{Deserialize, Serialize};

/// One latency/uptime observation for a region.
///
/// Extra fields present in the source records (timestamps, service names)
/// are ignored on load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub latency_ms: f64,
    pub uptime: f64,
}

impl Sample {
    pub fn new(latency_ms: f64, uptime: f64) -> Self {
        Self { latency_ms, uptime }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ignores_extra_fields() {
        let json = r#"{"latency_ms": 120.5, "uptime": 0.98, "service": "checkout", "timestamp": 20250301}"#;

        let sample: Sample = serde_json::from_str(json).unwrap();
        assert_eq!(sample, Sample::new(120.5, 0.98));
    }

    #[test]
    fn test_sample_requires_latency_and_uptime() {
        let json = r#"{"latency_ms": 120.5}"#;
        assert!(serde_json::from_str::<Sample>(json).is_err());
    }
}
