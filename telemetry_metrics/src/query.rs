use crate::calculator::{MetricsCalculator, RegionMetrics, DEFAULT_THRESHOLD_MS};
use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};
use serde::Deserialize;
use telemetry_core::Dataset;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricsQuery {
    pub regions: Vec<String>,
    #[serde(default = "default_threshold")]
    pub threshold_ms: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD_MS
}

impl MetricsQuery {
    pub fn new(regions: Vec<String>, threshold_ms: f64) -> Self {
        Self {
            regions,
            threshold_ms,
        }
    }

    /// Every region in `dataset`, in its listing order.
    pub fn all_regions(dataset: &Dataset, threshold_ms: f64) -> Self {
        Self::new(dataset.region_names(), threshold_ms)
    }

    /// Computes metrics for each requested region.
    ///
    /// A region missing from the dataset gets the same zero metrics as a region
    /// with no samples.
    pub fn evaluate(&self, dataset: &Dataset) -> MetricsReport {
        let mut report = MetricsReport::new(self.threshold_ms);

        for region in &self.regions {
            if report.entries.contains_key(region.as_str()) {
                continue;
            }

            let metrics = match dataset.get(region) {
                Some(samples) => MetricsCalculator::compute(samples, self.threshold_ms),
                None => {
                    debug!("Region '{}' not in dataset, returning zero metrics", region);
                    RegionMetrics::zero()
                }
            };
            report.entries.insert(region.clone(), metrics);
        }

        report
    }
}

/// Metrics keyed by region, kept in request order.
///
/// Serializes as a JSON object; the threshold is carried for exporters only.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    threshold_ms: f64,
    entries: IndexMap<String, RegionMetrics>,
}

impl MetricsReport {
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            threshold_ms,
            entries: IndexMap::new(),
        }
    }

    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    pub fn get(&self, region: &str) -> Option<&RegionMetrics> {
        self.entries.get(region)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionMetrics)> {
        self.entries.iter().map(|(name, metrics)| (name.as_str(), metrics))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_breaches(&self) -> usize {
        self.entries.values().map(|m| m.breaches).sum()
    }
}

impl Serialize for MetricsReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}
