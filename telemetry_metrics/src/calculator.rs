use serde::{Deserialize, Serialize};
use telemetry_core::Sample;

/// Latency threshold applied when a query does not name one.
pub const DEFAULT_THRESHOLD_MS: f64 = 180.0;

const P95: f64 = 0.95;

/// Per-region summary. All float fields are rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionMetrics {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: usize,
}

impl RegionMetrics {
    /// Result for an empty sample list or an unknown region.
    pub fn zero() -> Self {
        Self::default()
    }
}

pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Summarises `samples` against `threshold_ms`.
    ///
    /// Empty input yields [`RegionMetrics::zero`]. The percentile uses linear
    /// interpolation between closest ranks (rank `0.95 * (n - 1)`), and rounding
    /// is half away from zero.
    pub fn compute(samples: &[Sample], threshold_ms: f64) -> RegionMetrics {
        if samples.is_empty() {
            return RegionMetrics::zero();
        }

        let mut latencies: Vec<f64> = samples.iter().map(|s| s.latency_ms).collect();
        let uptimes: Vec<f64> = samples.iter().map(|s| s.uptime).collect();

        let breaches = Self::count_breaches(&latencies, threshold_ms);
        let avg_latency = Self::mean(&latencies);
        let avg_uptime = Self::mean(&uptimes);

        latencies.sort_by(f64::total_cmp);
        let p95_latency = Self::percentile(&latencies, P95);

        RegionMetrics {
            avg_latency: round2(avg_latency),
            p95_latency: round2(p95_latency),
            avg_uptime: round2(avg_uptime),
            breaches,
        }
    }

    /// Samples whose latency strictly exceeds the threshold.
    pub fn count_breaches(latencies: &[f64], threshold_ms: f64) -> usize {
        latencies.iter().filter(|&&l| l > threshold_ms).count()
    }

    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }

        values.iter().sum::<f64>() / values.len() as f64
    }

    /// `sorted` must be in ascending order; `fraction` is in `[0, 1]`.
    pub fn percentile(sorted: &[f64], fraction: f64) -> f64 {
        if sorted.is_empty() {
            return 0.0;
        }

        let rank = fraction.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = rank.ceil() as usize;
        lerp(sorted[lower], sorted[upper], rank - lower as f64)
    }
}

/// Interpolates from whichever end is nearer so the result never leaves `[a, b]`.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t < 0.5 {
        a + diff * t
    } else {
        b - diff * (1.0 - t)
    }
}

/// Rounds to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
