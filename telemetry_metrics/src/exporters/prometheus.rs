use crate::query::MetricsReport;
use ::prometheus::{Encoder, Gauge, GaugeVec, IntGaugeVec, Opts, Registry, TextEncoder};
use anyhow::Result;

/// Renders a report in the Prometheus text exposition format, one series per region.
pub struct PrometheusExporter;

impl PrometheusExporter {
    pub fn format(report: &MetricsReport) -> Result<String> {
        let registry = Registry::new();

        let threshold = Gauge::with_opts(Opts::new(
            "telemetry_breach_threshold_ms",
            "Latency threshold used to count breaches, in milliseconds",
        ))?;
        threshold.set(report.threshold_ms());
        registry.register(Box::new(threshold))?;

        // Families without series fail to encode.
        if !report.is_empty() {
            let avg_latency = GaugeVec::new(
                Opts::new("telemetry_avg_latency_ms", "Mean latency in milliseconds"),
                &["region"],
            )?;
            let p95_latency = GaugeVec::new(
                Opts::new(
                    "telemetry_p95_latency_ms",
                    "95th percentile latency in milliseconds",
                ),
                &["region"],
            )?;
            let avg_uptime = GaugeVec::new(
                Opts::new("telemetry_avg_uptime_ratio", "Mean uptime ratio"),
                &["region"],
            )?;
            let breaches = IntGaugeVec::new(
                Opts::new(
                    "telemetry_breaches",
                    "Samples whose latency exceeds the threshold",
                ),
                &["region"],
            )?;

            for (region, metrics) in report.iter() {
                avg_latency.with_label_values(&[region]).set(metrics.avg_latency);
                p95_latency.with_label_values(&[region]).set(metrics.p95_latency);
                avg_uptime.with_label_values(&[region]).set(metrics.avg_uptime);
                breaches
                    .with_label_values(&[region])
                    .set(i64::try_from(metrics.breaches)?);
            }

            registry.register(Box::new(avg_latency))?;
            registry.register(Box::new(p95_latency))?;
            registry.register(Box::new(avg_uptime))?;
            registry.register(Box::new(breaches))?;
        }

        let mut buffer = Vec::new();
        TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
