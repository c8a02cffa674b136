use crate::query::MetricsReport;
use anyhow::Result;
use chrono::Utc;
use std::path::Path;

pub struct MarkdownExporter;

impl MarkdownExporter {
    pub async fn export(report: &MetricsReport, path: impl AsRef<Path>) -> Result<()> {
        let markdown = Self::format(report);
        tokio::fs::write(path, markdown).await?;
        Ok(())
    }

    pub fn format(report: &MetricsReport) -> String {
        let rows = report
            .iter()
            .map(|(region, m)| {
                format!(
                    "| {} | {:.2} | {:.2} | {:.2} | {} |",
                    region, m.avg_latency, m.p95_latency, m.avg_uptime, m.breaches
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"# Regional Telemetry Report

Generated: {}

## Summary

- **Regions**: {}
- **Breach Threshold**: {} ms
- **Total Breaches**: {}

## Region Metrics

| Region | Avg Latency (ms) | P95 Latency (ms) | Avg Uptime | Breaches |
|--------|------------------|------------------|------------|----------|
{}
"#,
            Utc::now().to_rfc3339(),
            report.len(),
            report.threshold_ms(),
            report.total_breaches(),
            rows,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::MetricsQuery;
    use telemetry_core::{Dataset, Sample};

    #[test]
    fn test_format_contains_region_rows() {
        let dataset = Dataset::from_iter([(
            "apac".to_string(),
            vec![Sample::new(190.0, 0.97), Sample::new(210.0, 0.99)],
        )]);
        let report = MetricsQuery::new(vec!["apac".to_string()], 180.0).evaluate(&dataset);

        let markdown = MarkdownExporter::format(&report);

        assert!(markdown.contains("- **Breach Threshold**: 180 ms"));
        assert!(markdown.contains("- **Total Breaches**: 2"));
        assert!(markdown.contains("| apac | 200.00 | 209.00 | 0.98 | 2 |"));
    }
}
