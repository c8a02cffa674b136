use crate::query::MetricsReport;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Avg Latency (ms)")]
    avg_latency: String,
    #[tabled(rename = "P95 Latency (ms)")]
    p95_latency: String,
    #[tabled(rename = "Avg Uptime")]
    avg_uptime: String,
    #[tabled(rename = "Breaches")]
    breaches: usize,
}

/// Terminal table for the CLI.
pub struct TableExporter;

impl TableExporter {
    pub fn format(report: &MetricsReport) -> String {
        let rows: Vec<RegionRow> = report
            .iter()
            .map(|(region, m)| RegionRow {
                region: region.to_string(),
                avg_latency: format!("{:.2}", m.avg_latency),
                p95_latency: format!("{:.2}", m.p95_latency),
                avg_uptime: format!("{:.2}", m.avg_uptime),
                breaches: m.breaches,
            })
            .collect();

        Table::new(rows).with(Style::rounded()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::MetricsQuery;
    use telemetry_core::Dataset;

    #[test]
    fn test_format_has_header_and_rows() {
        let report = MetricsQuery::new(vec!["latam".to_string()], 180.0).evaluate(&Dataset::empty());

        let table = TableExporter::format(&report);

        assert!(table.contains("P95 Latency (ms)"));
        assert!(table.contains("latam"));
        assert!(table.contains("0.00"));
    }
}
