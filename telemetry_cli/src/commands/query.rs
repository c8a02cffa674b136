use crate::ui;
use anyhow::Result;
use std::path::PathBuf;
use telemetry_metrics::exporters::{
    JsonExporter, MarkdownExporter, PrometheusExporter, TableExporter,
};
use telemetry_metrics::MetricsQuery;
use telemetry_source::load_dataset;

pub async fn execute(
    dataset_file: PathBuf,
    regions: Vec<String>,
    threshold: f64,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let dataset = load_dataset(&dataset_file).await?;

    let query = if regions.is_empty() {
        MetricsQuery::all_regions(&dataset, threshold)
    } else {
        MetricsQuery::new(regions, threshold)
    };
    let report = query.evaluate(&dataset);

    match format.as_str() {
        "cli" => {
            println!("{}", ui::banner("Region Metrics"));
            println!("Dataset: {}", dataset_file.display());
            println!("Threshold: {} ms", report.threshold_ms());
            let table = TableExporter::format(&report);
            println!("{}", table);
            if let Some(output_path) = output {
                tokio::fs::write(output_path, table).await?;
            }
        }
        "json" => {
            if let Some(output_path) = output {
                JsonExporter::export(&report, output_path).await?;
            } else {
                println!("{}", JsonExporter::to_string(&report)?);
            }
        }
        "markdown" => {
            if let Some(output_path) = output {
                MarkdownExporter::export(&report, output_path).await?;
            } else {
                println!("{}", MarkdownExporter::format(&report));
            }
        }
        "prometheus" => {
            let text = PrometheusExporter::format(&report)?;
            if let Some(output_path) = output {
                tokio::fs::write(output_path, text).await?;
            } else {
                print!("{}", text);
            }
        }
        _ => {
            anyhow::bail!("Unknown format: {}", format);
        }
    }

    Ok(())
}
