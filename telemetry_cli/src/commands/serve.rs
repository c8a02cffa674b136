use crate::ui;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use telemetry_source::ServiceConfig;
use tracing::info;

pub async fn execute(
    config: Option<PathBuf>,
    listen: Option<String>,
    dataset: Option<PathBuf>,
) -> Result<()> {
    println!("{}", ui::banner("Telemetry Metrics Service"));

    let mut service_config = match config {
        Some(path) => {
            println!("Loading config: {}", path.display());
            ServiceConfig::from_file(&path).await?
        }
        None => ServiceConfig::default(),
    };

    if let Some(listen) = listen {
        info!("Overriding listen address: {}", listen);
        service_config.listen = listen;
    }
    if let Some(dataset) = dataset {
        info!("Overriding dataset path: {}", dataset.display());
        service_config.dataset_path = dataset;
    }
    service_config.validate()?;

    println!("  Listen: {}", service_config.listen.green());
    println!("  Dataset: {}", service_config.dataset_path.display());
    println!("  Request timeout: {:?}", service_config.request_timeout);
    println!(
        "  CORS: {}",
        if service_config.cors.enabled {
            service_config.cors.allow_origins.join(", ")
        } else {
            "disabled".to_string()
        }
    );

    telemetry_api::serve(service_config).await
}
