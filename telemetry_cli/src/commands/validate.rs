use crate::ui;
use anyhow::Result;
use std::path::PathBuf;
use telemetry_source::{load_dataset, parse_dataset_from_str, DatasetFormat};

pub async fn execute(dataset_file: PathBuf, format: Option<String>) -> Result<()> {
    println!("{}", ui::banner("Validating Dataset"));
    println!("File: {}", dataset_file.display());

    let result = match format {
        Some(name) => {
            let format = DatasetFormat::from_name(&name)?;
            let contents = tokio::fs::read_to_string(&dataset_file).await?;
            parse_dataset_from_str(&contents, format)
        }
        None => load_dataset(&dataset_file).await,
    };

    match result {
        Ok(dataset) => {
            println!("\n{}", ui::verdict(true, "Dataset is valid!"));
            println!("\nDataset Details:");
            println!("  Regions: {}", dataset.len());
            println!("  Samples: {}", dataset.total_samples());

            if dataset.is_empty() {
                println!("\n{}", ui::caution("Dataset has no regions"));
            }

            println!();
            for (region, samples) in dataset.iter() {
                println!("{}", ui::region_line(region, samples.len()));
            }

            Ok(())
        }
        Err(e) => {
            println!("\n{}", ui::verdict(false, "Dataset is invalid!"));
            println!("\nError: {}", e);
            Err(e.into())
        }
    }
}
