use crate::ui;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use telemetry_source::load_dataset;

pub async fn execute(dataset_file: PathBuf) -> Result<()> {
    println!("{}", ui::banner("Available Regions"));

    let dataset = load_dataset(&dataset_file).await?;

    println!("\nTotal regions: {}\n", dataset.len());

    for (region, samples) in dataset.iter() {
        println!("{}", ui::region_line(region, samples.len()));
    }

    println!(
        "\n{}",
        "Use 'telemetry query --region <name>' to compute metrics".yellow()
    );

    Ok(())
}
