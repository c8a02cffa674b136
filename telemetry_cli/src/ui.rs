//! Terminal rendering shared by the `telemetry` subcommands.
use colored::Colorize;

pub fn banner(title: &str) -> String {
    format!("=== {} ===", title).bold().cyan().to_string()
}

/// One-line pass/fail marker, e.g. after validating a dataset.
pub fn verdict(ok: bool, text: &str) -> String {
    if ok {
        format!("{} {}", "✓".green().bold(), text.green())
    } else {
        format!("{} {}", "✗".red().bold(), text.red())
    }
}

pub fn caution(text: &str) -> String {
    format!("⚠ {}", text).yellow().to_string()
}

/// Bullet line for a region listing; regions without samples are flagged.
pub fn region_line(region: &str, samples: usize) -> String {
    match samples {
        0 => format!("  {} {} ({})", "•".green(), region, "no samples".yellow()),
        1 => format!("  {} {} (1 sample)", "•".green(), region),
        n => format!("  {} {} ({} samples)", "•".green(), region, n),
    }
}
