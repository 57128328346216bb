use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use leadscope_core::AppConfig;
use leadscope_leads::{read_leads, render_report, BatchReport};

/// Print the Markdown batch report for the lead store.
///
/// # Errors
///
/// Returns an error if the lead store cannot be read.
pub(crate) fn run_report(config: &AppConfig, input: Option<&Path>) -> anyhow::Result<()> {
    let path = input.unwrap_or(config.leads_path.as_path());
    if !path.exists() {
        println!(
            "no lead store at {}; run `leadscope batch` first",
            path.display()
        );
        return Ok(());
    }

    let rows =
        read_leads(path).with_context(|| format!("failed to read leads from {}", path.display()))?;
    let report = BatchReport::from_rows(&rows);
    print!("{}", render_report(&report, &config.city, Utc::now()));
    Ok(())
}
