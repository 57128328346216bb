//! Single-site analysis.

use anyhow::Context;
use leadscope_analyzer::{analyze, Analysis, FetchStatus};
use leadscope_core::AppConfig;
use leadscope_fetch::PageFetcher;

pub(crate) fn build_fetcher(config: &AppConfig) -> anyhow::Result<PageFetcher> {
    PageFetcher::new(config.fetch_timeout_secs, &config.fetch_user_agent)
        .context("failed to build page fetcher")
}

/// Fetch and analyze one website, printing a summary or the JSON record.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or JSON
/// serialization fails. An unreachable site is not an error.
pub(crate) async fn run_analyze(config: &AppConfig, url: &str, json: bool) -> anyhow::Result<()> {
    let fetcher = build_fetcher(config)?;
    let fetch = fetcher.fetch(url).await;
    let analysis = analyze(&fetch);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", format_summary(&analysis));
    }
    Ok(())
}

pub(crate) fn format_summary(analysis: &Analysis) -> String {
    let status = match &analysis.fetch_status {
        FetchStatus::Accessible { http_status } => format!("HTTP {http_status}"),
        FetchStatus::Inaccessible { error } => format!("unreachable ({error})"),
    };
    let techs: Vec<&str> = analysis
        .technologies_detected
        .iter()
        .map(|s| s.as_str())
        .collect();

    let mut lines = vec![
        format!("{:<14}{}", "URL", analysis.source_url),
        format!("{:<14}{status}", "STATUS"),
        format!("{:<14}{}/10", "SCORE", analysis.quality_score),
        format!("{:<14}{}", "PRIORITY", analysis.priority_tier),
    ];
    if !techs.is_empty() {
        lines.push(format!("{:<14}{}", "TECHNOLOGIES", techs.join(", ")));
    }
    lines.push(String::new());
    lines.push("PROBLEMS".to_string());
    if analysis.problems.is_empty() {
        lines.push("  none".to_string());
    }
    lines.extend(analysis.problems.iter().map(|p| format!("  - {p}")));
    lines.push(String::new());
    lines.push("OPPORTUNITIES".to_string());
    lines.extend(analysis.opportunities.iter().map(|o| format!("  - {o}")));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
