//! Batch analysis of the businesses file.
//!
//! Pages are fetched concurrently (bounded by `max_concurrent_fetches`) and
//! analyzed in input order; the [`LeadCollection`] has a single writer, this
//! loop.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use leadscope_analyzer::analyze;
use leadscope_core::{AppConfig, PriorityTier};
use leadscope_leads::{
    append_leads, follow_up_tasks, render_proposal, render_report, write_tasks_json,
    BatchReport, EmailDigest, Lead, LeadCollection,
};

use crate::analyze::build_fetcher;

/// Files produced by one batch run.
#[derive(Debug, Default)]
pub(crate) struct BatchOutputs {
    pub proposals: usize,
    pub alerts: usize,
    pub tasks: usize,
    pub failed: usize,
}

/// Run a full batch: load, fetch, analyze, store and report.
///
/// # Errors
///
/// Returns an error if the businesses file is invalid, the HTTP client
/// cannot be built, the lead store cannot be appended, or the output
/// directory cannot be created. Individual proposal write failures are
/// logged and counted instead.
pub(crate) async fn run_batch(
    config: &AppConfig,
    input: Option<&Path>,
    output: Option<&Path>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let input = input.map_or_else(|| config.businesses_path.clone(), Path::to_path_buf);
    let output_dir = output.map_or_else(|| config.output_dir.clone(), Path::to_path_buf);

    let file = leadscope_core::load_businesses(&input)
        .with_context(|| format!("failed to load businesses from {}", input.display()))?;
    let businesses = file.businesses;

    if businesses.is_empty() {
        println!("no businesses found in {}", input.display());
        return Ok(());
    }

    if dry_run {
        println!("{:<32}{:<20}WEBSITE", "NAME", "CATEGORY");
        for b in &businesses {
            println!("{:<32}{:<20}{}", b.name, b.category, b.website);
        }
        println!(
            "dry run: {} businesses would be analyzed into {}",
            businesses.len(),
            output_dir.display()
        );
        return Ok(());
    }

    let fetcher = build_fetcher(config)?;
    let max_concurrent = config.max_concurrent_fetches.max(1);
    let business_count = businesses.len();
    tracing::info!(businesses = business_count, max_concurrent, "starting batch");

    let mut fetched = stream::iter(businesses)
        .map(|business| {
            let fetcher = &fetcher;
            async move {
                let fetch = fetcher.fetch(&business.website).await;
                (business, fetch)
            }
        })
        .buffered(max_concurrent);

    let mut leads = LeadCollection::new();
    while let Some((business, fetch)) = fetched.next().await {
        let analysis = analyze(&fetch);
        leads.add(business, analysis);
    }

    let snapshot = leads.snapshot();
    let report = BatchReport::from_leads(&snapshot);

    let appended = append_leads(&config.leads_path, &snapshot).with_context(|| {
        format!(
            "failed to append leads to {}",
            config.leads_path.display()
        )
    })?;

    let outputs = write_outputs(&output_dir, config, &snapshot, &report)?;
    if outputs.failed > 0 {
        tracing::warn!(
            failed = outputs.failed,
            total = business_count,
            "some lead files could not be written"
        );
    }

    print_summary(&snapshot);
    println!();
    println!(
        "{} leads analyzed ({} stored, {} duplicates skipped), average score {:.1}/10",
        report.total, appended.written, appended.skipped, report.average_score
    );
    println!(
        "{} URGENT, {} HIGH, {} degraded; {} proposals, {} alerts, {} tasks written to {}",
        report.tier_counts.urgent,
        report.tier_counts.high,
        report.degraded_count(),
        outputs.proposals,
        outputs.alerts,
        outputs.tasks,
        output_dir.display()
    );

    Ok(())
}

fn lead_file_stem(lead: &Lead) -> String {
    let slug = lead.business.slug();
    if slug.is_empty() {
        lead.id.to_string()
    } else {
        slug
    }
}

/// File stems for `leads`, in order. A stem already taken by an earlier lead
/// gets a numeric suffix (`-2`, `-3`, ...).
fn unique_file_stems(leads: &[Lead]) -> Vec<String> {
    let mut used = HashSet::new();
    leads
        .iter()
        .map(|lead| {
            let base = lead_file_stem(lead);
            let mut stem = base.clone();
            let mut n = 2;
            while !used.insert(stem.clone()) {
                stem = format!("{base}-{n}");
                n += 1;
            }
            stem
        })
        .collect()
}

fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Write `report.md`, `proposals/<slug>.md`, `alerts/<slug>.txt` (URGENT
/// leads), `tasks.json` and `digest.txt` into `dir`.
pub(crate) fn write_outputs(
    dir: &Path,
    config: &AppConfig,
    leads: &[Lead],
    report: &BatchReport,
) -> anyhow::Result<BatchOutputs> {
    let proposals_dir: PathBuf = dir.join("proposals");
    let alerts_dir: PathBuf = dir.join("alerts");
    for d in [&proposals_dir, &alerts_dir] {
        std::fs::create_dir_all(d)
            .with_context(|| format!("failed to create output directory {}", d.display()))?;
    }

    let mut outputs = BatchOutputs::default();

    for (lead, stem) in leads.iter().zip(unique_file_stems(leads)) {
        let proposal_path = proposals_dir.join(format!("{stem}.md"));
        match write_file(&proposal_path, &render_proposal(lead)) {
            Ok(()) => outputs.proposals += 1,
            Err(e) => {
                tracing::warn!(name = %lead.business.name, error = %e, "skipping proposal");
                outputs.failed += 1;
            }
        }

        if lead.analysis.priority_tier == PriorityTier::Urgent {
            let alert = EmailDigest::for_lead(lead).with_recipient(config.digest_recipient.clone());
            let alert_path = alerts_dir.join(format!("{stem}.txt"));
            match write_file(&alert_path, &alert.to_string()) {
                Ok(()) => outputs.alerts += 1,
                Err(e) => {
                    tracing::warn!(name = %lead.business.name, error = %e, "skipping alert");
                    outputs.failed += 1;
                }
            }
        }
    }

    write_file(
        &dir.join("report.md"),
        &render_report(report, &config.city, Utc::now()),
    )?;

    let tasks = follow_up_tasks(leads, config.task_threshold);
    write_tasks_json(&dir.join("tasks.json"), &tasks).context("failed to write tasks.json")?;
    outputs.tasks = tasks.len();

    let digest = EmailDigest::from_report(report, &config.city)
        .with_recipient(config.digest_recipient.clone());
    write_file(&dir.join("digest.txt"), &digest.to_string())?;

    Ok(outputs)
}

fn print_summary(leads: &[Lead]) {
    println!("{:<32}{:<8}{:<10}WEBSITE", "NAME", "SCORE", "PRIORITY");
    for lead in leads {
        let score = format!("{}/10", lead.analysis.quality_score);
        println!(
            "{:<32}{:<8}{:<10}{}",
            lead.business.name,
            score,
            lead.analysis.priority_tier.as_str(),
            lead.business.website
        );
    }
}
