use std::path::{Path, PathBuf};
use std::time::Duration;

use leadscope_analyzer::{analyze, analyze_unreachable};
use leadscope_core::{
    AppConfig, Business, Environment, FetchFailure, FetchedPage, PriorityTier,
};
use leadscope_leads::{read_leads, BatchReport, FollowUpTask, Lead};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

#[test]
fn parses_analyze_command() {
    let cli = Cli::try_parse_from(["leadscope", "analyze", "tienda.mx"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Analyze { ref url, json: false } if url == "tienda.mx"
    ));
}

#[test]
fn parses_analyze_json_flag() {
    let cli = Cli::try_parse_from(["leadscope", "analyze", "https://tienda.mx", "--json"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Analyze { json: true, .. }));
}

#[test]
fn analyze_requires_url() {
    assert!(Cli::try_parse_from(["leadscope", "analyze"]).is_err());
}

#[test]
fn batch_defaults_to_config_paths() {
    let cli = Cli::try_parse_from(["leadscope", "batch"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Batch {
            input: None,
            output: None,
            dry_run: false
        }
    ));
}

#[test]
fn batch_with_paths_and_dry_run() {
    let cli = Cli::try_parse_from([
        "leadscope",
        "batch",
        "--input",
        "config/mty.yaml",
        "--output",
        "out",
        "--dry-run",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Batch {
            input: Some(ref i),
            output: Some(ref o),
            dry_run: true
        } if i == Path::new("config/mty.yaml") && o == Path::new("out")
    ));
}

#[test]
fn parses_report_command() {
    let cli = Cli::try_parse_from(["leadscope", "report", "--input", "leads.csv"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Report { input: Some(ref p) } if p == Path::new("leads.csv")
    ));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["leadscope"]).is_err());
}

fn test_config(dir: &Path) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "debug".to_string(),
        businesses_path: dir.join("businesses.yaml"),
        leads_path: dir.join("leads.csv"),
        output_dir: dir.join("reports"),
        city: "Monterrey".to_string(),
        fetch_timeout_secs: 5,
        fetch_user_agent: "leadscope-test/0.1".to_string(),
        max_concurrent_fetches: 2,
        task_threshold: PriorityTier::High,
        digest_recipient: Some("ventas@example.com".to_string()),
    }
}

fn business(name: &str, website: &str) -> Business {
    Business {
        name: name.to_string(),
        category: "retail".to_string(),
        phone: "81 5555 0000".to_string(),
        website: website.to_string(),
        address: None,
        email: None,
        rating: None,
        review_count: None,
    }
}

fn sample_leads() -> Vec<Lead> {
    let modern = FetchedPage {
        url: "https://moderna.mx".to_string(),
        http_status: 200,
        body: r#"<!DOCTYPE html><meta name="viewport" content="width=device-width"><link href="tailwind.css">"#
            .to_string(),
    };
    let gone = FetchFailure {
        url: "https://gone.mx".to_string(),
        reason: "timed out".to_string(),
    };
    vec![
        Lead::new(business("Tienda Moderna", "moderna.mx"), analyze(&Ok(modern))),
        Lead::new(business("Ferretería Gone", "gone.mx"), analyze_unreachable(&gone)),
    ]
}

#[test]
fn write_outputs_produces_every_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let leads = sample_leads();
    let report = BatchReport::from_leads(&leads);
    let out: PathBuf = dir.path().join("reports");

    let outputs = batch::write_outputs(&out, &config, &leads, &report).unwrap();

    assert_eq!(outputs.proposals, 2);
    assert_eq!(outputs.alerts, 1);
    assert_eq!(outputs.tasks, 1);
    assert_eq!(outputs.failed, 0);
    assert!(out.join("report.md").exists());
    assert!(out.join("proposals/tienda-moderna.md").exists());
    assert!(out.join("proposals/ferretera-gone.md").exists());
    assert!(out.join("alerts/ferretera-gone.txt").exists());

    let tasks: Vec<FollowUpTask> =
        serde_json::from_str(&std::fs::read_to_string(out.join("tasks.json")).unwrap()).unwrap();
    assert_eq!(tasks[0].title, "Contact Ferretería Gone - URGENT lead");

    let digest = std::fs::read_to_string(out.join("digest.txt")).unwrap();
    assert!(digest.starts_with("To: ventas@example.com\n"));
    assert!(digest.contains("Subject: Lead report - Monterrey: 2 leads, 1 urgent"));
}

#[test]
fn summary_shows_score_and_problems() {
    let leads = sample_leads();
    let text = analyze::format_summary(&leads[1].analysis);
    assert!(text.contains("unreachable (timed out)"));
    assert!(text.contains("1/10"));
    assert!(text.contains("  - Site unreachable: timed out"));
}

#[test]
fn same_name_leads_get_distinct_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let gone = FetchFailure {
        url: "https://gone.mx".to_string(),
        reason: "timed out".to_string(),
    };
    let leads = vec![
        Lead::new(
            business("Foster's Hollywood", "fosters-centro.mx"),
            analyze_unreachable(&gone),
        ),
        Lead::new(
            business("Foster's Hollywood", "fosters-valle.mx"),
            analyze_unreachable(&gone),
        ),
    ];
    let report = BatchReport::from_leads(&leads);
    let out = dir.path().join("reports");

    let outputs = batch::write_outputs(&out, &config, &leads, &report).unwrap();

    assert_eq!(outputs.proposals, 2);
    assert_eq!(outputs.alerts, 2);
    assert_eq!(std::fs::read_dir(out.join("proposals")).unwrap().count(), 2);
    assert_eq!(std::fs::read_dir(out.join("alerts")).unwrap().count(), 2);
    let second = std::fs::read_to_string(out.join("alerts/fosters-hollywood-2.txt")).unwrap();
    assert!(second.contains("Website: fosters-valle.mx"));
}

#[tokio::test]
async fn batch_stores_leads_in_input_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html>slow</html>")
                .set_delay(Duration::from_millis(800)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>fast</html>"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let yaml = format!(
        r#"businesses:
  - name: First
    category: retail
    phone: "1"
    website: "{uri}/slow"
  - name: Second
    category: retail
    phone: "2"
    website: "{uri}/fast"
"#,
        uri = server.uri()
    );
    std::fs::write(&config.businesses_path, yaml).unwrap();

    batch::run_batch(&config, None, None, false).await.unwrap();

    let rows = read_leads(&config.leads_path).unwrap();
    let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);
}
