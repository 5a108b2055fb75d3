use crate::engine::{ScanControl, ScanEngine, StdRandom};
use crate::logging::{self, LogTarget};
use crate::model::{AppConfig, AppEvent};
use crate::orchestrator::{self, ProcessedScan};
use crate::profile::{ScanRecord, UserProfile};
use crate::recipes::{self, RecipeVariant};
use crate::schema::NewRecipe;
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

/// Output line routing for stdout/stderr writer.
enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// Spawn a blocking writer for stdout/stderr to avoid blocking async tasks.
fn spawn_output_writer() -> (
    mpsc::UnboundedSender<OutputLine>,
    tokio::task::JoinHandle<()>,
) {
    let (tx, mut rx) = mpsc::unbounded_channel::<OutputLine>();
    let handle = tokio::task::spawn_blocking(move || {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        let mut out = std::io::LineWriter::new(stdout.lock());
        let mut err = std::io::LineWriter::new(stderr.lock());

        while let Some(line) = rx.blocking_recv() {
            match line {
                OutputLine::Stdout(msg) => {
                    let _ = writeln!(out, "{}", msg);
                }
                OutputLine::Stderr(msg) => {
                    let _ = writeln!(err, "{}", msg);
                }
            }
        }

        let _ = out.flush();
        let _ = err.flush();
    });
    (tx, handle)
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "pantrypal",
    version,
    about = "Scan your fridge, cook something amazing (terminal demo)"
)]
pub struct Cli {
    /// Run one scan, print a text summary and exit (no TUI)
    #[arg(long)]
    pub text: bool,

    /// Run one scan, print a JSON report and exit (no TUI)
    #[arg(long, conflicts_with = "text")]
    pub json: bool,

    /// Time between scan progress ticks
    #[arg(long, default_value = "200ms")]
    pub scan_interval: humantime::Duration,

    /// Progress added per tick, in percent
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub scan_step: u8,

    /// Simulated time to generate a different recipe
    #[arg(long, default_value = "2s")]
    pub regenerate_delay: humantime::Duration,

    /// Seed the ingredient detector for reproducible scans
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for recipe exports (defaults to the current directory)
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset (e.g. info, debug, pantrypal=trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Log file for the interactive UI
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn run(args: Cli) -> Result<()> {
    let headless = args.text || args.json;
    let target = if headless {
        LogTarget::Stderr
    } else {
        LogTarget::File(args.log_file.clone().unwrap_or_else(logging::default_log_file))
    };
    logging::init(&args.log_level, &target)?;

    let cfg = build_config(&args);
    tracing::debug!(config = ?cfg, "starting");

    if !headless {
        #[cfg(feature = "tui")]
        {
            return crate::tui::run(cfg).await;
        }
        #[cfg(not(feature = "tui"))]
        {
            // Fallback when built without TUI support.
            return run_text(cfg).await;
        }
    }

    if args.json {
        return run_json(cfg).await;
    }

    run_text(cfg).await
}

/// Build an `AppConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> AppConfig {
    AppConfig {
        scan_interval: Duration::from(args.scan_interval),
        scan_step: args.scan_step,
        regenerate_delay: Duration::from(args.regenerate_delay),
        seed: args.seed,
        export_dir: args.export_dir.clone(),
        ..AppConfig::default()
    }
}

/// Run a single scan to completion, forwarding progress to `progress`.
async fn scan_once(
    cfg: &AppConfig,
    progress: Option<&mpsc::UnboundedSender<OutputLine>>,
) -> Result<Vec<String>> {
    let (evt_tx, mut evt_rx) = mpsc::unbounded_channel::<AppEvent>();
    let (_ctrl_tx, ctrl_rx) = mpsc::unbounded_channel::<ScanControl>();

    let engine = ScanEngine::new(cfg, Box::new(StdRandom::from_seed_option(cfg.seed)));
    let handle = tokio::spawn(async move { engine.run(evt_tx, ctrl_rx).await });

    while let Some(ev) = evt_rx.recv().await {
        if let (Some(tx), AppEvent::ScanProgress { percent }) = (progress, &ev) {
            let _ = tx.send(OutputLine::Stderr(format!("Scanning ingredients... {percent}%")));
        }
    }

    let detected = handle
        .await
        .context("scan task failed")?
        .context("scan failed")?;
    Ok(detected)
}

/// Profile, first recipe variant and processed scan for headless modes.
fn process(ingredients: &[String]) -> (UserProfile, RecipeVariant, ProcessedScan) {
    let profile = UserProfile::demo();
    let recipe = recipes::catalog(&profile).swap_remove(0);
    let processed = orchestrator::process_scan_completion(
        &profile,
        &recipe,
        ingredients,
        orchestrator::now_local(),
    );
    (profile, recipe, processed)
}

async fn run_text(cfg: AppConfig) -> Result<()> {
    let (out_tx, out_handle) = spawn_output_writer();
    let ingredients = scan_once(&cfg, Some(&out_tx)).await?;
    let (_, recipe, processed) = process(&ingredients);

    let summary = crate::text_summary::build_text_summary(&processed, &recipe);
    for line in summary.lines {
        let _ = out_tx.send(OutputLine::Stdout(line));
    }
    drop(out_tx);
    let _ = out_handle.await;
    Ok(())
}

/// JSON document printed by `--json`.
#[derive(Debug, Serialize)]
struct ScanReport {
    config: AppConfig,
    scan: ScanRecord,
    favorites: Vec<String>,
    recipe: RecipeVariant,
    suggestions: Vec<String>,
    last_time: Option<String>,
    new_recipe: NewRecipe,
}

async fn scan_report(cfg: AppConfig) -> Result<ScanReport> {
    let ingredients = scan_once(&cfg, None).await?;
    let (profile, recipe, processed) = process(&ingredients);

    Ok(ScanReport {
        new_recipe: NewRecipe::from_variant(&recipe, &profile.name.to_lowercase()),
        config: cfg,
        scan: processed.record,
        favorites: processed.favorites,
        recipe,
        suggestions: processed.suggestions,
        last_time: processed.last_time,
    })
}

async fn run_json(cfg: AppConfig) -> Result<()> {
    let report = scan_report(cfg).await?;
    let out = serde_json::to_string_pretty(&report).context("serialize report")?;
    println!("{out}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_onto_config() {
        let args = Cli::parse_from(["pantrypal"]);
        let cfg = build_config(&args);
        assert_eq!(cfg.scan_interval, Duration::from_millis(200));
        assert_eq!(cfg.regenerate_delay, Duration::from_secs(2));
        assert_eq!(cfg.scan_step, 10);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Cli::parse_from([
            "pantrypal",
            "--text",
            "--scan-interval",
            "50ms",
            "--scan-step",
            "25",
            "--seed",
            "42",
        ]);
        assert!(args.text);
        let cfg = build_config(&args);
        assert_eq!(cfg.scan_interval, Duration::from_millis(50));
        assert_eq!(cfg.scan_step, 25);
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn text_and_json_conflict() {
        assert!(Cli::try_parse_from(["pantrypal", "--text", "--json"]).is_err());
    }

    #[test]
    fn zero_step_is_rejected() {
        assert!(Cli::try_parse_from(["pantrypal", "--scan-step", "0"]).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn json_report_carries_the_insert_shape() {
        let cfg = AppConfig {
            seed: Some(21),
            ..AppConfig::default()
        };
        let report = scan_report(cfg).await.unwrap();
        let v = serde_json::to_value(&report).unwrap();

        assert_eq!(v["new_recipe"]["title"], "Mediterranean Veggie Omelette");
        assert_eq!(v["new_recipe"]["user_id"], "sarah");
        assert_eq!(v["new_recipe"].as_object().unwrap().len(), 2);
        assert_eq!(v["recipe"]["title"], v["new_recipe"]["title"]);
        assert_eq!(v["config"]["scan_interval"], "200ms");

        let scanned = v["scan"]["ingredients"].as_array().unwrap();
        assert!((3..=6).contains(&scanned.len()));
        for fav in v["favorites"].as_array().unwrap() {
            assert!(scanned.contains(fav));
        }
        assert!(v["suggestions"].as_array().unwrap().len() <= 3);
    }

    #[tokio::test(start_paused = true)]
    async fn seeded_scans_are_reproducible() {
        let cfg = AppConfig {
            seed: Some(5),
            ..AppConfig::default()
        };
        let a = scan_once(&cfg, None).await.unwrap();
        let b = scan_once(&cfg, None).await.unwrap();
        assert_eq!(a, b);
    }
}
