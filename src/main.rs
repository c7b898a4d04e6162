use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use u_match::input::InstanceLoader;
use u_match::models::Assignment;
use u_match::scheduler::{GreedyMatcher, MatchConfig, MatchKpi, DEFAULT_HORIZON_DAYS};

#[derive(Parser)]
#[command(name = "u-match")]
#[command(version)]
#[command(
    about = "Match service providers to day-windowed service requests",
    long_about = None
)]
struct Cli {
    /// Input file with service/request declarations
    file: PathBuf,
    /// Number of schedulable days
    #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS, value_parser = clap::value_parser!(u32).range(1..))]
    horizon: u32,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Also list each assignment and unsolved request
    #[arg(short, long)]
    details: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct InstanceReport {
    instance: usize,
    solved: usize,
    fulfillment_rate: f64,
    assignments: Vec<Assignment>,
    unsolved: Vec<String>,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let instances = InstanceLoader::new()
        .horizon_days(cli.horizon)
        .from_path(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;

    let config = MatchConfig::new(cli.horizon);
    let matcher = GreedyMatcher::new(config);

    let reports: Vec<InstanceReport> = instances
        .iter()
        .enumerate()
        .map(|(idx, registry)| {
            let result = matcher.run(registry);
            let kpi = MatchKpi::calculate(registry, &result, config.horizon_days);
            tracing::info!(
                instance = idx + 1,
                solved = kpi.solved,
                unsolved = kpi.unsolved,
                unservable = kpi.unservable.len(),
                "instance matched"
            );
            InstanceReport {
                instance: idx + 1,
                solved: kpi.solved,
                fulfillment_rate: kpi.fulfillment_rate,
                assignments: result.assignments(),
                unsolved: result.unsolved,
            }
        })
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => write_text(&mut out, &reports, cli.details)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &reports).context("failed to write JSON")?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_text<W: Write>(out: &mut W, reports: &[InstanceReport], details: bool) -> Result<()> {
    for report in reports {
        writeln!(out, "{}", report.solved)?;
        if details {
            for a in &report.assignments {
                writeln!(out, "  {} {} {}", a.request_id, a.provider_id, a.day)?;
            }
            for name in &report.unsolved {
                writeln!(out, "  {name} -")?;
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    enable_tracing();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
