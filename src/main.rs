use clap::Parser;
use hwreport::config::Config;
use hwreport::summary::{self, SummaryWriter};
use hwreport::{probe, roster, summarize_report};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Collect msinfo32 hardware reports and roll them up into per-run CSV and
/// text summaries.
#[derive(Parser, Debug)]
#[command(name = "hwreport")]
#[command(version)]
struct Cli {
    /// Only collect the local machine's report
    #[arg(short = 'l', long)]
    localhost_only: bool,
    /// TOML config file; defaults apply when it does not exist
    #[arg(long, default_value = "hwreport.toml")]
    config: PathBuf,
    /// Override the roster file from the config
    #[arg(long)]
    targets: Option<PathBuf>,
    /// Override the output directory from the config
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let mut cfg = match Config::load(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            error!(error = %err, "failed to load config");
            return ExitCode::FAILURE;
        }
    };
    if let Some(targets) = cli.targets {
        cfg.targets_file = targets;
    }
    if let Some(output_dir) = cli.output_dir {
        cfg.output_dir = output_dir;
    }

    match run(&cfg, cli.localhost_only) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "run failed");
            ExitCode::FAILURE
        }
    }
}

fn run(cfg: &Config, localhost_only: bool) -> hwreport::Result<()> {
    fs::create_dir_all(&cfg.output_dir)?;
    let writer = SummaryWriter::new(cfg.summary_dir(), summary::run_id());

    if localhost_only {
        let name = probe::localhost_name()?;
        return collect_one(cfg, &writer, &name);
    }

    if !cfg.targets_file.exists() {
        roster::seed(&cfg.targets_file)?;
        warn!(path = %cfg.targets_file.display(), "roster file not found, created a template");
        info!("list one computer name or address per line, then rerun");
        return Ok(());
    }

    let targets = roster::load(&cfg.targets_file)?;
    let mut done = Vec::new();
    let mut failed = Vec::new();
    for name in &targets {
        if !probe::is_reachable(name, cfg.ping.echo_count, cfg.ping.timeout_ms) {
            warn!(computer = %name, "host unreachable, skipping");
            failed.push(name.as_str());
            continue;
        }
        match collect_one(cfg, &writer, name) {
            Ok(()) => done.push(name.as_str()),
            Err(err) => {
                error!(computer = %name, error = %err, "collection failed");
                failed.push(name.as_str());
            }
        }
    }

    if !done.is_empty() {
        info!("collected: {}", done.join(", "));
    }
    if !failed.is_empty() {
        warn!("unreachable or failed: {}", failed.join(", "));
    }
    Ok(())
}

fn collect_one(cfg: &Config, writer: &SummaryWriter, name: &str) -> hwreport::Result<()> {
    info!(computer = %name, "generating report");
    let report_path = cfg.report_path(name);
    probe::create_report(name, &report_path)?;
    info!(computer = %name, "report ready, parsing");
    summarize_report(&report_path, &cfg.hardware_dir(), writer)?;
    info!(computer = %name, "added to summaries");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
