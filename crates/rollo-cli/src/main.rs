//! Rollo - manifest pin reconciliation tool.
//!
//! Compares an upstream dependency manifest against a downstream manifest
//! that pins a subset of the upstream's revisions, and prints the shell
//! command that would roll a stale pin.

mod report;

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use rollo_core::{roll_all, roll_entry, RollOutcome};
use std::path::{Path, PathBuf};

/// Sentinel entry name meaning "every known entry".
const ALL: &str = "ALL";

#[derive(Parser, Debug)]
#[command(name = "rollo")]
#[command(about = "Compare manifest pins and suggest roll commands", long_about = None)]
struct Cli {
    /// Path to the upstream manifest file
    upstream_manifest: PathBuf,

    /// Path to the downstream manifest file
    downstream_manifest: PathBuf,

    /// Manifest entry to roll, or "ALL" for every known entry
    entry: String,

    /// Output format
    #[arg(short, long = "output", value_enum, default_value = "human")]
    format: OutputFormat,

    /// Verbose output (-v info, -vv debug)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(report) => match cli.format {
            OutputFormat::Human => report::print_human(&report),
            OutputFormat::Json => report::print_json(&report),
        },
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

// Diagnostics go to stderr so stdout stays pipeable.
fn init_tracing(verbose: u8) {
    let directive = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the roll and build the printable report. All expected failures
/// come back as single-line errors.
fn execute(cli: &Cli) -> Result<report::RollReport> {
    let upstream_path = canonical(&cli.upstream_manifest)?;
    let downstream_path = canonical(&cli.downstream_manifest)?;
    if upstream_path == downstream_path {
        bail!("Manifest files must be different.");
    }

    let upstream = load_manifest(&cli.upstream_manifest)?;
    let downstream = load_manifest(&cli.downstream_manifest)?;

    if cli.entry == ALL {
        let actions = roll_all(&upstream, &downstream)?;
        let up_to_date = actions.is_empty();
        return Ok(report::RollReport {
            entry: ALL.to_string(),
            up_to_date,
            actions,
        });
    }

    let report = match roll_entry(&upstream, &downstream, &cli.entry)? {
        RollOutcome::UpToDate => report::RollReport {
            entry: cli.entry.clone(),
            up_to_date: true,
            actions: vec![],
        },
        RollOutcome::Action(command) => report::RollReport {
            entry: cli.entry.clone(),
            up_to_date: false,
            actions: vec![command],
        },
    };
    Ok(report)
}

fn canonical(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .map_err(|e| anyhow!("Cannot resolve manifest path {}: {}", path.display(), e))
}

fn load_manifest(path: &Path) -> Result<rollo_manifest::Manifest> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Cannot read manifest {}: {}", path.display(), e))?;
    rollo_manifest::parse(&text)
        .map_err(|e| anyhow!("Cannot parse manifest {}: {}", path.display(), e))
}
