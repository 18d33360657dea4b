use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use archbench_core::config::Config;
use archbench_core::discovery;
use archbench_core::dora::DoraMetrics;
use archbench_core::maintainability;
use archbench_core::types::AnalysisReport;

use archbench_report::{json, markdown, text};

#[derive(Parser)]
#[command(name = "archbench")]
#[command(about = "Compare ADAPT and Layered architecture benchmark results")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a benchmark run and write the timestamped analysis report
    Performance {
        /// Results root containing one subdirectory per timestamp
        results_root: PathBuf,
        /// Analyze a specific timestamp instead of the most recent one
        #[arg(short, long)]
        timestamp: Option<String>,
        /// Config file path (defaults to .archbench.toml in the results root)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Stdout rendering of the report
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },
    /// Compute maintainability metrics for both architectures
    Maintainability {
        /// Config file path (defaults to .archbench.toml in the working directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output file for the metrics report
        #[arg(short, long, default_value = "maintainability_metrics.json")]
        output: PathBuf,
        /// Stdout rendering of the report
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },
    /// Create a default .archbench.toml configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Performance {
            results_root,
            timestamp,
            config,
            format,
            compact,
        } => cmd_performance(&results_root, timestamp, config.as_deref(), format, compact),
        Commands::Maintainability {
            config,
            output,
            format,
            compact,
        } => cmd_maintainability(config.as_deref(), &output, format, compact),
        Commands::Init { force } => cmd_init(force),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(2);
    }
}

fn cmd_performance(
    results_root: &Path,
    timestamp: Option<String>,
    config_path: Option<&Path>,
    format: Format,
    compact: bool,
) -> Result<()> {
    let config = load_config(results_root, config_path)?;

    let timestamp = match timestamp {
        Some(ts) => ts,
        None => match discovery::latest_timestamp(results_root) {
            Some(ts) => ts,
            None => {
                println!("No benchmark results found!");
                return Ok(());
            }
        },
    };

    let run_dir = results_root.join(&timestamp);
    if !run_dir.is_dir() {
        println!("Results directory not found: {}", run_dir.display());
        return Ok(());
    }

    eprintln!("Analyzing results from: {timestamp}");

    let performance = discovery::collect_report(results_root, &timestamp, &config.performance)?;
    let report = AnalysisReport {
        performance,
        dora_metrics: DoraMetrics::default(),
    };

    let output_file = results_root.join(format!("{timestamp}_analysis.json"));
    fs::write(&output_file, json::format_report(&report, false))
        .with_context(|| format!("failed to write '{}'", output_file.display()))?;

    match format {
        Format::Text => print!("{}", text::format_report(&report)),
        Format::Json => println!("{}", json::format_report(&report, compact)),
        Format::Markdown => print!("{}", markdown::format_report(&report)),
    }

    eprintln!("Report saved to: {}", output_file.display());
    Ok(())
}

fn cmd_maintainability(
    config_path: Option<&Path>,
    output: &Path,
    format: Format,
    compact: bool,
) -> Result<()> {
    let config = load_config(Path::new("."), config_path)?;
    let report = maintainability::report(&config.profiles)?;

    fs::write(output, json::format_maintainability(&report, false))
        .with_context(|| format!("failed to write '{}'", output.display()))?;

    match format {
        Format::Text => print!("{}", text::format_maintainability(&report)),
        Format::Json => println!("{}", json::format_maintainability(&report, compact)),
        Format::Markdown => print!("{}", markdown::format_maintainability(&report)),
    }

    eprintln!("Metrics saved to: {}", output.display());
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let target = PathBuf::from(".archbench.toml");
    if target.exists() && !force {
        anyhow::bail!(".archbench.toml already exists. Use --force to overwrite.");
    }
    fs::write(&target, Config::default_toml())?;
    println!("Created .archbench.toml with default configuration.");
    Ok(())
}

fn load_config(base_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(p) => Config::load(p),
        None => Ok(Config::load_or_default(base_dir)),
    }
}
