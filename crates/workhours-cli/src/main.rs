use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use workhours_engine::{aggregate, parse_range, ReportConfig, ReportRequest};

mod output;

#[derive(Debug, Parser)]
#[command(name = "workhours", version, about = "Turn dated time ranges into a work-hours report")]
struct Cli {
    /// Default IANA timezone for requests that name none (or an unknown one)
    #[arg(long, global = true, env = "WORKHOURS_TIMEZONE", default_value = "UTC")]
    timezone: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build a report from a JSON request
    Report {
        /// Request file (reads stdin if omitted or "-")
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Parse a single time range
    Parse {
        /// Calendar date as YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Range text, e.g. "3:52 pm - 1:11 am"
        #[arg(long)]
        range: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("WORKHOURS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            input,
            format,
            pretty,
        } => {
            let config = ReportConfig::from_timezone_name(&cli.timezone)
                .context("invalid default timezone")?;
            let raw = read_input(input.as_ref())?;
            let request: ReportRequest =
                serde_json::from_str(&raw).context("failed to parse report request")?;
            let report = aggregate(&request, &config)?;

            let rendered = match format {
                Format::Json if pretty => serde_json::to_string_pretty(&report)?,
                Format::Json => serde_json::to_string(&report)?,
                Format::Text => output::render_text(&report),
            };
            println!("{rendered}");
        }
        Commands::Parse { date, range } => {
            let interval = parse_range(&date, &range, &cli.timezone)?;
            println!("{}", serde_json::to_string(&output::interval_json(&interval))?);
        }
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
