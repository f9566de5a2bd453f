mod cmd_keywords;
mod cmd_mine;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "chatmine",
    version,
    about = "Mine exported chat transcripts for scene notes, code blocks, and JSON literals"
)]
struct Cli {
    /// Log debug detail to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a chat export and print the extraction report
    Mine {
        /// Path to the exported chat JSON
        path: PathBuf,
        /// Keyword config (YAML); built-in vocabulary when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Brace counting mode for JSON literal discovery (overrides config)
        #[arg(long, value_enum)]
        brace_scan: Option<cmd_mine::BraceScanArg>,
        /// Output the untruncated report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective keyword configuration as YAML
    Keywords {
        /// Keyword config (YAML); built-in vocabulary when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Command::Mine {
            path,
            config,
            brace_scan,
            json,
        } => cmd_mine::execute(&cmd_mine::MineParams {
            path: &path,
            config: config.as_deref(),
            brace_scan: brace_scan.map(Into::into),
            json,
        }),
        Command::Keywords { config } => cmd_keywords::execute(config.as_deref()),
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "chatmine=debug,chatmine_transcript=debug,chatmine_report=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
