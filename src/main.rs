use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

use pixeltrace::config::Config;
use pixeltrace::engine::{self, InputKind};
use pixeltrace::reporter::cli::CliReporter;
use pixeltrace::reporter::json::JsonReporter;
use pixeltrace::reporter::{score_only, Reporter};

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Cli,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Auto,
    Scores,
    Insight,
}

impl From<Kind> for InputKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Auto => InputKind::Auto,
            Kind::Scores => InputKind::Scores,
            Kind::Insight => InputKind::Insight,
        }
    }
}

#[derive(Parser)]
#[command(name = "pixeltrace", version, about = "Score the IP risk of an image")]
struct Cli {
    /// Provider payload (JSON); `-` reads stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Payload kind
    #[arg(long, value_enum, default_value = "auto")]
    kind: Kind,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    format: Format,

    /// Only output the overall score (0-100)
    #[arg(long)]
    score: bool,

    /// Config file (defaults to ./pixeltrace.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show per-category explanations
    #[arg(long, short)]
    verbose: bool,
}

/// Logs go to stderr so stdout stays parseable. `RUST_LOG` (or `LOG_LEVEL`)
/// sets the filter.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing("warn");

    let config = match &cli.config {
        Some(path) => Config::load_file(path),
        None => Config::load(std::path::Path::new(".")),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match engine::run(&cli.input, cli.kind.into(), &config) {
        Ok(result) => {
            let output = if cli.score {
                score_only(&result.analysis)
            } else {
                match cli.format {
                    Format::Cli => CliReporter.format(&result, cli.verbose),
                    Format::Json => format!("{}\n", JsonReporter.format(&result, cli.verbose)),
                }
            };
            print!("{output}");
            if result.exceeds_threshold() {
                process::exit(2);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
