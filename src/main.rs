use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gomodcount::collector::DEFAULT_EXCLUDE_PATTERN;
use gomodcount::config::{Config, DEFAULT_LOGFILE};
use gomodcount::export::{export_to_string, ExportData, ExportFormat};
use gomodcount::pipeline::Pipeline;
use gomodcount::source::GO_BINARY;

#[derive(Parser)]
#[command(name = "gomodcount")]
#[command(version)]
#[command(about = "Count first-party packages referenced by a Go module graph", long_about = None)]
struct Cli {
    /// Directory where `go mod graph` should be run
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Path to the log file the graph is saved to
    #[arg(short, long, default_value = DEFAULT_LOGFILE)]
    logfile: PathBuf,

    /// Read an existing graph dump instead of running go ("-" for stdin)
    #[arg(short, long, conflicts_with_all = ["dir", "logfile", "go"])]
    input: Option<PathBuf>,

    /// Go toolchain binary used to dump the graph
    #[arg(long, env = "GOMODCOUNT_GO", default_value = GO_BINARY)]
    go: PathBuf,

    /// Skip packages whose module path contains this substring
    #[arg(short, long, env = "GOMODCOUNT_EXCLUDE", default_value = DEFAULT_EXCLUDE_PATTERN)]
    exclude: String,

    /// Output format: text, json, csv, markdown
    #[arg(short, long, default_value = "text")]
    format: ExportFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> Config {
        let config = match &self.input {
            Some(input) => Config::for_input(input, self.exclude),
            None => Config::for_project(&self.dir, &self.logfile, self.exclude)
                .with_go_binary(&self.go),
        };
        config.with_format(self.format)
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env("GOMODCOUNT_LOG").unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "gomodcount=warn",
            1 => "gomodcount=info",
            2 => "gomodcount=debug",
            _ => "gomodcount=trace",
        })
    });

    let format = env::var("GOMODCOUNT_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.into_config();

    let reader = config
        .source
        .open()
        .context("Failed to obtain the module graph")?;
    let summary = Pipeline::new(config.exclude.as_str())
        .run_reader(reader)
        .context("Failed to parse the module graph")?;

    // Render fully before writing so a failed run prints nothing.
    let data = ExportData::new(config.exclude, summary);
    let report = export_to_string(config.format, &data).context("Failed to render report")?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
