use std::error::Error;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use elemfuse::{Config, ReportFormat};

/// Derive per-element volumes, densities and spacings from radius,
/// density and weight tables.
#[derive(Parser, Debug)]
#[command(name = "elemfuse", version, about)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Atomic radii table
    #[arg(long)]
    radii: Option<PathBuf>,

    /// Measured density table
    #[arg(long)]
    densities: Option<PathBuf>,

    /// Atomic weight table
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Tsv,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Tsv => ReportFormat::Tsv,
            Format::Json => ReportFormat::Json,
        }
    }
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied.
    fn resolve_config(&self) -> elemfuse::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(path) = &self.radii {
            config.sources.radii = path.clone();
        }
        if let Some(path) = &self.densities {
            config.sources.densities = path.clone();
        }
        if let Some(path) = &self.weights {
            config.sources.weights = path.clone();
        }
        if let Some(format) = self.format {
            config.report.format = format.into();
        }
        Ok(config)
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: &Args) -> elemfuse::Result<()> {
    let config = args.resolve_config()?;
    let elements = elemfuse::fuse(&config)?;
    let stdout = io::stdout();
    elemfuse::write_report(&elements, BufWriter::new(stdout.lock()), config.report.format)
}

fn describe(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", describe(&err));
            ExitCode::FAILURE
        }
    }
}
