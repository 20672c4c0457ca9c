use std::path::PathBuf;

use clap::Parser;

/// Timekeeper: a console bot that tells the time and forwards everything else to a local model.
#[derive(Parser, Debug)]
#[command(name = "timekeeper", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, timekeeper_ai=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model name override.
    #[arg(long)]
    pub model: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
