use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "engine_cmd")]
#[command(about = "Developer command dispatcher (run without arguments to list commands)")]
#[command(version)]
pub struct Cli {
    /// Command to run
    pub command: Option<String>,

    /// JSON configuration file (defaults to ./engine_cmd.json if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a JSON run summary to this file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Suppress per-file progress output
    #[arg(short, long)]
    pub quiet: bool,
}
