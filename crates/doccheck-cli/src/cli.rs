use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use doccheck_core::config::{CliOverrides, ReportFormat};

#[derive(Parser, Debug)]
#[command(name = "doccheck")]
#[command(about = "Find conflicting statements across policy documents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Directory searched for doccheck.toml
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare documents pairwise and produce a conflict report
    Analyze(AnalyzeArgs),

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Documents to compare (.txt, .pdf, .docx; all read as text)
    #[arg(num_args = 0..)]
    pub files: Vec<PathBuf>,

    /// Report format: markdown or json
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Write the report into this directory instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of conflicts to report
    #[arg(long)]
    pub max_matches: Option<usize>,

    /// Do not compare percentages with durations
    #[arg(long)]
    pub unit_aware: bool,
}

impl Cli {
    /// Config overrides carried by the selected subcommand.
    pub fn overrides(&self) -> Option<CliOverrides> {
        match &self.command {
            Commands::Analyze(args) => Some(args.overrides()),
            Commands::Config => None,
        }
    }
}

impl AnalyzeArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            max_matches: self.max_matches,
            unit_aware_numeric: self.unit_aware.then_some(true),
            report_format: self.format,
            output_dir: self.output.clone(),
        }
    }
}
