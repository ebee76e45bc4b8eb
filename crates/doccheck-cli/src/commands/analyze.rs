use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use doccheck_core::constants::MIN_DOCUMENTS;
use doccheck_core::models::{Document, Report};
use doccheck_core::{DocCheckConfig, DocCheckError, DocCheckResult};
use doccheck_detection::{ContradictionMatcher, MatcherConfig};
use doccheck_report::{conflicts_from_matches, generate_report, reporter_for, write_report};
use tracing::{debug, info, warn};

use crate::cli::AnalyzeArgs;

/// What an analysis run produced.
#[derive(Debug)]
pub struct AnalyzeOutcome {
    pub report: Report,
    /// Set when the report went to a file rather than `out`.
    pub written_to: Option<PathBuf>,
}

/// Load the documents named in `args`, analyze them and emit the report.
///
/// With fewer than two documents nothing is compared; an empty report is
/// still produced.
pub fn run(
    args: &AnalyzeArgs,
    config: &DocCheckConfig,
    out: &mut dyn Write,
) -> Result<AnalyzeOutcome> {
    let max_bytes = config.analysis.effective_max_document_bytes();
    let documents = load_documents(&args.files, max_bytes).context("failed to load documents")?;

    if documents.len() < MIN_DOCUMENTS {
        warn!(documents = documents.len(), "not enough documents to compare");
        eprintln!("Upload at least {MIN_DOCUMENTS} documents to analyze conflicts");
    }

    let matcher = ContradictionMatcher::new(MatcherConfig::from(&config.analysis));
    debug!(config = ?matcher.config(), "matcher configured");
    let matches = matcher.analyze(&documents);
    let report = generate_report(&documents, conflicts_from_matches(&matches));

    let format = config.report.effective_format();
    let written_to = match &config.report.output_dir {
        Some(dir) => {
            let path = write_report(&report, format, dir)?;
            writeln!(out, "Report written to {}", path.display())?;
            info!(path = %path.display(), "report saved");
            Some(path)
        }
        None => {
            let rendered = reporter_for(format).generate(&report)?;
            write!(out, "{rendered}")?;
            None
        }
    };

    Ok(AnalyzeOutcome { report, written_to })
}

/// Load every path in order, stopping at the first failure.
pub fn load_documents(paths: &[PathBuf], max_bytes: u64) -> DocCheckResult<Vec<Document>> {
    paths
        .iter()
        .map(|path| Document::load(path, max_bytes).map_err(DocCheckError::from))
        .collect()
}
