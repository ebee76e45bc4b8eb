//! CLI parsing and command tests.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use doccheck_cli::logging::default_directive;
use doccheck_cli::{commands, AnalyzeArgs, Cli, Commands};
use doccheck_core::config::doccheck_config::ENV_VARS;
use doccheck_core::config::{CliOverrides, ReportFormat};
use doccheck_core::errors::{DocCheckErrorCode, DocumentError};
use doccheck_core::models::Severity;
use doccheck_core::{DocCheckConfig, DocCheckError};
use tempfile::TempDir;

/// Serializes tests that touch environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn write_doc(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn deadline_docs(dir: &Path) -> Vec<PathBuf> {
    vec![
        write_doc(
            dir,
            "guidelines.txt",
            "All project submissions must be completed before 10:00 PM on the due date.",
        ),
        write_doc(
            dir,
            "handbook.txt",
            "All project submissions must be completed before 11:59 PM on the due date.",
        ),
    ]
}

fn args(files: Vec<PathBuf>) -> AnalyzeArgs {
    AnalyzeArgs {
        files,
        format: None,
        output: None,
        max_matches: None,
        unit_aware: false,
    }
}

/// Config from `root` and `overrides` only: no user file, and every
/// `DOCCHECK_*` variable cleared first.
fn config_with(overrides: &CliOverrides, root: &Path) -> DocCheckConfig {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    for key in ENV_VARS {
        std::env::remove_var(key);
    }
    DocCheckConfig::load_from(root, None, Some(overrides)).unwrap()
}

// ─── Parsing ───

#[test]
fn parses_analyze_flags() {
    let cli = Cli::try_parse_from([
        "doccheck", "-vv", "analyze", "a.txt", "b.pdf", "--format", "json", "--output",
        "out", "--max-matches", "3", "--unit-aware",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 2);
    let Commands::Analyze(a) = &cli.command else {
        panic!("expected analyze");
    };
    assert_eq!(a.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.pdf")]);

    let o = cli.overrides().unwrap();
    assert_eq!(o.report_format, Some(ReportFormat::Json));
    assert_eq!(o.output_dir, Some(PathBuf::from("out")));
    assert_eq!(o.max_matches, Some(3));
    assert_eq!(o.unit_aware_numeric, Some(true));
}

#[test]
fn unit_aware_absent_leaves_config_alone() {
    let cli = Cli::try_parse_from(["doccheck", "analyze", "a.txt"]).unwrap();
    let o = cli.overrides().unwrap();
    assert_eq!(o.unit_aware_numeric, None);
    assert_eq!(o.report_format, None);
}

#[test]
fn rejects_unknown_format() {
    assert!(Cli::try_parse_from(["doccheck", "analyze", "a.txt", "--format", "pdf"]).is_err());
}

#[test]
fn config_subcommand_has_no_overrides() {
    let cli = Cli::try_parse_from(["doccheck", "config"]).unwrap();
    assert!(matches!(cli.command, Commands::Config));
    assert!(cli.overrides().is_none());
}

#[test]
fn verbosity_levels() {
    assert_eq!(default_directive(0), "warn");
    assert_eq!(default_directive(1), "info");
    assert_eq!(default_directive(2), "debug");
    assert_eq!(default_directive(7), "trace");
}

// ─── analyze ───

#[test]
fn analyze_prints_markdown_report() {
    let dir = TempDir::new().unwrap();
    let a = args(deadline_docs(dir.path()));
    let config = config_with(&a.overrides(), dir.path());

    let mut out = Vec::new();
    let outcome = commands::analyze(&a, &config, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(outcome.written_to.is_none());
    assert_eq!(outcome.report.total_conflicts, 1);
    assert_eq!(outcome.report.conflicts[0].severity, Severity::High);
    assert!(text.starts_with("# Document Conflict Analysis Report"));
    assert!(text.contains("- Documents Analyzed: guidelines.txt, handbook.txt"));
    assert!(text.contains("- High Priority: 1"));
}

#[test]
fn analyze_json_to_directory() {
    let dir = TempDir::new().unwrap();
    let mut a = args(deadline_docs(dir.path()));
    a.format = Some(ReportFormat::Json);
    a.output = Some(dir.path().join("reports"));
    let config = config_with(&a.overrides(), dir.path());

    let mut out = Vec::new();
    let outcome = commands::analyze(&a, &config, &mut out).unwrap();
    let path = outcome.written_to.unwrap();
    assert_eq!(path.extension().unwrap(), "json");
    assert!(String::from_utf8(out).unwrap().starts_with("Report written to "));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value["total_conflicts"], 1);
    assert_eq!(value["documents"][1], "handbook.txt");
}

#[test]
fn ambient_environment_does_not_leak_into_config() {
    let dir = TempDir::new().unwrap();
    {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("DOCCHECK_ANALYSIS_MAX_MATCHES", "1");
        std::env::set_var("DOCCHECK_REPORT_FORMAT", "json");
    }
    let config = config_with(&CliOverrides::default(), dir.path());
    assert_eq!(config.analysis.effective_max_matches(), 10);
    assert_eq!(config.report.effective_format(), ReportFormat::Markdown);
}

#[test]
fn byte_order_mark_does_not_reach_statements() {
    let dir = TempDir::new().unwrap();
    let with_bom = dir.path().join("lab-rules.txt");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(
        b"Attendance at the weekly lab session is required for every student.",
    );
    std::fs::write(&with_bom, bytes).unwrap();
    let plain = write_doc(
        dir.path(),
        "faq.txt",
        "Attendance at the weekly lab session is optional for every student.",
    );
    let a = args(vec![with_bom, plain]);
    let config = config_with(&a.overrides(), dir.path());

    let outcome = commands::analyze(&a, &config, &mut Vec::new()).unwrap();
    assert_eq!(outcome.report.total_conflicts, 1);
    let first = &outcome.report.conflicts[0].conflicting_text[0];
    assert_eq!(first.document, "lab-rules.txt");
    assert_eq!(
        first.text,
        "Attendance at the weekly lab session is required for every student"
    );
}

#[test]
fn single_document_yields_empty_report() {
    let dir = TempDir::new().unwrap();
    let only = write_doc(dir.path(), "only.txt", "Submit before 10:00 PM. Submit before 9 PM.");
    let a = args(vec![only]);
    let config = config_with(&a.overrides(), dir.path());

    let mut out = Vec::new();
    let outcome = commands::analyze(&a, &config, &mut out).unwrap();
    assert_eq!(outcome.report.total_conflicts, 0);
    assert_eq!(outcome.report.documents, vec!["only.txt"]);
    assert!(String::from_utf8(out).unwrap().contains("- Total Conflicts: 0"));
}

#[test]
fn max_matches_override_caps_report() {
    let dir = TempDir::new().unwrap();
    let first: Vec<String> = (1..=4)
        .map(|i| format!("Rule {i}x grants approval within {i} days always."))
        .collect();
    let second: Vec<String> = (1..=4)
        .map(|i| format!("Rule {i}x grants approval within {} days always.", i + 10))
        .collect();
    let files = vec![
        write_doc(dir.path(), "a.txt", &first.join(" ")),
        write_doc(dir.path(), "b.txt", &second.join(" ")),
    ];
    let mut a = args(files);
    a.max_matches = Some(2);
    let config = config_with(&a.overrides(), dir.path());

    let outcome = commands::analyze(&a, &config, &mut Vec::new()).unwrap();
    assert_eq!(outcome.report.total_conflicts, 2);
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let a = args(vec![dir.path().join("nope.txt"), dir.path().join("nada.txt")]);
    let config = config_with(&a.overrides(), dir.path());
    let err = commands::analyze(&a, &config, &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("nope.txt"), "{err:#}");
    let inner = err.downcast_ref::<DocCheckError>().unwrap();
    assert!(matches!(inner, DocCheckError::Document(DocumentError::Io { .. })));
    assert_eq!(inner.error_code(), "DOCUMENT_ERROR");
}

#[test]
fn load_documents_keeps_input_order() {
    let dir = TempDir::new().unwrap();
    let paths = vec![
        write_doc(dir.path(), "b.txt", "Second file."),
        write_doc(dir.path(), "a.txt", "First file."),
    ];
    let docs = commands::load_documents(&paths, 1024).unwrap();
    let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["b.txt", "a.txt"]);
}

#[test]
fn oversized_document_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("doccheck.toml"),
        "[analysis]\nmax_document_bytes = 16\n",
    )
    .unwrap();
    let a = args(deadline_docs(dir.path()));
    let config = config_with(&a.overrides(), dir.path());
    assert_eq!(config.analysis.effective_max_document_bytes(), 16);

    let err = commands::analyze(&a, &config, &mut Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("guidelines.txt"), "{err:#}");
    assert!(matches!(
        err.downcast_ref::<DocCheckError>(),
        Some(DocCheckError::Document(DocumentError::TooLarge { limit: 16, .. }))
    ));
}

// ─── config ───

#[test]
fn config_prints_parseable_toml() {
    let dir = TempDir::new().unwrap();
    let overrides = CliOverrides {
        max_matches: Some(4),
        report_format: Some(ReportFormat::Json),
        ..Default::default()
    };
    let config = config_with(&overrides, dir.path());

    let mut out = Vec::new();
    commands::show_config(&config, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let back = DocCheckConfig::from_toml(&text).unwrap();
    assert_eq!(back, config);
    assert_eq!(back.analysis.effective_max_matches(), 4);
}
