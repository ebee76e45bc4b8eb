/// doccheck version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of matches returned by a single analysis.
pub const DEFAULT_MAX_MATCHES: usize = 10;

/// Minimum number of documents for pairwise analysis.
pub const MIN_DOCUMENTS: usize = 2;

/// A sentence fragment must be strictly longer than this (in characters,
/// after trimming) to become a segment.
pub const MIN_SEGMENT_CHARS: usize = 10;

/// Tokens must be strictly longer than this (in characters) to count
/// toward context similarity.
pub const MIN_SHARED_TOKEN_CHARS: usize = 3;

/// Similarity gate for the numeric detector (strict `>`).
pub const DEFAULT_NUMERIC_SIMILARITY_THRESHOLD: f64 = 0.3;

/// Similarity gate for the time detector (strict `>`).
pub const DEFAULT_TIME_SIMILARITY_THRESHOLD: f64 = 0.2;

/// Similarity gate for the policy detector (strict `>`).
pub const DEFAULT_POLICY_SIMILARITY_THRESHOLD: f64 = 0.2;

/// Two extracted numbers are "different" when they differ by more than this.
pub const DEFAULT_VALUE_DIFFERENCE_EPSILON: f64 = 0.1;

/// Numeric differences above this are reported as high severity.
pub const DEFAULT_HIGH_SEVERITY_DIFFERENCE: f64 = 20.0;

/// Documents larger than this are rejected at load time (10 MiB).
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "doccheck.toml";

/// File name prefix for downloadable reports.
pub const REPORT_FILE_PREFIX: &str = "conflict-report-";
