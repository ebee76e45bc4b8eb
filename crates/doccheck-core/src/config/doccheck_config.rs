//! Top-level doccheck configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ReportConfig, ReportFormat};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`DOCCHECK_*`)
/// 3. Project config (`doccheck.toml` in the project root)
/// 4. User config (`~/.doccheck/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DocCheckConfig {
    pub analysis: AnalysisConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub max_matches: Option<usize>,
    pub unit_aware_numeric: Option<bool>,
    pub report_format: Option<ReportFormat>,
    pub output_dir: Option<PathBuf>,
}

/// Environment variables read by [`DocCheckConfig::load`].
pub const ENV_VARS: &[&str] = &[
    "DOCCHECK_ANALYSIS_NUMERIC_SIMILARITY_THRESHOLD",
    "DOCCHECK_ANALYSIS_TIME_SIMILARITY_THRESHOLD",
    "DOCCHECK_ANALYSIS_POLICY_SIMILARITY_THRESHOLD",
    "DOCCHECK_ANALYSIS_MAX_MATCHES",
    "DOCCHECK_ANALYSIS_UNIT_AWARE_NUMERIC",
    "DOCCHECK_ANALYSIS_MAX_DOCUMENT_BYTES",
    "DOCCHECK_REPORT_FORMAT",
    "DOCCHECK_REPORT_OUTPUT_DIR",
];

impl DocCheckConfig {
    /// Load configuration with full layered resolution, including the
    /// user-level config file.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_from(root, Self::user_config_path().as_deref(), cli_overrides)
    }

    /// Load configuration with an explicit user config path (or none).
    pub fn load_from(
        root: &Path,
        user_config: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = user_config {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &DocCheckConfig) -> Result<(), ConfigError> {
        let thresholds = [
            (
                "analysis.numeric_similarity_threshold",
                config.analysis.numeric_similarity_threshold,
            ),
            (
                "analysis.time_similarity_threshold",
                config.analysis.time_similarity_threshold,
            ),
            (
                "analysis.policy_similarity_threshold",
                config.analysis.policy_similarity_threshold,
            ),
        ];
        for (field, value) in thresholds {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }
        if let Some(eps) = config.analysis.value_difference_epsilon {
            if !eps.is_finite() || eps < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.value_difference_epsilon".to_string(),
                    message: "must be a finite value >= 0".to_string(),
                });
            }
        }
        if let Some(diff) = config.analysis.high_severity_difference {
            if !diff.is_finite() || diff < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.high_severity_difference".to_string(),
                    message: "must be a finite value >= 0".to_string(),
                });
            }
        }
        if config.analysis.max_matches == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.max_matches".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.analysis.max_document_bytes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.max_document_bytes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.doccheck/config.toml`.
    pub fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".doccheck").join("config.toml"))
    }

    fn merge_toml_file(config: &mut DocCheckConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DocCheckConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `Some` values in `other` win.
    fn merge(base: &mut DocCheckConfig, other: &DocCheckConfig) {
        let a = &other.analysis;
        if a.numeric_similarity_threshold.is_some() {
            base.analysis.numeric_similarity_threshold = a.numeric_similarity_threshold;
        }
        if a.time_similarity_threshold.is_some() {
            base.analysis.time_similarity_threshold = a.time_similarity_threshold;
        }
        if a.policy_similarity_threshold.is_some() {
            base.analysis.policy_similarity_threshold = a.policy_similarity_threshold;
        }
        if a.value_difference_epsilon.is_some() {
            base.analysis.value_difference_epsilon = a.value_difference_epsilon;
        }
        if a.high_severity_difference.is_some() {
            base.analysis.high_severity_difference = a.high_severity_difference;
        }
        if a.max_matches.is_some() {
            base.analysis.max_matches = a.max_matches;
        }
        if a.unit_aware_numeric.is_some() {
            base.analysis.unit_aware_numeric = a.unit_aware_numeric;
        }
        if a.max_document_bytes.is_some() {
            base.analysis.max_document_bytes = a.max_document_bytes;
        }

        if other.report.format.is_some() {
            base.report.format = other.report.format;
        }
        if other.report.output_dir.is_some() {
            base.report.output_dir = other.report.output_dir.clone();
        }
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut DocCheckConfig) {
        if let Some(v) = env_parse::<f64>("DOCCHECK_ANALYSIS_NUMERIC_SIMILARITY_THRESHOLD") {
            config.analysis.numeric_similarity_threshold = Some(v);
        }
        if let Some(v) = env_parse::<f64>("DOCCHECK_ANALYSIS_TIME_SIMILARITY_THRESHOLD") {
            config.analysis.time_similarity_threshold = Some(v);
        }
        if let Some(v) = env_parse::<f64>("DOCCHECK_ANALYSIS_POLICY_SIMILARITY_THRESHOLD") {
            config.analysis.policy_similarity_threshold = Some(v);
        }
        if let Some(v) = env_parse::<usize>("DOCCHECK_ANALYSIS_MAX_MATCHES") {
            config.analysis.max_matches = Some(v);
        }
        if let Some(v) = env_parse::<bool>("DOCCHECK_ANALYSIS_UNIT_AWARE_NUMERIC") {
            config.analysis.unit_aware_numeric = Some(v);
        }
        if let Some(v) = env_parse::<u64>("DOCCHECK_ANALYSIS_MAX_DOCUMENT_BYTES") {
            config.analysis.max_document_bytes = Some(v);
        }
        if let Some(v) = env_parse::<ReportFormat>("DOCCHECK_REPORT_FORMAT") {
            config.report.format = Some(v);
        }
        if let Ok(val) = std::env::var("DOCCHECK_REPORT_OUTPUT_DIR") {
            if !val.is_empty() {
                config.report.output_dir = Some(PathBuf::from(val));
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut DocCheckConfig, cli: &CliOverrides) {
        if let Some(v) = cli.max_matches {
            config.analysis.max_matches = Some(v);
        }
        if let Some(v) = cli.unit_aware_numeric {
            config.analysis.unit_aware_numeric = Some(v);
        }
        if let Some(v) = cli.report_format {
            config.report.format = Some(v);
        }
        if let Some(ref v) = cli.output_dir {
            config.report.output_dir = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.parse().ok()
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
