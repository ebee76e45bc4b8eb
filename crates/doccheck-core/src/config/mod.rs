//! Configuration system for doccheck.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod doccheck_config;
pub mod report_config;

pub use analysis_config::AnalysisConfig;
pub use doccheck_config::{CliOverrides, DocCheckConfig};
pub use report_config::{ReportConfig, ReportFormat};
