pub mod analyze;
pub mod config;

pub use analyze::{load_documents, run as analyze, AnalyzeOutcome};
pub use config::run as show_config;
