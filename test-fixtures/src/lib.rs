//! Test fixture loader for doccheck golden scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// A golden analysis scenario: input documents and the expected matches.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub documents: Vec<FixtureDocument>,
    pub expected: ExpectedOutcome,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureDocument {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedOutcome {
    pub match_count: usize,
    #[serde(default)]
    pub matches: Vec<ExpectedMatch>,
}

/// Expected fields of one match, in output order.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedMatch {
    pub document1: String,
    pub document2: String,
    pub text1: String,
    pub text2: String,
    pub context1: Option<String>,
    pub context2: Option<String>,
    pub severity: String,
    /// Expected confidence as a ratio `shared / longest`.
    pub confidence: [u32; 2],
}

impl ExpectedMatch {
    pub fn confidence_value(&self) -> f64 {
        f64::from(self.confidence[0]) / f64::from(self.confidence[1])
    }
}

/// Load every scenario under `golden/`.
pub fn load_golden_scenarios() -> Vec<GoldenScenario> {
    list_fixtures("golden")
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_else(|| panic!("bad fixture path {}", path.display()));
            load_fixture(&format!("golden/{name}"))
        })
        .collect()
}
