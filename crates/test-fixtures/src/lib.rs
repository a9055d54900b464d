//! Test fixture loader for Repute golden scoring scenarios.
//!
//! Each scenario is a JSON file holding an evaluation time, a subject, the raw
//! attestation list and the expected score fields.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Walk up from whichever crate is running the tests.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
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

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
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
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// A golden scoring scenario.
///
/// `attestations` stays raw JSON so scenarios can carry malformed records.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// RFC 3339 evaluation time.
    pub now: String,
    pub subject: String,
    pub attestations: serde_json::Value,
    pub expected: ExpectedScore,
}

/// Score fields a scenario pins down.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedScore {
    pub total_score: f64,
    pub attestation_count: u64,
    pub positive_count: u64,
    pub negative_count: u64,
    pub unknown_count: u64,
    pub vouch_count: u64,
    pub builder_detected: bool,
    pub raw_weighted_sum: f64,
    pub vouch_bonus: f64,
    pub builder_bonus: f64,
    pub activity_bonus: f64,
}

/// Load every scenario under `golden/scoring`.
pub fn scoring_scenarios() -> Vec<ScoringScenario> {
    list_fixtures("golden/scoring")
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
        })
        .collect()
}
