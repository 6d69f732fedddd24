//! Test fixture loader for Causeway golden DAGs.
//!
//! Provides typed deserialization of fixture JSON files and helper functions
//! for loading them in tests across crates.

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
        .unwrap_or_else(|e| panic!("Failed to read fixture dir {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// A golden causal DAG with the answers analysis must reproduce.
#[derive(Debug, Clone, Deserialize)]
pub struct DagFixture {
    pub name: String,
    /// Canonical node order.
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
    #[serde(default)]
    pub adjustment: Option<AdjustmentExpectation>,
    /// Expected marginal independencies as `[a, b]` pairs, in enumeration order.
    #[serde(default)]
    pub marginal: Option<Vec<(String, String)>>,
    /// Expected subset-conditioner output.
    #[serde(default)]
    pub minimal_separators: Option<Vec<SeparatorExpectation>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdjustmentExpectation {
    pub treatment: String,
    pub outcome: String,
    pub sets: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeparatorExpectation {
    pub a: String,
    pub b: String,
    pub sets: Vec<Vec<String>>,
}

/// Load every golden DAG under `dags/`.
pub fn load_dag_fixtures() -> Vec<DagFixture> {
    list_fixtures("dags")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_else(|| panic!("bad fixture path {}", path.display()))
                .to_string();
            load_fixture(&format!("dags/{name}"))
        })
        .collect()
}
