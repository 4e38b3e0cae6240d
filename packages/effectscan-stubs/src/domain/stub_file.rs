//! Stub file data model
//!
//! A stub file is the persisted knowledge record for one module: a mapping
//! from function name to contract category to the set of observed values.
//! The on-disk form is a plain JSON object so stubs can be shipped with the
//! crate, reviewed in diffs, and hand-maintained.

use crate::error::{Result, StubError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::PathBuf;

/// Contract category stored in a stub.
///
/// `Raises` is the only category written by the generator; `Has` entries are
/// hand-maintained (or shipped) and consumed by the marker engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Raises,
    Has,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Raises => "raises",
            Category::Has => "has",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// function name -> category -> set of values
type StubContent = BTreeMap<String, BTreeMap<Category, BTreeSet<String>>>;

/// Persisted knowledge for one module.
///
/// Created empty or loaded from an existing JSON file at first reference,
/// mutated only through `add`, and persisted explicitly by `dump` (which
/// replaces the whole file — there is no partial write).
#[derive(Debug, Clone)]
pub struct StubFile {
    pub path: PathBuf,
    content: StubContent,
}

impl StubFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: StubContent::new(),
        }
    }

    /// Replace content from the backing file.
    pub fn load(&mut self) -> Result<()> {
        let raw = fs::read_to_string(&self.path)?;
        self.content = serde_json::from_str(&raw)?;
        tracing::debug!("stub_loaded path={}", self.path.display());
        Ok(())
    }

    /// Write the whole content to the backing file.
    pub fn dump(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.content)?;
        fs::write(&self.path, raw)?;
        tracing::debug!("stub_dumped path={}", self.path.display());
        Ok(())
    }

    /// Record a value for a function. Values form a set: adding a duplicate
    /// is a no-op. Only the `raises` category may be written.
    pub fn add(&mut self, func: &str, category: Category, value: impl Into<String>) -> Result<()> {
        if category != Category::Raises {
            return Err(StubError::config(format!(
                "only the raises contract can be generated, got: {}",
                category
            )));
        }
        self.content
            .entry(func.to_string())
            .or_default()
            .entry(category)
            .or_default()
            .insert(value.into());
        Ok(())
    }

    /// Values recorded for a function under a category. An unknown function
    /// or category is a miss, not an error: the set is empty.
    pub fn get(&self, func: &str, category: Category) -> BTreeSet<String> {
        self.content
            .get(func)
            .and_then(|contracts| contracts.get(&category))
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_add_and_get() {
        let mut stub = StubFile::new("mod.json");
        stub.add("f", Category::Raises, "ValueError").unwrap();
        stub.add("f", Category::Raises, "KeyError").unwrap();

        let values = stub.get("f", Category::Raises);
        assert_eq!(values.len(), 2);
        assert!(values.contains("ValueError"));
        assert!(values.contains("KeyError"));
    }

    #[test]
    fn test_add_duplicate_is_noop() {
        let mut stub = StubFile::new("mod.json");
        stub.add("f", Category::Raises, "ValueError").unwrap();
        stub.add("f", Category::Raises, "ValueError").unwrap();

        assert_eq!(stub.get("f", Category::Raises).len(), 1);
    }

    #[test]
    fn test_add_has_is_config_error() {
        let mut stub = StubFile::new("mod.json");
        let err = stub.add("f", Category::Has, "stdout").unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Config);
    }

    #[test]
    fn test_get_miss_is_empty() {
        let stub = StubFile::new("mod.json");
        assert!(stub.get("unknown", Category::Raises).is_empty());
        assert!(stub.get("unknown", Category::Has).is_empty());
    }

    #[test]
    fn test_dump_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mod.json");

        let mut stub = StubFile::new(&path);
        stub.add("f", Category::Raises, "ValueError").unwrap();
        stub.add("f", Category::Raises, "KeyError").unwrap();
        stub.add("g", Category::Raises, "OSError").unwrap();
        stub.dump().unwrap();

        let mut reloaded = StubFile::new(&path);
        reloaded.load().unwrap();

        let values = reloaded.get("f", Category::Raises);
        assert_eq!(
            values,
            ["KeyError", "ValueError"]
                .into_iter()
                .map(String::from)
                .collect()
        );
        assert_eq!(reloaded.get("g", Category::Raises).len(), 1);
    }

    #[test]
    fn test_load_reads_has_category() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mod.json");
        fs::write(&path, r#"{"fetch": {"has": ["network", "socket"]}}"#).unwrap();

        let mut stub = StubFile::new(&path);
        stub.load().unwrap();

        let values = stub.get("fetch", Category::Has);
        assert!(values.contains("network"));
        assert!(values.contains("socket"));
    }
}
