//! JSON snapshots of a catalog.
//!
//! A snapshot is the flat entry list plus an export timestamp. Loading one
//! goes back through [`CatalogStore::load`], so id uniqueness is re-checked.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::QuestionEntry;
use crate::store::CatalogStore;

/// A serializable copy of a catalog's entries, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// When the snapshot was taken.
    pub exported_at: DateTime<Utc>,
    pub entries: Vec<QuestionEntry>,
}

impl CatalogSnapshot {
    pub fn from_store(store: &CatalogStore) -> Self {
        Self {
            exported_at: Utc::now(),
            entries: store.iter().cloned().collect(),
        }
    }

    /// Save the snapshot as pretty JSON, creating parent directories.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize snapshot")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        Ok(())
    }

    /// Load a snapshot from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot from {}", path.display()))?;
        let snapshot: CatalogSnapshot =
            serde_json::from_str(&content).context("failed to parse snapshot JSON")?;
        Ok(snapshot)
    }

    /// Rebuild a store, re-validating id uniqueness.
    pub fn into_store(self) -> Result<CatalogStore> {
        CatalogStore::load(self.entries).context("snapshot is not a valid catalog")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;

    fn store() -> CatalogStore {
        CatalogStore::load(vec![
            QuestionEntry::new("r1", Section::Redux, "What is a reducer?")
                .with_expected_answer("A pure function (state, action) -> state."),
            QuestionEntry::new("h1", Section::Hooks, "useMemo vs useCallback")
                .with_code_sample("const f = useCallback(() => {}, []);")
                .with_tags(["memoization"]),
        ])
        .unwrap()
    }

    #[test]
    fn save_and_reload_keeps_entries_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.json");

        let original = store();
        CatalogSnapshot::from_store(&original).save_json(&path).unwrap();
        let reloaded = CatalogSnapshot::load_json(&path).unwrap().into_store().unwrap();

        let before: Vec<_> = original.iter().collect();
        let after: Vec<_> = reloaded.iter().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn duplicate_ids_rejected_on_reload() {
        let mut snapshot = CatalogSnapshot::from_store(&store());
        let copy = snapshot.entries[0].clone();
        snapshot.entries.push(copy);

        let err = snapshot.into_store().unwrap_err();
        assert!(format!("{err:#}").contains("duplicate question id: r1"));
    }

    #[test]
    fn malformed_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(CatalogSnapshot::load_json(&path).is_err());
    }
}
