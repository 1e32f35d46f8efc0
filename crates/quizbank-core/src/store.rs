//! The immutable question catalog and its indices.
//!
//! A `CatalogStore` is built in a single pass by [`CatalogStore::load`] and is
//! read-only afterwards. Because `load` is the constructor, a failed load
//! never produces a store, so no caller can observe a partially built index.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::CatalogError;
use crate::model::{QuestionEntry, Section};

/// Ordered, indexed collection of question entries.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    entries: Vec<QuestionEntry>,
    by_id: HashMap<String, usize>,
    by_section: HashMap<Section, Vec<usize>>,
    /// Sections in the order they were first seen during load.
    section_order: Vec<Section>,
    /// Lowercased tag -> entry positions.
    by_tag: HashMap<String, Vec<usize>>,
    /// Lowercased prompts, parallel to `entries`.
    folded_prompts: Vec<String>,
}

impl CatalogStore {
    /// Build a catalog from a finite sequence of entries.
    ///
    /// Fails with [`CatalogError::DuplicateId`] on the first repeated id.
    pub fn load<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = QuestionEntry>,
    {
        let mut store = CatalogStore::default();

        for entry in entries {
            let pos = store.entries.len();

            match store.by_id.entry(entry.id.clone()) {
                Entry::Occupied(_) => return Err(CatalogError::DuplicateId(entry.id)),
                Entry::Vacant(slot) => {
                    slot.insert(pos);
                }
            }

            let section_entries = store.by_section.entry(entry.section).or_default();
            if section_entries.is_empty() {
                store.section_order.push(entry.section);
            }
            section_entries.push(pos);

            for tag in &entry.tags {
                let positions = store.by_tag.entry(tag.to_lowercase()).or_default();
                // An entry listing the same tag twice is indexed once.
                if positions.last() != Some(&pos) {
                    positions.push(pos);
                }
            }

            store.folded_prompts.push(entry.prompt.to_lowercase());
            store.entries.push(entry);
        }

        tracing::debug!(
            entries = store.entries.len(),
            sections = store.section_order.len(),
            tags = store.by_tag.len(),
            "catalog built"
        );

        Ok(store)
    }

    /// Exact lookup by id.
    pub fn get(&self, id: &str) -> Result<&QuestionEntry, CatalogError> {
        self.by_id
            .get(id)
            .map(|&pos| &self.entries[pos])
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// All entries in ingestion order, or only one section's entries.
    pub fn list(&self, section: Option<Section>) -> Vec<&QuestionEntry> {
        match section {
            None => self.entries.iter().collect(),
            Some(section) => self
                .by_section
                .get(&section)
                .map(|positions| positions.iter().map(|&pos| &self.entries[pos]).collect())
                .unwrap_or_default(),
        }
    }

    /// Sections present in the catalog with their entry counts, first-seen order.
    pub fn sections(&self) -> Vec<(Section, usize)> {
        self.section_order
            .iter()
            .map(|s| (*s, self.by_section.get(s).map_or(0, Vec::len)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entry_at(&self, pos: usize) -> &QuestionEntry {
        &self.entries[pos]
    }

    pub(crate) fn tag_positions(&self, folded_tag: &str) -> &[usize] {
        self.by_tag.get(folded_tag).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn folded_prompts(&self) -> impl Iterator<Item = (usize, &str)> {
        self.folded_prompts
            .iter()
            .enumerate()
            .map(|(pos, p)| (pos, p.as_str()))
    }
}
