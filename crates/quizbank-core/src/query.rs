//! Derived, read-only views over a [`CatalogStore`].

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::error::CatalogError;
use crate::model::QuestionEntry;
use crate::store::CatalogStore;

/// Query surface over a built catalog. Never mutates the store.
#[derive(Debug, Clone, Copy)]
pub struct QueryService<'a> {
    store: &'a CatalogStore,
}

impl<'a> QueryService<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// Exact lookup, forwarded to the store.
    pub fn get(&self, id: &str) -> Result<&'a QuestionEntry, CatalogError> {
        self.store.get(id)
    }

    /// Entries whose prompt contains `text`, ignoring case, in catalog order.
    ///
    /// The empty string matches every entry.
    pub fn filter_by_keyword(&self, text: &str) -> Vec<&'a QuestionEntry> {
        let needle = text.to_lowercase();
        self.store
            .folded_prompts()
            .filter(|(_, prompt)| prompt.contains(&needle))
            .map(|(pos, _)| self.store.entry_at(pos))
            .collect()
    }

    /// Entries carrying `tag`, ignoring case, in catalog order.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<&'a QuestionEntry> {
        self.store
            .tag_positions(&tag.to_lowercase())
            .iter()
            .map(|&pos| self.store.entry_at(pos))
            .collect()
    }

    /// `n` distinct entries chosen at random.
    ///
    /// The same `seed` over the same catalog always yields the same sequence.
    /// Without a seed a generator is seeded from the OS for this call only.
    pub fn random_sample(
        &self,
        n: usize,
        seed: Option<u64>,
    ) -> Result<Vec<&'a QuestionEntry>, CatalogError> {
        let available = self.store.len();
        if n > available {
            return Err(CatalogError::InsufficientEntries {
                requested: n,
                available,
            });
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(index::sample(&mut rng, available, n)
            .into_iter()
            .map(|pos| self.store.entry_at(pos))
            .collect())
    }
}
