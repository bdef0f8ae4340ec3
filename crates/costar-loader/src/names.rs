use std::collections::{BTreeSet, HashMap};

use costar_core::types::PersonId;

/// Case-folded name → person ids.
///
/// Several people can share one name; candidates come back in ascending id
/// order so disambiguation prompts are stable across runs. This is the only
/// layer that normalizes names; the store compares ids exactly.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    by_name: HashMap<String, BTreeSet<PersonId>>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, id: PersonId) {
        self.by_name.entry(name.to_lowercase()).or_default().insert(id);
    }

    /// All ids recorded for `name`, ignoring case, in ascending order.
    /// Empty when the name is unknown.
    pub fn lookup(&self, name: &str) -> Vec<PersonId> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of distinct (case-folded) names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
