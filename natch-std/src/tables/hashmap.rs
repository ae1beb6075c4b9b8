//! HashMap-based case table.
//!
//! This is the default table and works with any [`CaseLabel`].

use natch_core::{CaseLabel, CaseTable, CaseTableBuilder, Lookup};
use std::collections::HashMap;

/// A case table backed by `HashMap`.
#[derive(Debug)]
pub struct HashCaseTable<L, H> {
    map: HashMap<L, H>,
}

impl<L, H> HashCaseTable<L, H> {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Create a table from an existing HashMap.
    pub fn from_map(map: HashMap<L, H>) -> Self {
        Self { map }
    }

    /// Iterate over the registered labels in arbitrary order.
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.map.keys()
    }
}

impl<L, H> Default for HashCaseTable<L, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, H> FromIterator<(L, H)> for HashCaseTable<L, H>
where
    L: CaseLabel,
{
    /// Later pairs replace earlier ones with the same label.
    fn from_iter<T: IntoIterator<Item = (L, H)>>(iter: T) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<L, H> CaseTable<L, H> for HashCaseTable<L, H>
where
    L: CaseLabel,
    H: Send + Sync,
{
    fn lookup(&self, label: &L) -> Lookup<'_, H> {
        self.map.get(label).into()
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

/// Builder for [`HashCaseTable`].
#[derive(Debug)]
pub struct HashCaseTableBuilder<L, H> {
    map: HashMap<L, H>,
}

impl<L, H> Default for HashCaseTableBuilder<L, H> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl<L, H> CaseTableBuilder<L, H> for HashCaseTableBuilder<L, H>
where
    L: CaseLabel,
    H: Send + Sync,
{
    type Table = HashCaseTable<L, H>;

    fn contains(&self, label: &L) -> bool {
        self.map.contains_key(label)
    }

    fn insert(&mut self, label: L, handler: H) -> Option<H> {
        self.map.insert(label, handler)
    }

    fn build(self) -> Self::Table {
        HashCaseTable { map: self.map }
    }
}
