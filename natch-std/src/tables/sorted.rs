//! Sorted-vector case table.
//!
//! Keeps cases ordered by label and finds them with binary search. Useful
//! for small tables of `Ord` labels and when the cases should be listed in a
//! stable order.

use natch_core::{CaseLabel, CaseTable, CaseTableBuilder, Lookup};

/// A case table stored as a vector sorted by label.
#[derive(Debug)]
pub struct SortedCaseTable<L, H> {
    // Sorted by label, labels unique.
    cases: Vec<(L, H)>,
}

impl<L: Ord, H> SortedCaseTable<L, H> {
    /// Build a table from pairs in any order.
    ///
    /// Later pairs replace earlier ones with the same label.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (L, H)>) -> Self {
        let mut builder = SortedCaseTableBuilder::default();
        for (label, handler) in pairs {
            builder.insert_sorted(label, handler);
        }
        Self {
            cases: builder.cases,
        }
    }

    #[inline]
    fn position(&self, label: &L) -> Option<usize> {
        self.cases.binary_search_by(|(k, _)| k.cmp(label)).ok()
    }

    /// Iterate over the registered labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.cases.iter().map(|(label, _)| label)
    }
}

impl<L, H> CaseTable<L, H> for SortedCaseTable<L, H>
where
    L: CaseLabel + Ord,
    H: Send + Sync,
{
    fn lookup(&self, label: &L) -> Lookup<'_, H> {
        self.position(label).map(|idx| &self.cases[idx].1).into()
    }

    fn len(&self) -> usize {
        self.cases.len()
    }
}

/// Builder for [`SortedCaseTable`].
#[derive(Debug)]
pub struct SortedCaseTableBuilder<L, H> {
    cases: Vec<(L, H)>,
}

impl<L, H> Default for SortedCaseTableBuilder<L, H> {
    fn default() -> Self {
        Self { cases: Vec::new() }
    }
}

impl<L: Ord, H> SortedCaseTableBuilder<L, H> {
    fn insert_sorted(&mut self, label: L, handler: H) -> Option<H> {
        match self.cases.binary_search_by(|(k, _)| k.cmp(&label)) {
            Ok(idx) => Some(std::mem::replace(&mut self.cases[idx].1, handler)),
            Err(idx) => {
                self.cases.insert(idx, (label, handler));
                None
            }
        }
    }
}

impl<L, H> CaseTableBuilder<L, H> for SortedCaseTableBuilder<L, H>
where
    L: CaseLabel + Ord,
    H: Send + Sync,
{
    type Table = SortedCaseTable<L, H>;

    fn contains(&self, label: &L) -> bool {
        self.cases.binary_search_by(|(k, _)| k.cmp(label)).is_ok()
    }

    fn insert(&mut self, label: L, handler: H) -> Option<H> {
        self.insert_sorted(label, handler)
    }

    fn build(self) -> Self::Table {
        SortedCaseTable { cases: self.cases }
    }
}
