//! PHF-based case table.
//!
//! Provides compile-time perfect hash map lookup for string labels.
//! The table is immutable and must be constructed from a static map.

use natch_core::{CaseLabel, CaseTable, Lookup};

/// A case table based on `phf::Map`.
///
/// Wraps a static reference to a PHF map. Works with any label that can be
/// viewed as a `str`.
///
/// # Example
///
/// ```rust,ignore
/// static COMMANDS: phf::Map<&'static str, fn(Request) -> Reply> = phf_map! {
///     "ping" => ping,
///     "echo" => echo,
/// };
///
/// let dispatcher = Dispatcher::from_parts(command_of, PhfCaseTable::new(&COMMANDS), None);
/// ```
pub struct PhfCaseTable<H: 'static> {
    map: &'static ::phf::Map<&'static str, H>,
}

impl<H: 'static> PhfCaseTable<H> {
    /// Create a new table from a static PHF map.
    pub const fn new(map: &'static ::phf::Map<&'static str, H>) -> Self {
        Self { map }
    }
}

impl<L, H> CaseTable<L, H> for PhfCaseTable<H>
where
    L: CaseLabel + AsRef<str>,
    H: Send + Sync + 'static,
{
    fn lookup(&self, label: &L) -> Lookup<'_, H> {
        self.map.get(label.as_ref()).into()
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

// Note: CaseTableBuilder is not implemented for PhfCaseTable because PHF maps
// are constructed at compile time, not runtime.

#[cfg(test)]
mod tests {
    use super::PhfCaseTable;
    use ::phf::phf_map;
    use natch_core::CaseTable;

    static SIZES: ::phf::Map<&'static str, u32> = phf_map! {
        "small" => 1,
        "large" => 10,
    };

    #[test]
    fn test_phf_lookup() {
        let table = PhfCaseTable::new(&SIZES);

        assert_eq!(CaseTable::<&str, u32>::lookup(&table, &"small").matched(), Some(&1));
        assert_eq!(
            CaseTable::<String, u32>::lookup(&table, &"large".to_string()).matched(),
            Some(&10)
        );
        assert!(!CaseTable::<&str, u32>::contains(&table, &"medium"));
        assert_eq!(CaseTable::<&str, u32>::len(&table), 2);
    }
}
