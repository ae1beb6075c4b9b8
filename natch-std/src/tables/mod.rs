//! # Case Table Implementations
//!
//! | Table | Labels | Lookup |
//! |-------|--------|--------|
//! | [`HashCaseTable`] | any `CaseLabel` | hash map, the default |
//! | [`SortedCaseTable`] | `Ord` labels | binary search over a sorted vector |
//! | `PhfCaseTable` | string labels | static perfect-hash map (`phf` feature) |

pub mod hashmap;
#[cfg(feature = "phf")]
pub mod phf;
pub mod sorted;

pub use hashmap::{HashCaseTable, HashCaseTableBuilder};
#[cfg(feature = "phf")]
pub use self::phf::PhfCaseTable;
pub use sorted::{SortedCaseTable, SortedCaseTableBuilder};
