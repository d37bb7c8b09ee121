//! Error types for name lookups and cached-profile rehydration.

use thiserror::Error;

use crate::system::ZodiacSystem;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ZodiacError {
    /// Catalog name is not one of `tzolkin`/`full` or `abbreviated`/`legacy`.
    #[error("unknown mayan catalog: {0:?} (use tzolkin or abbreviated)")]
    UnknownCatalog(String),
    /// A stored sign name matches no entry of its system's table.
    #[error("unknown {system} sign: {name:?}")]
    UnknownSign { system: ZodiacSystem, name: String },
    /// Stored Chinese animal or element disagrees with the stored year.
    #[error("chinese sign for {year} is {expected}, not {found}")]
    ChineseYearMismatch {
        year: i32,
        expected: String,
        found: String,
    },
}
