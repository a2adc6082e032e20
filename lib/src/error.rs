//! Error types for bitmap conversion.

use thiserror::Error;

use crate::block_set::BlockSet;

/// Result type for pseudographics operations.
pub type Result<T> = std::result::Result<T, PseudographicsError>;

/// Errors that can occur while selecting a block set or building a bitmap.
///
/// Rendering itself never fails; these are raised at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PseudographicsError {
    /// The block set name does not match any known set.
    #[error("unknown block set '{0}'")]
    InvalidBlockSet(String),

    /// A pattern index outside the block set's glyph table.
    #[error("pattern {pattern} is out of range for {block_set} (expected < {limit})")]
    InvalidPattern {
        /// Block set the lookup was made against.
        block_set: BlockSet,
        /// The offending pattern index.
        pattern: usize,
        /// Number of entries in the glyph table.
        limit: usize,
    },

    /// Input rows do not all have the same length.
    #[error("row {row} has {found} pixels, expected {expected}")]
    RaggedRows {
        /// Index of the first mismatching row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the mismatching row.
        found: usize,
    },

    /// Render options failed validation.
    #[error("invalid render options: {0}")]
    InvalidConfig(String),
}
