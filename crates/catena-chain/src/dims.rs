//! The shared dimension sequence of a matrix chain.
//!
//! A chain of n matrices is described by n + 1 extents `d[0..=n]`:
//! matrix `i` has shape `d[i] × d[i+1]`. Adjacent matrices are
//! compatible by construction, so everything downstream of this module
//! can trust the sequence without re-validation.

use smallvec::SmallVec;
use thiserror::Error;

/// Errors raised while assembling a chain.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChainError {
    /// Fewer than two dimension markers, i.e. no matrices at all.
    #[error("a chain needs at least one matrix (two dimension markers)")]
    TooShort,

    /// A dimension extent of zero.
    #[error("matrix {index} has a zero dimension")]
    ZeroDimension {
        /// Index of the offending matrix.
        index: usize,
    },

    /// A flat buffer whose length disagrees with its declared shape.
    #[error("matrix {index} buffer holds {found} entries, expected {expected}")]
    ShapeMismatch {
        /// Index of the offending matrix.
        index: usize,
        /// `rows * cols` for the declared shape.
        expected: usize,
        /// Actual buffer length.
        found: usize,
    },

    /// A matrix whose row count differs from its predecessor's columns.
    #[error("matrix {index} has {found} rows, but its predecessor has {expected} columns")]
    IncompatibleDimensions {
        /// Index of the offending matrix.
        index: usize,
        /// Column count of the preceding matrix.
        expected: usize,
        /// Row count of the offending matrix.
        found: usize,
    },
}

/// The ordered extents `d[0..=n]` of an n-matrix chain.
///
/// Chains are short in practice, so the extents are stored inline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DimSequence {
    extents: SmallVec<[usize; 8]>,
}

impl DimSequence {
    /// Creates the empty sequence (no matrices).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a sequence from raw extents.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::TooShort`] for fewer than two extents and
    /// [`ChainError::ZeroDimension`] for any zero extent.
    pub fn from_extents<I>(extents: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = usize>,
    {
        let extents: SmallVec<[usize; 8]> = extents.into_iter().collect();
        if extents.len() < 2 {
            return Err(ChainError::TooShort);
        }
        for (pos, &d) in extents.iter().enumerate() {
            if d == 0 {
                // d[pos] is the row extent of matrix pos (or the column
                // extent of the last matrix when pos == n).
                return Err(ChainError::ZeroDimension {
                    index: pos.min(extents.len() - 2),
                });
            }
        }
        Ok(Self { extents })
    }

    /// Builds a sequence from extents already validated by a builder.
    pub(crate) fn from_validated(extents: SmallVec<[usize; 8]>) -> Self {
        debug_assert!(extents.len() >= 2);
        debug_assert!(extents.iter().all(|&d| d > 0));
        Self { extents }
    }

    /// Returns the number of matrices in the chain.
    #[must_use]
    pub fn num_matrices(&self) -> usize {
        self.extents.len().saturating_sub(1)
    }

    /// Returns true if the sequence describes no matrices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_matrices() == 0
    }

    /// Row count of matrix `i`, i.e. `d[i]`.
    #[must_use]
    pub fn rows(&self, i: usize) -> usize {
        self.extents[i]
    }

    /// Column count of matrix `i`, i.e. `d[i+1]`.
    #[must_use]
    pub fn cols(&self, i: usize) -> usize {
        self.extents[i + 1]
    }

    /// The raw extents `d[0..=n]`.
    #[must_use]
    pub fn extents(&self) -> &[usize] {
        &self.extents
    }
}
