//! Incremental chain assembly with a single atomic hand-off.
//!
//! Matrices are validated as they are pushed, but the engine only ever
//! sees the finished [`MatrixChain`]: the builder owns every partially
//! built buffer until [`ChainBuilder::finish`] transfers the whole
//! structure at once.

use smallvec::SmallVec;

use catena_matrix::{DenseMatrix, Scalar};

use crate::dims::{ChainError, DimSequence};

/// Builder accumulating matrices for one chain.
#[derive(Clone, Debug, Default)]
pub struct ChainBuilder<T> {
    buffers: Vec<Vec<T>>,
    extents: SmallVec<[usize; 8]>,
}

impl<T: Scalar> ChainBuilder<T> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffers: Vec::new(),
            extents: SmallVec::new(),
        }
    }

    /// Returns the number of matrices pushed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Returns true if no matrix has been pushed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// Appends a `rows × cols` matrix given as a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// - [`ChainError::ZeroDimension`] if `rows` or `cols` is zero
    /// - [`ChainError::ShapeMismatch`] if `data.len() != rows * cols`
    /// - [`ChainError::IncompatibleDimensions`] if `rows` differs from
    ///   the previous matrix's column count
    pub fn push(
        &mut self,
        rows: usize,
        cols: usize,
        data: Vec<T>,
    ) -> Result<&mut Self, ChainError> {
        let index = self.buffers.len();
        if rows == 0 || cols == 0 {
            return Err(ChainError::ZeroDimension { index });
        }
        if data.len() != rows * cols {
            return Err(ChainError::ShapeMismatch {
                index,
                expected: rows * cols,
                found: data.len(),
            });
        }
        if let Some(&prev_cols) = self.extents.last() {
            if prev_cols != rows {
                return Err(ChainError::IncompatibleDimensions {
                    index,
                    expected: prev_cols,
                    found: rows,
                });
            }
        } else {
            self.extents.push(rows);
        }
        self.extents.push(cols);
        self.buffers.push(data);
        Ok(self)
    }

    /// Finalizes the builder into a [`MatrixChain`].
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::TooShort`] if no matrix was pushed.
    pub fn finish(self) -> Result<MatrixChain<T>, ChainError> {
        if self.buffers.is_empty() {
            return Err(ChainError::TooShort);
        }
        Ok(MatrixChain {
            buffers: self.buffers,
            dims: DimSequence::from_validated(self.extents),
        })
    }
}

/// A finalized, adjacency-compatible chain of matrices.
///
/// Invariants (guaranteed by the builder):
/// - `buffers.len() == dims.num_matrices()`
/// - buffer `i` holds exactly `dims.rows(i) * dims.cols(i)` entries
/// - `dims.cols(i) == dims.rows(i + 1)` for every adjacent pair
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatrixChain<T> {
    buffers: Vec<Vec<T>>,
    dims: DimSequence,
}

impl<T: Scalar> MatrixChain<T> {
    /// Creates a chain with no matrices (the pre-load state).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            buffers: Vec::new(),
            dims: DimSequence::empty(),
        }
    }

    /// Returns the number of matrices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Returns true if the chain holds no matrices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// The shared dimension sequence.
    #[must_use]
    pub fn dims(&self) -> &DimSequence {
        &self.dims
    }

    /// The flat row-major buffer of matrix `i`.
    #[must_use]
    pub fn buffer(&self, i: usize) -> &[T] {
        &self.buffers[i]
    }

    /// Reshapes matrix `i` into its `d[i] × d[i+1]` dense form.
    #[must_use]
    pub fn matrix(&self, i: usize) -> DenseMatrix<T> {
        DenseMatrix::from_flat(self.buffers[i].clone(), self.dims.rows(i), self.dims.cols(i))
    }
}
