//! Size-based dispatch between sequential and parallel multiplication.
//!
//! Spawning rayon tasks for a handful of dot products costs more than it
//! saves, so the product of two small matrices stays on the calling
//! thread and only large results fan out to the pool.

use crate::dense_matrix::DenseMatrix;
use crate::scalar::Scalar;

/// Configuration for parallel matrix products.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum number of result entries to enable parallelism.
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
        }
    }
}

impl<T: Scalar + Send + Sync> DenseMatrix<T> {
    /// Matrix-matrix multiply, parallel when the result is large enough.
    ///
    /// Falls back to the sequential triple loop below
    /// `config.parallel_threshold` result entries.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions disagree.
    #[must_use]
    pub fn mm_auto(&self, other: &Self, config: &ParallelConfig) -> Self {
        if self.num_rows() * other.num_cols() < config.parallel_threshold {
            self.mm(other)
        } else {
            self.mm_parallel(other)
        }
    }
}
