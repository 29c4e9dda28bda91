//! Bottom-up cost/order planning for a matrix chain.
//!
//! The classical recurrence over sub-chain ranges `[i, j]`:
//!
//! ```text
//! cost[i][i] = 0
//! cost[i][j] = min over k in [i, j) of
//!              cost[i][k] + cost[k+1][j] + d[i] * d[k+1] * d[j+1]
//! order[i][j] = the k achieving the minimum
//! ```
//!
//! Ranges are visited by increasing length, so both sub-ranges of every
//! candidate split are already final when they are read. O(n³) time,
//! O(n²) space.

use catena_matrix::DenseMatrix;

use crate::dims::DimSequence;

/// Transient marker for a cost cell no candidate split has reached yet.
///
/// Strictly greater than any attainable real cost, so the first
/// candidate always replaces it.
pub const UNSET_COST: u64 = u64::MAX;

/// Minimal scalar-multiplication counts per sub-chain range.
///
/// `cost(i, j)` is the cheapest way to multiply matrices `i..=j`; only
/// the upper triangle (`j >= i`) is meaningful and the diagonal is
/// always zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostTable {
    table: DenseMatrix<u64>,
}

impl CostTable {
    /// Creates the empty 0×0 table (the pre-solve state).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            table: DenseMatrix::empty(),
        }
    }

    /// Returns true if no plan has been computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of matrices the table was planned for.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.num_rows()
    }

    /// Minimal scalar multiplications for the range `[i, j]`.
    #[must_use]
    pub fn cost(&self, i: usize, j: usize) -> u64 {
        self.table[(i, j)]
    }

    /// The underlying square table.
    #[must_use]
    pub fn as_matrix(&self) -> &DenseMatrix<u64> {
        &self.table
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::empty()
    }
}

/// Optimal split points per sub-chain range.
///
/// `split(i, j)` is the index `k` of the last matrix in the left
/// sub-chain at the optimal split of `[i, j]`; meaningful for `j > i`
/// only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderTable {
    table: DenseMatrix<usize>,
}

impl OrderTable {
    /// Creates the empty 0×0 table (the pre-solve state).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            table: DenseMatrix::empty(),
        }
    }

    /// Returns true if no plan has been computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of matrices the table was planned for.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.num_rows()
    }

    /// Optimal split point for the range `[i, j]`, with `i <= k < j`.
    #[must_use]
    pub fn split(&self, i: usize, j: usize) -> usize {
        self.table[(i, j)]
    }

    /// The underlying square table.
    #[must_use]
    pub fn as_matrix(&self) -> &DenseMatrix<usize> {
        &self.table
    }
}

impl Default for OrderTable {
    fn default() -> Self {
        Self::empty()
    }
}

/// Plans the optimal multiplication order for `dims`.
///
/// Any previous plan is irrelevant: the tables are rebuilt from scratch
/// on every call. A single-matrix chain yields 1×1 zero tables without
/// entering the recurrence.
///
/// Ties between splits of equal cost keep the first (smallest) `k`
/// encountered; the strict `<` below is what makes the choice, and with
/// it the printed parenthesization, deterministic.
///
/// # Panics
///
/// Panics on an empty dimension sequence; planning nothing is a caller
/// contract violation.
#[must_use]
pub fn plan(dims: &DimSequence) -> (CostTable, OrderTable) {
    let n = dims.num_matrices();
    assert!(n >= 1, "cannot plan an empty chain");

    let mut cost = DenseMatrix::<u64>::zeros(n, n);
    let mut order = DenseMatrix::<usize>::zeros(n, n);

    for len in 2..=n {
        for i in 0..=(n - len) {
            let j = i + len - 1;
            cost[(i, j)] = UNSET_COST;
            for k in i..j {
                let fuse = (dims.rows(i) as u64) * (dims.cols(k) as u64) * (dims.cols(j) as u64);
                let q = cost[(i, k)] + cost[(k + 1, j)] + fuse;
                if q < cost[(i, j)] {
                    cost[(i, j)] = q;
                    order[(i, j)] = k;
                }
            }
        }
    }

    (CostTable { table: cost }, OrderTable { table: order })
}
