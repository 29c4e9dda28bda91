//! The top-level chain solver.
//!
//! Owns one chain and the plan tables derived from it. A solve rebuilds
//! the plan from scratch and then evaluates the literal product along
//! the recorded splits; the parenthesization and the tables stay
//! queryable until the next load or reset.

use catena_matrix::{DenseMatrix, ParallelConfig, Scalar};

use crate::builder::MatrixChain;
use crate::paren::parenthesization;
use crate::planner::{plan, CostTable, OrderTable};

/// Plans and evaluates one matrix chain at a time.
///
/// Each solver instance owns its tables exclusively; independent chains
/// solved in parallel should each use their own instance.
#[derive(Clone, Debug)]
pub struct ChainSolver<T> {
    chain: MatrixChain<T>,
    cost: CostTable,
    order: OrderTable,
    parallel: ParallelConfig,
}

impl<T: Scalar + Send + Sync> ChainSolver<T> {
    /// Creates a solver with no chain loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parallel_config(ParallelConfig::default())
    }

    /// Creates a solver with an explicit parallel-dispatch config.
    #[must_use]
    pub fn with_parallel_config(parallel: ParallelConfig) -> Self {
        Self {
            chain: MatrixChain::empty(),
            cost: CostTable::empty(),
            order: OrderTable::empty(),
            parallel,
        }
    }

    /// Replaces the loaded chain wholesale.
    ///
    /// Stale plan tables from a previous chain are discarded; callers
    /// never observe a plan that does not match the loaded chain.
    pub fn load(&mut self, chain: MatrixChain<T>) {
        self.chain = chain;
        self.clear_plan();
    }

    /// Plans the optimal order and evaluates the product of the whole
    /// chain.
    ///
    /// The cost and order tables are rebuilt from scratch, then the
    /// product of matrices `[0, n-1]` is computed by recursive descent
    /// over the recorded splits. A single-matrix chain short-circuits to
    /// a reshape of its buffer.
    ///
    /// # Panics
    ///
    /// Panics if no chain is loaded; solving an empty chain is a caller
    /// contract violation.
    pub fn solve(&mut self) -> DenseMatrix<T> {
        let n = self.chain.len();
        assert!(n >= 1, "solve called with no chain loaded");

        let (cost, order) = plan(self.chain.dims());
        self.cost = cost;
        self.order = order;

        self.product_range(0, n - 1)
    }

    /// Evaluates the product of matrices `i..=j` along the planned
    /// splits.
    ///
    /// Recursion depth is bounded by the chain length: every call
    /// strictly shrinks the range.
    fn product_range(&self, i: usize, j: usize) -> DenseMatrix<T> {
        if i == j {
            return self.chain.matrix(i);
        }
        let k = self.order.split(i, j);
        let left = self.product_range(i, k);
        let right = self.product_range(k + 1, j);
        left.mm_auto(&right, &self.parallel)
    }

    /// The optimal bracketing of the last solve, e.g. `"((A1A2)A3)"`.
    ///
    /// Empty string before any solve.
    #[must_use]
    pub fn parenthesization(&self) -> String {
        if self.order.is_empty() {
            return String::new();
        }
        parenthesization(&self.order, 0, self.order.len() - 1)
    }

    /// Minimal scalar-multiplication count of the last solve.
    ///
    /// `None` before any solve.
    #[must_use]
    pub fn optimal_cost(&self) -> Option<u64> {
        if self.cost.is_empty() {
            None
        } else {
            Some(self.cost.cost(0, self.cost.len() - 1))
        }
    }

    /// The cost table of the last solve (empty before any solve).
    #[must_use]
    pub fn cost_table(&self) -> &CostTable {
        &self.cost
    }

    /// The order table of the last solve (empty before any solve).
    #[must_use]
    pub fn order_table(&self) -> &OrderTable {
        &self.order
    }

    /// The currently loaded chain.
    #[must_use]
    pub fn chain(&self) -> &MatrixChain<T> {
        &self.chain
    }

    /// Discards the cost and order tables, keeping the loaded chain.
    pub fn clear_plan(&mut self) {
        self.cost = CostTable::empty();
        self.order = OrderTable::empty();
    }

    /// Discards the loaded chain, keeping any existing plan tables.
    pub fn clear_chain(&mut self) {
        self.chain = MatrixChain::empty();
    }
}

impl<T: Scalar + Send + Sync> Default for ChainSolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ChainBuilder;

    fn chain(specs: &[(usize, usize)]) -> MatrixChain<i64> {
        let mut builder = ChainBuilder::new();
        let mut value = 1i64;
        for &(rows, cols) in specs {
            let data: Vec<i64> = (0..rows * cols)
                .map(|off| value + off as i64)
                .collect();
            value += (rows * cols) as i64;
            builder.push(rows, cols, data).unwrap();
        }
        builder.finish().unwrap()
    }

    #[test]
    fn test_solve_two_matrices() {
        let mut solver = ChainSolver::new();
        solver.load(chain(&[(2, 3), (3, 2)]));

        let product = solver.solve();

        // A (1..6) times B (7..12), computed by hand.
        assert_eq!(
            product,
            DenseMatrix::from_rows(vec![vec![58, 64], vec![139, 154]])
        );
        assert_eq!(solver.parenthesization(), "(A1A2)");
        assert_eq!(solver.optimal_cost(), Some(12));
    }

    #[test]
    fn test_single_matrix_solve_is_reshape() {
        let mut solver = ChainSolver::new();
        solver.load(chain(&[(2, 3)]));

        let product = solver.solve();

        assert_eq!(
            product,
            DenseMatrix::from_flat(vec![1, 2, 3, 4, 5, 6], 2, 3)
        );
        assert_eq!(solver.parenthesization(), "A1");
        assert_eq!(solver.optimal_cost(), Some(0));
        assert_eq!(solver.cost_table().len(), 1);
    }

    #[test]
    fn test_queries_before_solve_are_defaults() {
        let solver = ChainSolver::<i64>::new();

        assert!(solver.chain().is_empty());
        assert!(solver.cost_table().is_empty());
        assert!(solver.order_table().is_empty());
        assert_eq!(solver.parenthesization(), "");
        assert_eq!(solver.optimal_cost(), None);
    }

    #[test]
    #[should_panic(expected = "no chain loaded")]
    fn test_solve_empty_chain_panics() {
        let mut solver = ChainSolver::<i64>::new();
        let _ = solver.solve();
    }

    #[test]
    fn test_load_discards_stale_plan() {
        let mut solver = ChainSolver::new();
        solver.load(chain(&[(2, 3), (3, 2)]));
        let _ = solver.solve();
        assert!(!solver.cost_table().is_empty());

        solver.load(chain(&[(4, 4)]));
        assert!(solver.cost_table().is_empty());
        assert_eq!(solver.parenthesization(), "");
    }

    #[test]
    fn test_resets_are_independent() {
        let mut solver = ChainSolver::new();
        solver.load(chain(&[(2, 3), (3, 2)]));
        let _ = solver.solve();

        solver.clear_chain();
        assert!(solver.chain().is_empty());
        // The plan survives a chain reset and stays queryable.
        assert_eq!(solver.parenthesization(), "(A1A2)");
        assert_eq!(solver.optimal_cost(), Some(12));

        solver.clear_plan();
        assert!(solver.cost_table().is_empty());
        assert_eq!(solver.parenthesization(), "");
    }

    #[test]
    fn test_resolve_after_clear_plan_is_idempotent() {
        let mut solver = ChainSolver::new();
        solver.load(chain(&[(3, 4), (4, 2), (2, 5)]));

        let first = solver.solve();
        let cost_first = solver.cost_table().clone();
        let order_first = solver.order_table().clone();
        let paren_first = solver.parenthesization();

        solver.clear_plan();
        let second = solver.solve();

        assert_eq!(first, second);
        assert_eq!(&cost_first, solver.cost_table());
        assert_eq!(&order_first, solver.order_table());
        assert_eq!(paren_first, solver.parenthesization());
    }

    #[test]
    fn test_parallel_config_does_not_change_result() {
        let c = chain(&[(3, 4), (4, 2), (2, 5), (5, 3)]);

        let mut sequential = ChainSolver::with_parallel_config(ParallelConfig {
            parallel_threshold: usize::MAX,
        });
        let mut parallel = ChainSolver::with_parallel_config(ParallelConfig {
            parallel_threshold: 0,
        });
        sequential.load(c.clone());
        parallel.load(c);

        assert_eq!(sequential.solve(), parallel.solve());
    }
}
