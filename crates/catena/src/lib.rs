//! # Catena
//!
//! Optimal matrix-chain multiplication in Rust.
//!
//! Given a chain of compatible matrices, Catena finds the cheapest
//! multiplication order by dynamic programming, reconstructs the
//! optimal parenthesization, and evaluates the literal product along
//! that order.
//!
//! ## Features
//!
//! - **O(n³) planner**: bottom-up cost/order tables with a
//!   deterministic tie-break
//! - **Parenthesization**: `"((A1A2)A3)"`-style bracketing recovered
//!   from the order table
//! - **Evaluation**: recursive divide-and-conquer product, with
//!   rayon-parallel multiplication for large operands
//! - **Validated input**: builder-checked dimension compatibility, so
//!   the engine never re-validates
//!
//! ## Quick Start
//!
//! ```
//! use catena::prelude::*;
//!
//! let mut builder = ChainBuilder::new();
//! builder.push(10, 100, vec![1i64; 1000]).unwrap();
//! builder.push(100, 5, vec![1i64; 500]).unwrap();
//! builder.push(5, 50, vec![1i64; 250]).unwrap();
//!
//! let mut solver = ChainSolver::new();
//! solver.load(builder.finish().unwrap());
//! let product = solver.solve();
//!
//! assert_eq!(solver.optimal_cost(), Some(7500));
//! assert_eq!(solver.parenthesization(), "((A1A2)A3)");
//! assert_eq!(product.num_rows(), 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use catena_chain as chain;
pub use catena_matrix as matrix;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use catena_chain::{
        parenthesization, plan, ChainBuilder, ChainError, ChainSolver, CostTable, DimSequence,
        MatrixChain, OrderTable,
    };
    pub use catena_matrix::{DenseMatrix, ParallelConfig, Scalar};
}
