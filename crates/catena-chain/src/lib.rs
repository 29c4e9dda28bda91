//! # catena-chain
//!
//! Matrix-chain multiplication engine for Catena.
//!
//! This crate provides:
//! - A validated dimension model and atomic chain builder
//! - The O(n³) bottom-up cost/order planner
//! - Parenthesization reconstruction from the order table
//! - Recursive evaluation of the literal product along the optimal order
//!
//! ## Quick Start
//!
//! ```
//! use catena_chain::{ChainBuilder, ChainSolver};
//!
//! let mut builder = ChainBuilder::new();
//! builder.push(2, 3, vec![1i64, 2, 3, 4, 5, 6]).unwrap();
//! builder.push(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
//! let chain = builder.finish().unwrap();
//!
//! let mut solver = ChainSolver::new();
//! solver.load(chain);
//! let product = solver.solve();
//!
//! assert_eq!(solver.parenthesization(), "(A1A2)");
//! assert_eq!(product[(0, 0)], 22);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod dims;
pub mod paren;
pub mod planner;
pub mod solver;

pub use builder::{ChainBuilder, MatrixChain};
pub use dims::{ChainError, DimSequence};
pub use paren::parenthesization;
pub use planner::{plan, CostTable, OrderTable, UNSET_COST};
pub use solver::ChainSolver;

#[cfg(test)]
mod proptests;
