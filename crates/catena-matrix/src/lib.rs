//! # catena-matrix
//!
//! Dense matrix storage and multiplication for the Catena chain solver.
//!
//! This crate provides:
//! - Row-major dense matrices over any integer-like scalar
//! - Sequential and rayon-parallel matrix products
//! - A size-based dispatch between the two via [`ParallelConfig`]
//!
//! Matrices are stored as a single flat buffer, which keeps the memory
//! layout identical to the flattened form in which chain matrices are
//! loaded and makes reshaping a copy-free concern of indexing only.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod parallel;
pub mod scalar;

pub use dense_matrix::DenseMatrix;
pub use parallel::ParallelConfig;
pub use scalar::Scalar;
