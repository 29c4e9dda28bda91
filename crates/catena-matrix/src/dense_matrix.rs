//! Dense matrix implementation in row-major order.
//!
//! Chain matrices arrive as flat buffers, so the dense representation
//! keeps that exact layout: entry `(r, c)` lives at flat index
//! `r * num_cols + c`.

use std::fmt;
use std::ops::{Index, IndexMut};

use rayon::prelude::*;

use crate::scalar::Scalar;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<T> {
    /// Matrix entries in row-major order.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<T: Scalar> DenseMatrix<T> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![T::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates the empty 0×0 matrix.
    #[must_use]
    pub fn empty() -> Self {
        Self::zeros(0, 0)
    }

    /// Creates a matrix from a 2D vector.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        if rows.is_empty() {
            return Self::empty();
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let data: Vec<T> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Reshapes a flat row-major buffer into a matrix.
    ///
    /// Entry `(r, c)` is read from flat index `r * num_cols + c`.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length is not `num_rows * num_cols`; a
    /// mis-shaped buffer is a caller contract violation, not a
    /// recoverable condition.
    #[must_use]
    pub fn from_flat(data: Vec<T>, num_rows: usize, num_cols: usize) -> Self {
        assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns true if the matrix has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<T> {
        (0..self.num_rows).map(|row| self[(row, col)]).collect()
    }

    /// Returns the flat row-major entry buffer.
    #[must_use]
    pub fn as_flat(&self) -> &[T] {
        &self.data
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions disagree. Operand shapes are
    /// fixed by the dimension sequence at construction time, so a
    /// mismatch here is a contract violation upstream.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = T::zero();
                for k in 0..self.num_cols {
                    sum = sum + self[(i, k)] * other[(k, j)];
                }
                result[(i, j)] = sum;
            }
        }
        result
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)];
            }
        }
        result
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: T) -> Self {
        Self {
            data: self.data.iter().map(|&v| v * scalar).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<T: Scalar + Send + Sync> DenseMatrix<T> {
    /// Matrix-matrix multiply (parallel): C = A * B.
    ///
    /// Row blocks are distributed over the rayon thread pool. Identical
    /// result to [`DenseMatrix::mm`].
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions disagree.
    #[must_use]
    pub fn mm_parallel(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let data: Vec<T> = (0..self.num_rows)
            .into_par_iter()
            .flat_map(|i| {
                (0..other.num_cols)
                    .map(|j| {
                        let mut sum = T::zero();
                        for k in 0..self.num_cols {
                            sum = sum + self[(i, k)] * other[(k, j)];
                        }
                        sum
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Self {
            data,
            num_rows: self.num_rows,
            num_cols: other.num_cols,
        }
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.num_cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.num_cols + col]
    }
}

impl<T: fmt::Display> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.num_rows {
            for col in 0..self.num_cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[row * self.num_cols + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
