//! The scalar trait seam for matrix entries.

use std::fmt::Debug;
use std::ops::{Add, Mul};

use num_traits::{One, Zero};

/// An entry type a dense matrix can be built over.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
///
/// All primitive integer types satisfy these via the blanket impl.
pub trait Scalar:
    Copy + Eq + Debug + Zero + One + Add<Output = Self> + Mul<Output = Self>
{
}

impl<T> Scalar for T where
    T: Copy + Eq + Debug + Zero + One + Add<Output = T> + Mul<Output = T>
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_scalar<T: Scalar>() {}

    #[test]
    fn test_primitive_integers_are_scalars() {
        assert_scalar::<i32>();
        assert_scalar::<i64>();
        assert_scalar::<u64>();
        assert_scalar::<usize>();
    }
}
