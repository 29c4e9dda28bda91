//! Parenthesization reconstruction from a finalized order table.

use crate::planner::OrderTable;

/// Renders the optimal bracketing of matrices `i..=j` as a string.
///
/// Matrices appear as `A1..An` (1-indexed display). A single matrix is
/// rendered bare, with no enclosing parentheses; every multiplication
/// adds exactly one pair. Pure read of the order table, so this can run
/// before, after, or alongside product evaluation.
#[must_use]
pub fn parenthesization(order: &OrderTable, i: usize, j: usize) -> String {
    let mut out = String::new();
    append_range(order, i, j, &mut out);
    out
}

fn append_range(order: &OrderTable, i: usize, j: usize, out: &mut String) {
    if i == j {
        out.push('A');
        out.push_str(&(i + 1).to_string());
    } else {
        let k = order.split(i, j);
        out.push('(');
        append_range(order, i, k, out);
        append_range(order, k + 1, j, out);
        out.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dims::DimSequence;
    use crate::planner::plan;

    #[test]
    fn test_single_matrix_has_no_parens() {
        let (_, order) = plan(&DimSequence::from_extents([2, 3]).unwrap());
        assert_eq!(parenthesization(&order, 0, 0), "A1");
    }

    #[test]
    fn test_textbook_three_chain() {
        let (_, order) = plan(&DimSequence::from_extents([10, 100, 5, 50]).unwrap());
        assert_eq!(parenthesization(&order, 0, 2), "((A1A2)A3)");
    }

    #[test]
    fn test_right_leaning_chain() {
        // 50×10 · 10×100 · 100×5: A1 (A2 A3) costs 7500 vs 75000.
        let (_, order) = plan(&DimSequence::from_extents([50, 10, 100, 5]).unwrap());
        assert_eq!(parenthesization(&order, 0, 2), "(A1(A2A3))");
    }

    #[test]
    fn test_sub_range_rendering() {
        let (_, order) = plan(&DimSequence::from_extents([10, 100, 5, 50]).unwrap());
        assert_eq!(parenthesization(&order, 0, 1), "(A1A2)");
        assert_eq!(parenthesization(&order, 2, 2), "A3");
    }

    #[test]
    fn test_double_digit_names() {
        // Uniform chain of 12 matrices; names run A1..A12.
        let (_, order) = plan(&DimSequence::from_extents(vec![2; 13]).unwrap());
        let paren = parenthesization(&order, 0, 11);
        assert!(paren.contains("A12"));
        assert_eq!(paren.matches('A').count(), 12);
    }
}
