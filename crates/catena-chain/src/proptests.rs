//! Property-based tests for the chain engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use catena_matrix::DenseMatrix;

    use crate::builder::{ChainBuilder, MatrixChain};
    use crate::dims::DimSequence;
    use crate::planner::plan;
    use crate::solver::ChainSolver;

    /// Minimal cost by exhaustive enumeration, the independent oracle
    /// for the DP.
    fn brute_force_cost(d: &[usize], i: usize, j: usize) -> u64 {
        if i == j {
            return 0;
        }
        (i..j)
            .map(|k| {
                brute_force_cost(d, i, k)
                    + brute_force_cost(d, k + 1, j)
                    + (d[i] * d[k + 1] * d[j + 1]) as u64
            })
            .min()
            .unwrap()
    }

    // Strategy for a compatible chain: extents first, then one flat
    // entry pool covering every matrix.
    fn chain_strategy() -> impl Strategy<Value = (Vec<usize>, Vec<i64>)> {
        prop::collection::vec(1usize..=6, 2..=7).prop_flat_map(|extents| {
            let total: usize = extents.windows(2).map(|w| w[0] * w[1]).sum();
            let pool = prop::collection::vec(-50i64..=50, total);
            (Just(extents), pool)
        })
    }

    fn build_chain(extents: &[usize], pool: &[i64]) -> MatrixChain<i64> {
        let mut builder = ChainBuilder::new();
        let mut offset = 0;
        for w in extents.windows(2) {
            let len = w[0] * w[1];
            builder
                .push(w[0], w[1], pool[offset..offset + len].to_vec())
                .unwrap();
            offset += len;
        }
        builder.finish().unwrap()
    }

    proptest! {
        #[test]
        fn planner_matches_brute_force(extents in prop::collection::vec(1usize..=8, 2..=7)) {
            let dims = DimSequence::from_extents(extents.iter().copied()).unwrap();
            let (cost, _) = plan(&dims);

            let n = dims.num_matrices();
            prop_assert_eq!(cost.cost(0, n - 1), brute_force_cost(&extents, 0, n - 1));
        }

        #[test]
        fn splits_stay_in_range(extents in prop::collection::vec(1usize..=8, 2..=7)) {
            let dims = DimSequence::from_extents(extents.iter().copied()).unwrap();
            let (_, order) = plan(&dims);

            let n = dims.num_matrices();
            for i in 0..n {
                for j in i + 1..n {
                    let k = order.split(i, j);
                    prop_assert!(k >= i && k < j);
                }
            }
        }

        #[test]
        fn parenthesization_is_well_formed(extents in prop::collection::vec(1usize..=8, 2..=7)) {
            let dims = DimSequence::from_extents(extents.iter().copied()).unwrap();
            let (_, order) = plan(&dims);
            let n = dims.num_matrices();
            let paren = crate::paren::parenthesization(&order, 0, n - 1);

            // Balanced parens: one pair per multiplication.
            prop_assert_eq!(paren.matches('(').count(), n - 1);
            prop_assert_eq!(paren.matches(')').count(), n - 1);

            // Symbols A1..An appear exactly once, in increasing order.
            let numbers: Vec<usize> = paren
                .split('A')
                .skip(1)
                .map(|frag| {
                    let digits: String =
                        frag.chars().take_while(char::is_ascii_digit).collect();
                    digits.parse().unwrap()
                })
                .collect();
            let expected: Vec<usize> = (1..=n).collect();
            prop_assert_eq!(numbers, expected);
        }

        #[test]
        fn optimal_product_equals_left_fold((extents, pool) in chain_strategy()) {
            let chain = build_chain(&extents, &pool);

            let mut solver = ChainSolver::new();
            solver.load(chain.clone());
            let optimal = solver.solve();

            // Matrix multiplication is associative: the sequential
            // left-to-right fold is an independent reference result.
            let mut reference: DenseMatrix<i64> = chain.matrix(0);
            for i in 1..chain.len() {
                reference = reference.mm(&chain.matrix(i));
            }
            prop_assert_eq!(optimal, reference);
        }

        #[test]
        fn resolve_is_idempotent((extents, pool) in chain_strategy()) {
            let chain = build_chain(&extents, &pool);

            let mut solver = ChainSolver::new();
            solver.load(chain);
            let first = solver.solve();
            let paren_first = solver.parenthesization();

            solver.clear_plan();
            let second = solver.solve();

            prop_assert_eq!(first, second);
            prop_assert_eq!(paren_first, solver.parenthesization());
        }
    }
}
