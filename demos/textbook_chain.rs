//! Walkthrough of the classic 10×100 · 100×5 · 5×50 chain.
//!
//! Run with: `cargo run --example textbook_chain`

use catena::prelude::*;

fn main() {
    let mut builder = ChainBuilder::new();
    builder.push(10, 100, vec![1i64; 1000]).unwrap();
    builder.push(100, 5, vec![1i64; 500]).unwrap();
    builder.push(5, 50, vec![1i64; 250]).unwrap();

    let mut solver = ChainSolver::new();
    solver.load(builder.finish().unwrap());
    let product = solver.solve();

    println!("optimal cost:      {}", solver.optimal_cost().unwrap());
    println!("parenthesization:  {}", solver.parenthesization());
    println!(
        "product shape:     {}x{}",
        product.num_rows(),
        product.num_cols()
    );

    println!("\ncost table (upper triangle):");
    print!("{}", solver.cost_table().as_matrix());

    println!("\norder table (upper triangle):");
    print!("{}", solver.order_table().as_matrix());
}
