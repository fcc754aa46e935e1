use sparsegrid_core::{Coordinate, CoordinateError, SparseGrid};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CoordinateError> {
    // RUST_LOG=sparsegrid_core=trace shows every stored and erased cell
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut grid: SparseGrid<i32> = SparseGrid::new();

    println!("=== Write and read back ===");
    grid.row_mut(100).cell(100).set(314);
    println!("grid[100][100] = {}", grid.row(100).cell(100).get());
    println!("size = {}", grid.size());

    println!("\n=== Writing the default erases ===");
    grid.row_mut(100).cell(100).set(0);
    println!("grid[100][100] = {}", grid.row(100).cell(100).get());
    println!("size = {}", grid.size());

    println!("\n=== Chained assignment ===");
    grid.row_mut(5).cell(5).set(7).set(0).set(9);
    println!("grid[5][5] = {}", grid[(5, 5)]);
    println!("size = {}", grid.size());

    println!("\n=== Iteration in coordinate order ===");
    grid.clear();
    grid.put(0, 0, 1);
    grid.put(-3, 2, 2);
    grid.put(-3, 1, 3);
    for (x, y, value) in &grid {
        println!("  ({}, {}) -> {}", x, y, value);
    }

    println!("\n=== Cells in a rectangle ===");
    let start: Coordinate = "-5,0".parse()?;
    let end: Coordinate = "0,1".parse()?;
    for (x, y, value) in grid.cells_in_range(start, end) {
        println!("  ({}, {}) -> {}", x, y, value);
    }

    Ok(())
}
