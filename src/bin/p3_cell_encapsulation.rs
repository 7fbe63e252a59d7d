//! Pattern 3: Encapsulation
//!
//! Run with: cargo run --bin p3_cell_encapsulation

use oop_basics::Cell;
use std::io;

fn main() -> io::Result<()> {
    let cell = Cell::new("ATCG");
    cell.mitosis()
}
