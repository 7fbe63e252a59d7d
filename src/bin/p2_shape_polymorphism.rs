//! Pattern 2: Polymorphism
//!
//! Run with: cargo run --bin p2_shape_polymorphism

use oop_basics::{print_area, Circle, Rectangle};
use std::io;

fn main() -> io::Result<()> {
    let circle = Circle::new(5.0);
    let rectangle = Rectangle::new(10.0, 2.0);

    // Same function, different formula per type.
    print_area(&circle)?;
    print_area(&rectangle)?;
    Ok(())
}
