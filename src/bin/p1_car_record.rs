//! Pattern 1: Record Types
//!
//! Run with: cargo run --bin p1_car_record

use oop_basics::Car;
use std::io;

fn main() -> io::Result<()> {
    let my_car = Car::new("Toyota", "Corolla", 2020);
    my_car.display_info()
}
