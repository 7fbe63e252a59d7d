//! # Object-Oriented Patterns in Rust
//!
//! This crate demonstrates the three classic object-oriented ideas with
//! small, self-contained examples:
//!
//! ## Pattern 1: Record Types
//! - Private fields behind a constructor and read accessors
//! - `Display` as the "print yourself" method
//!
//! ## Pattern 2: Polymorphism
//! - A shared `Shape` trait with two implementers
//! - Dynamic dispatch through `&dyn Shape` and `Box<dyn Shape>`
//! - The closed alternative: an enum of variants with one `match`
//!
//! ## Pattern 3: Encapsulation
//! - Internal state only reachable through methods
//! - Consuming `self` to end an object's life
//!
//! The capstone `complete_oop_tour` runs all three against a TOML config.
//!
//! Run examples with: `cargo run --bin <name>`

pub mod car;
pub mod cell;
pub mod config;
pub mod error;
pub mod format;
pub mod shape;
pub mod tour;

pub use car::Car;
pub use cell::Cell;
pub use config::TourConfig;
pub use error::{OopError, Result};
pub use format::format_significant;
pub use shape::{print_area, Circle, Rectangle, Shape, ShapeKind};
pub use tour::{run_tour, TourReport};
