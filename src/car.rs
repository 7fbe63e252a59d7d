//! Pattern 1: Record Types
//!
//! A plain data holder: private fields, a constructor, read accessors and a
//! display method. No inheritance, no polymorphism.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    make: String,
    model: String,
    year: i32,
}

impl Car {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Prints the car's description line to stdout.
    pub fn display_info(&self) -> io::Result<()> {
        self.write_info(&mut io::stdout())
    }

    pub fn write_info<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Make: {}, Model: {}, Year: {}",
            self.make, self.model, self.year
        )
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new("Toyota", "Corolla", 2020)
    }
}
