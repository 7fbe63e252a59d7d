//! Pattern 2: Polymorphism
//!
//! One capability (`area`), two formulas. The trait-object form keeps the set
//! of shapes open; `ShapeKind` is the closed form where a single `match`
//! does the dispatch.

use crate::format::{format_significant, DEFAULT_PRECISION};
use std::f64::consts::PI;
use std::io::{self, Write};

/// Anything with an area.
pub trait Shape {
    fn area(&self) -> f64;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn name(&self) -> &'static str {
        "circle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn name(&self) -> &'static str {
        "rectangle"
    }
}

/// Closed set of shape variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape for ShapeKind {
    fn area(&self) -> f64 {
        match self {
            ShapeKind::Circle(c) => c.area(),
            ShapeKind::Rectangle(r) => r.area(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle(c) => c.name(),
            ShapeKind::Rectangle(r) => r.name(),
        }
    }
}

impl From<Circle> for ShapeKind {
    fn from(circle: Circle) -> Self {
        ShapeKind::Circle(circle)
    }
}

impl From<Rectangle> for ShapeKind {
    fn from(rectangle: Rectangle) -> Self {
        ShapeKind::Rectangle(rectangle)
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn area(&self) -> f64 {
        (**self).area()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Prints `Area: <area>` for any shape, whichever formula it uses.
pub fn print_area(shape: &dyn Shape) -> io::Result<()> {
    write_area(&mut io::stdout(), shape, DEFAULT_PRECISION)
}

pub fn write_area<W: Write>(out: &mut W, shape: &dyn Shape, precision: usize) -> io::Result<()> {
    writeln!(out, "Area: {}", format_significant(shape.area(), precision))
}

/// Sum of all areas. An empty slice gives `+0.0`; `Iterator::sum` would
/// start from `-0.0` and print as `-0`.
pub fn total_area<S: Shape>(shapes: &[S]) -> f64 {
    shapes.iter().fold(0.0, |acc, s| acc + s.area())
}
