//! TOML configuration for the tour. Every section is optional; the defaults
//! are the inputs the individual demos hard-code.

use crate::car::Car;
use crate::cell::{Cell, DEFAULT_PROTEINS};
use crate::error::{OopError, Result};
use crate::format::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::shape::{Circle, Rectangle, ShapeKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub car: CarSpec,
    pub shapes: Vec<ShapeSpec>,
    pub cell: CellSpec,
    pub output: OutputSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarSpec {
    pub make: String,
    pub model: String,
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellSpec {
    pub dna: String,
    pub proteins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSpec {
    pub precision: usize,
    pub color: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            car: CarSpec::default(),
            shapes: vec![
                ShapeSpec::Circle { radius: 5.0 },
                ShapeSpec::Rectangle {
                    width: 10.0,
                    height: 2.0,
                },
            ],
            cell: CellSpec::default(),
            output: OutputSpec::default(),
        }
    }
}

impl Default for CarSpec {
    fn default() -> Self {
        Self {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
        }
    }
}

impl Default for CellSpec {
    fn default() -> Self {
        Self {
            dna: "ATCG".to_string(),
            proteins: DEFAULT_PROTEINS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            color: true,
        }
    }
}

impl TourConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TourConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        for shape in &self.shapes {
            shape.validate()?;
        }
        if self.cell.dna.is_empty() {
            return Err(OopError::EmptyDna);
        }
        if !(1..=MAX_PRECISION).contains(&self.output.precision) {
            return Err(OopError::InvalidPrecision(self.output.precision));
        }
        Ok(())
    }

    pub fn car(&self) -> Car {
        Car::new(&self.car.make, &self.car.model, self.car.year)
    }

    pub fn shapes(&self) -> Vec<ShapeKind> {
        self.shapes.iter().map(|s| s.to_shape()).collect()
    }

    pub fn cell(&self) -> Cell {
        Cell::with_proteins(&self.cell.dna, self.cell.proteins.clone())
    }
}

impl ShapeSpec {
    fn validate(&self) -> Result<()> {
        let dimensions = match *self {
            ShapeSpec::Circle { radius } => vec![("radius", radius)],
            ShapeSpec::Rectangle { width, height } => vec![("width", width), ("height", height)],
        };
        for (field, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(OopError::invalid_dimension(self.kind(), field, value));
            }
        }
        Ok(())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ShapeSpec::Circle { .. } => "circle",
            ShapeSpec::Rectangle { .. } => "rectangle",
        }
    }

    pub fn to_shape(&self) -> ShapeKind {
        match *self {
            ShapeSpec::Circle { radius } => Circle::new(radius).into(),
            ShapeSpec::Rectangle { width, height } => Rectangle::new(width, height).into(),
        }
    }
}
