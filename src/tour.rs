//! Runs all three patterns against a `TourConfig` and reports what each one
//! printed.

use crate::config::TourConfig;
use crate::error::Result;
use crate::format::format_significant;
use crate::shape::{total_area, Shape};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TourReport {
    pub sections: Vec<Section>,
    pub total_area: f64,
}

impl TourReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Writes every section of the tour to `out` and returns the same lines as a
/// report.
pub fn run_tour<W: Write>(config: &TourConfig, out: &mut W) -> Result<TourReport> {
    let mut report = TourReport::default();
    let precision = config.output.precision;

    // Pattern 1
    let car = config.car();
    report.sections.push(Section {
        title: "Car Record".to_string(),
        lines: vec![car.to_string()],
    });

    // Pattern 2
    let shapes = config.shapes();
    let mut shape_lines: Vec<String> = shapes
        .iter()
        .map(|s| {
            let shape: &dyn Shape = s;
            format!("Area: {}", format_significant(shape.area(), precision))
        })
        .collect();
    report.total_area = total_area(&shapes);
    shape_lines.push(format!(
        "Total area: {}",
        format_significant(report.total_area, precision)
    ));
    report.sections.push(Section {
        title: "Shape Polymorphism".to_string(),
        lines: shape_lines,
    });

    // Pattern 3
    let cell = config.cell();
    let cell_lines = vec![
        cell.division_message().to_string(),
        format!("Replicated DNA: {}", cell.replicate_dna()),
        format!("Proteins: {}", cell.proteins().join(", ")),
    ];
    cell.apoptosis();
    report.sections.push(Section {
        title: "Cell Encapsulation".to_string(),
        lines: cell_lines,
    });

    for section in &report.sections {
        write_section(out, section, config.output.color)?;
    }
    Ok(report)
}

fn write_section<W: Write>(out: &mut W, section: &Section, color: bool) -> Result<()> {
    let header = format!("=== {} ===", section.title);
    if color {
        writeln!(out, "{}", header.bold().cyan())?;
    } else {
        writeln!(out, "{}", header)?;
    }
    for line in &section.lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    Ok(())
}
