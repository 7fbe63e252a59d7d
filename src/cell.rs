//! Pattern 3: Encapsulation
//!
//! The DNA and protein list are private; the only way in is through methods.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

pub const DEFAULT_PROTEINS: [&str; 2] = ["Hemoglobin", "Insulin"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    dna: String,
    proteins: Vec<String>,
}

impl Cell {
    pub fn new(dna: impl Into<String>) -> Self {
        Self::with_proteins(dna, DEFAULT_PROTEINS.iter().map(|p| p.to_string()).collect())
    }

    pub fn with_proteins(dna: impl Into<String>, proteins: Vec<String>) -> Self {
        Self {
            dna: dna.into(),
            proteins,
        }
    }

    pub fn dna(&self) -> &str {
        &self.dna
    }

    pub fn proteins(&self) -> &[String] {
        &self.proteins
    }

    pub fn division_message(&self) -> &'static str {
        "Doing cell division"
    }

    pub fn mitosis(&self) -> io::Result<()> {
        self.write_mitosis(&mut io::stdout())
    }

    pub fn write_mitosis<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.division_message())
    }

    /// Programmed cell death. Takes the cell by value, so it is gone afterwards.
    pub fn apoptosis(self) {}

    pub fn replicate_dna(&self) -> String {
        self.dna.repeat(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_replicate_dna() {
        assert_eq!(Cell::new("ATCG").replicate_dna(), "ATCGATCG");
    }

    #[test]
    fn test_replicate_leaves_dna_untouched() {
        let cell = Cell::new("GATTACA");
        let _ = cell.replicate_dna();
        assert_eq!(cell.dna(), "GATTACA");
    }

    #[test]
    fn test_default_proteins() {
        let cell = Cell::new("ATCG");
        assert_eq!(cell.proteins(), &["Hemoglobin", "Insulin"]);
    }

    #[test]
    fn test_write_mitosis() {
        let mut out = Vec::new();
        Cell::new("ATCG").write_mitosis(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Doing cell division\n");
    }

    #[test]
    fn test_division_message_matches_mitosis_output() {
        let cell = Cell::new("ATCG");
        let mut out = Vec::new();
        cell.write_mitosis(&mut out).unwrap();
        assert_eq!(cell.division_message(), "Doing cell division");
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", cell.division_message()));
        cell.mitosis().unwrap();
    }

    #[test]
    fn test_apoptosis_consumes() {
        let cell = Cell::with_proteins("AT", vec![]);
        cell.apoptosis();
        // `cell` is moved; using it here would not compile.
    }

    proptest! {
        #[test]
        fn test_replica_is_dna_twice(dna in "[ACGT]{0,64}") {
            let replica = Cell::new(dna.clone()).replicate_dna();
            prop_assert_eq!(replica.len(), dna.len() * 2);
            prop_assert!(replica.starts_with(&dna));
            prop_assert!(replica.ends_with(&dna));
        }
    }
}
