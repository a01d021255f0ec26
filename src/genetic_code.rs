//! Genetic code definitions.
//!
//! This module provides:
//! - `CodonTable`: an immutable codon to amino acid mapping with start and
//!   stop codon sets
//! - Named NCBI translation tables (1-6 and 11)
//!
//! Tables are plain values. Nothing here is global: every constructor
//! returns a fresh table that callers pass to the translator by reference.

use std::collections::{BTreeSet, HashMap};

/// NCBI base order used by the 64-letter amino acid strings.
const NCBI_BASES: [char; 4] = ['T', 'C', 'A', 'G'];

/// A genetic code table for translating codons to amino acids.
///
/// `table` holds sense codons only; stop codons live in `stop_codons`. A
/// hand-built table may still list a codon in both places, which the
/// translator detects and reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonTable {
    /// NCBI genetic code ID
    pub id: u8,
    /// Name of the genetic code
    pub name: String,
    table: HashMap<String, char>,
    start_codons: BTreeSet<String>,
    stop_codons: BTreeSet<String>,
}

impl CodonTable {
    /// Creates a table from caller-supplied parts.
    ///
    /// No consistency checks are made. Codons are expected in upper case.
    pub fn new<T, S, P>(id: u8, name: impl Into<String>, table: T, start_codons: S, stop_codons: P) -> Self
    where
        T: IntoIterator<Item = (String, char)>,
        S: IntoIterator<Item = String>,
        P: IntoIterator<Item = String>,
    {
        Self {
            id,
            name: name.into(),
            table: table.into_iter().collect(),
            start_codons: start_codons.into_iter().collect(),
            stop_codons: stop_codons.into_iter().collect(),
        }
    }

    /// Builds a table from an NCBI `ncbieaa` string.
    ///
    /// # Arguments
    /// * `id` - NCBI genetic code ID
    /// * `name` - Name of the genetic code
    /// * `ncbieaa` - 64-character string of amino acids (NCBI format)
    /// * `starts` - Codons that may start translation
    fn from_ncbi(id: u8, name: &str, ncbieaa: &str, starts: &[&str]) -> Self {
        let mut table = HashMap::with_capacity(64);
        let mut stop_codons = BTreeSet::new();

        // NCBI order: TTT, TTC, TTA, TTG, TCT, TCC, ... (Base1, Base2, Base3)
        let mut residues = ncbieaa.chars();
        for &b1 in &NCBI_BASES {
            for &b2 in &NCBI_BASES {
                for &b3 in &NCBI_BASES {
                    let codon: String = [b1, b2, b3].iter().collect();
                    match residues.next().unwrap_or('X') {
                        '*' => {
                            stop_codons.insert(codon);
                        }
                        aa => {
                            table.insert(codon, aa);
                        }
                    }
                }
            }
        }

        Self {
            id,
            name: name.to_string(),
            table,
            start_codons: starts.iter().map(|s| s.to_string()).collect(),
            stop_codons,
        }
    }

    /// The standard genetic code (NCBI table 1).
    pub fn standard() -> Self {
        Self::from_ncbi(
            1,
            "Standard",
            "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
            &["TTG", "CTG", "ATG"],
        )
    }

    /// Vertebrate mitochondrial code (NCBI table 2).
    pub fn vertebrate_mitochondrial() -> Self {
        Self::from_ncbi(
            2,
            "Vertebrate Mitochondrial",
            "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG",
            &["ATT", "ATC", "ATA", "ATG", "GTG"],
        )
    }

    /// Yeast mitochondrial code (NCBI table 3).
    pub fn yeast_mitochondrial() -> Self {
        Self::from_ncbi(
            3,
            "Yeast Mitochondrial",
            "FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
            &["ATA", "ATG", "GTG"],
        )
    }

    /// Mold, protozoan and coelenterate mitochondrial code (NCBI table 4).
    pub fn mold_mitochondrial() -> Self {
        Self::from_ncbi(
            4,
            "Mold/Protozoan/Coelenterate Mitochondrial",
            "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
            &["TTA", "TTG", "CTG", "ATT", "ATC", "ATA", "ATG", "GTG"],
        )
    }

    /// Invertebrate mitochondrial code (NCBI table 5).
    pub fn invertebrate_mitochondrial() -> Self {
        Self::from_ncbi(
            5,
            "Invertebrate Mitochondrial",
            "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG",
            &["TTG", "ATT", "ATC", "ATA", "ATG", "GTG"],
        )
    }

    /// Ciliate, dasycladacean and hexamita nuclear code (NCBI table 6).
    pub fn ciliate_nuclear() -> Self {
        Self::from_ncbi(
            6,
            "Ciliate/Dasycladacean/Hexamita Nuclear",
            "FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
            &["ATG"],
        )
    }

    /// Bacterial, archaeal and plant plastid code (NCBI table 11).
    pub fn bacterial() -> Self {
        Self::from_ncbi(
            11,
            "Bacterial/Archaeal/Plant Plastid",
            "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
            &["TTG", "CTG", "ATT", "ATC", "ATA", "ATG", "GTG"],
        )
    }

    /// Gets a named NCBI table by ID.
    pub fn ncbi(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::standard()),
            2 => Some(Self::vertebrate_mitochondrial()),
            3 => Some(Self::yeast_mitochondrial()),
            4 => Some(Self::mold_mitochondrial()),
            5 => Some(Self::invertebrate_mitochondrial()),
            6 => Some(Self::ciliate_nuclear()),
            11 => Some(Self::bacterial()),
            _ => None,
        }
    }

    /// IDs accepted by [`CodonTable::ncbi`].
    pub fn available_ids() -> &'static [u8] {
        &[1, 2, 3, 4, 5, 6, 11]
    }

    /// Codon to amino acid mapping (sense codons).
    pub fn table(&self) -> &HashMap<String, char> {
        &self.table
    }

    pub fn start_codons(&self) -> &BTreeSet<String> {
        &self.start_codons
    }

    pub fn stop_codons(&self) -> &BTreeSet<String> {
        &self.stop_codons
    }

    /// Looks up the amino acid for an upper-case codon.
    pub fn amino_acid(&self, codon: &str) -> Option<char> {
        self.table.get(codon).copied()
    }

    pub fn is_start(&self, codon: &str) -> bool {
        self.start_codons.contains(codon)
    }

    pub fn is_stop(&self, codon: &str) -> bool {
        self.stop_codons.contains(codon)
    }

    /// Codons listed both as sense codons and as stop codons, sorted.
    pub fn duals(&self) -> Vec<String> {
        self.stop_codons
            .iter()
            .filter(|codon| self.table.contains_key(codon.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_code_lookup() {
        let standard = CodonTable::standard();

        assert_eq!(standard.id, 1);
        assert_eq!(standard.amino_acid("ATG"), Some('M'));
        assert_eq!(standard.amino_acid("TTT"), Some('F')); // Phenylalanine
        assert_eq!(standard.amino_acid("GGG"), Some('G')); // Glycine
        assert_eq!(standard.amino_acid("GCA"), Some('A'));
        // Stop codons are not sense codons
        assert_eq!(standard.amino_acid("TAA"), None);
        assert_eq!(standard.table().len(), 61);
    }

    #[test]
    fn test_standard_start_and_stop() {
        let standard = CodonTable::standard();

        let stops: Vec<&str> = standard.stop_codons().iter().map(String::as_str).collect();
        assert_eq!(stops, vec!["TAA", "TAG", "TGA"]);
        assert!(standard.is_start("ATG"));
        assert!(standard.is_start("TTG"));
        assert!(!standard.is_start("GTG"));
        assert!(standard.is_stop("TGA"));
        assert!(standard.duals().is_empty());
    }

    #[test]
    fn test_different_genetic_codes() {
        // In standard code, TGA is stop
        assert!(CodonTable::ncbi(1).unwrap().is_stop("TGA"));

        // In vertebrate mitochondrial (code 2), TGA is Trp (W)
        let vert_mito = CodonTable::ncbi(2).unwrap();
        assert_eq!(vert_mito.amino_acid("TGA"), Some('W'));
        assert!(vert_mito.is_stop("AGA"));
        assert!(vert_mito.is_stop("AGG"));

        // Ciliates read TAA and TAG as glutamine
        let ciliate = CodonTable::ncbi(6).unwrap();
        assert_eq!(ciliate.amino_acid("TAA"), Some('Q'));
        assert_eq!(ciliate.stop_codons().len(), 1);
    }

    #[test]
    fn test_every_available_id_resolves() {
        for &id in CodonTable::available_ids() {
            let table = CodonTable::ncbi(id).unwrap();
            assert_eq!(table.id, id);
            assert_eq!(table.table().len() + table.stop_codons().len(), 64);
            assert!(table.duals().is_empty());
        }
        assert!(CodonTable::ncbi(7).is_none());
        assert!(CodonTable::ncbi(0).is_none());
    }

    #[test]
    fn test_fresh_values_compare_equal() {
        assert_eq!(CodonTable::standard(), CodonTable::default());
        assert_ne!(CodonTable::standard(), CodonTable::bacterial());
    }

    #[test]
    fn test_duals_detected_in_custom_table() {
        let table = CodonTable::new(
            99,
            "Overlapping",
            vec![("ATG".to_string(), 'M'), ("TGA".to_string(), 'W')],
            vec!["ATG".to_string()],
            vec!["TAA".to_string(), "TGA".to_string()],
        );
        assert_eq!(table.duals(), vec!["TGA".to_string()]);
        assert_eq!(table.name, "Overlapping");
    }
}
