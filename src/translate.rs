//! Codon translation of nucleotide sequences.
//!
//! Translation reads the sequence in non-overlapping triplets from the first
//! base and looks each one up in a [`CodonTable`]. Options control what
//! happens at stop codons, whether the input must be a complete coding
//! sequence (CDS), and how gapped codons (`---`) are rendered.
//!
//! ## Rules
//!
//! - Translation is case-insensitive
//! - Codons are looked up as written; an RNA codon the table does not know
//!   is retried with `U` read as `T`
//! - Trailing one or two bases that do not form a codon are ignored
//! - Codons present both in the table and among the stop codons are
//!   translated as amino acids, with a warning
//! - In CDS mode the protein always starts with `M`

use log::{debug, warn};
use thiserror::Error;

use crate::genetic_code::CodonTable;

/// Errors that can occur during translation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("First codon '{0}' is not a start codon")]
    InvalidStartCodon(String),

    #[error("Final codon '{0}' is not a stop codon")]
    InvalidStopCodon(String),

    #[error("Sequence length {0} is not a multiple of three")]
    LengthNotMultipleOfThree(usize),

    #[error("Extra in-frame stop codon '{0}' found")]
    UnexpectedStopCodon(String),

    #[error("Cannot stop at stop codons: {} also code for amino acids", .0.join(", "))]
    AmbiguousStopCodon(Vec<String>),

    #[error("Gap character must be exactly one character, got '{0}'")]
    InvalidGapCharacter(String),

    #[error("Codon '{0}' is invalid")]
    InvalidCodon(String),
}

/// Result type for translation.
pub type TranslationResult<T> = Result<T, TranslationError>;

/// Translation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Symbol emitted for a stop codon when not stopping
    pub stop_sign: char,
    /// Stop at the first stop codon instead of emitting `stop_sign`
    pub to_stop: bool,
    /// Require a complete coding sequence (start codon, stop codon, length % 3 == 0)
    pub cds: bool,
    /// Gap character; a codon made of three gaps translates to one gap
    pub gap: Option<String>,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            stop_sign: '*',
            to_stop: false,
            cds: false,
            gap: None,
        }
    }
}

impl TranslateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_sign(mut self, stop_sign: char) -> Self {
        self.stop_sign = stop_sign;
        self
    }

    pub fn to_stop(mut self, to_stop: bool) -> Self {
        self.to_stop = to_stop;
        self
    }

    pub fn cds(mut self, cds: bool) -> Self {
        self.cds = cds;
        self
    }

    pub fn with_gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = Some(gap.into());
        self
    }
}

/// Translates a nucleotide sequence into a protein sequence.
///
/// # Arguments
///
/// * `sequence` - The nucleotide sequence (DNA or RNA, any case)
/// * `table` - The codon table; borrowed, never modified
/// * `options` - Stop, CDS and gap handling
///
/// # Examples
///
/// ```
/// use seqtools::genetic_code::CodonTable;
/// use seqtools::translate::{translate, TranslateOptions};
///
/// let table = CodonTable::standard();
/// let protein = translate("ATGGCATAA", &table, &TranslateOptions::new().cds(true)).unwrap();
/// assert_eq!(protein, "MA");
/// ```
pub fn translate(sequence: &str, table: &CodonTable, options: &TranslateOptions) -> TranslationResult<String> {
    let gap = match options.gap.as_deref() {
        Some(gap) => {
            let mut chars = gap.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => return Err(TranslationError::InvalidGapCharacter(gap.to_string())),
            }
        }
        None => None,
    };

    let input: Vec<char> = sequence.chars().collect();
    let bases: Vec<char> = input.iter().map(|c| c.to_ascii_uppercase()).collect();

    let duals = table.duals();
    if !duals.is_empty() {
        if options.to_stop {
            return Err(TranslationError::AmbiguousStopCodon(duals));
        }
        warn!(
            "Codon table {} ({}) lists {} both as amino acids and as stop codons; translating them as amino acids",
            table.id,
            table.name,
            duals.join(", ")
        );
    }

    let mut protein = String::with_capacity(bases.len() / 3 + 1);
    let (mut from, mut to) = (0, bases.len());

    if options.cds {
        let first = codon_at(&bases, 0);
        if !matches_codon(&first, |c| table.is_start(c)) {
            return Err(TranslationError::InvalidStartCodon(codon_at(&input, 0)));
        }
        if bases.len() % 3 != 0 {
            return Err(TranslationError::LengthNotMultipleOfThree(bases.len()));
        }
        let last_start = bases.len().saturating_sub(3);
        let last = codon_at(&bases, last_start);
        if bases.len() < 6 || !matches_codon(&last, |c| table.is_stop(c)) {
            return Err(TranslationError::InvalidStopCodon(codon_at(&input, last_start)));
        }
        from = 3;
        to = last_start;
        protein.push('M');
    }

    for pos in (from..to).step_by(3).take_while(|&pos| pos + 3 <= to) {
        let chunk = &bases[pos..pos + 3];
        let codon: String = chunk.iter().collect();

        let meaning = match classify(table, &codon) {
            Some(meaning) => meaning,
            None if gap.is_some_and(|g| chunk.iter().all(|&c| c == g)) => Meaning::Gap,
            None => rna_as_dna(&codon)
                .and_then(|dna| classify(table, &dna))
                .ok_or_else(|| TranslationError::InvalidCodon(codon_at(&input, pos)))?,
        };

        match meaning {
            Meaning::Residue(aa) => protein.push(aa),
            Meaning::Stop if options.cds => {
                return Err(TranslationError::UnexpectedStopCodon(codon_at(&input, pos)));
            }
            Meaning::Stop if options.to_stop => break,
            Meaning::Stop => protein.push(options.stop_sign),
            Meaning::Gap => protein.extend(gap),
        }
    }

    debug!(
        "Translated {} bases with table {} into {} residues",
        bases.len(),
        table.id,
        protein.chars().count()
    );
    Ok(protein)
}

/// What a single triplet translates to.
enum Meaning {
    Residue(char),
    Stop,
    Gap,
}

fn classify(table: &CodonTable, codon: &str) -> Option<Meaning> {
    match table.amino_acid(codon) {
        Some(aa) => Some(Meaning::Residue(aa)),
        None if table.is_stop(codon) => Some(Meaning::Stop),
        None => None,
    }
}

/// DNA spelling of an RNA codon, if it contains `U`.
fn rna_as_dna(codon: &str) -> Option<String> {
    codon.contains('U').then(|| codon.replace('U', "T"))
}

/// Tests the codon as written, then its DNA spelling.
fn matches_codon(codon: &str, test: impl Fn(&str) -> bool) -> bool {
    test(codon) || rna_as_dna(codon).is_some_and(|dna| test(&dna))
}

/// Returns up to three bases starting at `start` as a codon string.
fn codon_at(bases: &[char], start: usize) -> String {
    bases.iter().skip(start).take(3).collect()
}
