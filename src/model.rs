//! Data model for sequences and FASTA records.
//!
//! This module contains:
//! - `Sequence`: a string-like value with nucleotide transformations
//! - `Record`: one parsed FASTA entry wrapping a `Sequence`
//!
//! Every transformation returns a new value; a `Sequence` is never modified
//! in place, so it can be shared freely between records and threads.

use std::fmt;

use thiserror::Error;

use crate::genetic_code::CodonTable;
use crate::translate::{translate, TranslateOptions, TranslationResult};

/// Description used when a FASTA header carries nothing after its id.
pub const UNKNOWN_DESCRIPTION: &str = "<unknown description>";

/// Errors raised by sequence transformations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid character '{character}' at position {position}: only A, T, G and C can be complemented")]
    InvalidCharacter { character: char, position: usize },
}

/// Result type for sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// A nucleotide or amino acid sequence.
///
/// Case is preserved as stored. Translation upper-cases internally; the
/// complement operations only accept upper-case `A`, `T`, `G`, `C`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Sequence {
    data: String,
}

impl Sequence {
    /// Creates a new sequence.
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    /// Returns the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Consumes the sequence and returns the underlying string.
    pub fn into_inner(self) -> String {
        self.data
    }

    /// Returns the length of the sequence in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an upper-case copy.
    pub fn upper(&self) -> Sequence {
        Sequence::new(self.data.to_uppercase())
    }

    /// Returns a lower-case copy.
    pub fn lower(&self) -> Sequence {
        Sequence::new(self.data.to_lowercase())
    }

    /// Returns the base-paired complement (A<->T, G<->C).
    ///
    /// Lower-case letters and ambiguity codes such as `N` are rejected with
    /// [`SequenceError::InvalidCharacter`].
    pub fn complement(&self) -> SequenceResult<Sequence> {
        let data = self
            .data
            .chars()
            .enumerate()
            .map(|(position, c)| complement_base(c).ok_or(SequenceError::InvalidCharacter { character: c, position }))
            .collect::<SequenceResult<String>>()?;
        Ok(Sequence::new(data))
    }

    /// Returns the complement read in reverse order.
    pub fn reverse_complement(&self) -> SequenceResult<Sequence> {
        let complement = self.complement()?;
        Ok(Sequence::new(complement.data.chars().rev().collect::<String>()))
    }

    /// DNA to RNA: every `T` becomes `U`. Other characters, including
    /// lower-case `t`, are left untouched.
    pub fn transcribe(&self) -> Sequence {
        Sequence::new(self.data.replace('T', "U"))
    }

    /// RNA to DNA: every `U` becomes `T`.
    pub fn back_transcribe(&self) -> Sequence {
        Sequence::new(self.data.replace('U', "T"))
    }

    /// Removes every occurrence of `gap`.
    ///
    /// A multi-character gap is matched as a contiguous substring, not per
    /// character. An empty gap leaves the sequence unchanged.
    pub fn ungap(&self, gap: &str) -> Sequence {
        if gap.is_empty() {
            return self.clone();
        }
        Sequence::new(self.data.replace(gap, ""))
    }

    /// Concatenates `parts`, placing this sequence after each of them.
    ///
    /// The separator follows every element, including the last one:
    /// `"NNN".join(["ATA", "CGT"])` gives `"ATANNNCGTNNN"`.
    pub fn join<I, S>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for part in parts {
            joined.push_str(part.as_ref());
            joined.push_str(&self.data);
        }
        joined
    }

    /// Counts non-overlapping occurrences of `sub`.
    ///
    /// An empty `sub` matches at every byte position, giving `len() + 1`.
    pub fn count(&self, sub: &str) -> usize {
        if sub.is_empty() {
            return self.data.len() + 1;
        }
        self.data.matches(sub).count()
    }

    /// Returns true if any character of `chars` occurs in the sequence.
    pub fn contains_any(&self, chars: &str) -> bool {
        self.data.contains(|c: char| chars.contains(c))
    }

    /// Returns the byte offset of the first occurrence of `sub`, if any.
    ///
    /// Offsets are in bytes, like [`Sequence::len`] and [`Sequence::count`].
    pub fn index(&self, sub: &str) -> Option<usize> {
        self.data.find(sub)
    }

    /// Translates the sequence with the given codon table.
    ///
    /// See [`crate::translate::translate`] for the rules.
    pub fn translate(&self, table: &CodonTable, options: &TranslateOptions) -> TranslationResult<Sequence> {
        translate(&self.data, table, options).map(Sequence::new)
    }
}

fn complement_base(base: char) -> Option<char> {
    match base {
        'A' => Some('T'),
        'T' => Some('A'),
        'G' => Some('C'),
        'C' => Some('G'),
        _ => None,
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.data
    }
}

impl From<&str> for Sequence {
    fn from(data: &str) -> Self {
        Self::new(data)
    }
}

impl From<String> for Sequence {
    fn from(data: String) -> Self {
        Self::new(data)
    }
}

impl PartialEq<&str> for Sequence {
    fn eq(&self, other: &&str) -> bool {
        self.data == *other
    }
}

impl PartialEq<str> for Sequence {
    fn eq(&self, other: &str) -> bool {
        self.data == other
    }
}

/// A single FASTA entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Header token following '>' up to the first whitespace
    pub id: String,
    /// Same as `id` for FASTA; kept apart for formats with a display name
    pub name: String,
    /// Rest of the header line, or [`UNKNOWN_DESCRIPTION`]
    pub description: String,
    /// Sequence data (all body lines concatenated)
    pub seq: Sequence,
}

impl Record {
    /// Creates a record. An empty description is replaced by
    /// [`UNKNOWN_DESCRIPTION`].
    pub fn new(id: impl Into<String>, description: impl Into<String>, seq: impl Into<Sequence>) -> Self {
        let id = id.into();
        let description = description.into();
        Self {
            name: id.clone(),
            id,
            description: if description.is_empty() {
                UNKNOWN_DESCRIPTION.to_string()
            } else {
                description
            },
            seq: seq.into(),
        }
    }

    /// Returns true if the header carried a description.
    pub fn has_description(&self) -> bool {
        self.description != UNKNOWN_DESCRIPTION
    }

    /// Returns a copy of this record with its sequence replaced.
    pub fn with_seq(&self, seq: impl Into<Sequence>) -> Self {
        Self {
            seq: seq.into(),
            ..self.clone()
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna(max_len: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')],
            0..=max_len,
        )
        .prop_map(|v| v.into_iter().collect())
    }

    proptest! {
        #[test]
        fn complement_is_an_involution(s in dna(200)) {
            let seq = Sequence::new(s.clone());
            prop_assert_eq!(seq.complement().unwrap().complement().unwrap(), Sequence::new(s));
        }

        #[test]
        fn reverse_complement_is_an_involution(s in dna(200)) {
            let seq = Sequence::new(s.clone());
            let twice = seq.reverse_complement().unwrap().reverse_complement().unwrap();
            prop_assert_eq!(twice, Sequence::new(s));
        }

        #[test]
        fn transcribe_removes_thymine(s in "[ACGTN-]{0,200}") {
            let rna = Sequence::new(s.clone()).transcribe();
            prop_assert!(!rna.as_str().contains('T'));
            prop_assert_eq!(rna.len(), s.len());
        }

        #[test]
        fn ungap_drops_inserted_gap(s in dna(100)) {
            let seq = Sequence::new(format!("{s}-{s}"));
            prop_assert_eq!(seq.ungap("-"), Sequence::new(format!("{s}{s}")));
        }
    }
}
