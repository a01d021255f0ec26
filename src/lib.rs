//! # seqtools - FASTA parsing and sequence transformations
//!
//! A small toolkit for reading FASTA files and transforming nucleotide
//! sequences.
//!
//! ## Architecture
//!
//! The crate is a pipeline of independent pieces:
//! - `fasta`: FASTA parsing into ordered `Record`s, and FASTA writing
//! - `model`: the `Sequence` value type and its transformations, and `Record`
//! - `genetic_code`: immutable codon tables (NCBI translation tables)
//! - `translate`: codon translation with stop, CDS and gap handling
//! - `store`: records indexed by unique id
//!
//! Codon tables are plain values passed by reference; no state is global.
//!
//! ```
//! use seqtools::fasta::parse_fasta_str;
//! use seqtools::genetic_code::CodonTable;
//! use seqtools::translate::TranslateOptions;
//!
//! let records = parse_fasta_str(">gene1 toy gene\nATGGCA\nTAA\n");
//! let protein = records[0]
//!     .seq
//!     .translate(&CodonTable::standard(), &TranslateOptions::new().cds(true))
//!     .unwrap();
//! assert_eq!(protein, "MA");
//! ```

pub mod fasta;
pub mod genetic_code;
pub mod model;
pub mod store;
pub mod translate;

pub use fasta::{parse_fasta, parse_fasta_file, parse_fasta_str, write_fasta, FastaError};
pub use genetic_code::CodonTable;
pub use model::{Record, Sequence, SequenceError, UNKNOWN_DESCRIPTION};
pub use store::{RecordStore, StoreError};
pub use translate::{translate, TranslateOptions, TranslationError};
