//! seqtools - FASTA sequence transformations from the command line
//!
//! ## Usage
//!
//! ```bash
//! seqtools <fasta_file>                          # re-emit records
//! seqtools --reverse-complement <fasta_file>
//! seqtools --translate --cds -g 11 <fasta_file> -o proteins.fasta
//! ```
//!
//! Set `RUST_LOG=debug` for parse and translation details.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use log::info;

use seqtools::fasta::{parse_fasta_file, write_fasta};
use seqtools::genetic_code::CodonTable;
use seqtools::model::Record;
use seqtools::translate::TranslateOptions;

/// Transformation applied to every record.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Identity,
    Complement,
    ReverseComplement,
    Transcribe,
    Ungap(String),
    Translate { table: CodonTable, options: TranslateOptions },
}

/// seqtools - Parse FASTA files and transform nucleotide sequences
///
/// Reads every record of a FASTA file, applies at most one transformation
/// and writes the result as FASTA to a file (or stdout with "-").
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .args(["complement", "reverse_complement", "transcribe", "ungap", "translate"])
        .multiple(false)
))]
struct Args {
    /// FASTA file to read
    file: PathBuf,

    /// Output file. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: String,

    /// Wrap sequence lines at this many characters
    #[arg(short = 'w', long = "line-width")]
    line_width: Option<usize>,

    /// Complement nucleotide sequences (A<->T, G<->C)
    #[arg(long)]
    complement: bool,

    /// Reverse-complement nucleotide sequences
    #[arg(short = 'r', long = "reverse-complement")]
    reverse_complement: bool,

    /// Transcribe DNA to RNA (T -> U)
    #[arg(long)]
    transcribe: bool,

    /// Remove every occurrence of this gap string
    #[arg(long, value_name = "GAP")]
    ungap: Option<String>,

    /// Translate nucleotide sequences to amino acids
    #[arg(short = 't', long = "translate")]
    translate: bool,

    /// Genetic code for translation (1-6 or 11, default: 1 = Standard)
    #[arg(short = 'g', long = "genetic-code", default_value = "1")]
    genetic_code: u8,

    /// Require complete coding sequences (start codon, stop codon, whole codons)
    #[arg(long, requires = "translate")]
    cds: bool,

    /// Stop translating at the first stop codon
    #[arg(long = "to-stop", requires = "translate")]
    to_stop: bool,

    /// Symbol written for stop codons
    #[arg(long = "stop-sign", default_value = "*", requires = "translate")]
    stop_sign: char,

    /// Gap character; a codon of three gaps translates to one gap
    #[arg(long, requires = "translate")]
    gap: Option<String>,
}

impl Args {
    fn action(&self) -> Result<Action> {
        let action = if self.complement {
            Action::Complement
        } else if self.reverse_complement {
            Action::ReverseComplement
        } else if self.transcribe {
            Action::Transcribe
        } else if let Some(gap) = &self.ungap {
            Action::Ungap(gap.clone())
        } else if self.translate {
            let mut options = TranslateOptions::new()
                .with_stop_sign(self.stop_sign)
                .to_stop(self.to_stop)
                .cds(self.cds);
            if let Some(gap) = &self.gap {
                options = options.with_gap(gap.clone());
            }
            let table = CodonTable::ncbi(self.genetic_code).ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown genetic code: {} (available: {:?})",
                    self.genetic_code,
                    CodonTable::available_ids()
                )
            })?;
            Action::Translate { table, options }
        } else {
            Action::Identity
        };
        Ok(action)
    }
}

/// Applies the action to every record, stopping at the first failure.
fn apply(action: &Action, records: &[Record]) -> Result<Vec<Record>> {
    records
        .iter()
        .map(|record| {
            let seq = match action {
                Action::Identity => record.seq.clone(),
                Action::Complement => record.seq.complement()?,
                Action::ReverseComplement => record.seq.reverse_complement()?,
                Action::Transcribe => record.seq.transcribe(),
                Action::Ungap(gap) => record.seq.ungap(gap),
                Action::Translate { table, options } => record
                    .seq
                    .translate(table, options)
                    .with_context(|| format!("Cannot translate record '{}'", record.id))?,
            };
            Ok(record.with_seq(seq))
        })
        .collect::<Result<Vec<_>>>()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let action = args.action()?;

    let records = parse_fasta_file(&args.file)
        .with_context(|| format!("Cannot read {}", args.file.display()))?;
    info!("Read {} records from {}", records.len(), args.file.display());

    let output_records = apply(&action, &records)?;

    if args.output == "-" {
        let stdout = io::stdout();
        let mut handle = BufWriter::new(stdout.lock());
        write_fasta(&mut handle, &output_records, args.line_width)?;
        handle.flush()?;
    } else {
        let file = std::fs::File::create(&args.output)
            .with_context(|| format!("Cannot create {}", args.output))?;
        let mut writer = BufWriter::new(file);
        write_fasta(&mut writer, &output_records, args.line_width)?;
        writer.flush()?;
        info!("Wrote {} sequences to {}", output_records.len(), args.output);
    }

    Ok(())
}
