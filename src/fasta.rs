//! FASTA file parser.
//!
//! This module handles reading and parsing FASTA format files.
//! It supports both single-line and multi-line sequences.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! >another_sequence
//! TGCATGCATGCA...
//! ```
//!
//! Parsing is lenient: text before the first header is ignored, a header
//! without sequence lines gives a record with an empty sequence, and input
//! without any header gives no records at all. Only failing to read the
//! input is an error.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::model::Record;

/// Errors that can occur during FASTA parsing.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("Failed to read FASTA input: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Parses a FASTA file and returns its records in file order.
///
/// A missing or unreadable file is reported as [`FastaError::IoError`]; it is
/// never confused with an empty file.
///
/// # Examples
///
/// ```no_run
/// use seqtools::fasta::parse_fasta_file;
///
/// let records = parse_fasta_file("sequences.fasta").unwrap();
/// println!("Loaded {} sequences", records.len());
/// ```
pub fn parse_fasta_file<P: AsRef<Path>>(path: P) -> FastaResult<Vec<Record>> {
    let file = File::open(&path)?;
    let records = parse_fasta(BufReader::new(file))?;
    debug!("Parsed {} records from {}", records.len(), path.as_ref().display());
    Ok(records)
}

/// Parses FASTA content from a reader.
///
/// The whole input is read before parsing. Input that is not valid UTF-8 is
/// reported as [`FastaError::InvalidFormat`].
pub fn parse_fasta<R: Read>(mut reader: R) -> FastaResult<Vec<Record>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let content = String::from_utf8(bytes).map_err(|e| {
        FastaError::InvalidFormat(format!(
            "input is not valid UTF-8 (byte {})",
            e.utf8_error().valid_up_to()
        ))
    })?;
    Ok(parse_fasta_str(&content))
}

/// Parses FASTA content from a string.
///
/// Header lines are located in a single pass; each record's body is then the
/// run of lines up to the next header (or the end of input).
pub fn parse_fasta_str(content: &str) -> Vec<Record> {
    let lines: Vec<&str> = content.lines().collect();
    let headers: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.starts_with('>'))
        .map(|(idx, _)| idx)
        .collect();

    let mut records = Vec::with_capacity(headers.len());
    for (n, &start) in headers.iter().enumerate() {
        let end = headers.get(n + 1).copied().unwrap_or(lines.len());
        let (id, description) = split_header(&lines[start][1..]);

        let body = &lines[start + 1..end];
        let mut seq = String::with_capacity(body.iter().map(|l| l.len()).sum());
        for line in body {
            seq.push_str(line.trim());
        }

        records.push(Record::new(id, description, seq));
    }

    records
}

/// Splits header text (without '>') at the first run of whitespace.
fn split_header(header: &str) -> (&str, &str) {
    let header = header.trim();
    match header.split_once(char::is_whitespace) {
        Some((id, description)) => (id, description.trim_start()),
        None => (header, ""),
    }
}

/// Writes records in FASTA format.
///
/// The description is written after the id unless the header had none.
/// With `line_width`, sequence lines are wrapped at that many characters.
pub fn write_fasta<W: Write>(mut writer: W, records: &[Record], line_width: Option<usize>) -> std::io::Result<()> {
    for record in records {
        if record.has_description() {
            writeln!(writer, ">{} {}", record.id, record.description)?;
        } else {
            writeln!(writer, ">{}", record.id)?;
        }

        let seq = record.seq.as_str();
        match line_width {
            Some(width) if width > 0 && !seq.is_empty() => {
                let chars: Vec<char> = seq.chars().collect();
                for line in chars.chunks(width) {
                    writeln!(writer, "{}", line.iter().collect::<String>())?;
                }
            }
            _ => writeln!(writer, "{}", seq)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::model::UNKNOWN_DESCRIPTION;

    #[test]
    fn test_parse_two_records() {
        let content = ">id1 desc one\nACGT\n>id2\nTTTT\n";
        let records = parse_fasta_str(content);

        assert_eq!(
            records,
            vec![
                Record::new("id1", "desc one", "ACGT"),
                Record::new("id2", "", "TTTT"),
            ]
        );
        assert_eq!(records[0].name, "id1");
        assert_eq!(records[1].description, UNKNOWN_DESCRIPTION);
    }

    #[test]
    fn test_parse_multiline_sequence() {
        let content = ">seq1\nACGT\nTGCA\nAAAA\n";
        let records = parse_fasta_str(content);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].seq, "ACGTTGCAAAAA");
    }

    #[test]
    fn test_parse_with_description() {
        let content = ">seq1   This is  a description  \nACGT\n";
        let records = parse_fasta_str(content);

        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].description, "This is  a description");
    }

    #[test]
    fn test_parse_with_empty_lines_and_crlf() {
        let content = ">seq1\r\nACGT\r\n\r\n>seq2\n\nTG CA\n";
        let records = parse_fasta_str(content);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].seq, "ACGT");
        // Only surrounding whitespace is removed from body lines
        assert_eq!(records[1].seq, "TG CA");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_fasta_str("").is_empty());
        assert!(parse_fasta_str("ACGT\nTTTT\n").is_empty());
    }

    #[test]
    fn test_text_before_first_header_ignored() {
        let records = parse_fasta_str("junk line\n>seq1\nTGCA\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].seq, "TGCA");
    }

    #[test]
    fn test_header_without_sequence() {
        let records = parse_fasta_str(">seq1\nAC\n>seq2");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, "seq2");
        assert!(records[1].seq.is_empty());

        let records = parse_fasta_str(">");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "");
    }

    #[test]
    fn test_case_preservation() {
        let records = parse_fasta_str(">seq1\nacgt\n");
        assert_eq!(records[0].seq, "acgt");
    }

    #[test]
    fn test_parse_from_reader() {
        let records = parse_fasta(">a\nAC\n".as_bytes()).unwrap();
        assert_eq!(records[0].seq, "AC");

        let invalid: &[u8] = &[b'>', b'a', b'\n', 0xff, 0xfe];
        assert!(matches!(parse_fasta(invalid), Err(FastaError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ">x some gene\nATG\nTAA\n").unwrap();

        let records = parse_fasta_file(file.path()).unwrap();
        assert_eq!(records, vec![Record::new("x", "some gene", "ATGTAA")]);
    }

    #[test]
    fn test_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(parse_fasta_file(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = parse_fasta_file(dir.path().join("missing.fasta"));
        assert!(matches!(result, Err(FastaError::IoError(_))));
    }

    #[test]
    fn test_write_fasta() {
        let records = vec![
            Record::new("id1", "desc one", "ACGTACGTAC"),
            Record::new("id2", "", "TT"),
        ];

        let mut out = Vec::new();
        write_fasta(&mut out, &records, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ">id1 desc one\nACGTACGTAC\n>id2\nTT\n");

        let mut out = Vec::new();
        write_fasta(&mut out, &records, Some(4)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ">id1 desc one\nACGT\nACGT\nAC\n>id2\nTT\n");
    }

    #[test]
    fn test_write_then_parse() {
        let records = parse_fasta_str(">id1 desc one\nACGT\n>id2\nTTTT\n");
        let mut out = Vec::new();
        write_fasta(&mut out, &records, Some(2)).unwrap();
        assert_eq!(parse_fasta_str(&String::from_utf8(out).unwrap()), records);
    }
}
