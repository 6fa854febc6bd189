//! FASTA loading.
//!
//! Records are returned as raw sequence strings in file order; header lines
//! are used only as record boundaries and their content is discarded.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use log::debug;
use orfkit_core::{OrfkitError, Result};

/// Parse FASTA records from a buffered reader.
///
/// A line starting with `>` (after trimming surrounding whitespace) opens a
/// new record. Every other line is trimmed and appended to the current
/// record. Records with no sequence content are skipped, so a stray or
/// trailing header never yields an empty string. Empty input yields an
/// empty vector. A line that is not valid UTF-8 is a
/// [`OrfkitError::Parse`] error.
pub fn parse_fasta<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut sequences = Vec::new();
    let mut current = String::new();

    for (n, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => OrfkitError::Parse(format!("line {}: {}", n + 1, e)),
            _ => OrfkitError::Io(e),
        })?;
        let line = line.trim();

        if line.starts_with('>') {
            if !current.is_empty() {
                sequences.push(std::mem::take(&mut current));
            }
        } else {
            current.push_str(line);
        }
    }

    if !current.is_empty() {
        sequences.push(current);
    }

    Ok(sequences)
}

/// Load every sequence from a FASTA file, in file order.
///
/// Fails with [`OrfkitError::Io`] if the file cannot be opened or read, and
/// with [`OrfkitError::Parse`] if it is not valid UTF-8. Both carry the path.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| OrfkitError::io_at(path, e))?;

    let sequences = parse_fasta(BufReader::new(file)).map_err(|e| match e {
        OrfkitError::Io(io) => OrfkitError::io_at(path, io),
        OrfkitError::Parse(msg) => OrfkitError::Parse(format!("{}: {}", path.display(), msg)),
    })?;

    debug!("loaded {} sequences from {}", sequences.len(), path.display());
    Ok(sequences)
}
