//! Open Reading Frame (ORF) scanner.
//!
//! Scans a nucleotide sequence and its reverse complement for ORFs. An ORF
//! begins at a start codon (`ATG`) and ends at the *nearest* in-frame stop
//! codon (`TAA`, `TAG`, `TGA`), inclusive. A start with no in-frame stop
//! downstream is not an ORF.
//!
//! Each strand is scanned left to right. After an ORF is found the scan
//! resumes right after its stop codon, so ORFs on the same strand never
//! overlap; ORFs on opposite strands may. Candidates are reported in scan
//! order (forward strand first), which is also the tie-break order used by
//! [`longest_orf`].

use log::{debug, trace};

use crate::codon::STANDARD_CODE;

/// Result of an ORF search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrfResult {
    /// Start position in the input sequence (0-indexed).
    pub start: usize,
    /// End position (exclusive) in the input sequence.
    pub end: usize,
    /// Reading frame (0, 1, or 2) on the strand the ORF was found on.
    pub frame: usize,
    /// Strand: `Forward` or `Reverse`.
    pub strand: Strand,
    /// The nucleotide sequence of the ORF, as read on its strand.
    pub sequence: Vec<u8>,
}

impl OrfResult {
    /// ORF length in sequence positions.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false for ORFs produced by the scanner.
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Strand orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strand {
    Forward,
    Reverse,
}

/// Compute the reverse complement of a DNA sequence.
///
/// Complements each base (A<->T, C<->G) and reverses the result.
/// Non-ACGT characters are left unchanged.
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .rev()
        .map(|&b| match b {
            b'A' => b'T',
            b'T' => b'A',
            b'C' => b'G',
            b'G' => b'C',
            other => other,
        })
        .collect()
}

/// End (exclusive) of the first in-frame stop codon after the start codon
/// at `start`, if any.
fn nearest_stop(seq: &[u8], start: usize) -> Option<usize> {
    let mut pos = start + 3;
    while pos + 3 <= seq.len() {
        if STANDARD_CODE.is_stop(&seq[pos..pos + 3]) {
            return Some(pos + 3);
        }
        pos += 3;
    }
    None
}

fn scan_strand(seq: &[u8], strand: Strand) -> Vec<OrfResult> {
    let mut results = Vec::new();
    let mut pos = 0;

    while pos + 3 <= seq.len() {
        if STANDARD_CODE.is_start(&seq[pos..pos + 3]) {
            if let Some(end) = nearest_stop(seq, pos) {
                trace!("{:?} ORF candidate {}..{}", strand, pos, end);
                results.push(OrfResult {
                    start: pos,
                    end,
                    frame: pos % 3,
                    strand,
                    sequence: seq[pos..end].to_vec(),
                });
                pos = end;
                continue;
            }
        }
        pos += 1;
    }

    results
}

/// Find ORFs on the forward strand.
///
/// Input should be uppercase DNA.
pub fn find_orfs(seq: &[u8]) -> Vec<OrfResult> {
    scan_strand(seq, Strand::Forward)
}

/// Find ORFs on both strands: forward candidates first, then those of the
/// reverse complement.
///
/// Coordinates in `OrfResult` for reverse-strand ORFs refer to positions
/// on the original (input) sequence.
pub fn find_orfs_both_strands(seq: &[u8]) -> Vec<OrfResult> {
    let mut results = find_orfs(seq);

    let rc = reverse_complement(seq);
    let len = seq.len();

    for mut orf in scan_strand(&rc, Strand::Reverse) {
        // Position `p` on the RC corresponds to `len - p` on the original.
        let orig_start = len - orf.end;
        let orig_end = len - orf.start;
        orf.start = orig_start;
        orf.end = orig_end;
        results.push(orf);
    }

    results
}

/// The longest ORF across both strands.
///
/// Ties go to the candidate found first: forward strand before reverse,
/// then left to right. Returns `None` when neither strand has an ORF.
pub fn longest_orf(seq: &[u8]) -> Option<OrfResult> {
    let candidates = find_orfs_both_strands(seq);
    let count = candidates.len();

    let best = candidates.into_iter().fold(None, |best: Option<OrfResult>, orf| match best {
        Some(b) if b.len() >= orf.len() => Some(b),
        _ => Some(orf),
    });

    match &best {
        Some(orf) => debug!(
            "longest ORF of {} candidates: {:?} {}..{} ({} nt)",
            count,
            orf.strand,
            orf.start,
            orf.end,
            orf.len()
        ),
        None => debug!("no ORF on either strand ({} nt scanned)", seq.len()),
    }

    best
}
