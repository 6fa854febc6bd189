//! Per-record sequence analysis: reverse complement, longest ORF, and its
//! translation.
//!
//! [`AnalyzedSequence`] owns one raw sequence and caches the longest ORF and
//! its protein the first time each is asked for. The cache only moves
//! forward (`Uncomputed` → `OrfKnown` → `Translated`) and is never
//! invalidated; the sequence itself cannot change after construction.
//!
//! # Example
//!
//! ```
//! use orfkit_seq::AnalyzedSequence;
//!
//! let mut seq = AnalyzedSequence::new("cccatgaaatagccc");
//! assert_eq!(seq.reverse_complement(), "GGGCTATTTCATGGG");
//! assert_eq!(seq.longest_orf(), "ATGAAATAG");
//! assert_eq!(seq.translate(), "MK_");
//! assert_eq!(seq.protein(), "MK_");
//! ```

use std::fmt;

use log::debug;
use orfkit_core::{Sequence, Summarizable};

use crate::codon::STANDARD_CODE;
use crate::orf::{self, OrfResult, Strand};

/// Stand-in scan byte for a non-ASCII character. It is not a base, so it
/// never matches a codon, and it keeps one scan position per `char`.
const NON_ASCII: u8 = 0xFF;

/// The longest ORF of a sequence and where it was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongestOrf {
    /// ORF as read on its strand, or `""` when there is none.
    pub sequence: String,
    /// Location of the ORF. Coordinates count characters on the input strand.
    pub hit: Option<OrfResult>,
}

/// Cached derivations of an [`AnalyzedSequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrfState {
    /// Nothing computed yet.
    Uncomputed,
    /// Longest ORF known (possibly empty).
    OrfKnown(LongestOrf),
    /// Longest ORF and its protein known.
    Translated { orf: LongestOrf, protein: String },
}

/// One nucleotide sequence plus its lazily computed ORF and protein.
#[derive(Clone, PartialEq, Eq)]
pub struct AnalyzedSequence {
    sequence: String,
    state: OrfState,
}

fn complement(c: char) -> char {
    match c {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        other => other,
    }
}

impl AnalyzedSequence {
    /// Wrap a raw sequence. The input is uppercased; no other validation is
    /// performed.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            sequence: raw.as_ref().to_ascii_uppercase(),
            state: OrfState::Uncomputed,
        }
    }

    /// The (uppercased) sequence.
    pub fn as_str(&self) -> &str {
        &self.sequence
    }

    /// Sequence length in characters.
    pub fn char_len(&self) -> usize {
        self.sequence.chars().count()
    }

    /// Current cache state.
    pub fn state(&self) -> &OrfState {
        &self.state
    }

    /// Whether the longest ORF has been computed.
    pub fn is_orf_computed(&self) -> bool {
        !matches!(self.state, OrfState::Uncomputed)
    }

    /// Whether the translation has been computed.
    pub fn is_translated(&self) -> bool {
        matches!(self.state, OrfState::Translated { .. })
    }

    /// Reverse complement of the sequence. Recomputed on every call.
    ///
    /// Characters other than `A`, `C`, `G` and `T` are kept as they are.
    pub fn reverse_complement(&self) -> String {
        self.sequence.chars().rev().map(complement).collect()
    }

    /// One scan byte per character.
    fn scan_bytes(&self) -> Vec<u8> {
        self.sequence
            .chars()
            .map(|c| if c.is_ascii() { c as u8 } else { NON_ASCII })
            .collect()
    }

    /// The characters an ORF covers, read on its own strand.
    fn orf_text(&self, hit: &OrfResult) -> String {
        let span: Vec<char> = self
            .sequence
            .chars()
            .skip(hit.start)
            .take(hit.end - hit.start)
            .collect();
        match hit.strand {
            Strand::Forward => span.into_iter().collect(),
            Strand::Reverse => span.into_iter().rev().map(complement).collect(),
        }
    }

    /// Replace the scan bytes of a hit with the UTF-8 of the ORF it covers.
    fn with_text(&self, mut hit: OrfResult) -> (String, OrfResult) {
        let text = self.orf_text(&hit);
        hit.sequence = text.clone().into_bytes();
        (text, hit)
    }

    /// Every ORF candidate on both strands, in scan order.
    ///
    /// Coordinates count characters, and `sequence` holds the UTF-8 of the
    /// ORF as read on its strand.
    pub fn orf_candidates(&self) -> Vec<OrfResult> {
        orf::find_orfs_both_strands(&self.scan_bytes())
            .into_iter()
            .map(|hit| self.with_text(hit).1)
            .collect()
    }

    fn compute_orf(&mut self) {
        if let OrfState::Uncomputed = self.state {
            let orf = match orf::longest_orf(&self.scan_bytes()) {
                Some(hit) => {
                    let (sequence, hit) = self.with_text(hit);
                    LongestOrf {
                        sequence,
                        hit: Some(hit),
                    }
                }
                None => LongestOrf::default(),
            };
            self.state = OrfState::OrfKnown(orf);
        }
    }

    /// The longest ORF across both strands, or `""` if there is none.
    ///
    /// Computed on first call and cached.
    pub fn longest_orf(&mut self) -> &str {
        self.compute_orf();
        self.cached_orf().map_or("", |orf| orf.sequence.as_str())
    }

    /// Location of the longest ORF, or `None` if there is none. Shares the
    /// cache with [`longest_orf`](Self::longest_orf).
    pub fn longest_orf_hit(&mut self) -> Option<&OrfResult> {
        self.compute_orf();
        self.cached_orf().and_then(|orf| orf.hit.as_ref())
    }

    /// Translate the longest ORF to protein, computing the ORF first if
    /// needed. Returns `""` when there is no ORF.
    ///
    /// Computed on first call and cached.
    pub fn translate(&mut self) -> &str {
        if !self.is_translated() {
            self.compute_orf();
            let orf = self.cached_orf().cloned().unwrap_or_default();
            let protein = STANDARD_CODE.translate_str(&orf.sequence);
            debug!(
                "translated {} nt ORF into {} residues",
                orf.sequence.chars().count(),
                protein.len()
            );
            self.state = OrfState::Translated { orf, protein };
        }

        self.protein()
    }

    fn cached_orf(&self) -> Option<&LongestOrf> {
        match &self.state {
            OrfState::Uncomputed => None,
            OrfState::OrfKnown(orf) | OrfState::Translated { orf, .. } => Some(orf),
        }
    }

    /// The cached protein, or `""` if [`translate`](Self::translate) has not
    /// run yet.
    pub fn protein(&self) -> &str {
        match &self.state {
            OrfState::Translated { protein, .. } => protein,
            _ => "",
        }
    }
}

impl Sequence for AnalyzedSequence {
    fn as_bytes(&self) -> &[u8] {
        self.sequence.as_bytes()
    }
}

impl Summarizable for AnalyzedSequence {
    fn summary(&self) -> String {
        let preview: String = self.sequence.chars().take(20).collect();
        let len = self.char_len();
        let ellipsis = if len > 20 { "..." } else { "" };
        let orf = match self.cached_orf() {
            None => "ORF not computed".to_string(),
            Some(orf) if orf.sequence.is_empty() => "no ORF".to_string(),
            Some(orf) => format!("longest ORF {} nt", orf.sequence.chars().count()),
        };
        format!(
            "DNA sequence ({} bp): {}{}, {}",
            len,
            preview,
            ellipsis,
            orf
        )
    }
}

impl fmt::Debug for AnalyzedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzedSequence")
            .field("sequence", &self.sequence)
            .field("state", &self.state)
            .finish()
    }
}

impl fmt::Display for AnalyzedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sequence)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna(max_len: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![Just('A'), Just('C'), Just('G'), Just('T'), Just('a'), Just('t')],
            0..=max_len,
        )
        .prop_map(|v| v.into_iter().collect())
    }

    proptest! {
        #[test]
        fn double_reverse_complement_is_identity(raw in dna(200)) {
            let seq = AnalyzedSequence::new(&raw);
            let twice = AnalyzedSequence::new(seq.reverse_complement()).reverse_complement();
            prop_assert_eq!(twice, seq.as_str());
        }

        #[test]
        fn protein_length_is_a_third_of_orf(raw in dna(300)) {
            let mut seq = AnalyzedSequence::new(&raw);
            let orf_len = seq.longest_orf().len();
            let protein = seq.translate().to_owned();
            prop_assert_eq!(protein.len(), orf_len / 3);
            if orf_len > 0 {
                prop_assert!(protein.starts_with('M'));
                prop_assert!(protein.ends_with('_'));
            }
        }

        #[test]
        fn longest_orf_is_deterministic(raw in dna(300)) {
            let mut a = AnalyzedSequence::new(&raw);
            let mut b = AnalyzedSequence::new(&raw);
            let first = a.longest_orf().to_owned();
            prop_assert_eq!(a.longest_orf(), first.as_str());
            prop_assert_eq!(b.longest_orf(), first.as_str());
        }
    }
}
