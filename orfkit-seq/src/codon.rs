//! Codon translation with the standard genetic code (NCBI Table 1).
//!
//! The table is a single process-wide constant, [`STANDARD_CODE`]. Stop
//! codons translate to [`STOP_SYMBOL`]; triplets outside the 64 uppercase
//! `ACGT` codons translate to [`UNKNOWN_SYMBOL`] when a whole sequence is
//! translated.

/// Symbol emitted for the stop codons `TAA`, `TAG` and `TGA`.
pub const STOP_SYMBOL: u8 = b'_';

/// Symbol emitted for a triplet that is not in the table.
pub const UNKNOWN_SYMBOL: u8 = b'X';

// ---------------------------------------------------------------------------
// Base encoding: A=0, C=1, G=2, T=3
// ---------------------------------------------------------------------------

fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Convert a 3-base codon to an index in [0, 64).
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

/// Convert an index in [0, 64) back to a codon.
fn index_to_codon(idx: usize) -> [u8; 3] {
    const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];
    [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]]
}

// Codon order: AAA, AAC, AAG, AAT, ACA, ACC, ACG, ACT, AGA, AGC, AGG, AGT,
//              ATA, ATC, ATG, ATT, CAA, CAC, CAG, CAT, CCA, CCC, CCG, CCT,
//              CGA, CGC, CGG, CGT, CTA, CTC, CTG, CTT, GAA, GAC, GAG, GAT,
//              GCA, GCC, GCG, GCT, GGA, GGC, GGG, GGT, GTA, GTC, GTG, GTT,
//              TAA, TAC, TAG, TAT, TCA, TCC, TCG, TCT, TGA, TGC, TGG, TGT,
//              TTA, TTC, TTG, TTT
const STANDARD_AA: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'_', b'Y', b'_', b'Y', b'S', b'S', b'S', b'S', b'_', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

const STANDARD_STARTS: [bool; 64] = {
    let mut s = [false; 64];
    // ATG
    s[14] = true;
    s
};

/// The standard genetic code, shared by every analyzer in the process.
pub static STANDARD_CODE: GeneticCode = GeneticCode {
    name: "Standard",
    table: STANDARD_AA,
    starts: STANDARD_STARTS,
};

/// A genetic code translation table.
///
/// Wraps a 64-element amino acid lookup array and a 64-element start codon
/// mask. Immutable; obtain the standard table with [`GeneticCode::standard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneticCode {
    name: &'static str,
    table: [u8; 64],
    starts: [bool; 64],
}

impl GeneticCode {
    /// The standard genetic code (NCBI Table 1).
    pub fn standard() -> &'static GeneticCode {
        &STANDARD_CODE
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Translate a single codon to its amino acid symbol.
    ///
    /// Stop codons yield `Some(STOP_SYMBOL)`. Returns `None` for anything
    /// that is not one of the 64 uppercase `ACGT` triplets.
    pub fn translate_codon(&self, codon: &[u8]) -> Option<u8> {
        codon_index(codon).map(|idx| self.table[idx])
    }

    /// Translate a nucleotide sequence codon by codon from offset 0.
    ///
    /// Stops are kept as [`STOP_SYMBOL`] and translation continues past
    /// them. Unrecognized triplets become [`UNKNOWN_SYMBOL`]. An incomplete
    /// trailing codon is ignored.
    pub fn translate(&self, seq: &[u8]) -> Vec<u8> {
        seq.chunks_exact(3)
            .map(|codon| self.translate_codon(codon).unwrap_or(UNKNOWN_SYMBOL))
            .collect()
    }

    /// Translate text codon by codon, taking each `char` as one position.
    ///
    /// Same rules as [`translate`](Self::translate). A codon holding any
    /// non-ASCII character becomes [`UNKNOWN_SYMBOL`].
    pub fn translate_str(&self, seq: &str) -> String {
        let chars: Vec<char> = seq.chars().collect();
        chars
            .chunks_exact(3)
            .map(|codon| {
                let mut bytes = [0u8; 3];
                for (b, &c) in bytes.iter_mut().zip(codon) {
                    *b = if c.is_ascii() { c as u8 } else { UNKNOWN_SYMBOL };
                }
                char::from(self.translate_codon(&bytes).unwrap_or(UNKNOWN_SYMBOL))
            })
            .collect()
    }

    /// Check whether a codon is a start codon in this table.
    pub fn is_start(&self, codon: &[u8]) -> bool {
        codon_index(codon).map_or(false, |idx| self.starts[idx])
    }

    /// Check whether a codon is a stop codon in this table.
    pub fn is_stop(&self, codon: &[u8]) -> bool {
        codon_index(codon).map_or(false, |idx| self.table[idx] == STOP_SYMBOL)
    }

    /// All stop codons for this table.
    pub fn stop_codons(&self) -> Vec<[u8; 3]> {
        (0..64)
            .filter(|&i| self.table[i] == STOP_SYMBOL)
            .map(index_to_codon)
            .collect()
    }

    /// All start codons for this table.
    pub fn start_codons(&self) -> Vec<[u8; 3]> {
        (0..64)
            .filter(|&i| self.starts[i])
            .map(index_to_codon)
            .collect()
    }
}

/// Translate a single codon using the standard genetic code.
pub fn translate_codon(codon: &[u8]) -> Option<u8> {
    STANDARD_CODE.translate_codon(codon)
}

/// Translate a nucleotide sequence using the standard genetic code.
///
/// See [`GeneticCode::translate`].
pub fn translate_sequence(seq: &[u8]) -> Vec<u8> {
    STANDARD_CODE.translate(seq)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn protein_length_is_codon_count(
            seq in proptest::collection::vec(
                prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T'), Just(b'N')],
                0..200,
            )
        ) {
            prop_assert_eq!(translate_sequence(&seq).len(), seq.len() / 3);
        }
    }
}
