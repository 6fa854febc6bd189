//! DNA sequence analysis for orfkit.
//!
//! Loads nucleotide sequences from FASTA files and, per sequence, finds the
//! longest open reading frame on either strand and translates it:
//!
//! - **FASTA loading** — [`load`] / [`parse_fasta`] return raw sequences in file order
//! - **Analysis** — [`AnalyzedSequence`]: reverse complement, longest ORF, translation
//! - **ORF scanning** — [`find_orfs_both_strands`], [`longest_orf`] with coordinates
//! - **Codon translation** — the standard genetic code ([`STANDARD_CODE`])
//!
//! # Example
//!
//! ```
//! use orfkit_seq::{parse_fasta, AnalyzedSequence};
//!
//! let fasta = ">seq1\nCCCATGAAA\nTAGCCC\n>seq2\nAATT\n";
//! let records = parse_fasta(fasta.as_bytes()).unwrap();
//! assert_eq!(records, vec!["CCCATGAAATAGCCC", "AATT"]);
//!
//! let mut first = AnalyzedSequence::new(&records[0]);
//! assert_eq!(first.longest_orf(), "ATGAAATAG");
//! assert_eq!(first.translate(), "MK_");
//!
//! let mut second = AnalyzedSequence::new(&records[1]);
//! assert_eq!(second.translate(), "");
//! ```

pub mod analysis;
pub mod codon;
pub mod fasta;
pub mod orf;

// Re-export the analyzer
pub use analysis::{AnalyzedSequence, LongestOrf, OrfState};

// Re-export codon translation
pub use codon::{
    translate_codon, translate_sequence, GeneticCode, STANDARD_CODE, STOP_SYMBOL, UNKNOWN_SYMBOL,
};

// Re-export FASTA loading
pub use fasta::{load, parse_fasta};

// Re-export ORF scanning
pub use orf::{find_orfs, find_orfs_both_strands, longest_orf, reverse_complement, OrfResult, Strand};
