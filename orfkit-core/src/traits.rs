//! Core trait definitions shared by the orfkit crates.

/// A biological sequence (DNA, RNA, protein, etc.).
pub trait Sequence {
    /// The raw byte representation of the sequence.
    fn as_bytes(&self) -> &[u8];

    /// Length in residues/bases.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bases(&'static [u8]);

    impl Sequence for Bases {
        fn as_bytes(&self) -> &[u8] {
            self.0
        }
    }

    #[test]
    fn default_len_and_empty() {
        let s = Bases(b"ACGT");
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());
        assert!(Bases(b"").is_empty());
    }
}
