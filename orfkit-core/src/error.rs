//! Structured error types for the orfkit workspace.

use thiserror::Error;

/// Unified error type for all orfkit operations.
#[derive(Debug, Error)]
pub enum OrfkitError {
    /// I/O error (file not found, permission denied, truncated read)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed input data)
    #[error("parse error: {0}")]
    Parse(String),
}

impl OrfkitError {
    /// Wrap an I/O error with the path that caused it.
    pub fn io_at(path: &std::path::Path, err: std::io::Error) -> Self {
        OrfkitError::Io(std::io::Error::new(
            err.kind(),
            format!("{}: {}", path.display(), err),
        ))
    }
}

/// Convenience alias used throughout the orfkit crates.
pub type Result<T> = std::result::Result<T, OrfkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(matches!(err, OrfkitError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn io_at_keeps_kind_and_path() {
        let err = OrfkitError::io_at(
            std::path::Path::new("/tmp/missing.fa"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        match err {
            OrfkitError::Io(inner) => {
                assert_eq!(inner.kind(), std::io::ErrorKind::NotFound);
                assert!(inner.to_string().contains("/tmp/missing.fa"));
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            OrfkitError::Parse("bad header".into()).to_string(),
            "parse error: bad header"
        );
    }
}
