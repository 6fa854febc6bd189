//! Shared primitives and traits for the orfkit crates.
//!
//! - **Error types** — [`OrfkitError`] and [`Result`] for structured error handling
//! - **Traits** — [`Sequence`] and [`Summarizable`], implemented by the sequence types

pub mod error;
pub mod traits;

pub use error::{OrfkitError, Result};
pub use traits::*;
