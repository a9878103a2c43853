//! Error types for the domain core
//!
//! The engine itself is total over its input domain; errors only arise when
//! symbols come in as free text.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown element symbol: {0}")]
    UnknownElement(String),

    #[error("unknown heavenly stem symbol: {0}")]
    UnknownStem(String),

    #[error("unknown earthly branch symbol: {0}")]
    UnknownBranch(String),
}
