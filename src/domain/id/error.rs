//! Identifier error types

use thiserror::Error;

/// Errors raised while generating, encoding or parsing identifiers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("Invalid base58 character '{character}' at position {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Unknown namespace: '{0}'")]
    UnknownNamespace(String),

    #[error("Unknown identifier prefix: '{0}'")]
    UnknownPrefix(String),

    #[error("Invalid byte length {length}: must be between 1 and {max}")]
    InvalidByteLength { length: usize, max: usize },

    #[error("Invalid batch size {count}: must be between 1 and {max}")]
    InvalidBatchSize { count: usize, max: usize },

    #[error("Invalid prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    #[error("Prefix '{prefix}' is assigned to more than one namespace")]
    DuplicatePrefix { prefix: String },

    #[error("Malformed identifier: {0}")]
    MalformedIdentifier(String),
}

impl IdError {
    pub fn entropy_unavailable(message: impl Into<String>) -> Self {
        Self::EntropyUnavailable(message.into())
    }

    pub fn unknown_namespace(name: impl Into<String>) -> Self {
        Self::UnknownNamespace(name.into())
    }

    pub fn invalid_prefix(prefix: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPrefix {
            prefix: prefix.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedIdentifier(message.into())
    }

    /// Short stable label used for metrics and API error codes
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCharacter { .. } => "invalid_character",
            Self::EntropyUnavailable(_) => "entropy_unavailable",
            Self::UnknownNamespace(_) => "unknown_namespace",
            Self::UnknownPrefix(_) => "unknown_prefix",
            Self::InvalidByteLength { .. } => "invalid_byte_length",
            Self::InvalidBatchSize { .. } => "invalid_batch_size",
            Self::InvalidPrefix { .. } => "invalid_prefix",
            Self::DuplicatePrefix { .. } => "duplicate_prefix",
            Self::MalformedIdentifier(_) => "malformed_identifier",
        }
    }
}
