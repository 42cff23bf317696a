//! Unified error type for the flixgate decoding core.
//!
//! Decode failures fall into two families: encoding errors (the percent or
//! base64 layer is malformed) and structural errors (no JSON object could be
//! recovered from the decoded text). Filename heuristics never fail; a miss is
//! reported through the `"unknown"` sentinel instead of an error.

use std::fmt;

/// The encoding layer that rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingStage {
    /// URL component (`%XX`) decoding.
    Percent,
    /// Standard-alphabet base64 decoding.
    Base64,
}

impl fmt::Display for EncodingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingStage::Percent => f.write_str("percent"),
            EncodingStage::Base64 => f.write_str("base64"),
        }
    }
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Encoding,
    Structural,
    Config,
}

/// Unified error type covering all failure modes in flixgate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Percent or base64 decoding failed.
    #[error("Encoding error [{stage}]: {message}")]
    Encoding {
        /// The layer that failed.
        stage: EncodingStage,
        /// Human-readable error description.
        message: String,
    },

    /// The decoded payload contains no `{`.
    #[error("No JSON object found in decoded payload")]
    NoJsonObject,

    /// Brace depth never returned to zero and the truncated candidate did not
    /// parse.
    #[error("Unclosed JSON object (depth {depth} at end of payload): {source}")]
    UnclosedJson {
        /// Brace depth remaining when the payload ran out.
        depth: usize,
        /// The parser failure on the truncated candidate.
        source: serde_json::Error,
    },

    /// The balanced JSON candidate is not valid JSON.
    #[error("Malformed JSON payload: {source}")]
    MalformedJson {
        /// The underlying parser failure.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration failed validation.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Classify this error into its taxonomy family.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Encoding { .. } => ErrorKind::Encoding,
            Error::NoJsonObject | Error::UnclosedJson { .. } | Error::MalformedJson { .. } => {
                ErrorKind::Structural
            }
            Error::Config(_) => ErrorKind::Config,
        }
    }

    /// Whether this error came out of payload decoding (encoding or
    /// structural), as opposed to configuration.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self.kind(), ErrorKind::Encoding | ErrorKind::Structural)
    }

    /// Convenience constructor for [`Error::Encoding`].
    pub fn encoding(stage: EncodingStage, message: impl fmt::Display) -> Self {
        Error::Encoding {
            stage,
            message: message.to_string(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
