use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Error parsing version '{input}'. {reason}")]
    InvalidVersionFormat {
        input: String,
        reason: FormatErrorReason,
    },
}

/// Why a version string was rejected, carrying the offending substring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorReason {
    #[error("Empty version.")]
    EmptyVersion,

    #[error("Empty epoch delimited by '!'.")]
    EmptyEpoch,

    #[error("Epoch should be a number, got '{0}'.")]
    InvalidEpoch(String),

    #[error("Empty local version delimited by '+'.")]
    EmptyLocal,

    #[error("Cannot use both '-' and '_' delimiters in '{0}'.")]
    MixedDelimiters(String),

    #[error("Version contains invalid characters in '{0}'.")]
    InvalidCharacters(String),

    #[error("Empty part in '{0}'.")]
    EmptyPart(String),

    #[error("Numeral '{0}' is too large.")]
    NumeralOverflow(String),
}

impl VersionError {
    pub(crate) fn invalid(input: &str, reason: FormatErrorReason) -> Self {
        VersionError::InvalidVersionFormat {
            input: input.to_string(),
            reason,
        }
    }

    /// The reason the input was rejected
    pub fn reason(&self) -> &FormatErrorReason {
        match self {
            VersionError::InvalidVersionFormat { reason, .. } => reason,
        }
    }
}
