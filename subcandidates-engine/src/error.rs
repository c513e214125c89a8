//! Error types for conversion services and candidate decoding

/// Errors a conversion service can report.
///
/// Controllers never surface these to the host; they fall back to treating
/// the raw input as its own candidate.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("conversion service unavailable: {0}")]
    Unavailable(String),
}

/// Reasons a structured candidate string could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("closing '}}' without a matching '{{'")]
    Unbalanced,

    #[error("sub-candidate group has no anchor")]
    MissingAnchor,

    #[error("candidate text before the sub-candidate group is empty")]
    EmptyText,

    #[error("sub-candidate group has no alternatives")]
    NoAlternatives,
}

pub type Result<T> = std::result::Result<T, ConversionError>;
