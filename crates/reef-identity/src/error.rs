//! Error types for identity derivation.

/// Errors that can occur while deriving identifiers.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The value could not be canonicalized to bytes for hashing.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A node record is missing a required field or a field has the wrong type.
    #[error("invalid node record: {0}")]
    InvalidNode(&'static str),
}
