//! Error types for placement lookups.

/// Errors that can occur while selecting the owner of a key.
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    /// Placement was requested over zero candidate nodes.
    #[error("empty node set: placement needs at least one candidate")]
    EmptyNodeSet,

    /// The key is not a valid hex-encoded identifier.
    #[error("malformed key: {kid:?} is not a hex identifier")]
    MalformedKey {
        /// The offending key.
        kid: String,
    },
}
