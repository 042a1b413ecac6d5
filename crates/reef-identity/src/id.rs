//! Content-addressed identifiers.
//!
//! An [`Id`] is the SHA-256 digest of the canonical byte encoding of a value.
//! Equal inputs always yield equal identifiers, so an `Id` can be recomputed
//! anywhere the value is known and compared byte-for-byte.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::IdentityError;

/// Number of hex characters in the short form of an identifier.
const SHORT_LEN: usize = 5;

/// A 256-bit content-addressed identifier.
///
/// Displayed as 64 lowercase hex characters. Derived `Ord` compares the raw
/// big-endian bytes, which orders identifiers exactly as the unsigned
/// 256-bit integers they encode.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Id([u8; 32]);

impl Id {
    /// Create an ID by hashing raw bytes with SHA-256.
    pub fn from_data(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    /// Return the raw 32-byte representation.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Return the short form: the first 5 hex characters (20 bits).
    ///
    /// A human-scannable label for logs and operator tooling. It is not
    /// collision-free and must never be used as a uniqueness guarantee.
    pub fn short(&self) -> String {
        let mut hex = self.to_string();
        hex.truncate(SHORT_LEN);
        hex
    }
}

impl From<[u8; 32]> for Id {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Id {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self)
    }
}

/// Compute the content-addressed identifier of any serializable value.
///
/// The value is canonicalized with postcard (fields in declaration order,
/// no field names) and the resulting bytes are hashed. Fails with
/// [`IdentityError::Serialization`] when the value's shape cannot be
/// canonicalized; there are no other failure modes.
pub fn compute_id<T: Serialize + ?Sized>(value: &T) -> Result<Id, IdentityError> {
    let bytes =
        postcard::to_allocvec(value).map_err(|e| IdentityError::Serialization(e.to_string()))?;
    Ok(Id::from_data(&bytes))
}
