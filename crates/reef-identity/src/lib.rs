//! Identity generation for the reef membership layer.
//!
//! This crate derives stable, content-addressed identifiers:
//!
//! - [`compute_id`] — the 256-bit identifier of any serializable value.
//! - [`compute_nid`] / [`compute_sid`] — node identifiers over `{ip, port}`.
//! - [`compute_mid`] — message identifiers bound to their capture time.
//!
//! Canonicalization is postcard serialization of the shape being hashed, so
//! field order is fixed by struct declaration order. The digest is SHA-256,
//! rendered as 64 lowercase hex characters by [`Id`]'s `Display`.
//!
//! Every operation is a pure function over plain values; identifiers are
//! computed on demand and never cached. The only clock read in the crate is
//! [`compute_mid`]'s capture timestamp.

mod error;
mod id;
mod message;
mod node;

pub use error::IdentityError;
pub use id::{Id, compute_id};
pub use message::{compute_mid, compute_mid_with_timestamp};
pub use node::{Node, compute_nid, compute_sid};
