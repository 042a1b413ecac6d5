//! Message identifiers.
//!
//! A MID binds a message to its capture time, so repeated calls over the
//! same message yield different identifiers. That is the point: the MID is a
//! uniqueness mechanism for in-flight messages, not a content address.
//! Callers needing idempotent message identity should hash the message
//! itself with [`compute_id`](crate::compute_id).

use serde::Serialize;

use crate::error::IdentityError;
use crate::id::{Id, compute_id};

/// Envelope hashed for MID derivation. Field order: `date` (unix millis),
/// then `mss` (the message).
#[derive(Serialize)]
struct MessageEnvelope<'a, M: ?Sized> {
    date: u64,
    mss: &'a M,
}

/// Compute a message identifier bound to the current wall-clock time.
pub fn compute_mid<M: Serialize + ?Sized>(message: &M) -> Result<Id, IdentityError> {
    compute_mid_with_timestamp(message, now_millis())
}

/// Compute a message identifier with an explicit capture time
/// (for deterministic testing).
pub fn compute_mid_with_timestamp<M: Serialize + ?Sized>(
    message: &M,
    date_ms: u64,
) -> Result<Id, IdentityError> {
    compute_id(&MessageEnvelope {
        date: date_ms,
        mss: message,
    })
}

fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
