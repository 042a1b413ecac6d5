//! Highest-random-weight placement.
//!
//! Each candidate's weight for a key is the digest of `kid || nid`; the
//! candidate with the maximum weight owns the key. One digest per candidate,
//! no sorting, no ring state. Membership changes only relocate the keys
//! whose winning candidate changed.

use reef_identity::Id;
use tracing::trace;

use crate::error::PlacementError;

/// Select the owner of `kid` as the candidate with the highest weight.
///
/// Weights are full 256-bit digests of the key/candidate concatenation,
/// compared at full precision via `Id`'s derived ordering. On an exact
/// weight tie the first candidate seen wins: the scan replaces the maximum
/// only on a strictly greater weight (`Iterator::max_by_key` would keep the
/// last maximum instead).
pub fn rendezvous_hash<'a>(kid: &str, nids: &'a [String]) -> Result<&'a str, PlacementError> {
    let mut best: Option<(Id, &str)> = None;

    for nid in nids {
        let mut input = Vec::with_capacity(kid.len() + nid.len());
        input.extend_from_slice(kid.as_bytes());
        input.extend_from_slice(nid.as_bytes());
        let weight = Id::from_data(&input);

        match best {
            Some((max, _)) if weight <= max => {}
            _ => best = Some((weight, nid.as_str())),
        }
    }

    let (_, chosen) = best.ok_or(PlacementError::EmptyNodeSet)?;
    trace!(kid, chosen, "rendezvous placement");
    Ok(chosen)
}
