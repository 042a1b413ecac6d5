//! Hash-ring placement.
//!
//! Every node identifier and the key are hashed onto a 256-bit circular
//! space; the key's owner is its immediate ring successor, wrapping to the
//! smallest position. The ring is rebuilt per call from the supplied node
//! set — no state survives between lookups, so membership changes only
//! relocate the keys between the changed node and its ring predecessor.

use reef_identity::Id;
use tracing::trace;

use crate::error::PlacementError;

/// Select the owner of `kid` as its immediate successor on the hash ring.
///
/// Ring positions are full 256-bit digests of the identifier strings; `Id`'s
/// derived ordering compares them exactly as the unsigned integers they
/// encode, so no precision is lost. Position ties are broken by input order
/// (stable sort).
pub fn consistent_hash<'a>(kid: &str, nids: &'a [String]) -> Result<&'a str, PlacementError> {
    if nids.is_empty() {
        return Err(PlacementError::EmptyNodeSet);
    }

    // The key rides the ring alongside the nodes; `None` marks its entry.
    let mut ring: Vec<(Id, Option<&str>)> = nids
        .iter()
        .map(|nid| (Id::from_data(nid.as_bytes()), Some(nid.as_str())))
        .collect();
    ring.push((Id::from_data(kid.as_bytes()), None));
    ring.sort_by_key(|(position, _)| *position);

    let key_index = ring
        .iter()
        .position(|(_, nid)| nid.is_none())
        .expect("the key entry was just pushed");
    let chosen = ring[(key_index + 1) % ring.len()]
        .1
        .expect("the ring holds exactly one key entry");

    trace!(kid, chosen, "ring placement");
    Ok(chosen)
}
