//! Strategy selection for placement lookups.

use serde::{Deserialize, Serialize};

use crate::error::PlacementError;
use crate::naive::naive_hash;
use crate::rendezvous::rendezvous_hash;
use crate::ring::consistent_hash;

/// Placement strategy selection.
///
/// All three strategies share the same contract — a key and a non-empty set
/// of candidate node identifiers in, exactly one of those candidates out —
/// and differ only in rebalancing behavior and per-lookup cost, so consumers
/// pick one in configuration and dispatch through [`Strategy::place`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Modulo over the sorted node list. No digests, unbounded churn.
    Naive,
    /// Hash-ring successor. Bounded churn, linearithmic lookup.
    Ring,
    /// Highest random weight. Bounded churn, linear lookup, no sorting.
    #[default]
    Rendezvous,
}

impl Strategy {
    /// Select the owner of `kid` among `nids` using this strategy.
    pub fn place<'a>(&self, kid: &str, nids: &'a [String]) -> Result<&'a str, PlacementError> {
        match self {
            Strategy::Naive => naive_hash(kid, nids),
            Strategy::Ring => consistent_hash(kid, nids),
            Strategy::Rendezvous => rendezvous_hash(kid, nids),
        }
    }
}
