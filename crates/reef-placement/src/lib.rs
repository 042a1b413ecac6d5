//! Key-to-node placement for the reef membership layer.
//!
//! Given a key identifier and the current set of node identifiers, each
//! strategy deterministically selects exactly one owning node:
//!
//! - [`naive_hash`] — modulo over the sorted node list. Cheapest lookup,
//!   unbounded churn on membership change.
//! - [`consistent_hash`] — immediate successor on a hash ring rebuilt per
//!   call. Bounded churn.
//! - [`rendezvous_hash`] — highest random weight. Bounded churn, no sorting.
//!
//! All strategies are pure: no ring state is kept between calls, so the
//! result depends only on the key and the node set passed in. [`Strategy`]
//! selects between them at configuration time.

mod error;
mod naive;
mod rendezvous;
mod ring;
mod strategy;

pub use error::PlacementError;
pub use naive::naive_hash;
pub use rendezvous::rendezvous_hash;
pub use ring::consistent_hash;
pub use strategy::Strategy;
