//! Modulo placement over the sorted node list.
//!
//! The simplest strategy: sort the node identifiers, reduce the key modulo
//! the node count, index. Membership change re-sorts the whole list and can
//! relocate an unbounded fraction of keys — a documented limitation, traded
//! for not computing any digests at all.

use tracing::trace;

use crate::error::PlacementError;

/// Select the owner of `kid` by modulo over the sorted node identifiers.
///
/// `kid` must be a non-empty hex string, either case, any length. The
/// reduction is exact for keys of any length: the key is folded into the
/// modulus digit by digit, so a 256-bit identifier never loses precision to
/// a fixed-width intermediate.
pub fn naive_hash<'a>(kid: &str, nids: &'a [String]) -> Result<&'a str, PlacementError> {
    if nids.is_empty() {
        return Err(PlacementError::EmptyNodeSet);
    }

    let mut sorted: Vec<&str> = nids.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let chosen = sorted[hex_mod(kid, sorted.len())?];
    trace!(kid, chosen, "naive placement");
    Ok(chosen)
}

/// Compute `kid mod modulus` by Horner reduction over the hex digits.
fn hex_mod(kid: &str, modulus: usize) -> Result<usize, PlacementError> {
    let malformed = || PlacementError::MalformedKey {
        kid: kid.to_string(),
    };
    if kid.is_empty() {
        return Err(malformed());
    }

    let m = modulus as u128;
    let mut acc: u128 = 0;
    for c in kid.chars() {
        let digit = c.to_digit(16).ok_or_else(malformed)?;
        acc = (acc * 16 + u128::from(digit)) % m;
    }
    Ok(acc as usize)
}
