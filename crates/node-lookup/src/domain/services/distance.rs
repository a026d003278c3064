//! Kademlia distance calculations.

use crate::domain::{Distance, LookupError, NodeId};

/// Calculate the XOR distance between two NodeIds
///
/// # Properties
/// - Symmetric: `xor_distance(a, b) == xor_distance(b, a)`
/// - Self is zero: `xor_distance(a, a).is_zero()`
/// - Ordering of the result equals unsigned-integer ordering of `a ^ b`
///
/// # Errors
/// `IdentifierLengthMismatch` when the identifiers differ in width.
pub fn xor_distance(a: &NodeId, b: &NodeId) -> Result<Distance, LookupError> {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    if a_bytes.len() != b_bytes.len() {
        return Err(LookupError::IdentifierLengthMismatch {
            expected: a_bytes.len(),
            actual: b_bytes.len(),
        });
    }

    let xor = a_bytes
        .iter()
        .zip(b_bytes.iter())
        .map(|(x, y)| x ^ y)
        .collect();
    Ok(Distance::from_xor(xor))
}
