/// Hashing byte strings onto the curve.
///
/// Signing needs a deterministic map from an arbitrary message (plus a domain
/// separation tag that keeps signatures from one protocol meaningless in
/// another) to a group element. The map itself is a collaborator: this module
/// only defines the trait boundary and wraps the RFC 9380 simplified-SWU
/// suite from `ark_ec::hashing`.
///
/// # Examples
///
/// ```rust
/// use bls_keys::{SIG_DST, hash_to_curve::{HashToCurve, sswu::HASH_TO_G2}};
///
/// let point = HASH_TO_G2.hash(SIG_DST, b"some_data").expect("should not fail");
/// ```
pub mod sswu;
pub use sswu::HASH_TO_G2;

use crate::BLSError;

/// Trait for hashing arbitrary data to a group element on an elliptic curve
pub trait HashToCurve {
    /// The type of the curve being used.
    type Output;

    /// Given a domain separation tag and a message, produces a hash of them
    /// which is a curve point.
    fn hash(&self, dst: &[u8], message: &[u8]) -> Result<Self::Output, BLSError>;
}
