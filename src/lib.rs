//! # BLS Private Keys
//!
//! This crate implements the private-key side of BLS signatures over
//! BLS12-381: secure lifecycle management of the secret scalar, public-key
//! derivation on G1 and G2, keyed scaling of arbitrary group elements,
//! private-key aggregation and the signing primitive (hash to G2, then scale
//! by the secret).
//!
//! Pairing evaluation and signature verification live in the consumers of the
//! `PublicKey` and `Signature` element types, not here.
/// Private key lifecycle and scalar algebra
pub(crate) mod bls;
pub use bls::{G1Element, G2Element, PrivateKey, PublicKey, Signature, PRIVATE_KEY_SIZE};

/// Hashing to curve utilities
pub mod hash_to_curve;
pub use hash_to_curve::{HashToCurve, HASH_TO_G2};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use thiserror::Error;

/// Convenience result alias
pub type BlsResult<T> = std::result::Result<T, BLSError>;

/// Domain separation tag for message signatures (RFC 9380 ciphersuite of the
/// message-augmentation scheme variant)
pub const SIG_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_AUG_";

/// Domain separation tag for proofs of possession
pub const POP_DST: &[u8] = b"BLS_POP_BLS12381G2_XMD:SHA-256_SSWU_RO_AUG_";

#[derive(Debug, Error)]
/// Error type
pub enum BLSError {
    /// Decode input was not exactly `PRIVATE_KEY_SIZE` bytes
    #[error("private key must be {size} bytes, got {0}", size = PRIVATE_KEY_SIZE)]
    InvalidKeyLength(usize),
    /// Strict decode saw an integer not less than the group order
    #[error("private key bytes must be less than the group order")]
    KeyNotCanonical,
    /// Aggregation over zero keys is undefined
    #[error("cannot aggregate an empty set of private keys")]
    EmptyAggregation,
    /// The hash-to-curve collaborator could not produce a point
    #[error("could not hash to curve")]
    HashToCurveError,
    /// An IO error from a serialization target
    #[error("io error {0}")]
    IoError(#[from] std::io::Error),
    /// A group element failed to (de)serialize
    #[error("{0}")]
    SerializationError(#[from] ark_serialize::SerializationError),
}
