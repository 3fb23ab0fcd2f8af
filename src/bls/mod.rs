/// Implements the private-key side of BLS signatures as specified in
/// https://crypto.stanford.edu/~dabo/pubs/papers/BLSmultisig.html, on BLS12-381
/// with public keys in G1 and signatures in G2.
mod secret;
pub use secret::{PrivateKey, PRIVATE_KEY_SIZE};

mod public;
pub use public::PublicKey;

mod signature;
pub use signature::Signature;

/// The G1 element type produced by public-key derivation.
pub type G1Element = PublicKey;

/// The G2 element type produced by signing.
pub type G2Element = Signature;
