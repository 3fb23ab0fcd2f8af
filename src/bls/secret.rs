use crate::{BLSError, BlsResult, HashToCurve, PublicKey, Signature};

use ark_bls12_381::{Fr, G1Projective, G2Projective};
use ark_ec::Group;
use ark_ff::{BigInteger, PrimeField};
use ark_std::{UniformRand, Zero};
use rand::Rng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use std::{fmt, io::Write, ops::Mul};

/// Canonical byte width of a serialized private key: a big-endian unsigned
/// integer strictly less than the group order.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// A BLS private key: one scalar in the prime-order field `Fr`.
///
/// The key exclusively owns its scalar. Cloning deep-copies the scalar into
/// independent storage, moving transfers ownership and makes the source
/// statically unusable, and dropping overwrites the scalar with zero before
/// the memory is released. The zero scalar is representable (and is what
/// `Default` produces); it is cryptographically degenerate, so callers that
/// must reject it can check [`PrivateKey::is_zero`].
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    sk: Fr,
}

impl PrivateKey {
    /// Decodes a private key from exactly [`PRIVATE_KEY_SIZE`] big-endian
    /// bytes.
    ///
    /// With `mod_order = false` the encoded integer must already be less than
    /// the group order, otherwise [`BLSError::KeyNotCanonical`] is returned.
    /// With `mod_order = true` the integer is reduced modulo the order, which
    /// maps arbitrary 32-byte strings (e.g. hash output) into the field.
    pub fn from_bytes(bytes: &[u8], mod_order: bool) -> BlsResult<PrivateKey> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(BLSError::InvalidKeyLength(bytes.len()));
        }
        if !mod_order {
            // Equal-width big-endian compare is numeric compare.
            let order = Fr::MODULUS.to_bytes_be();
            if bytes >= &order[..] {
                return Err(BLSError::KeyNotCanonical);
            }
        }
        Ok(PrivateKey {
            sk: Fr::from_be_bytes_mod_order(bytes),
        })
    }

    /// Samples a uniformly random private key.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> PrivateKey {
        PrivateKey { sk: Fr::rand(rng) }
    }

    /// Constructs a private key from a native field element.
    pub fn from_scalar(sk: &Fr) -> PrivateKey {
        PrivateKey { sk: *sk }
    }

    /// Exposes the native field element.
    pub fn as_scalar(&self) -> &Fr {
        &self.sk
    }

    /// Derives the G1 public key, `sk * G1::generator()`.
    pub fn to_g1(&self) -> PublicKey {
        PublicKey::from(G1Projective::generator() * self.sk)
    }

    /// Derives the G2 counterpart, `sk * G2::generator()`, used as the public
    /// key in the short-signature parameterization of the scheme.
    pub fn to_g2(&self) -> Signature {
        Signature::from(G2Projective::generator() * self.sk)
    }

    /// Sums the provided private keys modulo the group order.
    ///
    /// Aggregating zero keys is undefined, not zero: an empty slice returns
    /// [`BLSError::EmptyAggregation`]. The inputs are left untouched and the
    /// result is independent of their order.
    pub fn aggregate(keys: &[PrivateKey]) -> BlsResult<PrivateKey> {
        let (first, rest) = keys.split_first().ok_or(BLSError::EmptyAggregation)?;
        let sk = rest.iter().fold(first.sk, |acc, key| acc + key.sk);
        Ok(PrivateKey { sk })
    }

    /// Whether the scalar is zero.
    pub fn is_zero(&self) -> bool {
        self.sk.is_zero()
    }

    /// Encodes the scalar as [`PRIVATE_KEY_SIZE`] big-endian bytes, the
    /// inverse of `from_bytes(_, false)`.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_SIZE] {
        let mut out = [0u8; PRIVATE_KEY_SIZE];
        out.copy_from_slice(&self.sk.into_bigint().to_bytes_be());
        out
    }

    /// Writes the canonical encoding to the given target.
    pub fn write_bytes<W: Write>(&self, mut writer: W) -> BlsResult<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Signs a message: hashes it to G2 under the given domain separation tag
    /// and scales the resulting point by the secret scalar.
    pub fn sign<H: HashToCurve<Output = G2Projective>>(
        &self,
        message: &[u8],
        dst: &[u8],
        hash_to_g2: &H,
    ) -> BlsResult<Signature> {
        Ok(Signature::from(hash_to_g2.hash(dst, message)? * self.sk))
    }
}

impl Default for PrivateKey {
    fn default() -> PrivateKey {
        PrivateKey { sk: Fr::zero() }
    }
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        // Wipe the Montgomery limbs through the volatile path so the store
        // cannot be elided, then leave a well-formed zero value behind.
        self.sk.0 .0.zeroize();
        self.sk = Fr::zero();
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

impl Mul<&PrivateKey> for &PublicKey {
    type Output = PublicKey;

    fn mul(self, key: &PrivateKey) -> PublicKey {
        PublicKey::from(*self.as_ref() * key.sk)
    }
}

impl Mul<&PublicKey> for &PrivateKey {
    type Output = PublicKey;

    fn mul(self, element: &PublicKey) -> PublicKey {
        element * self
    }
}

impl Mul<&PrivateKey> for &Signature {
    type Output = Signature;

    fn mul(self, key: &PrivateKey) -> Signature {
        Signature::from(*self.as_ref() * key.sk)
    }
}

impl Mul<&Signature> for &PrivateKey {
    type Output = Signature;

    fn mul(self, element: &Signature) -> Signature {
        element * self
    }
}
