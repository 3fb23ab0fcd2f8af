use log::trace;

use super::HashToCurve;
use crate::BLSError;

use ark_bls12_381::{g2::Config as G2Config, G2Projective};
use ark_ec::hashing::{
    curve_maps::wb::WBMap, map_to_curve_hasher::MapToCurveBasedHasher,
    HashToCurve as ArkHashToCurve,
};
use ark_ff::field_hashers::DefaultFieldHasher;
use once_cell::sync::Lazy;
use sha2::Sha256;

/// RFC 9380 `BLS12381G2_XMD:SHA-256_SSWU_RO` hasher to G2.
pub static HASH_TO_G2: Lazy<SswuHashToG2> = Lazy::new(|| SswuHashToG2);

type G2Hasher =
    MapToCurveBasedHasher<G2Projective, DefaultFieldHasher<Sha256, 128>, WBMap<G2Config>>;

/// The simplified-SWU random-oracle map to G2, parameterized per call by the
/// domain separation tag. Constant time, unlike try-and-increment schemes.
#[derive(Clone, Debug, Default)]
pub struct SswuHashToG2;

impl HashToCurve for SswuHashToG2 {
    type Output = G2Projective;

    fn hash(&self, dst: &[u8], message: &[u8]) -> Result<G2Projective, BLSError> {
        let hasher = G2Hasher::new(dst).map_err(|_| BLSError::HashToCurveError)?;
        let point = hasher.hash(message).map_err(|_| BLSError::HashToCurveError)?;
        trace!(
            "hashed {} byte message to G2 under dst {}",
            message.len(),
            hex::encode(dst)
        );
        Ok(point.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{POP_DST, SIG_DST};
    use ark_ec::CurveGroup;

    #[test]
    fn test_hash_lands_in_subgroup() {
        let _ = env_logger::builder().is_test(true).try_init();
        let point = HASH_TO_G2.hash(SIG_DST, b"some message").unwrap();
        let affine = point.into_affine();
        assert!(affine.is_on_curve());
        assert!(affine.is_in_correct_subgroup_assuming_on_curve());
    }

    #[test]
    fn test_hash_domain_separation() {
        let base = HASH_TO_G2.hash(SIG_DST, b"msg").unwrap();
        assert_eq!(base, HASH_TO_G2.hash(SIG_DST, b"msg").unwrap());
        assert_ne!(base, HASH_TO_G2.hash(POP_DST, b"msg").unwrap());
        assert_ne!(base, HASH_TO_G2.hash(SIG_DST, b"other msg").unwrap());
    }
}
