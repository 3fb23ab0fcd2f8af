use ark_bls12_381::G2Projective;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// A BLS signature on G2, produced by hashing a message to the curve and
/// scaling the result by a private key. Pairing-based verification is the
/// consumer's concern.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Signature(G2Projective);

impl From<G2Projective> for Signature {
    fn from(sig: G2Projective) -> Signature {
        Signature(sig)
    }
}

impl AsRef<G2Projective> for Signature {
    fn as_ref(&self) -> &G2Projective {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_helpers::rng, PrivateKey, HASH_TO_G2, SIG_DST};

    #[test]
    fn test_signature_serialization() {
        let rng = &mut rng();
        for _ in 0..100 {
            let sk = PrivateKey::generate(rng);
            let sig = sk.sign(b"hello", SIG_DST, &*HASH_TO_G2).unwrap();

            let mut sig_bytes = vec![];
            sig.serialize_compressed(&mut sig_bytes).unwrap();
            assert_eq!(sig_bytes.len(), 96);

            let de = Signature::deserialize_compressed(&sig_bytes[..]).unwrap();
            assert_eq!(de, sig);
        }
    }
}
