use crate::PrivateKey;

use ark_bls12_381::G1Projective;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// A BLS public key on G1.
///
/// This is an opaque element type: it is produced by key derivation and
/// consumed by verifiers, and beyond the native-representation conversions it
/// only knows how to (de)serialize itself in the usual compressed form.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct PublicKey(G1Projective);

impl From<G1Projective> for PublicKey {
    fn from(pk: G1Projective) -> PublicKey {
        PublicKey(pk)
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(key: &PrivateKey) -> PublicKey {
        key.to_g1()
    }
}

impl AsRef<G1Projective> for PublicKey {
    fn as_ref(&self) -> &G1Projective {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::rng;

    #[test]
    fn test_public_key_serialization() {
        let rng = &mut rng();
        for _ in 0..100 {
            let sk = PrivateKey::generate(rng);
            let pk = sk.to_g1();

            let mut pk_bytes = vec![];
            pk.serialize_compressed(&mut pk_bytes).unwrap();
            assert_eq!(pk_bytes.len(), 48);

            let de = PublicKey::deserialize_compressed(&pk_bytes[..]).unwrap();
            assert_eq!(de, pk);
        }
    }

    #[test]
    fn test_from_private_key() {
        let rng = &mut rng();
        let sk = PrivateKey::generate(rng);
        assert_eq!(PublicKey::from(&sk), sk.to_g1());
    }
}
