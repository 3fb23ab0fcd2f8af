use crate::PrivateKey;

// Same RNG for all tests
pub fn rng() -> rand::rngs::ThreadRng {
    rand::thread_rng()
}

/// generate `num` random private keys
pub fn keygen_mul(num: usize) -> Vec<PrivateKey> {
    let rng = &mut rng();
    (0..num).map(|_| PrivateKey::generate(rng)).collect()
}
