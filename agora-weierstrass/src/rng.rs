use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};

/// Source of uniformly random scalars used for key generation.
pub trait ScalarSource {
    /// Returns a uniformly random integer in `[0, 2^bits)`.
    fn random_scalar(&mut self, bits: u64) -> BigUint;
}

impl<R: RngCore + CryptoRng> ScalarSource for R {
    fn random_scalar(&mut self, bits: u64) -> BigUint {
        let mut bytes = vec![0u8; bits.div_ceil(8) as usize];
        self.fill_bytes(&mut bytes);
        let excess = bytes.len() as u64 * 8 - bits;
        if let Some(first) = bytes.first_mut() {
            *first &= 0xff >> excess;
        }
        BigUint::from_bytes_be(&bytes)
    }
}
