//! Encryption and decryption of sequences of small integers.
use crate::{
    curve_arithmetic::Curve,
    elgamal::{cipher::*, errors::ElgamalError, public::*, secret::*},
};
use log::debug;
use rand::Rng;
use rayon::prelude::*;

/// Encrypt each of the values, returning the ciphers together with the
/// randomness used, in the order of the input.
pub fn encrypt_int_vec_rand<T: Rng, C: Curve>(
    pk: &PublicKey<C>,
    values: &[i64],
    csprng: &mut T,
) -> Vec<(Cipher<C>, Randomness<C>)> {
    values.iter().map(|&n| pk.encrypt_int_rand(csprng, n)).collect()
}

/// Wrapper around `encrypt_int_vec_rand` that forgets the randomness.
pub fn encrypt_int_vec<T: Rng, C: Curve>(
    pk: &PublicKey<C>,
    values: &[i64],
    csprng: &mut T,
) -> Vec<Cipher<C>> {
    values.iter().map(|&n| pk.encrypt_int(csprng, n)).collect()
}

/// Decrypt each of the ciphers as a small integer, see
/// [SecretKey::decrypt_int]. The ciphers are decrypted in parallel, and the
/// first failure, if any, is returned.
pub fn decrypt_int_vec<C: Curve>(
    sk: &SecretKey<C>,
    ciphers: &[Cipher<C>],
    check_negative: bool,
) -> Result<Vec<i64>, ElgamalError> {
    debug!("Decrypting {} ciphers.", ciphers.len());
    ciphers
        .par_iter()
        .map(|c| sk.decrypt_int(c, check_negative))
        .collect()
}
