//! Elgamal public keys.

use crate::{
    common::*,
    curve_arithmetic::Curve,
    elgamal::{cipher::*, message::*, secret::*},
};
use core::fmt::Debug;
use rand::*;

/// Elgamal public key `A = s · B`, where `B` is [Curve::one_point].
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PublicKey<C: Curve> {
    pub key: C,
}

impl_serde_base16!(PublicKey);

impl<C: Curve> Debug for PublicKey<C> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "PublicKey({:?})", self.key)
    }
}

impl<C: Curve> Serial for PublicKey<C> {
    fn serial<B: Buffer>(&self, out: &mut B) { self.key.serial(out) }
}

impl<C: Curve> Deserial for PublicKey<C> {
    fn deserial<R: ReadBytesExt>(source: &mut R) -> ParseResult<Self> {
        Ok(PublicKey { key: source.get()? })
    }
}

impl<C: Curve> From<&SecretKey<C>> for PublicKey<C> {
    /// Derive this public key from its corresponding `SecretKey`.
    fn from(secret_key: &SecretKey<C>) -> PublicKey<C> {
        PublicKey {
            key: C::one_point().mul_by_scalar(&secret_key.scalar),
        }
    }
}

impl<C: Curve> PublicKey<C> {
    /// Encrypt and return the randomness used. NB: Randomness must be kept
    /// private.
    pub fn encrypt_rand<T>(&self, csprng: &mut T, m: &Message<C>) -> (Cipher<C>, Randomness<C>)
    where
        T: Rng, {
        let k = Randomness::generate(csprng);
        (self.hide(&k, m), k)
    }

    #[inline]
    /// Wrapper around `encrypt_rand` that forgets the randomness.
    pub fn encrypt<T>(&self, csprng: &mut T, m: &Message<C>) -> Cipher<C>
    where
        T: Rng, {
        self.encrypt_rand(csprng, m).0
    }

    /// Deterministic encryption with the given randomness `k`, producing
    /// `(k · B, k · A + M)`.
    pub fn hide(&self, k: &C::Scalar, message: &Message<C>) -> Cipher<C> {
        let t = C::one_point().mul_by_scalar(k);
        let s = self.key.mul_by_scalar(k).plus_point(&message.value);
        Cipher(t, s)
    }

    /// Encrypt a small integer `n` as the message `n · B`. Return the
    /// randomness used in encryption.
    pub fn encrypt_int_rand<T>(&self, csprng: &mut T, n: i64) -> (Cipher<C>, Randomness<C>)
    where
        T: Rng, {
        self.encrypt_rand(csprng, &Message::from_int(n))
    }

    /// Wrapper around `encrypt_int_rand` that forgets the randomness.
    pub fn encrypt_int<T>(&self, csprng: &mut T, n: i64) -> Cipher<C>
    where
        T: Rng, {
        self.encrypt_int_rand(csprng, n).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve_arithmetic::arkworks_instances::ArkGroup;
    use ark_bls12_381::{G1Projective, G2Projective};
    use curve25519_dalek::ristretto::RistrettoPoint;

    macro_rules! macro_test_key_to_byte_conversion {
        ($function_name:ident, $curve_type:path) => {
            #[test]
            pub fn $function_name() {
                let mut csprng = thread_rng();
                for _i in 1..100 {
                    let sk: SecretKey<$curve_type> = SecretKey::generate(&mut csprng);
                    let pk = PublicKey::from(&sk);
                    let res_pk2 = serialize_deserialize(&pk);
                    assert!(res_pk2.is_ok());
                    let pk2 = res_pk2.unwrap();
                    assert_eq!(pk2, pk);
                }
            }
        };
    }

    macro_test_key_to_byte_conversion!(key_to_byte_conversion_g1, ArkGroup<G1Projective>);
    macro_test_key_to_byte_conversion!(key_to_byte_conversion_g2, ArkGroup<G2Projective>);
    macro_test_key_to_byte_conversion!(key_to_byte_conversion_ristretto, RistrettoPoint);

    #[test]
    fn test_encryption_is_randomized() {
        let mut csprng = thread_rng();
        let sk: SecretKey<RistrettoPoint> = SecretKey::generate(&mut csprng);
        let pk = PublicKey::from(&sk);
        let c1 = pk.encrypt_int(&mut csprng, 5);
        let c2 = pk.encrypt_int(&mut csprng, 5);
        assert_ne!(c1, c2);
        assert_ne!(c1.0, c2.0);
    }

    #[test]
    fn test_hide_is_deterministic() {
        let mut csprng = thread_rng();
        let sk: SecretKey<RistrettoPoint> = SecretKey::generate(&mut csprng);
        let pk = PublicKey::from(&sk);
        let m = Message::from_int(9);
        let (c, r) = pk.encrypt_rand(&mut csprng, &m);
        assert_eq!(pk.hide(&r, &m), c);
        assert_eq!(c.0, RistrettoPoint::one_point().mul_by_scalar(&r));
    }
}
