//! Elgamal secret key types
use crate::{
    common::*,
    curve_arithmetic::Curve,
    elgamal::{cipher::*, errors::ElgamalError, message::*},
};
use rand::*;

/// Elgamal secret key.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SecretKey<C: Curve> {
    /// Secret key.
    pub scalar: C::Scalar,
}

impl_serde_base16!(SecretKey);

impl<C: Curve> Serial for SecretKey<C> {
    fn serial<B: Buffer>(&self, out: &mut B) { self.scalar.serial(out) }
}

impl<C: Curve> Deserial for SecretKey<C> {
    fn deserial<R: ReadBytesExt>(source: &mut R) -> ParseResult<Self> {
        Ok(SecretKey {
            scalar: source.get()?,
        })
    }
}

impl<C: Curve> SecretKey<C> {
    pub fn new(scalar: C::Scalar) -> Self { SecretKey { scalar } }

    /// Recover the message `M = C - s · K`.
    pub fn decrypt(&self, c: &Cipher<C>) -> Message<C> {
        let x = c.0; // r * B
        let sk = x.mul_by_scalar(&self.scalar); // r * s * B
        let y = c.1; // m + r * s * B
        let value = y.minus_point(&sk); // m
        Message { value }
    }

    /// Decrypt a cipher that encrypts a small integer. If `check_negative` is
    /// set, negative values are recovered as well, with values of smaller
    /// magnitude preferred. Fails if no integer with absolute value at most
    /// [MAX_INT](crate::elgamal::MAX_INT) matches, which is also what happens
    /// for ciphers made with a different key.
    pub fn decrypt_int(&self, c: &Cipher<C>, check_negative: bool) -> Result<i64, ElgamalError> {
        self.decrypt(c).to_int(check_negative)
    }

    /// Whether the cipher encrypts `0`. This needs no search.
    pub fn decrypt_is_zero(&self, c: &Cipher<C>) -> bool { self.decrypt(c).value.is_zero_point() }

    /// Generate a `SecretKey` from a `csprng`.
    pub fn generate<T: Rng>(csprng: &mut T) -> Self {
        SecretKey {
            scalar: C::generate_scalar(csprng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        curve_arithmetic::arkworks_instances::ArkGroup,
        elgamal::{public::*, MAX_INT},
    };
    use ark_bls12_381::{G1Projective, G2Projective};
    use curve25519_dalek::ristretto::RistrettoPoint;

    macro_rules! macro_test_encrypt_decrypt_success {
        ($function_name:ident, $curve_type:path) => {
            #[test]
            pub fn $function_name() {
                let mut csprng = thread_rng();
                for _i in 1..100 {
                    let sk: SecretKey<$curve_type> = SecretKey::generate(&mut csprng);
                    let pk = PublicKey::from(&sk);
                    let m = Message::generate(&mut csprng);
                    let c = pk.encrypt(&mut csprng, &m);
                    let mm = sk.decrypt(&c);
                    assert_eq!(m, mm);
                }
            }
        };
    }

    macro_test_encrypt_decrypt_success!(encrypt_decrypt_success_g1, ArkGroup<G1Projective>);
    macro_test_encrypt_decrypt_success!(encrypt_decrypt_success_g2, ArkGroup<G2Projective>);
    macro_test_encrypt_decrypt_success!(encrypt_decrypt_success_ristretto, RistrettoPoint);

    macro_rules! macro_test_encrypt_decrypt_int {
        ($function_name:ident, $curve_type:path, $step:expr) => {
            #[test]
            pub fn $function_name() {
                let mut csprng = thread_rng();
                let sk: SecretKey<$curve_type> = SecretKey::generate(&mut csprng);
                let pk = PublicKey::from(&sk);
                for n in (0..=MAX_INT as i64).step_by($step) {
                    let c = pk.encrypt_int(&mut csprng, n);
                    assert_eq!(sk.decrypt_int(&c, false), Ok(n));
                }
                for n in (-(MAX_INT as i64)..=MAX_INT as i64).step_by($step) {
                    let c = pk.encrypt_int(&mut csprng, n);
                    assert_eq!(sk.decrypt_int(&c, true), Ok(n));
                }
                let c = pk.encrypt_int(&mut csprng, 150);
                assert_eq!(
                    sk.decrypt_int(&c, true),
                    Err(ElgamalError::DiscreteLogNotFound { bound: MAX_INT })
                );
            }
        };
    }

    macro_test_encrypt_decrypt_int!(encrypt_decrypt_int_g1, ArkGroup<G1Projective>, 3);
    macro_test_encrypt_decrypt_int!(encrypt_decrypt_int_g2, ArkGroup<G2Projective>, 7);
    macro_test_encrypt_decrypt_int!(encrypt_decrypt_int_ristretto, RistrettoPoint, 1);

    macro_rules! macro_test_secret_key_to_byte_conversion {
        ($function_name:ident, $curve_type:path) => {
            #[test]
            pub fn $function_name() {
                let mut csprng = thread_rng();
                for _i in 1..100 {
                    let sk: SecretKey<$curve_type> = SecretKey::generate(&mut csprng);
                    let res_sk2 = serialize_deserialize(&sk);
                    assert!(res_sk2.is_ok());
                    let sk2 = res_sk2.unwrap();
                    assert_eq!(sk2, sk);
                }
            }
        };
    }

    macro_test_secret_key_to_byte_conversion!(
        secret_key_to_byte_conversion_g1,
        ArkGroup<G1Projective>
    );
    macro_test_secret_key_to_byte_conversion!(
        secret_key_to_byte_conversion_g2,
        ArkGroup<G2Projective>
    );
    macro_test_secret_key_to_byte_conversion!(secret_key_to_byte_conversion_ristretto, RistrettoPoint);

    #[test]
    fn test_decrypt_with_wrong_key() {
        let mut csprng = thread_rng();
        let sk: SecretKey<RistrettoPoint> = SecretKey::generate(&mut csprng);
        let other: SecretKey<RistrettoPoint> = SecretKey::generate(&mut csprng);
        let pk = PublicKey::from(&sk);
        let c = pk.encrypt_int(&mut csprng, 17);
        assert_eq!(sk.decrypt_int(&c, true), Ok(17));
        assert_eq!(
            other.decrypt_int(&c, true),
            Err(ElgamalError::DiscreteLogNotFound { bound: MAX_INT })
        );
    }

    #[test]
    fn test_decrypt_is_zero() {
        let mut csprng = thread_rng();
        let sk: SecretKey<ArkGroup<G1Projective>> = SecretKey::generate(&mut csprng);
        let pk = PublicKey::from(&sk);
        assert!(sk.decrypt_is_zero(&pk.encrypt_int(&mut csprng, 0)));
        assert!(!sk.decrypt_is_zero(&pk.encrypt_int(&mut csprng, 1)));
        assert!(!sk.decrypt_is_zero(&pk.encrypt_int(&mut csprng, 1000)));
        let difference = pk.encrypt_int(&mut csprng, 12).minus(&pk.encrypt_int(&mut csprng, 12));
        assert!(sk.decrypt_is_zero(&difference));
        assert!(sk.decrypt_is_zero(&Cipher::zero()));
    }

    #[test]
    fn test_negative_without_check_fails() {
        let mut csprng = thread_rng();
        let sk: SecretKey<RistrettoPoint> = SecretKey::generate(&mut csprng);
        let pk = PublicKey::from(&sk);
        let c = pk.encrypt_int(&mut csprng, -5);
        assert!(sk.decrypt_int(&c, false).is_err());
        assert_eq!(sk.decrypt_int(&c, true), Ok(-5));
    }
}
