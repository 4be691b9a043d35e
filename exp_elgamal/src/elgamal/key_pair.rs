//! A secret key together with its public key.
use crate::{
    curve_arithmetic::Curve,
    elgamal::{public::PublicKey, secret::SecretKey},
};
use rand::Rng;

/// A matching pair of keys, i.e., `public.key = secret.scalar · B`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct KeyPair<C: Curve> {
    pub secret: SecretKey<C>,
    pub public: PublicKey<C>,
}

impl<C: Curve> From<SecretKey<C>> for KeyPair<C> {
    fn from(secret: SecretKey<C>) -> Self {
        let public = PublicKey::from(&secret);
        KeyPair { secret, public }
    }
}

impl<C: Curve> KeyPair<C> {
    /// The key pair with the given secret scalar.
    pub fn from_scalar(scalar: C::Scalar) -> Self { SecretKey::new(scalar).into() }

    /// Generate a fresh key pair with a uniformly random secret.
    pub fn generate<T: Rng>(csprng: &mut T) -> Self { SecretKey::generate(csprng).into() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::*,
        curve_arithmetic::{
            arkworks_instances::ArkGroup,
            small_group::{SmallGroup, SmallScalar},
        },
        elgamal::Message,
    };
    use ark_bls12_381::{G1Projective, G2Projective};
    use curve25519_dalek::ristretto::RistrettoPoint;
    use rand::thread_rng;

    macro_rules! macro_test_key_pair {
        ($function_name:ident, $curve_type:path) => {
            #[test]
            pub fn $function_name() {
                let mut csprng = thread_rng();
                let kp: KeyPair<$curve_type> = KeyPair::generate(&mut csprng);
                assert_eq!(
                    kp.public.key,
                    <$curve_type>::one_point().mul_by_scalar(&kp.secret.scalar)
                );
                let other: KeyPair<$curve_type> = KeyPair::generate(&mut csprng);
                assert_ne!(kp.secret, other.secret);
                assert_ne!(kp.public, other.public);
                let again = KeyPair::from_scalar(kp.secret.scalar);
                assert_eq!(kp, again);
            }
        };
    }

    macro_test_key_pair!(key_pair_g1, ArkGroup<G1Projective>);
    macro_test_key_pair!(key_pair_g2, ArkGroup<G2Projective>);
    macro_test_key_pair!(key_pair_ristretto, RistrettoPoint);

    /// Encryption in the group of order 11 with secret 7, randomness 2 and
    /// message 3, checked by hand.
    #[test]
    fn test_small_group_by_hand() {
        let kp: KeyPair<SmallGroup> = KeyPair::from_scalar(SmallScalar::new(7));
        assert_eq!(kp.public.key, SmallGroup::new(7));
        let m = Message::from_int(3);
        assert_eq!(m.value, SmallGroup::new(3));
        let c = kp.public.hide(&SmallScalar::new(2), &m);
        // K = 2 and C = 2 * 7 + 3 = 17 = 6 mod 11.
        assert_eq!(c.0, SmallGroup::new(2));
        assert_eq!(c.1, SmallGroup::new(6));
        assert_eq!(to_bytes(&c), vec![2, 6]);
        assert_eq!(kp.secret.decrypt(&c), m);
        assert_eq!(kp.secret.decrypt_int(&c, false), Ok(3));
        assert_eq!(kp.secret.decrypt_int(&c, true), Ok(3));
    }

    #[test]
    fn test_small_group_negative_by_hand() {
        let kp: KeyPair<SmallGroup> = KeyPair::from_scalar(SmallScalar::new(7));
        // -3 is encoded as the element 8.
        let c = kp.public.hide(&SmallScalar::new(4), &Message::from_int(-3));
        assert_eq!(kp.secret.decrypt(&c).value, SmallGroup::new(8));
        assert_eq!(kp.secret.decrypt_int(&c, true), Ok(-3));
        assert_eq!(kp.secret.decrypt_int(&c, false), Ok(8));
    }
}
