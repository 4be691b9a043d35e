//! Elgamal cipher types

use crate::{
    common::*,
    curve_arithmetic::{Curve, Field},
    elgamal::encoding::int_to_scalar,
};
use rand::*;
use std::{iter::Sum, ops::Deref, ptr, sync::atomic};

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
/// Encrypted message. The first component is the ephemeral key `K = r · B`,
/// the second is the masked message `C = r · A + M`.
pub struct Cipher<C: Curve>(pub C, pub C);

impl_serde_base16!(Cipher);

/// Randomness which was used to encrypt a message. It must be kept private,
/// and is overwritten with zero when dropped.
#[derive(Debug, PartialEq, Eq, Clone)]
#[repr(transparent)]
pub struct Randomness<C: Curve> {
    randomness: C::Scalar,
}

impl<C: Curve> AsRef<C::Scalar> for Randomness<C> {
    fn as_ref(&self) -> &C::Scalar { &self.randomness }
}

/// This trait allows automatic conversion of &Randomness<C> to &C::Scalar.
impl<C: Curve> Deref for Randomness<C> {
    type Target = C::Scalar;

    fn deref(&self) -> &C::Scalar { &self.randomness }
}

impl<C: Curve> Drop for Randomness<C> {
    fn drop(&mut self) {
        // Scalars are plain arrays of limbs, so one volatile write clears them.
        unsafe { ptr::write_volatile(&mut self.randomness, C::Scalar::zero()) }
        atomic::compiler_fence(atomic::Ordering::SeqCst);
    }
}

impl<C: Curve> Serial for Randomness<C> {
    fn serial<B: Buffer>(&self, out: &mut B) { self.randomness.serial(out) }
}

impl<C: Curve> Deserial for Randomness<C> {
    fn deserial<R: ReadBytesExt>(source: &mut R) -> ParseResult<Self> {
        Ok(Randomness::new(source.get()?))
    }
}

impl<C: Curve> Randomness<C> {
    pub fn new(randomness: C::Scalar) -> Self { Randomness { randomness } }

    /// Generate a non-zero randomness. Used in encryption.
    pub fn generate<T>(csprng: &mut T) -> Self
    where
        T: Rng, {
        Randomness::new(C::generate_non_zero_scalar(csprng))
    }
}

impl<C: Curve> Serial for Cipher<C> {
    fn serial<B: Buffer>(&self, out: &mut B) {
        self.0.serial(out);
        self.1.serial(out);
    }
}

impl<C: Curve> Deserial for Cipher<C> {
    fn deserial<R: ReadBytesExt>(source: &mut R) -> ParseResult<Self> {
        let k = source.get()?;
        let c = source.get()?;
        Ok(Cipher(k, c))
    }
}

impl<C: Curve> Cipher<C> {
    /// Length of the binary serialization of a cipher.
    pub const LENGTH: usize = 2 * C::GROUP_ELEMENT_LENGTH;

    /// Generate a random cipher.
    pub fn generate<T>(csprng: &mut T) -> Self
    where
        T: Rng, {
        Cipher(C::generate(csprng), C::generate(csprng))
    }

    /// The cipher with both components the identity. It is a valid encryption
    /// of `0` under every public key, with randomness `0`, and the neutral
    /// element of [Cipher::combine].
    pub fn zero() -> Self { Cipher(C::zero_point(), C::zero_point()) }

    /// Combine two ciphers together by adding the individual components.
    ///
    /// This does not check that both ciphers were produced with the same public
    /// key, that is the responsibility of the caller. In case ciphers were
    /// produced with different public keys, their combination is still
    /// mathematically valid, however it does not have meaning.
    pub fn combine(&self, other: &Self) -> Self {
        Self(self.0.plus_point(&other.0), self.1.plus_point(&other.1))
    }

    /// Subtract the individual components. If the inputs encrypt `a` and `b`
    /// the result encrypts `a - b`.
    pub fn minus(&self, other: &Self) -> Self {
        Self(self.0.minus_point(&other.0), self.1.minus_point(&other.1))
    }

    /// If the input encrypts `a`, the result encrypts `-a`.
    pub fn negate(&self) -> Self { Self(self.0.inverse_point(), self.1.inverse_point()) }

    /// Scale the ciphertext by the given scalar. If the input is encryption of
    /// `m`, then the result is the encryption of `e · m`, where `e` is the
    /// given scalar.
    pub fn scale(&self, e: &C::Scalar) -> Self {
        Self(self.0.mul_by_scalar(e), self.1.mul_by_scalar(e))
    }

    /// Same as `scale`, but provided for convenience. Negative factors are
    /// taken modulo the group order.
    pub fn scale_i64(&self, e: i64) -> Self { self.scale(&int_to_scalar::<C>(e)) }
}

impl<'a, C: Curve> Sum<&'a Cipher<C>> for Cipher<C> {
    fn sum<I: Iterator<Item = &'a Cipher<C>>>(iter: I) -> Self {
        iter.fold(Cipher::zero(), |acc, c| acc.combine(c))
    }
}

impl<C: Curve> Sum<Cipher<C>> for Cipher<C> {
    fn sum<I: Iterator<Item = Cipher<C>>>(iter: I) -> Self {
        iter.fold(Cipher::zero(), |acc, c| acc.combine(&c))
    }
}

/// Linear combination of ciphers. If `ciphers[i]` encrypts `v_i` then the
/// result encrypts `Σ_i scalars[i] · v_i`.
///
/// The slices must have the same length.
pub fn multicombine<C: Curve>(ciphers: &[Cipher<C>], scalars: &[C::Scalar]) -> Cipher<C> {
    assert_eq!(
        ciphers.len(),
        scalars.len(),
        "multicombine precondition violation: input slices have different length."
    );
    let (ciphers_0, ciphers_1): (Vec<_>, Vec<_>) = ciphers.iter().map(|x| (x.0, x.1)).unzip();
    Cipher(C::multiexp(&ciphers_0, scalars), C::multiexp(&ciphers_1, scalars))
}
