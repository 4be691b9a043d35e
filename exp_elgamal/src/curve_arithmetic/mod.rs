//! The group abstraction consumed by the encryption scheme, and its
//! instances: the two groups of BLS12-381 (via arkworks), the Ristretto group,
//! and a toy group of order 11 for tests.
//!
//! Every operation takes its inputs by reference and returns a fresh value.
//! Points and scalars are `Copy`, so no two logical values can share state.
pub mod arkworks_instances;
mod bls12_381_arkworks;
mod ed25519_instance;
#[cfg(any(test, feature = "internal-test-helpers"))]
pub mod small_group;

pub use ed25519_instance::RistrettoScalar;

use crate::common::Serialize;
use rand::Rng;
use std::fmt::Debug;
use thiserror::Error;

/// Reasons a byte string is not a valid group element or scalar.
#[derive(Error, Debug)]
pub enum CurveDecodingError {
    #[error("Not a point on the curve.")]
    NotOnCurve,
    #[error("{0} is not a field element.")]
    NotInField(String),
}

/// Arithmetic in the scalar field of a [Curve].
pub trait Field: Sized + Eq + Copy + Clone + Send + Sync + Debug {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    fn is_zero(&self) -> bool;

    /// Replace the value by its additive inverse, i.e., the order minus the
    /// value.
    fn negate(&mut self);

    fn add_assign(&mut self, other: &Self);

    fn mul_assign(&mut self, other: &Self);
}

/// A group of prime order with a distinguished generator. The group is
/// written additively.
pub trait Curve:
    Serialize + Copy + Clone + Sized + Send + Sync + Debug + PartialEq + Eq + 'static {
    /// The field of integers modulo the group order.
    type Scalar: Field + Serialize;
    /// Size in bytes of serialized scalars.
    const SCALAR_LENGTH: usize;
    /// Size in bytes of serialized group elements.
    const GROUP_ELEMENT_LENGTH: usize;
    /// The identity.
    fn zero_point() -> Self;
    /// The fixed generator, written `B` throughout the crate.
    fn one_point() -> Self;
    fn is_zero_point(&self) -> bool;
    fn inverse_point(&self) -> Self;
    fn plus_point(&self, other: &Self) -> Self;
    fn minus_point(&self, other: &Self) -> Self;
    fn mul_by_scalar(&self, scalar: &Self::Scalar) -> Self;
    /// A uniformly random group element.
    fn generate<R: Rng>(rng: &mut R) -> Self;
    /// A uniformly random scalar.
    fn generate_scalar<R: Rng>(rng: &mut R) -> Self::Scalar;
    /// A uniformly random non-zero scalar, by rejection sampling.
    fn generate_non_zero_scalar<R: Rng>(rng: &mut R) -> Self::Scalar {
        loop {
            let s = Self::generate_scalar(rng);
            if !s.is_zero() {
                return s;
            }
        }
    }
    /// The scalar `n` reduced modulo the group order.
    fn scalar_from_u64(n: u64) -> Self::Scalar;
    /// Interpret the bytes as a big-endian integer of any length and reduce
    /// it modulo the group order.
    fn scalar_from_be_bytes<A: AsRef<[u8]>>(bs: A) -> Self::Scalar {
        let radix = Self::scalar_from_u64(256);
        bs.as_ref().iter().fold(Self::Scalar::zero(), |mut acc, b| {
            acc.mul_assign(&radix);
            acc.add_assign(&Self::scalar_from_u64(u64::from(*b)));
            acc
        })
    }
    /// Compute `Σ_i es[i] · gs[i]`. The slices must have equal length.
    fn multiexp(gs: &[Self], es: &[Self::Scalar]) -> Self {
        gs.iter()
            .zip(es)
            .fold(Self::zero_point(), |acc, (g, e)| acc.plus_point(&g.mul_by_scalar(e)))
    }
}
