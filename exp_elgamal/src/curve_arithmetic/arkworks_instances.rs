//! [Field] and [Curve] for arkworks groups. Only the groups that state their
//! serialized sizes through [CurveElementLength] are instances.
use super::{Curve, Field};
use crate::common::{Buffer, Deserial, ParseResult, Serial};
use ark_ec::CurveGroup;
use ark_std::UniformRand;
use byteorder::ReadBytesExt;
use rand::Rng;

/// Scalar of an arkworks group.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct ArkField<F: ark_ff::PrimeField>(pub(crate) F);

/// Point of an arkworks group, kept in projective coordinates.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct ArkGroup<G: CurveGroup>(pub(crate) G);

impl<G: CurveGroup> ArkGroup<G> {
    pub fn into_ark(self) -> G { self.0 }
}

impl<G: CurveGroup> From<G> for ArkGroup<G> {
    fn from(value: G) -> Self { ArkGroup(value) }
}

/// Sizes of the compressed encodings.
pub trait CurveElementLength {
    const SCALAR_LENGTH: usize;

    const GROUP_ELEMENT_LENGTH: usize;
}

/// Little-endian, as arkworks writes field elements.
impl<F: ark_ff::PrimeField> Serial for ArkField<F> {
    fn serial<B: Buffer>(&self, out: &mut B) {
        self.0
            .serialize_compressed(&mut *out)
            .expect("Writing to a buffer should not fail.")
    }
}

/// Values not reduced modulo the field order are rejected.
impl<F: ark_ff::PrimeField> Deserial for ArkField<F> {
    fn deserial<R: ReadBytesExt>(source: &mut R) -> ParseResult<Self> {
        Ok(ArkField(F::deserialize_compressed(&mut *source)?))
    }
}

impl<F: ark_ff::PrimeField> Field for ArkField<F> {
    fn zero() -> Self { ArkField(F::zero()) }

    fn one() -> Self { ArkField(F::one()) }

    fn is_zero(&self) -> bool { self.0.is_zero() }

    fn negate(&mut self) { self.0 = -self.0 }

    fn add_assign(&mut self, other: &Self) { self.0 += other.0 }

    fn mul_assign(&mut self, other: &Self) { self.0 *= other.0 }
}

impl<G: CurveGroup> Serial for ArkGroup<G> {
    fn serial<B: Buffer>(&self, out: &mut B) {
        self.0
            .serialize_compressed(&mut *out)
            .expect("Writing to a buffer should not fail.")
    }
}

/// The point must be on the curve and in the prime order subgroup.
impl<G: CurveGroup> Deserial for ArkGroup<G> {
    fn deserial<R: ReadBytesExt>(source: &mut R) -> ParseResult<Self> {
        Ok(ArkGroup(G::deserialize_compressed(&mut *source)?))
    }
}

impl<G: CurveGroup + CurveElementLength> Curve for ArkGroup<G> {
    type Scalar = ArkField<G::ScalarField>;

    const GROUP_ELEMENT_LENGTH: usize = G::GROUP_ELEMENT_LENGTH;
    const SCALAR_LENGTH: usize = G::SCALAR_LENGTH;

    fn zero_point() -> Self { ArkGroup(G::zero()) }

    fn one_point() -> Self { ArkGroup(G::generator()) }

    fn is_zero_point(&self) -> bool { self.0.is_zero() }

    fn inverse_point(&self) -> Self { ArkGroup(-self.0) }

    fn plus_point(&self, other: &Self) -> Self { ArkGroup(self.0 + other.0) }

    fn minus_point(&self, other: &Self) -> Self { ArkGroup(self.0 - other.0) }

    fn mul_by_scalar(&self, scalar: &Self::Scalar) -> Self { ArkGroup(self.0 * scalar.0) }

    fn generate<R: Rng>(rng: &mut R) -> Self { ArkGroup(G::rand(rng)) }

    fn generate_scalar<R: Rng>(rng: &mut R) -> Self::Scalar {
        ArkField(<G::ScalarField as UniformRand>::rand(rng))
    }

    fn scalar_from_u64(n: u64) -> Self::Scalar { ArkField(G::ScalarField::from(n)) }

    fn scalar_from_be_bytes<A: AsRef<[u8]>>(bs: A) -> Self::Scalar {
        ArkField(<G::ScalarField as ark_ff::PrimeField>::from_be_bytes_mod_order(
            bs.as_ref(),
        ))
    }
}
