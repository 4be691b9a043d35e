//! The Ristretto group of `curve25519-dalek`.
use super::{Curve, CurveDecodingError, Field};
use crate::common::{deserial_bytes, Buffer, Deserial, ParseResult, Serial};
use byteorder::ReadBytesExt;
use curve25519_dalek::{
    constants::RISTRETTO_BASEPOINT_POINT,
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::{Identity, IsIdentity, VartimeMultiscalarMul},
};
use rand::Rng;

/// Newtype so that the crate's traits can be implemented for dalek scalars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::From)]
pub struct RistrettoScalar(Scalar);

impl Serial for RistrettoScalar {
    fn serial<B: Buffer>(&self, out: &mut B) {
        out.write_all(self.0.as_bytes())
            .expect("Writing to a buffer should not fail.");
    }
}

/// Only canonical, i.e., fully reduced, encodings are accepted.
impl Deserial for RistrettoScalar {
    fn deserial<R: ReadBytesExt>(source: &mut R) -> ParseResult<Self> {
        let bytes: [u8; 32] = deserial_bytes(source)?;
        Option::<Scalar>::from(Scalar::from_canonical_bytes(bytes))
            .map(RistrettoScalar)
            .ok_or_else(|| CurveDecodingError::NotInField(hex::encode(bytes)).into())
    }
}

impl Field for RistrettoScalar {
    fn zero() -> Self { RistrettoScalar(Scalar::ZERO) }

    fn one() -> Self { RistrettoScalar(Scalar::ONE) }

    fn is_zero(&self) -> bool { self.0 == Scalar::ZERO }

    fn negate(&mut self) { self.0 = -self.0 }

    fn add_assign(&mut self, other: &Self) { self.0 += other.0 }

    fn mul_assign(&mut self, other: &Self) { self.0 *= other.0 }
}

impl Serial for RistrettoPoint {
    fn serial<B: Buffer>(&self, out: &mut B) {
        out.write_all(self.compress().as_bytes())
            .expect("Writing to a buffer should not fail.");
    }
}

impl Deserial for RistrettoPoint {
    fn deserial<R: ReadBytesExt>(source: &mut R) -> ParseResult<Self> {
        let bytes: [u8; 32] = deserial_bytes(source)?;
        CompressedRistretto(bytes)
            .decompress()
            .ok_or_else(|| CurveDecodingError::NotOnCurve.into())
    }
}

impl Curve for RistrettoPoint {
    type Scalar = RistrettoScalar;

    const GROUP_ELEMENT_LENGTH: usize = 32;
    const SCALAR_LENGTH: usize = 32;

    fn zero_point() -> Self { RistrettoPoint::identity() }

    fn one_point() -> Self { RISTRETTO_BASEPOINT_POINT }

    fn is_zero_point(&self) -> bool { self.is_identity() }

    fn inverse_point(&self) -> Self { -self }

    fn plus_point(&self, other: &Self) -> Self { self + other }

    fn minus_point(&self, other: &Self) -> Self { self - other }

    fn mul_by_scalar(&self, scalar: &Self::Scalar) -> Self { self * scalar.0 }

    fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut uniform_bytes = [0u8; 64];
        rng.fill_bytes(&mut uniform_bytes);
        RistrettoPoint::from_uniform_bytes(&uniform_bytes)
    }

    fn generate_scalar<R: Rng>(rng: &mut R) -> Self::Scalar {
        let mut wide = [0u8; 64];
        rng.fill_bytes(&mut wide);
        RistrettoScalar(Scalar::from_bytes_mod_order_wide(&wide))
    }

    fn scalar_from_u64(n: u64) -> Self::Scalar { RistrettoScalar(Scalar::from(n)) }

    fn multiexp(gs: &[Self], es: &[Self::Scalar]) -> Self {
        RistrettoPoint::vartime_multiscalar_mul(es.iter().map(|e| e.0), gs)
    }
}
