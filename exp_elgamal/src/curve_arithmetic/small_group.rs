//! A toy group of prime order [ORDER], the integers modulo [ORDER] under
//! addition with generator `1`. It offers no security whatsoever and exists
//! so that encryption can be checked by hand on small numbers.
use super::{Curve, CurveDecodingError, Field};
use crate::common::{Buffer, Deserial, ParseResult, Serial};
use byteorder::ReadBytesExt;
use rand::Rng;

/// Order of the group.
pub const ORDER: u8 = 11;

/// Element of the scalar field, always in the range `[0, ORDER)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmallScalar(u8);

/// Element of the group, always in the range `[0, ORDER)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmallGroup(u8);

impl SmallScalar {
    pub fn new(v: u64) -> Self { SmallScalar((v % u64::from(ORDER)) as u8) }

    pub fn value(self) -> u8 { self.0 }
}

impl SmallGroup {
    /// The element `v · one_point()`.
    pub fn new(v: u64) -> Self { SmallGroup((v % u64::from(ORDER)) as u8) }

    pub fn value(self) -> u8 { self.0 }
}

fn add_mod(a: u8, b: u8) -> u8 { ((u16::from(a) + u16::from(b)) % u16::from(ORDER)) as u8 }

fn neg_mod(a: u8) -> u8 { (ORDER - a) % ORDER }

fn mul_mod(a: u8, b: u8) -> u8 { ((u16::from(a) * u16::from(b)) % u16::from(ORDER)) as u8 }

fn deserial_residue<R: ReadBytesExt>(source: &mut R) -> ParseResult<u8> {
    let v = source.read_u8()?;
    if v >= ORDER {
        return Err(CurveDecodingError::NotInField(format!("{} mod {}", v, ORDER)).into());
    }
    Ok(v)
}

impl Serial for SmallScalar {
    fn serial<B: Buffer>(&self, out: &mut B) { self.0.serial(out) }
}

impl Deserial for SmallScalar {
    fn deserial<R: ReadBytesExt>(source: &mut R) -> ParseResult<Self> {
        Ok(SmallScalar(deserial_residue(source)?))
    }
}

impl Serial for SmallGroup {
    fn serial<B: Buffer>(&self, out: &mut B) { self.0.serial(out) }
}

impl Deserial for SmallGroup {
    fn deserial<R: ReadBytesExt>(source: &mut R) -> ParseResult<Self> {
        Ok(SmallGroup(deserial_residue(source)?))
    }
}

impl Field for SmallScalar {
    fn zero() -> Self { SmallScalar(0) }

    fn one() -> Self { SmallScalar(1) }

    fn is_zero(&self) -> bool { self.0 == 0 }

    fn negate(&mut self) { self.0 = neg_mod(self.0) }

    fn add_assign(&mut self, other: &Self) { self.0 = add_mod(self.0, other.0) }

    fn mul_assign(&mut self, other: &Self) { self.0 = mul_mod(self.0, other.0) }
}

impl Curve for SmallGroup {
    type Scalar = SmallScalar;

    const GROUP_ELEMENT_LENGTH: usize = 1;
    const SCALAR_LENGTH: usize = 1;

    fn zero_point() -> Self { SmallGroup(0) }

    fn one_point() -> Self { SmallGroup(1) }

    fn is_zero_point(&self) -> bool { self.0 == 0 }

    fn inverse_point(&self) -> Self { SmallGroup(neg_mod(self.0)) }

    fn plus_point(&self, other: &Self) -> Self { SmallGroup(add_mod(self.0, other.0)) }

    fn minus_point(&self, other: &Self) -> Self { SmallGroup(add_mod(self.0, neg_mod(other.0))) }

    fn mul_by_scalar(&self, scalar: &Self::Scalar) -> Self { SmallGroup(mul_mod(self.0, scalar.0)) }

    fn generate<R: Rng>(rng: &mut R) -> Self { SmallGroup(rng.gen_range(0..ORDER)) }

    fn generate_scalar<R: Rng>(rng: &mut R) -> Self::Scalar { SmallScalar(rng.gen_range(0..ORDER)) }

    fn scalar_from_u64(n: u64) -> Self::Scalar { SmallScalar::new(n) }
}
