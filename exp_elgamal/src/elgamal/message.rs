//! Elgamal message types

use crate::{
    common::*,
    curve_arithmetic::Curve,
    elgamal::{encoding::*, errors::ElgamalError},
};
use rand::*;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(transparent)]
/// Message to be encrypted. This is a simple wrapper around a group element,
/// but we use it for added type safety.
pub struct Message<C: Curve> {
    pub value: C,
}

impl_serde_base16!(Message);

impl<C: Curve> Serial for Message<C> {
    fn serial<B: Buffer>(&self, out: &mut B) { self.value.serial(out) }
}

impl<C: Curve> Deserial for Message<C> {
    fn deserial<R: ReadBytesExt>(source: &mut R) -> ParseResult<Self> {
        Ok(Message {
            value: source.get()?,
        })
    }
}

impl<C: Curve> Message<C> {
    pub fn new(value: C) -> Self { Message { value } }

    /// The message `n · B` encoding a small integer.
    pub fn from_int(n: i64) -> Self { Message::new(int_to_point(n)) }

    /// Recover the integer encoded by [Message::from_int], see [point_to_int].
    pub fn to_int(&self, check_negative: bool) -> Result<i64, ElgamalError> {
        point_to_int(&self.value, check_negative)
    }

    // generate random message (for testing)
    pub fn generate<T>(csprng: &mut T) -> Self
    where
        T: Rng, {
        Message {
            value: C::generate(csprng),
        }
    }
}
