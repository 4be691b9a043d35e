//! Encoding of small signed integers as group elements `n · B`, where `B` is
//! [Curve::one_point], and the bounded discrete logarithm search that inverts
//! the encoding.
//!
//! The encoding is defined for every `i64`, but inverting it requires a search
//! and so only values with absolute value at most [MAX_INT] can be recovered.
use super::errors::ElgamalError;
use crate::curve_arithmetic::{Curve, Field};
use log::{debug, trace};
use std::iter;

/// Largest absolute value of an integer that can be decoded from a group
/// element.
pub const MAX_INT: u64 = 100;

/// Order in which candidate plaintexts are tried when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrder {
    /// `0, 1, 2, 3, …`. Negative values are never found.
    NonNegative,
    /// `0, 1, -1, 2, -2, …`, so that small magnitudes are found first
    /// regardless of sign.
    ZigZag,
}

impl SearchOrder {
    pub fn from_check_negative(check_negative: bool) -> Self {
        if check_negative {
            SearchOrder::ZigZag
        } else {
            SearchOrder::NonNegative
        }
    }

    /// All candidates with absolute value at most `bound`, in the order in
    /// which they are tried. The first candidate is always `0`.
    pub fn candidates(self, bound: u64) -> impl Iterator<Item = i64> {
        let bound = bound.min(i64::MAX as u64) as i64;
        let with_negative = self == SearchOrder::ZigZag;
        iter::once(0).chain((1..=bound).flat_map(move |k| {
            let negative = if with_negative { Some(-k) } else { None };
            iter::once(k).chain(negative)
        }))
    }
}

/// Encode an integer `n` as a scalar from the big-endian bytes of `|n|`.
/// Negative values map to the additive inverse in the scalar field, i.e., the
/// group order minus `|n|`.
pub fn int_to_scalar<C: Curve>(n: i64) -> C::Scalar {
    let mut scalar = C::scalar_from_be_bytes(n.unsigned_abs().to_be_bytes());
    if n < 0 {
        scalar.negate();
    }
    scalar
}

/// Encode an integer `n` as the group element `n · B`.
pub fn int_to_point<C: Curve>(n: i64) -> C { C::one_point().mul_by_scalar(&int_to_scalar::<C>(n)) }

/// Recover `n` from `n · B`, provided `|n| <= MAX_INT`. If `check_negative`
/// is false only non-negative values are tried.
pub fn point_to_int<C: Curve>(p: &C, check_negative: bool) -> Result<i64, ElgamalError> {
    discrete_log(p, SearchOrder::from_check_negative(check_negative), MAX_INT)
}

/// Find the first candidate `n` of `order.candidates(bound)` such that
/// `n · B = p`.
///
/// The search performs at most `bound` group additions. Each step derives the
/// next multiple of `B` from the previous one instead of multiplying by a
/// scalar.
pub fn discrete_log<C: Curve>(p: &C, order: SearchOrder, bound: u64) -> Result<i64, ElgamalError> {
    if p.is_zero_point() {
        trace!("Discrete log of the identity.");
        return Ok(0);
    }
    let base = C::one_point();
    // Invariant: acc = magnitude · B.
    let mut acc = C::zero_point();
    let mut magnitude = 0u64;
    // Zero was handled above.
    for candidate in order.candidates(bound).skip(1) {
        if candidate.unsigned_abs() != magnitude {
            acc = acc.plus_point(&base);
            magnitude = candidate.unsigned_abs();
        }
        let found = if candidate > 0 {
            *p == acc
        } else {
            *p == acc.inverse_point()
        };
        if found {
            return Ok(candidate);
        }
    }
    debug!(
        "Discrete log search ({:?}) exhausted all values up to {}.",
        order, bound
    );
    Err(ElgamalError::DiscreteLogNotFound { bound })
}
