//! Fixed choices made by this library.
use crate::curve_arithmetic::arkworks_instances::ArkGroup;
use ark_bls12_381::G1Projective;

/// Group used by default for encrypting integers. This is the first group of
/// the BLS12-381 pairing.
pub type DefaultCurve = ArkGroup<G1Projective>;
