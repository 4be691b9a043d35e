use super::arkworks_instances::CurveElementLength;
use ark_bls12_381::{g1, g2};
use ark_ec::short_weierstrass::Projective;

impl CurveElementLength for Projective<g1::Config> {
    const GROUP_ELEMENT_LENGTH: usize = 48;
    const SCALAR_LENGTH: usize = 32;
}

impl CurveElementLength for Projective<g2::Config> {
    const GROUP_ELEMENT_LENGTH: usize = 96;
    const SCALAR_LENGTH: usize = 32;
}
