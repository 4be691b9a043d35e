//! Implementation of additively homomorphic Elgamal encryption over a Curve.
//!
//! Small integers `n` are encrypted as the group element `n · B`, where `B` is
//! [Curve::one_point](crate::curve_arithmetic::Curve::one_point). Adding
//! ciphers component-wise then adds the plaintexts, and decryption recovers
//! the integer by a bounded search, see [MAX_INT].

mod cipher;
mod elgamal;
mod encoding;
mod errors;
mod key_pair;
mod message;
mod public;
mod secret;

pub use self::{
    cipher::*, elgamal::*, encoding::*, errors::*, key_pair::*, message::*, public::*, secret::*,
};
