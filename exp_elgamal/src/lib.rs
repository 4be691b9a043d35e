#![doc = include_str!("../README.md")]
pub mod common;
pub mod constants;
pub mod curve_arithmetic;
pub mod elgamal;
