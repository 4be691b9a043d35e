//! Binary serialization of group elements, scalars and the values built from
//! them, together with helpers for their base16 JSON representation.
#[cfg(test)]
mod helpers;
mod serialize;

#[cfg(test)]
pub use self::helpers::serialize_deserialize;
pub use self::serialize::*;

pub use byteorder::ReadBytesExt;

/// Implement [serde::Serialize] and [serde::Deserialize] for a type generic
/// over a [Curve](crate::curve_arithmetic::Curve) by encoding its binary
/// serialization as a base16 string.
macro_rules! impl_serde_base16 {
    ($t:ident) => {
        impl<C: $crate::curve_arithmetic::Curve> serde::Serialize for $t<C> {
            fn serialize<S: serde::Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
                $crate::common::base16_encode(self, ser)
            }
        }

        impl<'de, C: $crate::curve_arithmetic::Curve> serde::Deserialize<'de> for $t<C> {
            fn deserialize<D: serde::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
                $crate::common::base16_decode(des)
            }
        }
    };
}

pub(crate) use impl_serde_base16;
