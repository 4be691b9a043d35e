use anyhow::ensure;
use byteorder::{ReadBytesExt, WriteBytesExt};
use hex::{decode, encode};
use serde::{de, de::Visitor, Deserializer, Serializer};
use std::{fmt, io::Cursor, marker::PhantomData};

/// Result of parsing a value from bytes. The error is [anyhow::Error] so
/// that the reason can be reported to the user unchanged.
pub type ParseResult<T> = anyhow::Result<T>;

/// Types which can be read back from their [Serial] encoding.
pub trait Deserial: Sized {
    fn deserial<R: ReadBytesExt>(source: &mut R) -> ParseResult<Self>;
}

impl Deserial for u8 {
    fn deserial<R: ReadBytesExt>(source: &mut R) -> ParseResult<u8> { Ok(source.read_u8()?) }
}

/// Read exactly `N` bytes into an array.
pub fn deserial_bytes<R: ReadBytesExt, const N: usize>(reader: &mut R) -> ParseResult<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

/// Sink for [Serial]. The only instance is an in-memory vector, so writes
/// never fail.
pub trait Buffer: WriteBytesExt {}

impl Buffer for Vec<u8> {}

/// Types with a fixed binary encoding. Group elements and scalars use the
/// canonical compressed encoding of the underlying library.
pub trait Serial {
    fn serial<B: Buffer>(&self, out: &mut B);
}

impl Serial for u8 {
    fn serial<B: Buffer>(&self, out: &mut B) {
        out.write_u8(*self)
            .expect("Writing to a buffer should not fail.")
    }
}

impl<T: Serial> Serial for &T {
    fn serial<B: Buffer>(&self, out: &mut B) { (*self).serial(out) }
}

/// Lets the expected type drive deserialization, i.e., `source.get()` rather
/// than `A::deserial(source)`.
pub trait Get<A> {
    fn get(&mut self) -> ParseResult<A>;
}

impl<R: ReadBytesExt, A: Deserial> Get<A> for R {
    #[inline]
    fn get(&mut self) -> ParseResult<A> { A::deserial(self) }
}

/// Both directions of the binary encoding.
pub trait Serialize: Serial + Deserial {}

impl<A: Deserial + Serial> Serialize for A {}

#[inline]
pub fn to_bytes<A: Serial>(x: &A) -> Vec<u8> {
    let mut buf = Vec::new();
    x.serial(&mut buf);
    buf
}

/// Deserialize a value from a byte slice, requiring that all of the input is
/// consumed.
pub fn from_bytes_exact<A: Deserial>(bytes: &[u8]) -> ParseResult<A> {
    let mut cursor = Cursor::new(bytes);
    let v = A::deserial(&mut cursor)?;
    let remaining = bytes.len() as u64 - cursor.position();
    ensure!(remaining == 0, "{} trailing bytes after the value.", remaining);
    Ok(v)
}

/// Write the binary encoding of the value as a hex string. Used to implement
/// [serde::Serialize].
pub fn base16_encode<S: Serializer, T: Serial>(v: &T, ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_str(&base16_encode_string(v))
}

/// Dual to [base16_encode].
pub fn base16_decode<'de, D: Deserializer<'de>, T: Deserial>(des: D) -> Result<T, D::Error> {
    struct Base16Visitor<T>(PhantomData<T>);

    impl<'de, T: Deserial> Visitor<'de> for Base16Visitor<T> {
        type Value = T;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "A base 16 string.")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            base16_decode_string(v).map_err(de::Error::custom)
        }
    }

    des.deserialize_str(Base16Visitor(PhantomData))
}

pub fn base16_encode_string<S: Serial>(x: &S) -> String { encode(to_bytes(x)) }

/// Dual to [base16_encode_string]. The whole string must be consumed.
pub fn base16_decode_string<S: Deserial>(x: &str) -> ParseResult<S> {
    let d = decode(x)?;
    from_bytes_exact(&d)
}
