use super::*;

/// Serialize the value and parse it back, requiring that all bytes are
/// consumed. Used for testing.
pub fn serialize_deserialize<A: Serialize>(x: &A) -> ParseResult<A> { from_bytes_exact(&to_bytes(x)) }
