//! Key codec
//!
//! Encoding and decoding functions for the fixed-width key layouts.

use crate::config::DecodePolicy;
use crate::error::{CodecError, Result};

use super::uint256::REPR_SIZE;
use super::{Key, KeyKind, U256};

/// A type with a single fixed-width key encoding
///
/// Decoding reads the leading [`WIDTH`](KeyCodec::WIDTH) bytes; a shorter
/// source is rejected rather than read past its end.
pub trait KeyCodec: Sized {
    /// Variant this type encodes as
    const KIND: KeyKind;

    /// Encoded width in bytes
    const WIDTH: usize = Self::KIND.width();

    /// Encode to exactly `WIDTH` bytes
    fn encode_key(&self) -> Vec<u8>;

    /// Decode from the leading `WIDTH` bytes of `bytes`
    fn decode_key(bytes: &[u8]) -> Result<Self>;
}

impl KeyCodec for u8 {
    const KIND: KeyKind = KeyKind::Byte;

    fn encode_key(&self) -> Vec<u8> {
        vec![*self]
    }

    fn decode_key(bytes: &[u8]) -> Result<Self> {
        let [value] = leading::<1>(Self::KIND, bytes)?;
        Ok(value)
    }
}

impl KeyCodec for u64 {
    const KIND: KeyKind = KeyKind::Uint64;

    // Little-endian on every host
    fn encode_key(&self) -> Vec<u8> {
        self.to_le_bytes().to_vec()
    }

    fn decode_key(bytes: &[u8]) -> Result<Self> {
        Ok(u64::from_le_bytes(leading::<8>(Self::KIND, bytes)?))
    }
}

impl KeyCodec for U256 {
    const KIND: KeyKind = KeyKind::Uint256;

    fn encode_key(&self) -> Vec<u8> {
        self.to_repr().to_vec()
    }

    fn decode_key(bytes: &[u8]) -> Result<Self> {
        Ok(U256::from_repr(leading::<REPR_SIZE>(Self::KIND, bytes)?))
    }
}

// =============================================================================
// Key Encoding/Decoding
// =============================================================================

/// Encode a key to its fixed-width layout
pub fn encode(key: &Key) -> Vec<u8> {
    match key {
        Key::Byte(value) => value.encode_key(),
        Key::Uint64(value) => value.encode_key(),
        Key::Uint256(value) => value.encode_key(),
    }
}

/// Decode a key of the given kind
///
/// Reads the leading `kind.width()` bytes; trailing bytes are ignored.
pub fn decode(kind: KeyKind, bytes: &[u8]) -> Result<Key> {
    decode_with(kind, bytes, DecodePolicy::Prefix)
}

/// Decode into an existing key, keeping its variant
///
/// The current variant of `out` selects the width to read. On error `out`
/// is left untouched.
pub fn decode_into(bytes: &[u8], out: &mut Key) -> Result<()> {
    decode_into_with(bytes, out, DecodePolicy::Prefix)
}

pub(crate) fn decode_into_with(bytes: &[u8], out: &mut Key, policy: DecodePolicy) -> Result<()> {
    *out = decode_with(out.kind(), bytes, policy)?;
    Ok(())
}

pub(crate) fn decode_with(kind: KeyKind, bytes: &[u8], policy: DecodePolicy) -> Result<Key> {
    check_policy(kind, bytes, policy)?;

    let key = match kind {
        KeyKind::Byte => Key::Byte(u8::decode_key(bytes)?),
        KeyKind::Uint64 => Key::Uint64(u64::decode_key(bytes)?),
        KeyKind::Uint256 => Key::Uint256(U256::decode_key(bytes)?),
    };
    Ok(key)
}

/// Length check beyond the minimum width that every decode applies
pub(crate) fn check_policy(kind: KeyKind, bytes: &[u8], policy: DecodePolicy) -> Result<()> {
    match policy {
        DecodePolicy::Exact if bytes.len() != kind.width() => Err(malformed(kind, bytes.len())),
        _ => Ok(()),
    }
}

/// Copy the leading `N` bytes, or fail if the source is shorter
fn leading<const N: usize>(kind: KeyKind, bytes: &[u8]) -> Result<[u8; N]> {
    let head = bytes.get(..N).ok_or_else(|| malformed(kind, bytes.len()))?;
    let mut out = [0u8; N];
    out.copy_from_slice(head);
    Ok(out)
}

fn malformed(kind: KeyKind, actual: usize) -> CodecError {
    tracing::debug!(%kind, expected = kind.width(), actual, "rejecting malformed key encoding");
    CodecError::MalformedKeyEncoding {
        kind,
        expected: kind.width(),
        actual,
    }
}
