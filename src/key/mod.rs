//! Key Codec Module
//!
//! Fixed-width binary encodings for the keys stored by the Merkle tree.
//!
//! ## Layouts
//! ```text
//! ┌──────────┬───────┬──────────────────────────────────────────┐
//! │ Variant  │ Width │ Layout                                   │
//! ├──────────┼───────┼──────────────────────────────────────────┤
//! │ Byte     │   1   │ raw value                                │
//! │ Uint64   │   8   │ little-endian                            │
//! │ Uint256  │  32   │ verbatim internal representation of U256 │
//! └──────────┴───────┴──────────────────────────────────────────┘
//! ```
//!
//! Little-endian `Uint64` keys do not sort numerically under a plain
//! byte-wise comparison: `256` encodes as `[0, 1, 0, ..]` and sorts before
//! `1` (`[1, 0, 0, ..]`). Anything relying on numeric order must not rely on
//! raw byte order.

pub(crate) mod codec;
mod uint256;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use codec::{decode, decode_into, encode, KeyCodec};
pub use uint256::U256;

/// A key as stored by the tree: one of the three fixed-width variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A single byte (meta keys, tags)
    Byte(u8),

    /// Unsigned 64-bit integer (indices, block numbers)
    Uint64(u64),

    /// Unsigned 256-bit integer (leaf values, hashes)
    Uint256(U256),
}

impl Key {
    /// The variant of this key
    pub fn kind(&self) -> KeyKind {
        match self {
            Key::Byte(_) => KeyKind::Byte,
            Key::Uint64(_) => KeyKind::Uint64,
            Key::Uint256(_) => KeyKind::Uint256,
        }
    }

    /// Encoded width in bytes
    pub fn width(&self) -> usize {
        self.kind().width()
    }
}

impl From<u8> for Key {
    fn from(value: u8) -> Self {
        Key::Byte(value)
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Key::Uint64(value)
    }
}

impl From<U256> for Key {
    fn from(value: U256) -> Self {
        Key::Uint256(value)
    }
}

/// Key variant without a value, used to request a decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyKind {
    Byte = 1,
    Uint64 = 8,
    Uint256 = 32,
}

impl KeyKind {
    /// Fixed encoded width in bytes
    pub const fn width(self) -> usize {
        self as usize
    }

    /// A zero-valued key of this kind, suitable as a `decode_into` target
    pub fn zero(self) -> Key {
        match self {
            KeyKind::Byte => Key::Byte(0),
            KeyKind::Uint64 => Key::Uint64(0),
            KeyKind::Uint256 => Key::Uint256(U256::ZERO),
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyKind::Byte => "byte",
            KeyKind::Uint64 => "uint64",
            KeyKind::Uint256 => "uint256",
        };
        f.write_str(name)
    }
}
