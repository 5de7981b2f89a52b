//! 256-bit unsigned integer
//!
//! Four 64-bit limbs, least significant first. The internal 32-byte
//! representation is each limb little-endian, least significant limb first,
//! which is the in-memory image of the limb array on little-endian hosts.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Size of the internal representation in bytes
pub const REPR_SIZE: usize = 32;

/// Unsigned 256-bit integer
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct U256 {
    limbs: [u64; 4],
}

impl U256 {
    pub const ZERO: U256 = U256 { limbs: [0; 4] };
    pub const MAX: U256 = U256 {
        limbs: [u64::MAX; 4],
    };

    /// Build from limbs, least significant first
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self { limbs }
    }

    /// Limbs, least significant first
    pub const fn limbs(&self) -> [u64; 4] {
        self.limbs
    }

    /// Rebuild from the internal 32-byte representation
    pub fn from_repr(bytes: [u8; REPR_SIZE]) -> Self {
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }
        Self { limbs }
    }

    /// The internal 32-byte representation
    pub fn to_repr(&self) -> [u8; REPR_SIZE] {
        let mut bytes = [0u8; REPR_SIZE];
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(self.limbs.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        bytes
    }

    pub fn is_zero(&self) -> bool {
        self.limbs == [0; 4]
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self::from_limbs([value, 0, 0, 0])
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        Self::from_limbs([value as u64, (value >> 64) as u64, 0, 0])
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Most significant limb decides first
        self.limbs.iter().rev().cmp(other.limbs.iter().rev())
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for limb in self.limbs.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        Ok(())
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self)
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256({:#x})", self)
    }
}
