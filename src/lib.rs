//! # merkle-store-codec
//!
//! The byte-level layer between a Merkle tree and its embedded, sorted
//! key-value store:
//! - Fixed-width key encodings (byte, 64-bit and 256-bit integers)
//! - Copying engine-owned values out before they are invalidated
//! - The custom comparator registered with the engine
//! - Descriptive errors for the engine's native return codes
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Merkle Tree Store                         │
//! │              (transactions, nodes, hashes)                   │
//! └──────┬──────────────────┬──────────────────────┬────────────┘
//!        │ keys             │ values               │ return codes
//!        ▼                  ▼                      ▼
//!   ┌─────────┐      ┌─────────────┐        ┌─────────────┐
//!   │   Key   │      │    Value    │        │   Native    │
//!   │  Codec  │      │   Bridge    │        │   Errors    │
//!   └────┬────┘      └──────▲──────┘        └─────────────┘
//!        │                  │
//!        ▼                  │
//! ┌─────────────────────────┴───────────────────────────────────┐
//! │                 Storage Engine (C API)                       │
//! │            ──► Comparator hook (size_cmp)                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod key;
pub mod value;
pub mod compare;
pub mod native;
pub mod codec;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CodecError, Result};
pub use config::{Config, DecodePolicy};
pub use codec::Codec;
pub use key::{Key, KeyCodec, KeyKind, U256};
pub use value::{RawVal, ValueView};
pub use compare::ComparatorKind;
pub use native::{check, report, NativeCode};

// =============================================================================
// Version Info
// =============================================================================

/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
