//! Codec Module
//!
//! A configured entry point over the key codec, value bridge and comparator.
//!
//! ## Responsibilities
//! - Apply the configured decode policy to every key decode
//! - Hand the engine the comparator hook matching the configured ordering
//! - Copy engine values out with the same calls the free functions expose
//!
//! `Codec` is `Copy` and holds no state besides its `Config`, so one value
//! can be shared freely across threads and transactions.

use std::cmp::Ordering;

use bytes::Bytes;

use crate::compare::RawComparator;
use crate::config::Config;
use crate::error::Result;
use crate::key::{self, Key, KeyCodec, KeyKind};
use crate::value::{self, ValueView};

/// Configured codec facade
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    config: Config,
}

impl Codec {
    /// Create a codec with the given config
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Config this codec was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Keys
    // =========================================================================

    /// Encode a key to its fixed-width layout
    pub fn encode(&self, key: &Key) -> Vec<u8> {
        let bytes = key::encode(key);
        tracing::trace!(kind = %key.kind(), len = bytes.len(), "encoded key");
        bytes
    }

    /// Decode a key of the given kind under the configured policy
    pub fn decode(&self, kind: KeyKind, bytes: &[u8]) -> Result<Key> {
        tracing::trace!(%kind, len = bytes.len(), "decoding key");
        key::codec::decode_with(kind, bytes, self.config.decode_policy)
    }

    /// Decode into an existing key, keeping its variant
    pub fn decode_into(&self, bytes: &[u8], out: &mut Key) -> Result<()> {
        tracing::trace!(kind = %out.kind(), len = bytes.len(), "decoding key in place");
        key::codec::decode_into_with(bytes, out, self.config.decode_policy)
    }

    /// Decode a typed key under the configured policy
    pub fn decode_as<K: KeyCodec>(&self, bytes: &[u8]) -> Result<K> {
        tracing::trace!(kind = %K::KIND, len = bytes.len(), "decoding typed key");
        key::codec::check_policy(K::KIND, bytes, self.config.decode_policy)?;
        K::decode_key(bytes)
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Copy an engine value into an owned buffer
    pub fn to_owned(&self, view: ValueView<'_>) -> Vec<u8> {
        value::to_owned(view)
    }

    /// Replace `target` with a copy of an engine value
    pub fn replace(&self, target: &mut Vec<u8>, view: ValueView<'_>) {
        tracing::trace!(old_len = target.len(), new_len = view.len(), "replacing buffer");
        value::replace(target, view)
    }

    /// Copy an engine value into a shareable buffer
    pub fn to_shared(&self, view: ValueView<'_>) -> Bytes {
        value::to_shared(view)
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    /// Compare two values under the configured ordering
    pub fn compare(&self, a: ValueView<'_>, b: ValueView<'_>) -> Ordering {
        self.config.comparator.compare(a, b)
    }

    /// Hook to register with the engine for custom key/value comparison
    pub fn comparator_fn(&self) -> RawComparator {
        self.config.comparator.raw()
    }
}
