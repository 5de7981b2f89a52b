//! Configuration for the codec layer
//!
//! Centralized configuration with sensible defaults.

use serde::{Deserialize, Serialize};

use crate::compare::ComparatorKind;

/// Main configuration for a [`Codec`](crate::Codec) instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Key Decoding
    // -------------------------------------------------------------------------
    /// How strictly a source's length is checked against the key width
    pub decode_policy: DecodePolicy,

    // -------------------------------------------------------------------------
    // Ordering
    // -------------------------------------------------------------------------
    /// Ordering handed to the storage engine's comparator hook
    pub comparator: ComparatorKind,
}

/// Length check applied when decoding a key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodePolicy {
    /// Read the leading `width` bytes, ignore anything after them
    #[default]
    Prefix,

    /// Source must be exactly `width` bytes long
    Exact,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the decode length policy
    pub fn decode_policy(mut self, policy: DecodePolicy) -> Self {
        self.config.decode_policy = policy;
        self
    }

    /// Set the comparator registered with the engine
    pub fn comparator(mut self, kind: ComparatorKind) -> Self {
        self.config.comparator = kind;
        self
    }

    /// Finish building the config
    pub fn build(self) -> Config {
        self.config
    }
}
