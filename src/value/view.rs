//! Borrowed value views
//!
//! `RawVal` mirrors the engine's C value struct; `ValueView` is the safe,
//! lifetime-scoped form handed to the rest of the crate.

use std::ffi::c_void;
use std::{ptr, slice};

/// The engine's value struct, laid out as in its C header
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawVal {
    /// Size of the data item in bytes
    pub mv_size: usize,
    /// Address of the data item
    pub mv_data: *mut c_void,
}

impl RawVal {
    /// An empty value with a null data pointer
    pub const fn empty() -> Self {
        Self {
            mv_size: 0,
            mv_data: ptr::null_mut(),
        }
    }

    /// Describe a buffer for passing into the engine
    ///
    /// The engine only reads through the pointer for keys and data handed to
    /// it; the caller keeps `bytes` alive for the duration of the call.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            mv_size: bytes.len(),
            mv_data: bytes.as_ptr() as *mut c_void,
        }
    }
}

impl Default for RawVal {
    fn default() -> Self {
        Self::empty()
    }
}

/// Non-owning view of a value inside engine memory
///
/// `'a` is the validity window: the transaction or cursor step that produced
/// the view. It cannot be stored past that window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueView<'a> {
    bytes: &'a [u8],
}

impl<'a> ValueView<'a> {
    /// View over an existing slice
    pub const fn from_slice(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// View over a value returned by the engine
    ///
    /// A null data pointer or zero size yields an empty view.
    ///
    /// # Safety
    ///
    /// `raw.mv_data` must point to `raw.mv_size` initialized bytes that stay
    /// valid and unmodified for all of `'a`.
    pub unsafe fn from_raw(raw: &RawVal) -> Self {
        if raw.mv_size == 0 || raw.mv_data.is_null() {
            return Self { bytes: &[] };
        }
        // SAFETY: upheld by the caller per the contract above.
        let bytes = unsafe { slice::from_raw_parts(raw.mv_data as *const u8, raw.mv_size) };
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl<'a> From<&'a [u8]> for ValueView<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for ValueView<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::from_slice(bytes.as_slice())
    }
}

impl AsRef<[u8]> for ValueView<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

