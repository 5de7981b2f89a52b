//! Comparator Module
//!
//! Ordering functions registered with the storage engine's custom
//! comparator hook.
//!
//! ## Size-Only Ordering
//! The default ordering looks at lengths only: shorter sorts first and two
//! values of equal length compare equal, whatever their content. That is
//! only sound when each key class stored under it has a single fixed width,
//! so "equal length" means "same class" and content order is irrelevant to
//! the engine. Do not use it as a general content comparator.
//!
//! `SizeThenBytes` is an opt-in total order (length, then content). Switching
//! an existing database between the two changes its stored order.
//!
//! Every function here is pure and allocation-free; the engine calls them
//! concurrently from parallel read transactions.

use std::cmp::Ordering;
use std::ffi::c_int;

use serde::{Deserialize, Serialize};

use crate::value::{RawVal, ValueView};

/// Signature of the engine's comparator hook
pub type RawComparator = unsafe extern "C" fn(*const RawVal, *const RawVal) -> c_int;

/// Ordering used for engine-internal comparisons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparatorKind {
    /// Length only; equal lengths compare equal
    #[default]
    SizeOnly,

    /// Length first, then lexicographic content
    SizeThenBytes,
}

impl ComparatorKind {
    /// Compare two views under this ordering
    pub fn compare(self, a: ValueView<'_>, b: ValueView<'_>) -> Ordering {
        match self {
            ComparatorKind::SizeOnly => size_cmp(a, b),
            ComparatorKind::SizeThenBytes => size_then_bytes_cmp(a, b),
        }
    }

    /// The `extern "C"` hook implementing this ordering
    pub fn raw(self) -> RawComparator {
        match self {
            ComparatorKind::SizeOnly => mdb_size_cmp,
            ComparatorKind::SizeThenBytes => mdb_size_then_bytes_cmp,
        }
    }
}

// =============================================================================
// Safe Comparators
// =============================================================================

/// Order by length only
pub fn size_cmp(a: ValueView<'_>, b: ValueView<'_>) -> Ordering {
    a.len().cmp(&b.len())
}

/// Order by length, then by content
pub fn size_then_bytes_cmp(a: ValueView<'_>, b: ValueView<'_>) -> Ordering {
    size_cmp(a, b).then_with(|| a.as_bytes().cmp(b.as_bytes()))
}

/// Length-only comparison as the engine's `-1 / 0 / 1`
pub fn compare(a: ValueView<'_>, b: ValueView<'_>) -> i32 {
    to_c(size_cmp(a, b))
}

fn to_c(ordering: Ordering) -> c_int {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

// =============================================================================
// Engine Hooks
// =============================================================================

/// Length-only comparator hook
///
/// # Safety
///
/// `a` and `b` must point to valid `RawVal`s. Data pointers are never read.
pub unsafe extern "C" fn mdb_size_cmp(a: *const RawVal, b: *const RawVal) -> c_int {
    // SAFETY: the engine passes two live value structs.
    let (a, b) = unsafe { (&*a, &*b) };
    to_c(a.mv_size.cmp(&b.mv_size))
}

/// Length-then-content comparator hook
///
/// # Safety
///
/// `a` and `b` must point to valid `RawVal`s whose data pointers cover
/// `mv_size` readable bytes for the duration of the call.
pub unsafe extern "C" fn mdb_size_then_bytes_cmp(a: *const RawVal, b: *const RawVal) -> c_int {
    // SAFETY: the engine passes two live value structs over its own pages.
    let (a, b) = unsafe { (ValueView::from_raw(&*a), ValueView::from_raw(&*b)) };
    to_c(size_then_bytes_cmp(a, b))
}
