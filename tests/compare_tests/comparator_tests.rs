//! Comparator Tests
//!
//! These tests verify:
//! - Length-only ordering and its content-blind equality
//! - The `extern "C"` hooks agree with the safe comparators
//! - The opt-in size-then-bytes ordering
//! - Concurrent use from several threads

use std::cmp::Ordering;
use std::thread;

use merkle_store_codec::compare::{
    compare, mdb_size_cmp, mdb_size_then_bytes_cmp, size_cmp, size_then_bytes_cmp,
};
use merkle_store_codec::{ComparatorKind, RawVal, ValueView};

fn view(bytes: &[u8]) -> ValueView<'_> {
    ValueView::from_slice(bytes)
}

fn raw_cmp(hook: merkle_store_codec::compare::RawComparator, a: &[u8], b: &[u8]) -> i32 {
    let (a, b) = (RawVal::from_slice(a), RawVal::from_slice(b));
    unsafe { hook(&a, &b) }
}

// =============================================================================
// Length-only ordering
// =============================================================================

#[test]
fn test_shorter_sorts_first() {
    assert_eq!(compare(view(&[0; 3]), view(&[0; 5])), -1);
    assert_eq!(compare(view(&[0; 5]), view(&[0; 3])), 1);
}

#[test]
fn test_equal_length_is_equal_regardless_of_content() {
    assert_eq!(compare(view(&[1, 2, 3]), view(&[9, 9, 9])), 0);
    assert_eq!(size_cmp(view(&[1, 2, 3]), view(&[9, 9, 9])), Ordering::Equal);
}

#[test]
fn test_empty_values() {
    assert_eq!(compare(view(&[]), view(&[])), 0);
    assert_eq!(compare(view(&[]), view(&[1])), -1);
}

#[test]
fn test_size_hook_matches_safe_comparator() {
    let cases: [(&[u8], &[u8]); 4] = [
        (&[0; 3], &[0; 5]),
        (&[0; 5], &[0; 3]),
        (&[1, 2, 3], &[9, 9, 9]),
        (&[], &[]),
    ];
    for (a, b) in cases {
        assert_eq!(raw_cmp(mdb_size_cmp, a, b), compare(view(a), view(b)));
    }
}

#[test]
fn test_size_hook_ignores_data_pointers() {
    let a = RawVal {
        mv_size: 8,
        mv_data: std::ptr::null_mut(),
    };
    let b = RawVal {
        mv_size: 32,
        mv_data: std::ptr::null_mut(),
    };
    assert_eq!(unsafe { mdb_size_cmp(&a, &b) }, -1);
}

// =============================================================================
// Size-then-bytes ordering
// =============================================================================

#[test]
fn test_size_then_bytes_orders_content() {
    assert_eq!(
        size_then_bytes_cmp(view(&[1, 2, 3]), view(&[9, 9, 9])),
        Ordering::Less
    );
    assert_eq!(
        size_then_bytes_cmp(view(&[9, 9, 9]), view(&[1, 2, 3])),
        Ordering::Greater
    );
    assert_eq!(
        size_then_bytes_cmp(view(&[4, 4]), view(&[4, 4])),
        Ordering::Equal
    );
    // Length still decides first
    assert_eq!(
        size_then_bytes_cmp(view(&[9]), view(&[0, 0])),
        Ordering::Less
    );
}

#[test]
fn test_size_then_bytes_hook() {
    assert_eq!(raw_cmp(mdb_size_then_bytes_cmp, &[1, 2, 3], &[9, 9, 9]), -1);
    assert_eq!(raw_cmp(mdb_size_then_bytes_cmp, &[9, 9, 9], &[1, 2, 3]), 1);
    assert_eq!(raw_cmp(mdb_size_then_bytes_cmp, &[], &[]), 0);
}

#[test]
fn test_comparator_kind_dispatch() {
    assert_eq!(ComparatorKind::default(), ComparatorKind::SizeOnly);

    let (a, b) = ([1u8, 2, 3], [9u8, 9, 9]);
    assert_eq!(ComparatorKind::SizeOnly.compare(view(&a), view(&b)), Ordering::Equal);
    assert_eq!(ComparatorKind::SizeThenBytes.compare(view(&a), view(&b)), Ordering::Less);

    assert_eq!(raw_cmp(ComparatorKind::SizeOnly.raw(), &a, &b), 0);
    assert_eq!(raw_cmp(ComparatorKind::SizeThenBytes.raw(), &a, &b), -1);
}

#[test]
fn test_sorting_fixed_width_classes() {
    let mut values: Vec<Vec<u8>> = vec![vec![0; 32], vec![7], vec![0; 8], vec![3]];
    values.sort_by(|a, b| size_cmp(view(a), view(b)));

    let widths: Vec<usize> = values.iter().map(Vec::len).collect();
    assert_eq!(widths, vec![1, 1, 8, 32]);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_concurrent_comparisons() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let short = vec![i as u8; 8];
                let long = vec![i as u8; 32];
                for _ in 0..1000 {
                    assert_eq!(raw_cmp(mdb_size_cmp, &short, &long), -1);
                    assert_eq!(raw_cmp(mdb_size_cmp, &long, &short), 1);
                    assert_eq!(raw_cmp(mdb_size_cmp, &short, &short), 0);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
