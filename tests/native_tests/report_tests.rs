//! Error Reporter Tests
//!
//! These tests verify:
//! - Message composition: context, code, description
//! - `report` never succeeds, `check` passes success through
//! - Descriptions for engine, OS and unknown codes

#[path = "../common/mod.rs"]
mod common;

use merkle_store_codec::native::codes::{
    self, MDB_MAP_FULL, MDB_NOTFOUND, MDB_PROBLEM, MDB_SUCCESS,
};
use merkle_store_codec::native::{check, native_failure, report, strerror};
use merkle_store_codec::{CodecError, Result};

use common::init_tracing;

// =============================================================================
// report
// =============================================================================

#[test]
fn test_report_composes_message() {
    init_tracing();

    let result: Result<()> = report("opening database", 2);
    let err = result.unwrap_err();
    let message = err.to_string();

    assert!(message.contains("opening database"));
    assert!(message.contains('2'));
    assert!(message.starts_with("opening database: 2 - "));

    match err {
        CodecError::NativeOperationFailed {
            context,
            code,
            description,
        } => {
            assert_eq!(context, "opening database");
            assert_eq!(code, 2);
            assert!(!description.is_empty());
        }
        other => panic!("Expected NativeOperationFailed, got {:?}", other),
    }
}

#[test]
fn test_report_engine_code() {
    let err = report::<Vec<u8>>("reading leaf", MDB_NOTFOUND).unwrap_err();
    assert_eq!(
        err.to_string(),
        "reading leaf: -30798 - MDB_NOTFOUND: No matching key/data pair found"
    );
    assert_eq!(err.native_code(), Some(MDB_NOTFOUND));
}

#[test]
fn test_report_propagates_with_question_mark() {
    fn commit(rc: i32) -> Result<u64> {
        if rc != MDB_SUCCESS {
            return report("committing transaction", rc);
        }
        Ok(1)
    }

    assert_eq!(commit(MDB_SUCCESS).unwrap(), 1);
    assert_eq!(commit(MDB_MAP_FULL).unwrap_err().native_code(), Some(MDB_MAP_FULL));
}

// =============================================================================
// check
// =============================================================================

#[test]
fn test_check_success() {
    assert!(check("beginning transaction", MDB_SUCCESS).is_ok());
}

#[test]
fn test_check_failure_matches_report() {
    let from_check = check("putting value", MDB_MAP_FULL).unwrap_err();
    let from_report = report::<()>("putting value", MDB_MAP_FULL).unwrap_err();
    assert_eq!(from_check, from_report);
    assert_eq!(from_check, native_failure("putting value", MDB_MAP_FULL));
}

// =============================================================================
// strerror
// =============================================================================

#[test]
fn test_every_engine_code_has_description() {
    for code in codes::MDB_KEYEXIST_FIRST..=codes::MDB_LAST_ERRCODE {
        let description = strerror(code);
        assert!(description.starts_with("MDB_"), "code {} -> {}", code, description);
        assert_ne!(description, "Invalid error code");
    }
}

#[test]
fn test_strerror_success() {
    assert_eq!(strerror(MDB_SUCCESS), "Successful return: 0");
}

#[test]
fn test_strerror_problem_code() {
    assert_eq!(codes::MDB_LAST_ERRCODE, MDB_PROBLEM);
    assert_eq!(
        strerror(MDB_PROBLEM),
        "MDB_PROBLEM: Unexpected problem - txn should abort"
    );

    let err = report::<()>("committing", MDB_PROBLEM).unwrap_err();
    assert_eq!(
        err.to_string(),
        "committing: -30779 - MDB_PROBLEM: Unexpected problem - txn should abort"
    );
}

#[test]
fn test_strerror_codes_outside_engine_range_use_os_text() {
    for code in [-1, codes::MDB_KEYEXIST_FIRST - 1, codes::MDB_LAST_ERRCODE + 1] {
        let description = strerror(code);
        assert!(!description.is_empty(), "code {}", code);
        assert!(!description.starts_with("MDB_"), "code {} -> {}", code, description);
        assert!(!description.contains("os error"), "code {} -> {}", code, description);
        assert_ne!(description, "Invalid error code");
    }
}

#[test]
fn test_strerror_os_codes() {
    let description = strerror(2);
    assert!(!description.is_empty());
    assert!(!description.contains("os error"));
}
