//! Error reporter
//!
//! Every non-success engine code goes through here so failure text stays
//! consistent across call sites.

use crate::error::{CodecError, Result};

use super::codes::{strerror, MDB_SUCCESS};
use super::NativeCode;

/// Build the failure for a native code
pub fn native_failure(context: &str, code: NativeCode) -> CodecError {
    CodecError::NativeOperationFailed {
        context: context.to_string(),
        code,
        description: strerror(code).into_owned(),
    }
}

/// Report a failed native call
///
/// Always returns `Err`, so a call site reads `return report("...", rc);`.
pub fn report<T>(context: &str, code: NativeCode) -> Result<T> {
    tracing::debug!(context, code, "native operation failed");
    Err(native_failure(context, code))
}

/// `Ok(())` on success, otherwise [`report`]
pub fn check(context: &str, code: NativeCode) -> Result<()> {
    if code == MDB_SUCCESS {
        return Ok(());
    }
    report(context, code)
}
