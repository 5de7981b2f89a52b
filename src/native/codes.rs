//! Engine return codes and their descriptions

use std::borrow::Cow;

use super::NativeCode;

pub const MDB_SUCCESS: NativeCode = 0;
pub const MDB_KEYEXIST: NativeCode = -30799;
pub const MDB_NOTFOUND: NativeCode = -30798;
pub const MDB_PAGE_NOTFOUND: NativeCode = -30797;
pub const MDB_CORRUPTED: NativeCode = -30796;
pub const MDB_PANIC: NativeCode = -30795;
pub const MDB_VERSION_MISMATCH: NativeCode = -30794;
pub const MDB_INVALID: NativeCode = -30793;
pub const MDB_MAP_FULL: NativeCode = -30792;
pub const MDB_DBS_FULL: NativeCode = -30791;
pub const MDB_READERS_FULL: NativeCode = -30790;
pub const MDB_TLS_FULL: NativeCode = -30789;
pub const MDB_TXN_FULL: NativeCode = -30788;
pub const MDB_CURSOR_FULL: NativeCode = -30787;
pub const MDB_PAGE_FULL: NativeCode = -30786;
pub const MDB_MAP_RESIZED: NativeCode = -30785;
pub const MDB_INCOMPATIBLE: NativeCode = -30784;
pub const MDB_BAD_RSLOT: NativeCode = -30783;
pub const MDB_BAD_TXN: NativeCode = -30782;
pub const MDB_BAD_VALSIZE: NativeCode = -30781;
pub const MDB_BAD_DBI: NativeCode = -30780;
pub const MDB_PROBLEM: NativeCode = -30779;

/// First engine-specific code
pub const MDB_KEYEXIST_FIRST: NativeCode = MDB_KEYEXIST;
/// Last engine-specific code
pub const MDB_LAST_ERRCODE: NativeCode = MDB_PROBLEM;

/// Indexed by `code - MDB_KEYEXIST`
const ENGINE_MESSAGES: [&str; 21] = [
    "MDB_KEYEXIST: Key/data pair already exists",
    "MDB_NOTFOUND: No matching key/data pair found",
    "MDB_PAGE_NOTFOUND: Requested page not found",
    "MDB_CORRUPTED: Located page was wrong type",
    "MDB_PANIC: Update of meta page failed or environment had fatal error",
    "MDB_VERSION_MISMATCH: Database environment version mismatch",
    "MDB_INVALID: File is not an LMDB file",
    "MDB_MAP_FULL: Environment mapsize limit reached",
    "MDB_DBS_FULL: Environment maxdbs limit reached",
    "MDB_READERS_FULL: Environment maxreaders limit reached",
    "MDB_TLS_FULL: Thread-local storage keys full - too many environments open",
    "MDB_TXN_FULL: Transaction has too many dirty pages - transaction too big",
    "MDB_CURSOR_FULL: Internal error - cursor stack limit reached",
    "MDB_PAGE_FULL: Internal error - page has no more space",
    "MDB_MAP_RESIZED: Database contents grew beyond environment mapsize",
    "MDB_INCOMPATIBLE: Operation and DB incompatible, or DB flags changed",
    "MDB_BAD_RSLOT: Invalid reuse of reader locktable slot",
    "MDB_BAD_TXN: Transaction must abort, has a child, or is invalid",
    "MDB_BAD_VALSIZE: Unsupported size of key/DB name/data, or wrong DUPFIXED size",
    "MDB_BAD_DBI: The specified DBI handle was closed/changed unexpectedly",
    "MDB_PROBLEM: Unexpected problem - txn should abort",
];

/// Human-readable description of an engine return code
pub fn strerror(code: NativeCode) -> Cow<'static, str> {
    match code {
        MDB_SUCCESS => Cow::Borrowed("Successful return: 0"),
        MDB_KEYEXIST_FIRST..=MDB_LAST_ERRCODE => {
            Cow::Borrowed(ENGINE_MESSAGES[(code - MDB_KEYEXIST_FIRST) as usize])
        }
        // Anything else is handed to the OS, negative codes included
        _ => Cow::Owned(os_description(code)),
    }
}

/// OS description without std's trailing "(os error N)"
fn os_description(code: NativeCode) -> String {
    let full = std::io::Error::from_raw_os_error(code).to_string();
    let suffix = format!(" (os error {})", code);
    match full.strip_suffix(&suffix) {
        Some(message) => message.to_string(),
        None => full,
    }
}
