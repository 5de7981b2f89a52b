//! Native Error Module
//!
//! Turns the storage engine's integer return codes into `CodecError`s.
//!
//! ## Return Codes
//! - `0`: success
//! - `-30799 ..= -30779`: engine-specific failures (see [`codes`])
//! - anything else: described by the OS, as `errno` values passed through by the engine
//!
//! ## Message Format
//! ```text
//! {context}: {code} - {description}
//! e.g. "opening database: 2 - No such file or directory"
//! ```

pub mod codes;
mod reporter;

pub use codes::strerror;
pub use reporter::{check, native_failure, report};

/// Integer status returned by the engine's C API
pub type NativeCode = std::ffi::c_int;
