//! Value Bridge Module
//!
//! Moves data out of storage engine memory into owned buffers.
//!
//! ## Responsibilities
//! - Model the engine's `(size, pointer)` value struct (`RawVal`)
//! - Scope borrowed engine memory with a lifetime (`ValueView`)
//! - Copy views into owned buffers before the producing transaction or
//!   cursor step moves on
//!
//! ## Validity Window
//! ```text
//!   engine call ──► RawVal ──► ValueView<'txn> ──► to_owned / replace ──► Vec<u8>
//!                   └──────── valid until the txn/cursor advances ───┘
//! ```
//!
//! `to_owned`, `replace` and `to_shared` are the only ways to keep value
//! data past the producing call.

mod bridge;
mod view;

pub use bridge::{replace, to_owned, to_shared};
pub use view::{RawVal, ValueView};
