//! # dear-imgui-js-marshal
//!
//! Host-agnostic marshalling between Dear ImGui's C API and a JavaScript-like
//! host that has no mutable pass-by-reference primitives.
//!
//! The central type is [`Slot`]: a call-scoped, stack-backed copy of a host
//! container (a single-element array standing in for `bool*`, a four-element
//! array standing in for `float col[4]`, ...) that hands a raw pointer to the
//! native function and writes the result back when it is dropped.
//!
//! ```
//! use dear_imgui_js_marshal::{BoolSlot, HostContainer};
//! use serde_json::json;
//!
//! unsafe extern "C" fn toggle(v: *mut bool) {
//!     if let Some(v) = unsafe { v.as_mut() } {
//!         *v = !*v;
//!     }
//! }
//!
//! let mut open = json!([false]);
//! {
//!     let mut slot = BoolSlot::new(&mut open);
//!     unsafe { toggle(slot.as_mut_ptr()) };
//! }
//! assert_eq!(open, json!([true]));
//! ```
//!
//! The remaining modules cover the other boundary concerns: NUL-terminated
//! string staging ([`ScratchBuffer`]), opaque native object identifiers
//! ([`Handle`]), dynamic output buffers sized by the native side
//! ([`SelectionBuffer`]) and table-driven struct field access ([`reflect`]).

#![deny(rust_2018_idioms)]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub use self::buffer::*;
pub use self::element::*;
pub use self::error::*;
pub use self::handle::*;
pub use self::host::*;
pub use self::slot::*;
pub use self::string::*;

mod buffer;
mod element;
mod error;
mod handle;
mod host;
pub mod reflect;
mod slot;
mod string;

#[doc(hidden)]
pub use memoffset as __memoffset;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
