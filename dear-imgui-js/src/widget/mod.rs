//! Widgets with pointer arguments
//!
//! Each `float*`, `int*`, `double*` or `bool*` parameter takes a host
//! container. The native call sees the container's first `N` elements and
//! whatever it writes is copied back before the binding returns. A container
//! that is not an array (`null`, `undefined`, a number) is passed as a null
//! pointer.

use std::os::raw::c_char;

use dear_imgui_js_marshal::ScratchBuffer;

pub mod basic;
pub mod color;
pub mod drag;
pub mod input;
pub mod slider;

pub use basic::*;
pub use color::*;
pub use drag::*;
pub use input::*;
pub use slider::*;

/// Stages a label and an optional format string for one call.
pub(crate) fn with_label_format<R>(
    label: &str,
    format: Option<&str>,
    f: impl FnOnce(*const c_char, *const c_char) -> R,
) -> R {
    let mut scratch = ScratchBuffer::with_capacity(label.len() + format.map_or(0, str::len) + 2);
    let label = scratch.push(label);
    let format = scratch.push_opt(format);
    f(scratch.ptr(label), scratch.ptr(format))
}
