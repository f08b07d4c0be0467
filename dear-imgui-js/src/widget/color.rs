//! Colour editors; components are RGB(A) floats in `0.0..=1.0`.

use std::ptr;

use dear_imgui_js_marshal::{FloatVecSlot, HostContainer, with_cstr};

use crate::sys;

/// Edits an RGB colour stored as `[r, g, b]` in 0..=1.
pub fn color_edit3<H: HostContainer + ?Sized>(label: &str, col: &mut H, flags: i32) -> bool {
    with_cstr(label, |label| {
        let mut col = FloatVecSlot::<_, 3>::new(col);
        unsafe { sys::igColorEdit3(label, col.as_mut_ptr(), flags) }
    })
}

/// Edits an RGBA colour stored as `[r, g, b, a]` in 0..=1.
pub fn color_edit4<H: HostContainer + ?Sized>(label: &str, col: &mut H, flags: i32) -> bool {
    with_cstr(label, |label| {
        let mut col = FloatVecSlot::<_, 4>::new(col);
        unsafe { sys::igColorEdit4(label, col.as_mut_ptr(), flags) }
    })
}

pub fn color_picker3<H: HostContainer + ?Sized>(label: &str, col: &mut H, flags: i32) -> bool {
    with_cstr(label, |label| {
        let mut col = FloatVecSlot::<_, 3>::new(col);
        unsafe { sys::igColorPicker3(label, col.as_mut_ptr(), flags) }
    })
}

/// `ref_col` is read-only; it is shown next to the edited colour.
pub fn color_picker4<H: HostContainer + ?Sized>(
    label: &str,
    col: &mut H,
    flags: i32,
    ref_col: Option<[f32; 4]>,
) -> bool {
    with_cstr(label, |label| {
        let mut col = FloatVecSlot::<_, 4>::new(col);
        let ref_col_ptr = ref_col.as_ref().map_or(ptr::null(), |c| c.as_ptr());
        unsafe { sys::igColorPicker4(label, col.as_mut_ptr(), flags, ref_col_ptr) }
    })
}
