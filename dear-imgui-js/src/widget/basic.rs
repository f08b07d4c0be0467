use std::ptr;

use dear_imgui_js_marshal::{BoolSlot, HostContainer, IntSlot, with_cstr};

use crate::sys;

/// Returns `true` on the frame the box is toggled.
pub fn checkbox<H: HostContainer + ?Sized>(label: &str, v: &mut H) -> bool {
    with_cstr(label, |label| {
        let mut v = BoolSlot::new(v);
        unsafe { sys::igCheckbox(label, v.as_mut_ptr()) }
    })
}

/// Toggles the `flags_value` bits of `flags[0]`.
pub fn checkbox_flags<H: HostContainer + ?Sized>(label: &str, flags: &mut H, flags_value: i32) -> bool {
    with_cstr(label, |label| {
        let mut flags = IntSlot::new(flags);
        unsafe { sys::igCheckboxFlags_IntPtr(label, flags.as_mut_ptr(), flags_value) }
    })
}

/// Writes `v_button` into `v[0]` when pressed.
pub fn radio_button<H: HostContainer + ?Sized>(label: &str, v: &mut H, v_button: i32) -> bool {
    with_cstr(label, |label| {
        let mut v = IntSlot::new(v);
        unsafe { sys::igRadioButton_IntPtr(label, v.as_mut_ptr(), v_button) }
    })
}

/// A selectable line bound to `p_selected`; toggles it when clicked.
pub fn selectable<H: HostContainer + ?Sized>(
    label: &str,
    p_selected: &mut H,
    flags: i32,
    size: [f32; 2],
) -> bool {
    with_cstr(label, |label| {
        let mut p_selected = BoolSlot::new(p_selected);
        unsafe {
            sys::igSelectable_BoolPtr(
                label,
                p_selected.as_mut_ptr(),
                flags,
                sys::ImVec2 {
                    x: size[0],
                    y: size[1],
                },
            )
        }
    })
}

/// Returns `true` on the frame the button is released over. `[0, 0]`
/// sizes it to the label.
pub fn button(label: &str, size: [f32; 2]) -> bool {
    with_cstr(label, |label| unsafe {
        sys::igButton(
            label,
            sys::ImVec2 {
                x: size[0],
                y: size[1],
            },
        )
    })
}

/// Raw text; no format string interpretation.
pub fn text(txt: &str) {
    with_cstr(txt, |txt| unsafe { sys::igTextUnformatted(txt, ptr::null()) })
}

pub fn separator() {
    unsafe { sys::igSeparator() }
}

/// Keeps the next item on the current line.
pub fn same_line(offset_from_start_x: f32, spacing: f32) {
    unsafe { sys::igSameLine(offset_from_start_x, spacing) }
}
