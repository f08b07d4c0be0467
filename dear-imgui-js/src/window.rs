//! Windows and scoped containers
//!
//! `Begin*` calls that take `bool* p_open` accept a host container: `[true]`
//! shows a close button and receives `false` when it is clicked; `null` hides
//! the button.

use dear_imgui_js_marshal::{BoolSlot, HostContainer, ScratchBuffer, with_cstr};

use crate::sys;

pub fn begin<H: HostContainer + ?Sized>(name: &str, p_open: &mut H, flags: i32) -> bool {
    with_cstr(name, |name| {
        let mut p_open = BoolSlot::new(p_open);
        unsafe { sys::igBegin(name, p_open.as_mut_ptr(), flags) }
    })
}

/// Must be called after every `begin`, whatever it returned.
pub fn end() {
    unsafe { sys::igEnd() }
}

/// Starts a child region. `size` components of 0 fill the remaining space.
pub fn begin_child(str_id: &str, size: [f32; 2], child_flags: i32, window_flags: i32) -> bool {
    with_cstr(str_id, |str_id| unsafe {
        sys::igBeginChild_Str(
            str_id,
            sys::ImVec2 {
                x: size[0],
                y: size[1],
            },
            child_flags,
            window_flags,
        )
    })
}

/// Must be called after every `begin_child`, whatever it returned.
pub fn end_child() {
    unsafe { sys::igEndChild() }
}

/// Starts a tab bar; call [`end_tab_bar`] only when this returns `true`.
pub fn begin_tab_bar(str_id: &str, flags: i32) -> bool {
    with_cstr(str_id, |str_id| unsafe { sys::igBeginTabBar(str_id, flags) })
}

/// Closes a tab bar opened by [`begin_tab_bar`].
pub fn end_tab_bar() {
    unsafe { sys::igEndTabBar() }
}

/// A tab inside the current tab bar. A valid `p_open` adds a close button and
/// is set to `false` when it is clicked.
pub fn begin_tab_item<H: HostContainer + ?Sized>(label: &str, p_open: &mut H, flags: i32) -> bool {
    with_cstr(label, |label| {
        let mut p_open = BoolSlot::new(p_open);
        unsafe { sys::igBeginTabItem(label, p_open.as_mut_ptr(), flags) }
    })
}

pub fn end_tab_item() {
    unsafe { sys::igEndTabItem() }
}

pub fn open_popup(str_id: &str, popup_flags: i32) {
    with_cstr(str_id, |str_id| unsafe {
        sys::igOpenPopup_Str(str_id, popup_flags)
    })
}

/// Returns `true` while the popup opened with [`open_popup`] is visible.
pub fn begin_popup(str_id: &str, flags: i32) -> bool {
    with_cstr(str_id, |str_id| unsafe { sys::igBeginPopup(str_id, flags) })
}

/// Modal variant of [`begin_popup`], with an optional close button like
/// [`begin`].
pub fn begin_popup_modal<H: HostContainer + ?Sized>(name: &str, p_open: &mut H, flags: i32) -> bool {
    with_cstr(name, |name| {
        let mut p_open = BoolSlot::new(p_open);
        unsafe { sys::igBeginPopupModal(name, p_open.as_mut_ptr(), flags) }
    })
}

/// Only call when `begin_popup*` returned `true`.
pub fn end_popup() {
    unsafe { sys::igEndPopup() }
}

pub fn close_current_popup() {
    unsafe { sys::igCloseCurrentPopup() }
}

/// With a `[true]` container the header gets a close button that writes
/// `false` back.
pub fn collapsing_header<H: HostContainer + ?Sized>(
    label: &str,
    p_visible: &mut H,
    flags: i32,
) -> bool {
    with_cstr(label, |label| {
        let mut p_visible = BoolSlot::new(p_visible);
        unsafe { sys::igCollapsingHeader_BoolPtr(label, p_visible.as_mut_ptr(), flags) }
    })
}

pub fn begin_menu_bar() -> bool {
    unsafe { sys::igBeginMenuBar() }
}

pub fn end_menu_bar() {
    unsafe { sys::igEndMenuBar() }
}

/// A sub-menu entry; call [`end_menu`] only when this returns `true`.
pub fn begin_menu(label: &str, enabled: bool) -> bool {
    with_cstr(label, |label| unsafe { sys::igBeginMenu(label, enabled) })
}

pub fn end_menu() {
    unsafe { sys::igEndMenu() }
}

/// `p_selected` toggles when the item is activated; `null` makes the item
/// stateless.
pub fn menu_item<H: HostContainer + ?Sized>(
    label: &str,
    shortcut: Option<&str>,
    p_selected: &mut H,
    enabled: bool,
) -> bool {
    let mut scratch = ScratchBuffer::new();
    let label = scratch.push(label);
    let shortcut = scratch.push_opt(shortcut);
    let mut p_selected = BoolSlot::new(p_selected);
    unsafe {
        sys::igMenuItem_BoolPtr(
            scratch.ptr(label),
            scratch.ptr(shortcut),
            p_selected.as_mut_ptr(),
            enabled,
        )
    }
}

macro_rules! tool_window {
    ($(#[$meta:meta])* $name:ident => $native:ident) => {
        $(#[$meta])*
        pub fn $name<H: HostContainer + ?Sized>(p_open: &mut H) {
            let mut p_open = BoolSlot::new(p_open);
            unsafe { sys::$native(p_open.as_mut_ptr()) }
        }
    };
}

tool_window!(
    /// The Dear ImGui demo window.
    show_demo_window => igShowDemoWindow
);
tool_window!(show_metrics_window => igShowMetricsWindow);
tool_window!(show_about_window => igShowAboutWindow);
tool_window!(show_debug_log_window => igShowDebugLogWindow);
tool_window!(show_id_stack_tool_window => igShowIDStackToolWindow);
