//! `ImGuiIO` field access, input events and ini persistence
//!
//! The host reads and writes `ImGuiIO` by field name (`"DisplaySize"`,
//! `"DeltaTime"`, ...) through one table instead of a getter/setter pair per
//! field.

use std::ptr;

use dear_imgui_js_marshal::field_table;
use dear_imgui_js_marshal::reflect::{FieldValue, StructBinder};

use crate::context::get_io;
use crate::error::BindResult;
use crate::sys;

#[cfg(feature = "tracing")]
use tracing::debug;

field_table! {
    pub fn io_fields() -> sys::ImGuiIO {
        ConfigFlags: I32,
        BackendFlags: I32,
        DisplaySize: Vec2,
        DisplayFramebufferScale: Vec2,
        DeltaTime: F32,
        IniSavingRate: F32,
        MouseDrawCursor: Bool,
        ConfigMacOSXBehaviors: Bool,
        ConfigInputTrickleEventQueue: Bool,
        ConfigInputTextCursorBlink: Bool,
        ConfigWindowsResizeFromEdges: Bool,
        ConfigWindowsMoveFromTitleBarOnly: Bool,
        ConfigMemoryCompactTimer: F32,
        ConfigDockingNoSplit: Bool,
        ConfigDockingWithShift: Bool,
        ConfigDockingAlwaysTabBar: Bool,
        ConfigDockingTransparentPayload: Bool,
        MouseDoubleClickTime: F32,
        MouseDoubleClickMaxDist: F32,
        MouseDragThreshold: F32,
        KeyRepeatDelay: F32,
        KeyRepeatRate: F32,
        WantCaptureMouse: Bool,
        WantCaptureKeyboard: Bool,
        WantTextInput: Bool,
        WantSetMousePos: Bool,
        WantSaveIniSettings: Bool,
        NavActive: Bool,
        NavVisible: Bool,
        Framerate: F32,
        MetricsRenderVertices: I32,
        MetricsRenderIndices: I32,
        MetricsRenderWindows: I32,
        MetricsActiveWindows: I32,
        MousePos: Vec2,
        MouseWheel: F32,
        MouseWheelH: F32,
        KeyCtrl: Bool,
        KeyShift: Bool,
        KeyAlt: Bool,
        KeySuper: Bool,
    }
}

/// Name-based access to `ImGuiIO`, backed by [`io_fields`].
pub fn io_binder() -> StructBinder<sys::ImGuiIO> {
    StructBinder::new("ImGuiIO", io_fields())
}

/// Reads a field of the current context's `ImGuiIO`.
pub fn get_io_field(name: &str) -> BindResult<FieldValue> {
    let io = get_io()?;
    Ok(unsafe { io_binder().get(io.as_ptr(), name) }?)
}

/// Writes a field of the current context's `ImGuiIO`.
pub fn set_io_field(name: &str, value: FieldValue) -> BindResult<()> {
    let io = get_io()?;
    Ok(unsafe { io_binder().set(io.as_ptr(), name, value) }?)
}

/// Turns off `imgui.ini` persistence for the current context; a browser
/// has no file system to write it to.
pub fn setup_ini_settings() -> BindResult<()> {
    let io = get_io()?;
    unsafe { (*io.as_ptr()).IniFilename = ptr::null() };
    #[cfg(feature = "tracing")]
    debug!("ini persistence disabled");
    Ok(())
}

/// Queues a key press or release. `key` is an `ImGuiKey` value, modifiers
/// included (`ImGuiMod_Ctrl`, ...).
pub fn add_key_event(key: i32, down: bool) -> BindResult<()> {
    let io = get_io()?;
    unsafe { sys::ImGuiIO_AddKeyEvent(io.as_ptr(), key, down) };
    Ok(())
}

/// Queues a key event with an analog value, for gamepad triggers and sticks.
pub fn add_key_analog_event(key: i32, down: bool, value: f32) -> BindResult<()> {
    let io = get_io()?;
    unsafe { sys::ImGuiIO_AddKeyAnalogEvent(io.as_ptr(), key, down, value) };
    Ok(())
}

/// Queues a focus change of the host surface; losing focus releases held
/// keys and buttons.
pub fn add_focus_event(focused: bool) -> BindResult<()> {
    let io = get_io()?;
    unsafe { sys::ImGuiIO_AddFocusEvent(io.as_ptr(), focused) };
    Ok(())
}

/// Queues a mouse move, in display coordinates.
pub fn add_mouse_pos_event(x: f32, y: f32) -> BindResult<()> {
    let io = get_io()?;
    unsafe { sys::ImGuiIO_AddMousePosEvent(io.as_ptr(), x, y) };
    Ok(())
}

/// Queues a press or release of mouse button `button` (0 = left).
pub fn add_mouse_button_event(button: i32, down: bool) -> BindResult<()> {
    let io = get_io()?;
    unsafe { sys::ImGuiIO_AddMouseButtonEvent(io.as_ptr(), button, down) };
    Ok(())
}

/// Queues a wheel scroll; positive `wheel_y` scrolls up.
pub fn add_mouse_wheel_event(wheel_x: f32, wheel_y: f32) -> BindResult<()> {
    let io = get_io()?;
    unsafe { sys::ImGuiIO_AddMouseWheelEvent(io.as_ptr(), wheel_x, wheel_y) };
    Ok(())
}

/// Queues typed text.
pub fn add_input_characters_utf8(text: &str) -> BindResult<()> {
    let io = get_io()?;
    dear_imgui_js_marshal::with_cstr(text, |text| unsafe {
        sys::ImGuiIO_AddInputCharactersUTF8(io.as_ptr(), text)
    });
    Ok(())
}

/// The `ImGuiMouseCursor` the last frame asked for; `-1` means hide it.
pub fn get_mouse_cursor() -> BindResult<i32> {
    crate::context::require_context()?;
    Ok(unsafe { sys::igGetMouseCursor() })
}
