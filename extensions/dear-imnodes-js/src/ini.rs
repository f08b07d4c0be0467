//! Editor state (node positions, panning) as ini text
//!
//! Saved strings point into a buffer ImNodes reuses on the next save, so they
//! are copied before returning.

use dear_imgui_js::BindResult;
use dear_imgui_js_marshal::copy_native_bytes;

use crate::context::{EditorContextHandle, require_context};
use crate::sys;

/// Serializes node positions and panning of the current editor.
pub fn save_current_editor_state_to_ini_string() -> BindResult<String> {
    require_context()?;
    let mut size: usize = 0;
    let ptr = unsafe { sys::imnodes_SaveCurrentEditorStateToIniString(&mut size as *mut usize) };
    Ok(unsafe { copy_native_bytes(ptr, size) }.unwrap_or_default())
}

/// Restores what [`save_current_editor_state_to_ini_string`] produced.
pub fn load_current_editor_state_from_ini_string(data: &str) -> BindResult<()> {
    require_context()?;
    unsafe { sys::imnodes_LoadCurrentEditorStateFromIniString(data.as_ptr().cast(), data.len()) };
    Ok(())
}

/// Like [`save_current_editor_state_to_ini_string`] for a given editor.
pub fn save_editor_state_to_ini_string(editor: EditorContextHandle) -> BindResult<String> {
    require_context()?;
    let editor = editor.require("ImNodesEditorContext")?;
    let mut size: usize = 0;
    let ptr = unsafe { sys::imnodes_SaveEditorStateToIniString(editor, &mut size as *mut usize) };
    Ok(unsafe { copy_native_bytes(ptr, size) }.unwrap_or_default())
}

pub fn load_editor_state_from_ini_string(
    editor: EditorContextHandle,
    data: &str,
) -> BindResult<()> {
    require_context()?;
    let editor = editor.require("ImNodesEditorContext")?;
    unsafe { sys::imnodes_LoadEditorStateFromIniString(editor, data.as_ptr().cast(), data.len()) };
    Ok(())
}
