//! ImNodes contexts and editor contexts
//!
//! One ImNodes context per ImGui context; any number of editor contexts, each
//! holding the nodes, links, panning and selection of one graph view.

use dear_imgui_js::{BindError, BindResult, Handle};

use crate::compat_ffi;
use crate::sys;

#[cfg(feature = "tracing")]
use tracing::debug;

pub type NodesContextHandle = Handle<sys::ImNodesContext>;
pub type EditorContextHandle = Handle<sys::ImNodesEditorContext>;

/// Creates an ImNodes context bound to the current ImGui context. The new
/// context becomes current if there was none.
pub fn create_context() -> BindResult<NodesContextHandle> {
    let imgui = dear_imgui_js::require_context()?;
    unsafe { sys::imnodes_SetImGuiContext(imgui.as_ptr()) };
    let raw = unsafe { sys::imnodes_CreateContext() };
    if raw.is_null() {
        return Err(BindError::null_result("imnodes_CreateContext"));
    }
    #[cfg(feature = "tracing")]
    debug!("ImNodes context {:#x} created", raw as usize);
    Ok(unsafe { Handle::from_ptr(raw) })
}

/// Destroys `ctx`, or the current ImNodes context when `ctx` is null.
///
/// # Safety
///
/// `ctx` must be null or a live ImNodes context. Neither `ctx` nor the
/// style or IO handles obtained from it may be used afterwards.
pub unsafe fn destroy_context(ctx: NodesContextHandle) {
    let target = if ctx.is_null() {
        get_current_context()
    } else {
        ctx
    };
    if target.is_null() {
        return;
    }
    unsafe { sys::imnodes_DestroyContext(target.as_ptr()) };
    #[cfg(feature = "tracing")]
    debug!("ImNodes context {:#x} destroyed", target.addr());
}

/// The current ImNodes context; null when there is none.
pub fn get_current_context() -> NodesContextHandle {
    unsafe { Handle::from_ptr(sys::imnodes_GetCurrentContext()) }
}

/// Makes `ctx` the ImNodes context used by every other call.
pub fn set_current_context(ctx: NodesContextHandle) {
    unsafe { sys::imnodes_SetCurrentContext(ctx.as_ptr()) }
}

/// Points ImNodes at an ImGui context other than the one it was created with.
pub fn set_imgui_context(ctx: dear_imgui_js::ContextHandle) {
    unsafe { sys::imnodes_SetImGuiContext(ctx.as_ptr()) }
}

pub(crate) fn require_context() -> BindResult<NodesContextHandle> {
    let ctx = get_current_context();
    if ctx.is_null() {
        Err(BindError::no_extension_context("ImNodes"))
    } else {
        Ok(ctx)
    }
}

/// A fresh editor with its own nodes, links and panning.
pub fn editor_context_create() -> BindResult<EditorContextHandle> {
    let raw = unsafe { sys::imnodes_EditorContextCreate() };
    if raw.is_null() {
        return Err(BindError::null_result("imnodes_EditorContextCreate"));
    }
    Ok(unsafe { Handle::from_ptr(raw) })
}

/// Frees an editor context. A null handle is ignored.
///
/// # Safety
///
/// `editor` must be null or a live editor context that is not current. It
/// may not be passed to any binding afterwards.
///
/// ```compile_fail
/// use dear_imnodes_js as imnodes;
///
/// imnodes::editor_context_free(imnodes::EditorContextHandle::null());
/// ```
pub unsafe fn editor_context_free(editor: EditorContextHandle) {
    if !editor.is_null() {
        unsafe { sys::imnodes_EditorContextFree(editor.as_ptr()) }
    }
}

/// Makes `editor` the target of node, link and selection calls.
pub fn editor_context_set(editor: EditorContextHandle) -> BindResult<()> {
    require_context()?;
    let raw = editor.require("ImNodesEditorContext")?;
    unsafe { sys::imnodes_EditorContextSet(raw) };
    Ok(())
}

/// Panning of the current editor, in editor space.
pub fn editor_context_get_panning() -> BindResult<[f32; 2]> {
    require_context()?;
    let out = unsafe { compat_ffi::imnodes_EditorContextGetPanning() };
    Ok([out.x, out.y])
}

pub fn editor_context_reset_panning(pos: [f32; 2]) -> BindResult<()> {
    require_context()?;
    unsafe {
        sys::imnodes_EditorContextResetPanning(sys::ImVec2_c {
            x: pos[0],
            y: pos[1],
        })
    };
    Ok(())
}

/// Pans the current editor so that `node_id` is in view.
pub fn editor_context_move_to_node(node_id: i32) -> BindResult<()> {
    require_context()?;
    unsafe { sys::imnodes_EditorContextMoveToNode(node_id) };
    Ok(())
}
