//! Contexts, current-object accessors and the frame lifecycle
//!
//! Every native object crosses the boundary as a [`Handle`]: the host stores
//! it, compares it, and hands it back, but never looks inside. Accessors for
//! "the current X" need a current context and report
//! [`BindError::NoCurrentContext`] instead of tripping a native assertion.

use std::ptr;

use dear_imgui_js_marshal::{Handle, copy_native_str};

use crate::error::{BindError, BindResult};
use crate::logging::{log_context_created, log_context_destroyed};
use crate::sys;

pub type ContextHandle = Handle<sys::ImGuiContext>;
pub type IoHandle = Handle<sys::ImGuiIO>;
pub type StyleHandle = Handle<sys::ImGuiStyle>;
pub type PlatformIoHandle = Handle<sys::ImGuiPlatformIO>;
pub type ViewportHandle = Handle<sys::ImGuiViewport>;
pub type DrawListHandle = Handle<sys::ImDrawList>;
pub type FontHandle = Handle<sys::ImFont>;
pub type DrawDataHandle = Handle<sys::ImDrawData>;

/// Creates a context with its own font atlas. The new context becomes
/// current if there was none.
pub fn create_context() -> BindResult<ContextHandle> {
    let raw = unsafe { sys::igCreateContext(ptr::null_mut()) };
    if raw.is_null() {
        return Err(BindError::null_result("igCreateContext"));
    }
    log_context_created(raw as usize);
    Ok(unsafe { Handle::from_ptr(raw) })
}

/// Destroys `ctx`, or the current context when `ctx` is null.
///
/// # Safety
///
/// `ctx` must be null or a live context. Once this returns, neither `ctx`
/// nor any handle obtained while it was current (IO, style, draw lists,
/// fonts, ...) may be passed to a binding again.
///
/// ```compile_fail
/// use dear_imgui_js as imgui;
///
/// imgui::destroy_context(imgui::Handle::null());
/// ```
pub unsafe fn destroy_context(ctx: ContextHandle) {
    let target = if ctx.is_null() {
        get_current_context()
    } else {
        ctx
    };
    if target.is_null() {
        return;
    }
    unsafe { sys::igDestroyContext(target.as_ptr()) };
    crate::clipboard::forget_context(target);
    log_context_destroyed(target.addr());
}

/// The current context; null when there is none.
pub fn get_current_context() -> ContextHandle {
    unsafe { Handle::from_ptr(sys::igGetCurrentContext()) }
}

/// Makes `ctx` current. A null handle leaves no context current.
pub fn set_current_context(ctx: ContextHandle) {
    unsafe { sys::igSetCurrentContext(ctx.as_ptr()) }
}

/// The current context, or an error if there is none.
pub fn require_context() -> BindResult<ContextHandle> {
    let ctx = get_current_context();
    if ctx.is_null() {
        Err(BindError::no_current_context())
    } else {
        Ok(ctx)
    }
}

/// The current context's `ImGuiIO`, for use with the IO field accessors.
pub fn get_io() -> BindResult<IoHandle> {
    require_context()?;
    Ok(unsafe { Handle::from_ptr(sys::igGetIO_Nil()) })
}

/// The current context's live `ImGuiStyle`.
pub fn get_style() -> BindResult<StyleHandle> {
    require_context()?;
    Ok(unsafe { Handle::from_ptr(sys::igGetStyle()) })
}

pub fn get_platform_io() -> BindResult<PlatformIoHandle> {
    require_context()?;
    Ok(unsafe { Handle::from_ptr(sys::igGetPlatformIO_Nil()) })
}

/// The main viewport; also what a null viewport argument stands for.
pub fn get_main_viewport() -> BindResult<ViewportHandle> {
    require_context()?;
    Ok(unsafe { Handle::from_ptr(sys::igGetMainViewport()) })
}

/// Draw list of the window being appended to; only meaningful inside a frame.
pub fn get_window_draw_list() -> BindResult<DrawListHandle> {
    require_context()?;
    Ok(unsafe { Handle::from_ptr(sys::igGetWindowDrawList()) })
}

/// Background draw list of `viewport`, or of the main viewport when null.
pub fn get_background_draw_list(viewport: ViewportHandle) -> BindResult<DrawListHandle> {
    require_context()?;
    Ok(unsafe {
        Handle::from_ptr(sys::igGetBackgroundDrawList(viewport.as_ptr()))
    })
}

/// Foreground draw list of `viewport`, or of the main viewport when null.
pub fn get_foreground_draw_list(viewport: ViewportHandle) -> BindResult<DrawListHandle> {
    require_context()?;
    Ok(unsafe {
        Handle::from_ptr(sys::igGetForegroundDrawList_ViewportPtr(viewport.as_ptr()))
    })
}

/// The font currently pushed, or the default font.
pub fn get_font() -> BindResult<FontHandle> {
    require_context()?;
    Ok(unsafe { Handle::from_ptr(sys::igGetFont()) })
}

/// Draw data of the last rendered frame; null before the first `render`.
pub fn get_draw_data() -> BindResult<DrawDataHandle> {
    require_context()?;
    Ok(unsafe { Handle::from_ptr(sys::igGetDrawData()) })
}

/// Starts a frame, adding the default font and building the atlas on first
/// use.
pub fn new_frame() -> BindResult<()> {
    require_context()?;
    unsafe {
        let io = sys::igGetIO_Nil();
        let fonts = (*io).Fonts;

        if (*fonts).Fonts.Size == 0 {
            sys::ImFontAtlas_AddFontDefault(fonts, ptr::null());
        }

        if !(*fonts).TexIsBuilt {
            sys::igImFontAtlasBuildMain(fonts);
            (*fonts).TexIsBuilt = true;
        }

        sys::igNewFrame();
    }
    Ok(())
}

/// Ends the frame without rendering; [`render`] calls this itself.
pub fn end_frame() -> BindResult<()> {
    require_context()?;
    unsafe { sys::igEndFrame() };
    Ok(())
}

/// Ends the frame and finalizes draw data for the renderer.
pub fn render() -> BindResult<()> {
    require_context()?;
    unsafe { sys::igRender() };
    Ok(())
}

/// Frames started on the current context.
pub fn get_frame_count() -> BindResult<i32> {
    require_context()?;
    Ok(unsafe { sys::igGetFrameCount() })
}

/// Compiled Dear ImGui version, e.g. `"1.92.6"`. Needs no context.
pub fn get_version() -> String {
    unsafe { copy_native_str(sys::igGetVersion()) }.unwrap_or_default()
}
