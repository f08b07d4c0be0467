//! Clipboard forwarding
//!
//! Dear ImGui asks the platform for clipboard text through two callbacks in
//! `ImGuiPlatformIO`. A host installs a [`ClipboardBackend`] per context; the
//! callbacks forward to it and keep the last returned text alive until the
//! next request, since ImGui copies it right away.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use dear_imgui_js_marshal::{copy_native_str, with_cstr};

use crate::context::{ContextHandle, require_context};
use crate::error::BindResult;
use crate::sys;

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// Source and sink for clipboard text
pub trait ClipboardBackend: 'static {
    /// Current clipboard contents, or `None` if empty or inaccessible
    fn get(&mut self) -> Option<String>;
    fn set(&mut self, value: &str);
}

/// Process-local clipboard, for hosts without a system clipboard.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl ClipboardBackend for MemoryClipboard {
    fn get(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set(&mut self, value: &str) {
        self.text = Some(value.to_owned());
    }
}

struct ClipboardContext {
    backend: Box<dyn ClipboardBackend>,
    last_value: CString,
}

thread_local! {
    // Keyed by context address; boxed so the user-data pointer stays put.
    static CLIPBOARDS: RefCell<HashMap<usize, Box<ClipboardContext>>> =
        RefCell::new(HashMap::new());
}

/// Routes the current context's clipboard through `backend`, replacing any
/// previous one.
pub fn set_clipboard_backend<B: ClipboardBackend>(backend: B) -> BindResult<()> {
    let ctx = require_context()?;
    let mut clipboard = Box::new(ClipboardContext {
        backend: Box::new(backend),
        last_value: CString::default(),
    });
    let user_data: *mut ClipboardContext = &mut *clipboard;

    unsafe {
        let platform_io = sys::igGetPlatformIO_Nil();
        (*platform_io).Platform_GetClipboardTextFn = Some(get_clipboard_text_fn);
        (*platform_io).Platform_SetClipboardTextFn = Some(set_clipboard_text_fn);
        (*platform_io).Platform_ClipboardUserData = user_data.cast();
    }

    CLIPBOARDS.with(|clipboards| clipboards.borrow_mut().insert(ctx.addr(), clipboard));
    #[cfg(feature = "tracing")]
    debug!("clipboard backend installed for context {:#x}", ctx.addr());
    Ok(())
}

/// Drops the backend of a destroyed context.
pub(crate) fn forget_context(ctx: ContextHandle) {
    let _ = CLIPBOARDS.try_with(|clipboards| clipboards.borrow_mut().remove(&ctx.addr()));
}

/// `ImGui::GetClipboardText`
pub fn get_clipboard_text() -> BindResult<Option<String>> {
    require_context()?;
    Ok(unsafe { copy_native_str(sys::igGetClipboardText()) })
}

/// `ImGui::SetClipboardText`
pub fn set_clipboard_text(text: &str) -> BindResult<()> {
    require_context()?;
    with_cstr(text, |text| unsafe { sys::igSetClipboardText(text) });
    Ok(())
}

unsafe fn current_clipboard<'a>() -> Option<&'a mut ClipboardContext> {
    unsafe {
        let platform_io = sys::igGetPlatformIO_Nil();
        (*platform_io)
            .Platform_ClipboardUserData
            .cast::<ClipboardContext>()
            .as_mut()
    }
}

unsafe extern "C" fn get_clipboard_text_fn(_ctx: *mut sys::ImGuiContext) -> *const c_char {
    let Some(clipboard) = (unsafe { current_clipboard() }) else {
        return ptr::null();
    };

    let text = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| clipboard.backend.get()));
    match text {
        Ok(Some(text)) => {
            let mut bytes = text.into_bytes();
            if let Some(position) = bytes.iter().position(|&b| b == b'\0') {
                #[cfg(feature = "tracing")]
                warn!(position, "clipboard text contains a NUL byte, truncating");
                bytes.truncate(position);
            }
            clipboard.last_value = CString::new(bytes).unwrap_or_default();
            clipboard.last_value.as_ptr()
        }
        Ok(None) => ptr::null(),
        Err(_) => {
            #[cfg(feature = "tracing")]
            warn!("clipboard backend panicked in get");
            ptr::null()
        }
    }
}

unsafe extern "C" fn set_clipboard_text_fn(_ctx: *mut sys::ImGuiContext, text: *const c_char) {
    if text.is_null() {
        return;
    }
    let Some(clipboard) = (unsafe { current_clipboard() }) else {
        return;
    };

    let text = unsafe { CStr::from_ptr(text) }.to_string_lossy();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        clipboard.backend.set(&text)
    }));
    if result.is_err() {
        #[cfg(feature = "tracing")]
        warn!("clipboard backend panicked in set");
    }
}
