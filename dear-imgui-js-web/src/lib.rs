//! Browser exports for dear-imgui-js
//!
//! Every export is named after the C API function it forwards to (`Begin`,
//! `SliderFloat4`, `ImNodes_IsLinkCreated`, ...). Pointer arguments are plain
//! JS arrays mutated in place; native objects cross as numeric handles.

#![cfg(target_arch = "wasm32")]
#![deny(rust_2018_idioms)]

use dear_imgui_js::{BindError, Handle};
use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

mod clipboard;
mod imgui;
#[cfg(feature = "imnodes")]
mod imnodes;

const WASM_PAGE_SIZE: u32 = 64 * 1024;

#[wasm_bindgen(start)]
pub fn start() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    info!("dear-imgui-js {} ready", dear_imgui_js::VERSION);
}

/// Size of the module's linear memory.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct WasmHeapInfo {
    #[wasm_bindgen(js_name = "byteLength")]
    pub byte_length: u32,
    pub pages: u32,
}

#[wasm_bindgen(js_name = "get_wasm_heap_info")]
pub fn get_wasm_heap_info() -> WasmHeapInfo {
    let memory: js_sys::WebAssembly::Memory = wasm_bindgen::memory().unchecked_into();
    let byte_length = memory
        .buffer()
        .unchecked_into::<js_sys::ArrayBuffer>()
        .byte_length();
    WasmHeapInfo {
        byte_length,
        pages: byte_length / WASM_PAGE_SIZE,
    }
}

/// Rebuilds a handle from a number the JS side passed in.
///
/// JS code holds the same trust as C code calling the native API directly:
/// the only numbers it can legitimately pass are ones an export returned.
pub(crate) fn handle<T>(addr: usize) -> Handle<T> {
    // SAFETY: `addr` is zero or a handle this module handed out; JS callers
    // that forge or reuse freed handles break the contract of the export.
    unsafe { Handle::from_addr(addr) }
}

/// `ImVec2` passed as `[x, y]`; missing components are 0.
pub(crate) fn vec2(v: &[f32]) -> [f32; 2] {
    [
        v.first().copied().unwrap_or(0.0),
        v.get(1).copied().unwrap_or(0.0),
    ]
}

pub(crate) fn reflect_err(err: dear_imgui_js::marshal::ReflectError) -> JsValue {
    BindError::from(err).into()
}
