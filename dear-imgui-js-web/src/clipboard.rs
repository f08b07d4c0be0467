use dear_imgui_js::ClipboardBackend;
use js_sys::Function;
use log::warn;
use wasm_bindgen::prelude::*;

/// Clipboard backed by two host callbacks: `get(): string` and
/// `set(text: string)`.
struct JsClipboard {
    get: Function,
    set: Function,
}

impl ClipboardBackend for JsClipboard {
    fn get(&mut self) -> Option<String> {
        match self.get.call0(&JsValue::NULL) {
            Ok(value) => value.as_string(),
            Err(err) => {
                warn!("clipboard get callback threw: {:?}", err);
                None
            }
        }
    }

    fn set(&mut self, value: &str) {
        if let Err(err) = self.set.call1(&JsValue::NULL, &JsValue::from_str(value)) {
            warn!("clipboard set callback threw: {:?}", err);
        }
    }
}

#[wasm_bindgen(js_name = "SetupClipboardFunctions")]
pub fn setup_clipboard_functions(get: Function, set: Function) -> Result<(), JsValue> {
    dear_imgui_js::set_clipboard_backend(JsClipboard { get, set })?;
    Ok(())
}

#[wasm_bindgen(js_name = "GetClipboardText")]
pub fn get_clipboard_text() -> Result<Option<String>, JsValue> {
    Ok(dear_imgui_js::get_clipboard_text()?)
}

#[wasm_bindgen(js_name = "SetClipboardText")]
pub fn set_clipboard_text(text: &str) -> Result<(), JsValue> {
    Ok(dear_imgui_js::set_clipboard_text(text)?)
}
