//! Dear ImGui exports

use dear_imgui_js as imgui;
use wasm_bindgen::prelude::*;

use crate::{handle, reflect_err, vec2};

// Contexts and the frame lifecycle

#[wasm_bindgen(js_name = "CreateContext")]
pub fn create_context() -> Result<usize, JsValue> {
    Ok(imgui::create_context()?.addr())
}

/// `0` destroys the current context.
#[wasm_bindgen(js_name = "DestroyContext")]
pub fn destroy_context(ctx: usize) {
    // SAFETY: JS drops the handle along with the context.
    unsafe { imgui::destroy_context(handle(ctx)) }
}

#[wasm_bindgen(js_name = "GetCurrentContext")]
pub fn get_current_context() -> usize {
    imgui::get_current_context().addr()
}

#[wasm_bindgen(js_name = "SetCurrentContext")]
pub fn set_current_context(ctx: usize) {
    imgui::set_current_context(handle(ctx))
}

#[wasm_bindgen(js_name = "GetIO")]
pub fn get_io() -> Result<usize, JsValue> {
    Ok(imgui::get_io()?.addr())
}

#[wasm_bindgen(js_name = "GetStyle")]
pub fn get_style() -> Result<usize, JsValue> {
    Ok(imgui::get_style()?.addr())
}

#[wasm_bindgen(js_name = "GetPlatformIO")]
pub fn get_platform_io() -> Result<usize, JsValue> {
    Ok(imgui::get_platform_io()?.addr())
}

#[wasm_bindgen(js_name = "GetMainViewport")]
pub fn get_main_viewport() -> Result<usize, JsValue> {
    Ok(imgui::get_main_viewport()?.addr())
}

#[wasm_bindgen(js_name = "GetWindowDrawList")]
pub fn get_window_draw_list() -> Result<usize, JsValue> {
    Ok(imgui::get_window_draw_list()?.addr())
}

#[wasm_bindgen(js_name = "GetBackgroundDrawList")]
pub fn get_background_draw_list(viewport: usize) -> Result<usize, JsValue> {
    Ok(imgui::get_background_draw_list(handle(viewport))?.addr())
}

#[wasm_bindgen(js_name = "GetForegroundDrawList")]
pub fn get_foreground_draw_list(viewport: usize) -> Result<usize, JsValue> {
    Ok(imgui::get_foreground_draw_list(handle(viewport))?.addr())
}

#[wasm_bindgen(js_name = "GetFont")]
pub fn get_font() -> Result<usize, JsValue> {
    Ok(imgui::get_font()?.addr())
}

#[wasm_bindgen(js_name = "GetDrawData")]
pub fn get_draw_data() -> Result<usize, JsValue> {
    Ok(imgui::get_draw_data()?.addr())
}

#[wasm_bindgen(js_name = "NewFrame")]
pub fn new_frame() -> Result<(), JsValue> {
    Ok(imgui::new_frame()?)
}

#[wasm_bindgen(js_name = "EndFrame")]
pub fn end_frame() -> Result<(), JsValue> {
    Ok(imgui::end_frame()?)
}

#[wasm_bindgen(js_name = "Render")]
pub fn render() -> Result<(), JsValue> {
    Ok(imgui::render()?)
}

#[wasm_bindgen(js_name = "GetFrameCount")]
pub fn get_frame_count() -> Result<i32, JsValue> {
    Ok(imgui::get_frame_count()?)
}

#[wasm_bindgen(js_name = "GetVersion")]
pub fn get_version() -> String {
    imgui::get_version()
}

#[wasm_bindgen(js_name = "SetupIniSettings")]
pub fn setup_ini_settings() -> Result<(), JsValue> {
    Ok(imgui::setup_ini_settings()?)
}

// Reflective field access

#[wasm_bindgen(js_name = "GetIOField")]
pub fn get_io_field(name: &str) -> Result<JsValue, JsValue> {
    let io = imgui::get_io()?;
    unsafe { imgui::io_binder().get_js(io.as_ptr(), name) }.map_err(reflect_err)
}

#[wasm_bindgen(js_name = "SetIOField")]
pub fn set_io_field(name: &str, value: JsValue) -> Result<(), JsValue> {
    let io = imgui::get_io()?;
    unsafe { imgui::io_binder().set_js(io.as_ptr(), name, &value) }.map_err(reflect_err)
}

#[wasm_bindgen(js_name = "GetStyleField")]
pub fn get_style_field(name: &str) -> Result<JsValue, JsValue> {
    let style = imgui::get_style()?;
    unsafe { imgui::style_binder().get_js(style.as_ptr(), name) }.map_err(reflect_err)
}

#[wasm_bindgen(js_name = "SetStyleField")]
pub fn set_style_field(name: &str, value: JsValue) -> Result<(), JsValue> {
    let style = imgui::get_style()?;
    unsafe { imgui::style_binder().set_js(style.as_ptr(), name, &value) }.map_err(reflect_err)
}

#[wasm_bindgen(js_name = "GetStyleColor")]
pub fn get_style_color(idx: i32) -> Result<Option<Vec<f32>>, JsValue> {
    Ok(imgui::get_style_color(idx)?.map(|col| col.to_vec()))
}

#[wasm_bindgen(js_name = "SetStyleColor")]
pub fn set_style_color(idx: i32, col: JsValue) -> Result<bool, JsValue> {
    Ok(imgui::set_style_color(idx, &col)?)
}

#[wasm_bindgen(js_name = "StyleColorsDark")]
pub fn style_colors_dark(dst: usize) {
    imgui::style_colors_dark(handle(dst))
}

#[wasm_bindgen(js_name = "StyleColorsLight")]
pub fn style_colors_light(dst: usize) {
    imgui::style_colors_light(handle(dst))
}

#[wasm_bindgen(js_name = "StyleColorsClassic")]
pub fn style_colors_classic(dst: usize) {
    imgui::style_colors_classic(handle(dst))
}

// Input events

#[wasm_bindgen(js_name = "AddKeyEvent")]
pub fn add_key_event(key: i32, down: bool) -> Result<(), JsValue> {
    Ok(imgui::add_key_event(key, down)?)
}

#[wasm_bindgen(js_name = "AddKeyAnalogEvent")]
pub fn add_key_analog_event(key: i32, down: bool, value: f32) -> Result<(), JsValue> {
    Ok(imgui::add_key_analog_event(key, down, value)?)
}

#[wasm_bindgen(js_name = "AddFocusEvent")]
pub fn add_focus_event(focused: bool) -> Result<(), JsValue> {
    Ok(imgui::add_focus_event(focused)?)
}

#[wasm_bindgen(js_name = "AddMousePosEvent")]
pub fn add_mouse_pos_event(x: f32, y: f32) -> Result<(), JsValue> {
    Ok(imgui::add_mouse_pos_event(x, y)?)
}

#[wasm_bindgen(js_name = "AddMouseButtonEvent")]
pub fn add_mouse_button_event(button: i32, down: bool) -> Result<(), JsValue> {
    Ok(imgui::add_mouse_button_event(button, down)?)
}

#[wasm_bindgen(js_name = "AddMouseWheelEvent")]
pub fn add_mouse_wheel_event(wheel_x: f32, wheel_y: f32) -> Result<(), JsValue> {
    Ok(imgui::add_mouse_wheel_event(wheel_x, wheel_y)?)
}

#[wasm_bindgen(js_name = "AddInputCharactersUTF8")]
pub fn add_input_characters_utf8(text: &str) -> Result<(), JsValue> {
    Ok(imgui::add_input_characters_utf8(text)?)
}

#[wasm_bindgen(js_name = "GetMouseCursor")]
pub fn get_mouse_cursor() -> Result<i32, JsValue> {
    Ok(imgui::get_mouse_cursor()?)
}

// Windows, popups, menus

#[wasm_bindgen(js_name = "Begin")]
pub fn begin(name: &str, mut p_open: JsValue, flags: i32) -> bool {
    imgui::begin(name, &mut p_open, flags)
}

#[wasm_bindgen(js_name = "End")]
pub fn end() {
    imgui::end()
}

#[wasm_bindgen(js_name = "BeginChild")]
pub fn begin_child(str_id: &str, size: &[f32], child_flags: i32, window_flags: i32) -> bool {
    imgui::begin_child(str_id, vec2(size), child_flags, window_flags)
}

#[wasm_bindgen(js_name = "EndChild")]
pub fn end_child() {
    imgui::end_child()
}

#[wasm_bindgen(js_name = "BeginTabBar")]
pub fn begin_tab_bar(str_id: &str, flags: i32) -> bool {
    imgui::begin_tab_bar(str_id, flags)
}

#[wasm_bindgen(js_name = "EndTabBar")]
pub fn end_tab_bar() {
    imgui::end_tab_bar()
}

#[wasm_bindgen(js_name = "BeginTabItem")]
pub fn begin_tab_item(label: &str, mut p_open: JsValue, flags: i32) -> bool {
    imgui::begin_tab_item(label, &mut p_open, flags)
}

#[wasm_bindgen(js_name = "EndTabItem")]
pub fn end_tab_item() {
    imgui::end_tab_item()
}

#[wasm_bindgen(js_name = "OpenPopup")]
pub fn open_popup(str_id: &str, popup_flags: i32) {
    imgui::open_popup(str_id, popup_flags)
}

#[wasm_bindgen(js_name = "BeginPopup")]
pub fn begin_popup(str_id: &str, flags: i32) -> bool {
    imgui::begin_popup(str_id, flags)
}

#[wasm_bindgen(js_name = "BeginPopupModal")]
pub fn begin_popup_modal(name: &str, mut p_open: JsValue, flags: i32) -> bool {
    imgui::begin_popup_modal(name, &mut p_open, flags)
}

#[wasm_bindgen(js_name = "EndPopup")]
pub fn end_popup() {
    imgui::end_popup()
}

#[wasm_bindgen(js_name = "CloseCurrentPopup")]
pub fn close_current_popup() {
    imgui::close_current_popup()
}

#[wasm_bindgen(js_name = "CollapsingHeader")]
pub fn collapsing_header(label: &str, mut p_visible: JsValue, flags: i32) -> bool {
    imgui::collapsing_header(label, &mut p_visible, flags)
}

#[wasm_bindgen(js_name = "BeginMenuBar")]
pub fn begin_menu_bar() -> bool {
    imgui::begin_menu_bar()
}

#[wasm_bindgen(js_name = "EndMenuBar")]
pub fn end_menu_bar() {
    imgui::end_menu_bar()
}

#[wasm_bindgen(js_name = "BeginMenu")]
pub fn begin_menu(label: &str, enabled: bool) -> bool {
    imgui::begin_menu(label, enabled)
}

#[wasm_bindgen(js_name = "EndMenu")]
pub fn end_menu() {
    imgui::end_menu()
}

#[wasm_bindgen(js_name = "MenuItem")]
pub fn menu_item(
    label: &str,
    shortcut: Option<String>,
    mut p_selected: JsValue,
    enabled: bool,
) -> bool {
    imgui::menu_item(label, shortcut.as_deref(), &mut p_selected, enabled)
}

macro_rules! tool_window_export {
    ($($js:literal => $name:ident;)*) => {$(
        #[wasm_bindgen(js_name = $js)]
        pub fn $name(mut p_open: JsValue) {
            imgui::$name(&mut p_open)
        }
    )*};
}

tool_window_export! {
    "ShowDemoWindow" => show_demo_window;
    "ShowMetricsWindow" => show_metrics_window;
    "ShowAboutWindow" => show_about_window;
    "ShowDebugLogWindow" => show_debug_log_window;
    "ShowIDStackToolWindow" => show_id_stack_tool_window;
}

// Basic widgets

#[wasm_bindgen(js_name = "Text")]
pub fn text(txt: &str) {
    imgui::text(txt)
}

#[wasm_bindgen(js_name = "Button")]
pub fn button(label: &str, size: &[f32]) -> bool {
    imgui::button(label, vec2(size))
}

#[wasm_bindgen(js_name = "Separator")]
pub fn separator() {
    imgui::separator()
}

#[wasm_bindgen(js_name = "SameLine")]
pub fn same_line(offset_from_start_x: f32, spacing: f32) {
    imgui::same_line(offset_from_start_x, spacing)
}

#[wasm_bindgen(js_name = "Checkbox")]
pub fn checkbox(label: &str, mut v: JsValue) -> bool {
    imgui::checkbox(label, &mut v)
}

#[wasm_bindgen(js_name = "CheckboxFlags")]
pub fn checkbox_flags(label: &str, mut flags: JsValue, flags_value: i32) -> bool {
    imgui::checkbox_flags(label, &mut flags, flags_value)
}

#[wasm_bindgen(js_name = "RadioButton")]
pub fn radio_button(label: &str, mut v: JsValue, v_button: i32) -> bool {
    imgui::radio_button(label, &mut v, v_button)
}

#[wasm_bindgen(js_name = "Selectable")]
pub fn selectable(label: &str, mut p_selected: JsValue, flags: i32, size: &[f32]) -> bool {
    imgui::selectable(label, &mut p_selected, flags, vec2(size))
}

// Sliders and drags

macro_rules! slider_export {
    ($elem:ty; $($js:literal => $name:ident;)*) => {$(
        #[wasm_bindgen(js_name = $js)]
        pub fn $name(
            label: &str,
            mut v: JsValue,
            v_min: $elem,
            v_max: $elem,
            format: Option<String>,
            flags: i32,
        ) -> bool {
            imgui::$name(label, &mut v, v_min, v_max, format.as_deref(), flags)
        }
    )*};
}

slider_export! { f32;
    "SliderFloat" => slider_float;
    "SliderFloat2" => slider_float2;
    "SliderFloat3" => slider_float3;
    "SliderFloat4" => slider_float4;
    "SliderAngle" => slider_angle;
}

slider_export! { i32;
    "SliderInt" => slider_int;
    "SliderInt2" => slider_int2;
    "SliderInt3" => slider_int3;
    "SliderInt4" => slider_int4;
}

#[wasm_bindgen(js_name = "VSliderFloat")]
pub fn v_slider_float(
    label: &str,
    size: &[f32],
    mut v: JsValue,
    v_min: f32,
    v_max: f32,
    format: Option<String>,
    flags: i32,
) -> bool {
    imgui::v_slider_float(label, vec2(size), &mut v, v_min, v_max, format.as_deref(), flags)
}

#[wasm_bindgen(js_name = "VSliderInt")]
pub fn v_slider_int(
    label: &str,
    size: &[f32],
    mut v: JsValue,
    v_min: i32,
    v_max: i32,
    format: Option<String>,
    flags: i32,
) -> bool {
    imgui::v_slider_int(label, vec2(size), &mut v, v_min, v_max, format.as_deref(), flags)
}

macro_rules! drag_export {
    ($elem:ty; $($js:literal => $name:ident;)*) => {$(
        #[wasm_bindgen(js_name = $js)]
        pub fn $name(
            label: &str,
            mut v: JsValue,
            v_speed: f32,
            v_min: $elem,
            v_max: $elem,
            format: Option<String>,
            flags: i32,
        ) -> bool {
            imgui::$name(label, &mut v, v_speed, v_min, v_max, format.as_deref(), flags)
        }
    )*};
}

drag_export! { f32;
    "DragFloat" => drag_float;
    "DragFloat2" => drag_float2;
    "DragFloat3" => drag_float3;
    "DragFloat4" => drag_float4;
}

drag_export! { i32;
    "DragInt" => drag_int;
    "DragInt2" => drag_int2;
    "DragInt3" => drag_int3;
    "DragInt4" => drag_int4;
}

#[wasm_bindgen(js_name = "DragFloatRange2")]
#[allow(clippy::too_many_arguments)]
pub fn drag_float_range2(
    label: &str,
    mut v_current_min: JsValue,
    mut v_current_max: JsValue,
    v_speed: f32,
    v_min: f32,
    v_max: f32,
    format: Option<String>,
    format_max: Option<String>,
    flags: i32,
) -> bool {
    imgui::drag_float_range2(
        label,
        &mut v_current_min,
        &mut v_current_max,
        v_speed,
        v_min,
        v_max,
        format.as_deref(),
        format_max.as_deref(),
        flags,
    )
}

#[wasm_bindgen(js_name = "DragIntRange2")]
#[allow(clippy::too_many_arguments)]
pub fn drag_int_range2(
    label: &str,
    mut v_current_min: JsValue,
    mut v_current_max: JsValue,
    v_speed: f32,
    v_min: i32,
    v_max: i32,
    format: Option<String>,
    format_max: Option<String>,
    flags: i32,
) -> bool {
    imgui::drag_int_range2(
        label,
        &mut v_current_min,
        &mut v_current_max,
        v_speed,
        v_min,
        v_max,
        format.as_deref(),
        format_max.as_deref(),
        flags,
    )
}

// Inputs

#[wasm_bindgen(js_name = "InputFloat")]
pub fn input_float(
    label: &str,
    mut v: JsValue,
    step: f32,
    step_fast: f32,
    format: Option<String>,
    flags: i32,
) -> bool {
    imgui::input_float(label, &mut v, step, step_fast, format.as_deref(), flags)
}

macro_rules! input_float_n_export {
    ($($js:literal => $name:ident;)*) => {$(
        #[wasm_bindgen(js_name = $js)]
        pub fn $name(label: &str, mut v: JsValue, format: Option<String>, flags: i32) -> bool {
            imgui::$name(label, &mut v, format.as_deref(), flags)
        }
    )*};
}

input_float_n_export! {
    "InputFloat2" => input_float2;
    "InputFloat3" => input_float3;
    "InputFloat4" => input_float4;
}

#[wasm_bindgen(js_name = "InputInt")]
pub fn input_int(label: &str, mut v: JsValue, step: i32, step_fast: i32, flags: i32) -> bool {
    imgui::input_int(label, &mut v, step, step_fast, flags)
}

macro_rules! input_int_n_export {
    ($($js:literal => $name:ident;)*) => {$(
        #[wasm_bindgen(js_name = $js)]
        pub fn $name(label: &str, mut v: JsValue, flags: i32) -> bool {
            imgui::$name(label, &mut v, flags)
        }
    )*};
}

input_int_n_export! {
    "InputInt2" => input_int2;
    "InputInt3" => input_int3;
    "InputInt4" => input_int4;
}

#[wasm_bindgen(js_name = "InputDouble")]
pub fn input_double(
    label: &str,
    mut v: JsValue,
    step: f64,
    step_fast: f64,
    format: Option<String>,
    flags: i32,
) -> bool {
    imgui::input_double(label, &mut v, step, step_fast, format.as_deref(), flags)
}

// Colour editors

macro_rules! color_export {
    ($($js:literal => $name:ident;)*) => {$(
        #[wasm_bindgen(js_name = $js)]
        pub fn $name(label: &str, mut col: JsValue, flags: i32) -> bool {
            imgui::$name(label, &mut col, flags)
        }
    )*};
}

color_export! {
    "ColorEdit3" => color_edit3;
    "ColorEdit4" => color_edit4;
    "ColorPicker3" => color_picker3;
}

/// `ref_col` is `[r, g, b, a]` or omitted.
#[wasm_bindgen(js_name = "ColorPicker4")]
pub fn color_picker4(label: &str, mut col: JsValue, flags: i32, ref_col: Option<Vec<f32>>) -> bool {
    let ref_col = ref_col.map(|c| {
        let mut rgba = [0.0; 4];
        for (dst, src) in rgba.iter_mut().zip(c) {
            *dst = src;
        }
        rgba
    });
    imgui::color_picker4(label, &mut col, flags, ref_col)
}
