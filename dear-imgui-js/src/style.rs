//! `ImGuiStyle` field access, colour presets and the colour table

use dear_imgui_js_marshal::field_table;
use dear_imgui_js_marshal::reflect::{FieldValue, StructBinder};
use dear_imgui_js_marshal::{Element, HostContainer};

use crate::context::{StyleHandle, get_style};
use crate::error::BindResult;
use crate::sys;

field_table! {
    pub fn style_fields() -> sys::ImGuiStyle {
        Alpha: F32,
        DisabledAlpha: F32,
        WindowPadding: Vec2,
        WindowRounding: F32,
        WindowBorderSize: F32,
        WindowMinSize: Vec2,
        WindowTitleAlign: Vec2,
        WindowMenuButtonPosition: I32,
        ChildRounding: F32,
        ChildBorderSize: F32,
        PopupRounding: F32,
        PopupBorderSize: F32,
        FramePadding: Vec2,
        FrameRounding: F32,
        FrameBorderSize: F32,
        ItemSpacing: Vec2,
        ItemInnerSpacing: Vec2,
        CellPadding: Vec2,
        TouchExtraPadding: Vec2,
        IndentSpacing: F32,
        ColumnsMinSpacing: F32,
        ScrollbarSize: F32,
        ScrollbarRounding: F32,
        GrabMinSize: F32,
        GrabRounding: F32,
        LogSliderDeadzone: F32,
        TabRounding: F32,
        TabBorderSize: F32,
        ColorButtonPosition: I32,
        ButtonTextAlign: Vec2,
        SelectableTextAlign: Vec2,
        DisplayWindowPadding: Vec2,
        DisplaySafeAreaPadding: Vec2,
        MouseCursorScale: F32,
        AntiAliasedLines: Bool,
        AntiAliasedLinesUseTex: Bool,
        AntiAliasedFill: Bool,
        CurveTessellationTol: F32,
        CircleTessellationMaxError: F32,
    }
}

/// Name-based access to `ImGuiStyle`, backed by [`style_fields`].
pub fn style_binder() -> StructBinder<sys::ImGuiStyle> {
    StructBinder::new("ImGuiStyle", style_fields())
}

/// Reads a field of the current style.
pub fn get_style_field(name: &str) -> BindResult<FieldValue> {
    let style = get_style()?;
    Ok(unsafe { style_binder().get(style.as_ptr(), name) }?)
}

/// Writes a field of the current style.
pub fn set_style_field(name: &str, value: FieldValue) -> BindResult<()> {
    let style = get_style()?;
    Ok(unsafe { style_binder().set(style.as_ptr(), name, value) }?)
}

/// Applies a preset to `dst`, or to the current style when `dst` is null.
pub fn style_colors_dark(dst: StyleHandle) {
    unsafe { sys::igStyleColorsDark(dst.as_ptr()) }
}

/// Light preset; `dst` as for [`style_colors_dark`].
pub fn style_colors_light(dst: StyleHandle) {
    unsafe { sys::igStyleColorsLight(dst.as_ptr()) }
}

/// Classic preset; `dst` as for [`style_colors_dark`].
pub fn style_colors_classic(dst: StyleHandle) {
    unsafe { sys::igStyleColorsClassic(dst.as_ptr()) }
}

fn color_index(idx: i32) -> Option<usize> {
    usize::try_from(idx)
        .ok()
        .filter(|&idx| idx < sys::ImGuiCol_COUNT as usize)
}

/// `Colors[idx]` of the current style as RGBA; `None` when out of range.
pub fn get_style_color(idx: i32) -> BindResult<Option<[f32; 4]>> {
    let style = get_style()?;
    Ok(color_index(idx).map(|idx| {
        let col = unsafe { (*style.as_ptr()).Colors[idx] };
        [col.x, col.y, col.z, col.w]
    }))
}

/// Copies the first four elements of `col` into `Colors[idx]`; missing
/// components are 0 and `col` itself is only read. Returns `false` for an
/// out-of-range index or an absent container.
pub fn set_style_color<H: HostContainer + ?Sized>(idx: i32, col: &H) -> BindResult<bool> {
    let style = get_style()?;
    let Some(idx) = color_index(idx) else {
        return Ok(false);
    };
    if !col.is_array_like() {
        return Ok(false);
    }
    let [x, y, z, w] = std::array::from_fn(|i| f32::from_host(col.read(i)));
    unsafe { (*style.as_ptr()).Colors[idx] = sys::ImVec4 { x, y, z, w } };
    Ok(true)
}
