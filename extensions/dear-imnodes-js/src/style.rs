//! `ImNodesStyle` and `ImNodesIO` access, colour presets and the style stacks
//!
//! Colours are packed `IM_COL32` values (`0xAABBGGRR`), as ImNodes stores them.

use dear_imgui_js::{BindResult, FieldValue, Handle, HostContainer};
use dear_imgui_js_marshal::field_table;
use dear_imgui_js_marshal::reflect::StructBinder;

use crate::context::require_context;
use crate::sys;

pub type NodesStyleHandle = Handle<sys::ImNodesStyle>;
pub type NodesIoHandle = Handle<sys::ImNodesIO>;

field_table! {
    pub fn style_fields() -> sys::ImNodesStyle {
        GridSpacing: F32,
        NodeCornerRounding: F32,
        NodePadding: Vec2,
        NodeBorderThickness: F32,
        LinkThickness: F32,
        LinkLineSegmentsPerLength: F32,
        LinkHoverDistance: F32,
        PinCircleRadius: F32,
        PinQuadSideLength: F32,
        PinTriangleSideLength: F32,
        PinLineThickness: F32,
        PinHoverRadius: F32,
        PinOffset: F32,
        MiniMapPadding: Vec2,
        MiniMapOffset: Vec2,
        Flags: I32,
    }
}

field_table! {
    pub fn io_fields() -> sys::ImNodesIO {
        AltMouseButton: I32,
        AutoPanningSpeed: F32,
    }
}

pub fn style_binder() -> StructBinder<sys::ImNodesStyle> {
    StructBinder::new("ImNodesStyle", style_fields())
}

pub fn io_binder() -> StructBinder<sys::ImNodesIO> {
    StructBinder::new("ImNodesIO", io_fields())
}

/// The current ImNodes style.
pub fn get_style() -> BindResult<NodesStyleHandle> {
    require_context()?;
    Ok(unsafe { Handle::from_ptr(sys::imnodes_GetStyle()) })
}

/// The current ImNodes IO settings.
pub fn get_io() -> BindResult<NodesIoHandle> {
    require_context()?;
    Ok(unsafe { Handle::from_ptr(sys::imnodes_GetIO()) })
}

/// Reads a field of the current ImNodes style.
pub fn get_style_field(name: &str) -> BindResult<FieldValue> {
    let style = get_style()?;
    Ok(unsafe { style_binder().get(style.as_ptr(), name) }?)
}

pub fn set_style_field(name: &str, value: FieldValue) -> BindResult<()> {
    let style = get_style()?;
    Ok(unsafe { style_binder().set(style.as_ptr(), name, value) }?)
}

pub fn get_io_field(name: &str) -> BindResult<FieldValue> {
    let io = get_io()?;
    Ok(unsafe { io_binder().get(io.as_ptr(), name) }?)
}

/// Writes a field of the current ImNodes IO.
pub fn set_io_field(name: &str, value: FieldValue) -> BindResult<()> {
    let io = get_io()?;
    Ok(unsafe { io_binder().set(io.as_ptr(), name, value) }?)
}

fn preset_target(dst: NodesStyleHandle) -> BindResult<*mut sys::ImNodesStyle> {
    if dst.is_null() {
        Ok(get_style()?.as_ptr())
    } else {
        Ok(dst.as_ptr())
    }
}

/// Applies a preset to `dst`, or to the current style when `dst` is null.
pub fn style_colors_dark(dst: NodesStyleHandle) -> BindResult<()> {
    let dst = preset_target(dst)?;
    unsafe { sys::imnodes_StyleColorsDark(dst) };
    Ok(())
}

pub fn style_colors_classic(dst: NodesStyleHandle) -> BindResult<()> {
    let dst = preset_target(dst)?;
    unsafe { sys::imnodes_StyleColorsClassic(dst) };
    Ok(())
}

pub fn style_colors_light(dst: NodesStyleHandle) -> BindResult<()> {
    let dst = preset_target(dst)?;
    unsafe { sys::imnodes_StyleColorsLight(dst) };
    Ok(())
}

/// `Colors[idx]` of the current style; `None` when out of range.
pub fn get_style_color(idx: i32) -> BindResult<Option<u32>> {
    let style = get_style()?;
    let colors = unsafe { &(*style.as_ptr()).Colors };
    Ok(usize::try_from(idx)
        .ok()
        .and_then(|idx| colors.get(idx).copied()))
}

/// Returns `false` for an out-of-range index.
pub fn set_style_color(idx: i32, color: u32) -> BindResult<bool> {
    let style = get_style()?;
    let colors = unsafe { &mut (*style.as_ptr()).Colors };
    match usize::try_from(idx).ok().and_then(|idx| colors.get_mut(idx)) {
        Some(slot) => {
            *slot = color;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// The whole colour table, indexed by `ImNodesCol`.
pub fn get_style_colors() -> BindResult<Vec<u32>> {
    let style = get_style()?;
    Ok(unsafe { (*style.as_ptr()).Colors.to_vec() })
}

/// Overwrites the colour table from a host array. Entries the array does not
/// hold, or holds as non-numbers, become 0 (transparent black).
pub fn set_style_colors<H: HostContainer + ?Sized>(colors: &H) -> BindResult<bool> {
    let style = get_style()?;
    if !colors.is_array_like() {
        return Ok(false);
    }
    let table = unsafe { &mut (*style.as_ptr()).Colors };
    for (index, slot) in table.iter_mut().enumerate() {
        *slot = colors.read(index).as_number().map_or(0, |n| n as u32);
    }
    Ok(true)
}

/// Overrides colour `item` (an `ImNodesCol`) until [`pop_color_style`].
pub fn push_color_style(item: i32, color: u32) {
    unsafe { sys::imnodes_PushColorStyle(item, color) }
}

pub fn pop_color_style() {
    unsafe { sys::imnodes_PopColorStyle() }
}

/// Overrides style variable `item` until [`pop_style_var`].
pub fn push_style_var(item: i32, value: f32) {
    unsafe { sys::imnodes_PushStyleVar_Float(item, value) }
}

pub fn push_style_var_vec2(item: i32, value: [f32; 2]) {
    unsafe {
        sys::imnodes_PushStyleVar_Vec2(
            item,
            sys::ImVec2_c {
                x: value[0],
                y: value[1],
            },
        )
    }
}

pub fn pop_style_var(count: i32) {
    unsafe { sys::imnodes_PopStyleVar(count) }
}

/// `flag` is an `ImNodesAttributeFlags` value applied to attributes
/// submitted until the matching pop.
pub fn push_attribute_flag(flag: i32) {
    unsafe { sys::imnodes_PushAttributeFlag(flag) }
}

pub fn pop_attribute_flag() {
    unsafe { sys::imnodes_PopAttributeFlag() }
}
