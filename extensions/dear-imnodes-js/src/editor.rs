//! Editor, node and attribute scopes, links, and node placement
//!
//! Scopes must be balanced exactly as in native code; an unbalanced `end_*`
//! trips an ImNodes assertion.

use std::ptr;

use dear_imgui_js::BindResult;

use crate::compat_ffi;
use crate::context::require_context;
use crate::sys;

/// Starts the node editor of the current editor context. Must be called
/// inside an ImGui window.
pub fn begin_node_editor() -> BindResult<()> {
    require_context()?;
    unsafe { sys::imnodes_BeginNodeEditor() };
    Ok(())
}

pub fn end_node_editor() {
    unsafe { sys::imnodes_EndNodeEditor() }
}

/// Draws the minimap in a corner of the editor. Call between
/// [`begin_node_editor`] and [`end_node_editor`].
pub fn mini_map(size_fraction: f32, location: i32) {
    unsafe {
        sys::imnodes_MiniMap(
            size_fraction,
            location as sys::ImNodesMiniMapLocation,
            None,
            ptr::null_mut(),
        )
    }
}

/// Starts node `id`; its contents are laid out until [`end_node`].
pub fn begin_node(id: i32) {
    unsafe { sys::imnodes_BeginNode(id) }
}

pub fn end_node() {
    unsafe { sys::imnodes_EndNode() }
}

pub fn begin_node_title_bar() {
    unsafe { sys::imnodes_BeginNodeTitleBar() }
}

pub fn end_node_title_bar() {
    unsafe { sys::imnodes_EndNodeTitleBar() }
}

/// `shape` is an `ImNodesPinShape` value.
pub fn begin_input_attribute(id: i32, shape: i32) {
    unsafe { sys::imnodes_BeginInputAttribute(id, shape as sys::ImNodesPinShape) }
}

pub fn end_input_attribute() {
    unsafe { sys::imnodes_EndInputAttribute() }
}

/// An output pin; `shape` is an `ImNodesPinShape`.
pub fn begin_output_attribute(id: i32, shape: i32) {
    unsafe { sys::imnodes_BeginOutputAttribute(id, shape as sys::ImNodesPinShape) }
}

pub fn end_output_attribute() {
    unsafe { sys::imnodes_EndOutputAttribute() }
}

/// A pin-less attribute, for widgets inside the node body.
pub fn begin_static_attribute(id: i32) {
    unsafe { sys::imnodes_BeginStaticAttribute(id) }
}

pub fn end_static_attribute() {
    unsafe { sys::imnodes_EndStaticAttribute() }
}

/// Draws link `id` between two attribute ids.
pub fn link(id: i32, start_attribute_id: i32, end_attribute_id: i32) {
    unsafe { sys::imnodes_Link(id, start_attribute_id, end_attribute_id) }
}

/// Whether the user may drag `node_id`.
pub fn set_node_draggable(node_id: i32, draggable: bool) -> BindResult<()> {
    require_context()?;
    unsafe { sys::imnodes_SetNodeDraggable(node_id, draggable) };
    Ok(())
}

fn vec2(pos: [f32; 2]) -> sys::ImVec2_c {
    sys::ImVec2_c {
        x: pos[0],
        y: pos[1],
    }
}

pub fn set_node_screen_space_pos(node_id: i32, pos: [f32; 2]) -> BindResult<()> {
    require_context()?;
    unsafe { sys::imnodes_SetNodeScreenSpacePos(node_id, vec2(pos)) };
    Ok(())
}

pub fn set_node_editor_space_pos(node_id: i32, pos: [f32; 2]) -> BindResult<()> {
    require_context()?;
    unsafe { sys::imnodes_SetNodeEditorSpacePos(node_id, vec2(pos)) };
    Ok(())
}

/// Places `node_id` in grid space, which ignores panning.
pub fn set_node_grid_space_pos(node_id: i32, pos: [f32; 2]) -> BindResult<()> {
    require_context()?;
    unsafe { sys::imnodes_SetNodeGridSpacePos(node_id, vec2(pos)) };
    Ok(())
}

/// Position of `node_id` in grid space.
pub fn get_node_grid_space_pos(node_id: i32) -> BindResult<[f32; 2]> {
    require_context()?;
    let out = unsafe { sys::imnodes_GetNodeGridSpacePos(node_id) };
    Ok([out.x, out.y])
}

pub fn get_node_screen_space_pos(node_id: i32) -> BindResult<[f32; 2]> {
    require_context()?;
    let out = unsafe { compat_ffi::imnodes_GetNodeScreenSpacePos(node_id) };
    Ok([out.x, out.y])
}

pub fn get_node_editor_space_pos(node_id: i32) -> BindResult<[f32; 2]> {
    require_context()?;
    let out = unsafe { compat_ffi::imnodes_GetNodeEditorSpacePos(node_id) };
    Ok([out.x, out.y])
}

/// Size of a node as laid out in the last frame; zero before it was drawn.
pub fn get_node_dimensions(node_id: i32) -> BindResult<[f32; 2]> {
    require_context()?;
    let out = unsafe { compat_ffi::imnodes_GetNodeDimensions(node_id) };
    Ok([out.x, out.y])
}

/// Moves `node_id` to the nearest grid point.
pub fn snap_node_to_grid(node_id: i32) -> BindResult<()> {
    require_context()?;
    unsafe { sys::imnodes_SnapNodeToGrid(node_id) };
    Ok(())
}
