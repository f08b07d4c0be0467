//! ImNodes exports, prefixed `ImNodes_`

use dear_imnodes_js as imnodes;
use wasm_bindgen::prelude::*;

use crate::{handle, reflect_err, vec2};

#[wasm_bindgen(js_name = "ImNodes_CreateContext")]
pub fn create_context() -> Result<usize, JsValue> {
    Ok(imnodes::create_context()?.addr())
}

#[wasm_bindgen(js_name = "ImNodes_DestroyContext")]
pub fn destroy_context(ctx: usize) {
    // SAFETY: JS drops the handle along with the context.
    unsafe { imnodes::destroy_context(handle(ctx)) }
}

#[wasm_bindgen(js_name = "ImNodes_GetCurrentContext")]
pub fn get_current_context() -> usize {
    imnodes::get_current_context().addr()
}

#[wasm_bindgen(js_name = "ImNodes_SetCurrentContext")]
pub fn set_current_context(ctx: usize) {
    imnodes::set_current_context(handle(ctx))
}

#[wasm_bindgen(js_name = "ImNodes_SetImGuiContext")]
pub fn set_imgui_context(ctx: usize) {
    imnodes::set_imgui_context(handle(ctx))
}

#[wasm_bindgen(js_name = "ImNodes_EditorContextCreate")]
pub fn editor_context_create() -> Result<usize, JsValue> {
    Ok(imnodes::editor_context_create()?.addr())
}

#[wasm_bindgen(js_name = "ImNodes_EditorContextFree")]
pub fn editor_context_free(editor: usize) {
    // SAFETY: JS drops the handle along with the editor.
    unsafe { imnodes::editor_context_free(handle(editor)) }
}

#[wasm_bindgen(js_name = "ImNodes_EditorContextSet")]
pub fn editor_context_set(editor: usize) -> Result<(), JsValue> {
    Ok(imnodes::editor_context_set(handle(editor))?)
}

#[wasm_bindgen(js_name = "ImNodes_EditorContextGetPanning")]
pub fn editor_context_get_panning() -> Result<Vec<f32>, JsValue> {
    Ok(imnodes::editor_context_get_panning()?.to_vec())
}

#[wasm_bindgen(js_name = "ImNodes_EditorContextResetPanning")]
pub fn editor_context_reset_panning(pos: &[f32]) -> Result<(), JsValue> {
    Ok(imnodes::editor_context_reset_panning(vec2(pos))?)
}

#[wasm_bindgen(js_name = "ImNodes_EditorContextMoveToNode")]
pub fn editor_context_move_to_node(node_id: i32) -> Result<(), JsValue> {
    Ok(imnodes::editor_context_move_to_node(node_id)?)
}

// Scopes

#[wasm_bindgen(js_name = "ImNodes_BeginNodeEditor")]
pub fn begin_node_editor() -> Result<(), JsValue> {
    Ok(imnodes::begin_node_editor()?)
}

#[wasm_bindgen(js_name = "ImNodes_EndNodeEditor")]
pub fn end_node_editor() {
    imnodes::end_node_editor()
}

#[wasm_bindgen(js_name = "ImNodes_MiniMap")]
pub fn mini_map(size_fraction: f32, location: i32) {
    imnodes::mini_map(size_fraction, location)
}

#[wasm_bindgen(js_name = "ImNodes_BeginNode")]
pub fn begin_node(id: i32) {
    imnodes::begin_node(id)
}

#[wasm_bindgen(js_name = "ImNodes_EndNode")]
pub fn end_node() {
    imnodes::end_node()
}

#[wasm_bindgen(js_name = "ImNodes_BeginNodeTitleBar")]
pub fn begin_node_title_bar() {
    imnodes::begin_node_title_bar()
}

#[wasm_bindgen(js_name = "ImNodes_EndNodeTitleBar")]
pub fn end_node_title_bar() {
    imnodes::end_node_title_bar()
}

#[wasm_bindgen(js_name = "ImNodes_BeginInputAttribute")]
pub fn begin_input_attribute(id: i32, shape: i32) {
    imnodes::begin_input_attribute(id, shape)
}

#[wasm_bindgen(js_name = "ImNodes_EndInputAttribute")]
pub fn end_input_attribute() {
    imnodes::end_input_attribute()
}

#[wasm_bindgen(js_name = "ImNodes_BeginOutputAttribute")]
pub fn begin_output_attribute(id: i32, shape: i32) {
    imnodes::begin_output_attribute(id, shape)
}

#[wasm_bindgen(js_name = "ImNodes_EndOutputAttribute")]
pub fn end_output_attribute() {
    imnodes::end_output_attribute()
}

#[wasm_bindgen(js_name = "ImNodes_BeginStaticAttribute")]
pub fn begin_static_attribute(id: i32) {
    imnodes::begin_static_attribute(id)
}

#[wasm_bindgen(js_name = "ImNodes_EndStaticAttribute")]
pub fn end_static_attribute() {
    imnodes::end_static_attribute()
}

#[wasm_bindgen(js_name = "ImNodes_Link")]
pub fn link(id: i32, start_attribute_id: i32, end_attribute_id: i32) {
    imnodes::link(id, start_attribute_id, end_attribute_id)
}

// Node placement

#[wasm_bindgen(js_name = "ImNodes_SetNodeDraggable")]
pub fn set_node_draggable(node_id: i32, draggable: bool) -> Result<(), JsValue> {
    Ok(imnodes::set_node_draggable(node_id, draggable)?)
}

#[wasm_bindgen(js_name = "ImNodes_SetNodeScreenSpacePos")]
pub fn set_node_screen_space_pos(node_id: i32, pos: &[f32]) -> Result<(), JsValue> {
    Ok(imnodes::set_node_screen_space_pos(node_id, vec2(pos))?)
}

#[wasm_bindgen(js_name = "ImNodes_SetNodeEditorSpacePos")]
pub fn set_node_editor_space_pos(node_id: i32, pos: &[f32]) -> Result<(), JsValue> {
    Ok(imnodes::set_node_editor_space_pos(node_id, vec2(pos))?)
}

#[wasm_bindgen(js_name = "ImNodes_SetNodeGridSpacePos")]
pub fn set_node_grid_space_pos(node_id: i32, pos: &[f32]) -> Result<(), JsValue> {
    Ok(imnodes::set_node_grid_space_pos(node_id, vec2(pos))?)
}

#[wasm_bindgen(js_name = "ImNodes_GetNodeScreenSpacePos")]
pub fn get_node_screen_space_pos(node_id: i32) -> Result<Vec<f32>, JsValue> {
    Ok(imnodes::get_node_screen_space_pos(node_id)?.to_vec())
}

#[wasm_bindgen(js_name = "ImNodes_GetNodeEditorSpacePos")]
pub fn get_node_editor_space_pos(node_id: i32) -> Result<Vec<f32>, JsValue> {
    Ok(imnodes::get_node_editor_space_pos(node_id)?.to_vec())
}

#[wasm_bindgen(js_name = "ImNodes_GetNodeGridSpacePos")]
pub fn get_node_grid_space_pos(node_id: i32) -> Result<Vec<f32>, JsValue> {
    Ok(imnodes::get_node_grid_space_pos(node_id)?.to_vec())
}

#[wasm_bindgen(js_name = "ImNodes_GetNodeDimensions")]
pub fn get_node_dimensions(node_id: i32) -> Result<Vec<f32>, JsValue> {
    Ok(imnodes::get_node_dimensions(node_id)?.to_vec())
}

#[wasm_bindgen(js_name = "ImNodes_SnapNodeToGrid")]
pub fn snap_node_to_grid(node_id: i32) -> Result<(), JsValue> {
    Ok(imnodes::snap_node_to_grid(node_id)?)
}

// Queries

#[wasm_bindgen(js_name = "ImNodes_IsEditorHovered")]
pub fn is_editor_hovered() -> bool {
    imnodes::is_editor_hovered()
}

#[wasm_bindgen(js_name = "ImNodes_IsNodeHovered")]
pub fn is_node_hovered(mut node_id: JsValue) -> bool {
    imnodes::is_node_hovered(&mut node_id)
}

#[wasm_bindgen(js_name = "ImNodes_IsLinkHovered")]
pub fn is_link_hovered(mut link_id: JsValue) -> bool {
    imnodes::is_link_hovered(&mut link_id)
}

#[wasm_bindgen(js_name = "ImNodes_IsPinHovered")]
pub fn is_pin_hovered(mut attribute_id: JsValue) -> bool {
    imnodes::is_pin_hovered(&mut attribute_id)
}

#[wasm_bindgen(js_name = "ImNodes_IsAttributeActive")]
pub fn is_attribute_active() -> bool {
    imnodes::is_attribute_active()
}

#[wasm_bindgen(js_name = "ImNodes_IsAnyAttributeActive")]
pub fn is_any_attribute_active(mut attribute_id: JsValue) -> bool {
    imnodes::is_any_attribute_active(&mut attribute_id)
}

#[wasm_bindgen(js_name = "ImNodes_IsLinkStarted")]
pub fn is_link_started(mut started_at_attribute_id: JsValue) -> bool {
    imnodes::is_link_started(&mut started_at_attribute_id)
}

#[wasm_bindgen(js_name = "ImNodes_IsLinkDropped")]
pub fn is_link_dropped(mut started_at_attribute_id: JsValue, including_detached_links: bool) -> bool {
    imnodes::is_link_dropped(&mut started_at_attribute_id, including_detached_links)
}

#[wasm_bindgen(js_name = "ImNodes_IsLinkCreated")]
pub fn is_link_created(
    mut started_at_attribute_id: JsValue,
    mut ended_at_attribute_id: JsValue,
    mut created_from_snap: JsValue,
) -> bool {
    imnodes::is_link_created(
        &mut started_at_attribute_id,
        &mut ended_at_attribute_id,
        &mut created_from_snap,
    )
}

#[wasm_bindgen(js_name = "ImNodes_IsLinkCreatedEx")]
pub fn is_link_created_ex(
    mut started_at_node_id: JsValue,
    mut started_at_attribute_id: JsValue,
    mut ended_at_node_id: JsValue,
    mut ended_at_attribute_id: JsValue,
    mut created_from_snap: JsValue,
) -> bool {
    imnodes::is_link_created_ex(
        &mut started_at_node_id,
        &mut started_at_attribute_id,
        &mut ended_at_node_id,
        &mut ended_at_attribute_id,
        &mut created_from_snap,
    )
}

#[wasm_bindgen(js_name = "ImNodes_IsLinkDestroyed")]
pub fn is_link_destroyed(mut link_id: JsValue) -> bool {
    imnodes::is_link_destroyed(&mut link_id)
}

// Selection

#[wasm_bindgen(js_name = "ImNodes_NumSelectedNodes")]
pub fn num_selected_nodes() -> Result<i32, JsValue> {
    Ok(imnodes::num_selected_nodes()?)
}

#[wasm_bindgen(js_name = "ImNodes_NumSelectedLinks")]
pub fn num_selected_links() -> Result<i32, JsValue> {
    Ok(imnodes::num_selected_links()?)
}

/// Resizes `node_ids` to the number of selected nodes and fills it.
#[wasm_bindgen(js_name = "ImNodes_GetSelectedNodes")]
pub fn get_selected_nodes(mut node_ids: JsValue) -> Result<(), JsValue> {
    Ok(imnodes::get_selected_nodes(&mut node_ids)?)
}

#[wasm_bindgen(js_name = "ImNodes_GetSelectedLinks")]
pub fn get_selected_links(mut link_ids: JsValue) -> Result<(), JsValue> {
    Ok(imnodes::get_selected_links(&mut link_ids)?)
}

#[wasm_bindgen(js_name = "ImNodes_SelectNode")]
pub fn select_node(node_id: i32) -> Result<(), JsValue> {
    Ok(imnodes::select_node(node_id)?)
}

#[wasm_bindgen(js_name = "ImNodes_SelectLink")]
pub fn select_link(link_id: i32) -> Result<(), JsValue> {
    Ok(imnodes::select_link(link_id)?)
}

#[wasm_bindgen(js_name = "ImNodes_ClearNodeSelection")]
pub fn clear_node_selection() -> Result<(), JsValue> {
    Ok(imnodes::clear_node_selection()?)
}

#[wasm_bindgen(js_name = "ImNodes_ClearNodeSelectionID")]
pub fn clear_node_selection_id(node_id: i32) -> Result<(), JsValue> {
    Ok(imnodes::clear_node_selection_id(node_id)?)
}

#[wasm_bindgen(js_name = "ImNodes_ClearLinkSelection")]
pub fn clear_link_selection() -> Result<(), JsValue> {
    Ok(imnodes::clear_link_selection()?)
}

#[wasm_bindgen(js_name = "ImNodes_ClearLinkSelectionID")]
pub fn clear_link_selection_id(link_id: i32) -> Result<(), JsValue> {
    Ok(imnodes::clear_link_selection_id(link_id)?)
}

#[wasm_bindgen(js_name = "ImNodes_IsNodeSelected")]
pub fn is_node_selected(node_id: i32) -> Result<bool, JsValue> {
    Ok(imnodes::is_node_selected(node_id)?)
}

#[wasm_bindgen(js_name = "ImNodes_IsLinkSelected")]
pub fn is_link_selected(link_id: i32) -> Result<bool, JsValue> {
    Ok(imnodes::is_link_selected(link_id)?)
}

// Style and IO

#[wasm_bindgen(js_name = "ImNodes_GetStyle")]
pub fn get_style() -> Result<usize, JsValue> {
    Ok(imnodes::get_style()?.addr())
}

#[wasm_bindgen(js_name = "ImNodes_GetIO")]
pub fn get_io() -> Result<usize, JsValue> {
    Ok(imnodes::get_io()?.addr())
}

#[wasm_bindgen(js_name = "ImNodes_GetStyleField")]
pub fn get_style_field(name: &str) -> Result<JsValue, JsValue> {
    let style = imnodes::get_style()?;
    unsafe { imnodes::style_binder().get_js(style.as_ptr(), name) }.map_err(reflect_err)
}

#[wasm_bindgen(js_name = "ImNodes_SetStyleField")]
pub fn set_style_field(name: &str, value: JsValue) -> Result<(), JsValue> {
    let style = imnodes::get_style()?;
    unsafe { imnodes::style_binder().set_js(style.as_ptr(), name, &value) }.map_err(reflect_err)
}

#[wasm_bindgen(js_name = "ImNodes_GetIOField")]
pub fn get_io_field(name: &str) -> Result<JsValue, JsValue> {
    let io = imnodes::get_io()?;
    unsafe { imnodes::io_binder().get_js(io.as_ptr(), name) }.map_err(reflect_err)
}

#[wasm_bindgen(js_name = "ImNodes_SetIOField")]
pub fn set_io_field(name: &str, value: JsValue) -> Result<(), JsValue> {
    let io = imnodes::get_io()?;
    unsafe { imnodes::io_binder().set_js(io.as_ptr(), name, &value) }.map_err(reflect_err)
}

#[wasm_bindgen(js_name = "ImNodes_GetStyleColors")]
pub fn get_style_colors() -> Result<Vec<u32>, JsValue> {
    Ok(imnodes::get_style_colors()?)
}

#[wasm_bindgen(js_name = "ImNodes_SetStyleColors")]
pub fn set_style_colors(colors: JsValue) -> Result<bool, JsValue> {
    Ok(imnodes::set_style_colors(&colors)?)
}

#[wasm_bindgen(js_name = "ImNodes_StyleColorsDark")]
pub fn style_colors_dark(dst: usize) -> Result<(), JsValue> {
    Ok(imnodes::style_colors_dark(handle(dst))?)
}

#[wasm_bindgen(js_name = "ImNodes_StyleColorsClassic")]
pub fn style_colors_classic(dst: usize) -> Result<(), JsValue> {
    Ok(imnodes::style_colors_classic(handle(dst))?)
}

#[wasm_bindgen(js_name = "ImNodes_StyleColorsLight")]
pub fn style_colors_light(dst: usize) -> Result<(), JsValue> {
    Ok(imnodes::style_colors_light(handle(dst))?)
}

#[wasm_bindgen(js_name = "ImNodes_PushColorStyle")]
pub fn push_color_style(item: i32, color: u32) {
    imnodes::push_color_style(item, color)
}

#[wasm_bindgen(js_name = "ImNodes_PopColorStyle")]
pub fn pop_color_style() {
    imnodes::pop_color_style()
}

#[wasm_bindgen(js_name = "ImNodes_PushStyleVar")]
pub fn push_style_var(item: i32, value: f32) {
    imnodes::push_style_var(item, value)
}

#[wasm_bindgen(js_name = "ImNodes_PushStyleVarImVec2")]
pub fn push_style_var_vec2(item: i32, value: &[f32]) {
    imnodes::push_style_var_vec2(item, vec2(value))
}

#[wasm_bindgen(js_name = "ImNodes_PopStyleVar")]
pub fn pop_style_var(count: i32) {
    imnodes::pop_style_var(count)
}

#[wasm_bindgen(js_name = "ImNodes_PushAttributeFlag")]
pub fn push_attribute_flag(flag: i32) {
    imnodes::push_attribute_flag(flag)
}

#[wasm_bindgen(js_name = "ImNodes_PopAttributeFlag")]
pub fn pop_attribute_flag() {
    imnodes::pop_attribute_flag()
}

// Ini state

#[wasm_bindgen(js_name = "ImNodes_SaveCurrentEditorStateToIniString")]
pub fn save_current_editor_state_to_ini_string() -> Result<String, JsValue> {
    Ok(imnodes::save_current_editor_state_to_ini_string()?)
}

#[wasm_bindgen(js_name = "ImNodes_LoadCurrentEditorStateFromIniString")]
pub fn load_current_editor_state_from_ini_string(data: &str) -> Result<(), JsValue> {
    Ok(imnodes::load_current_editor_state_from_ini_string(data)?)
}

#[wasm_bindgen(js_name = "ImNodes_SaveEditorStateToIniString")]
pub fn save_editor_state_to_ini_string(editor: usize) -> Result<String, JsValue> {
    Ok(imnodes::save_editor_state_to_ini_string(handle(editor))?)
}

#[wasm_bindgen(js_name = "ImNodes_LoadEditorStateFromIniString")]
pub fn load_editor_state_from_ini_string(editor: usize, data: &str) -> Result<(), JsValue> {
    Ok(imnodes::load_editor_state_from_ini_string(handle(editor), data)?)
}
