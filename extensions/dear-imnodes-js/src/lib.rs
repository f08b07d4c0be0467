//! # dear-imnodes-js
//!
//! ImNodes node editor bindings on top of [`dear_imgui_js`]: the same
//! out-parameter marshalling, applied to ImNodes' hover, link and selection
//! queries.
//!
//! An ImNodes context must be created after the Dear ImGui context it draws
//! into; [`create_context`] binds the current ImGui context first.
//!
//! ```no_run
//! use dear_imgui_js as imgui;
//! use dear_imnodes_js as imnodes;
//! use serde_json::json;
//!
//! let ctx = imgui::create_context().unwrap();
//! let nodes = imnodes::create_context().unwrap();
//!
//! imgui::new_frame().unwrap();
//! let _ = imgui::begin("Graph", &mut serde_json::Value::Null, 0);
//! imnodes::begin_node_editor().unwrap();
//! imnodes::begin_node(1);
//! imnodes::begin_output_attribute(2, 0);
//! imgui::text("out");
//! imnodes::end_output_attribute();
//! imnodes::end_node();
//! imnodes::end_node_editor();
//!
//! let (mut start, mut end) = (json!([0]), json!([0]));
//! if imnodes::is_link_created(&mut start, &mut end, &mut serde_json::Value::Null) {
//!     println!("link {start} -> {end}");
//! }
//! imgui::end();
//! imgui::render().unwrap();
//!
//! // SAFETY: no handle from either context is used after this point.
//! unsafe {
//!     imnodes::destroy_context(nodes);
//!     imgui::destroy_context(ctx);
//! }
//! ```

#![deny(rust_2018_idioms)]

pub use dear_imnodes_sys as sys;

// Functions returning `ImVec2` by value, declared against `sys::ImVec2` so the
// return ABI matches the C shim.
#[allow(non_snake_case)]
pub(crate) mod compat_ffi {
    use super::sys;

    unsafe extern "C" {
        pub fn imnodes_EditorContextGetPanning() -> sys::ImVec2;
        pub fn imnodes_GetNodeScreenSpacePos(node_id: i32) -> sys::ImVec2;
        pub fn imnodes_GetNodeEditorSpacePos(node_id: i32) -> sys::ImVec2;
        pub fn imnodes_GetNodeDimensions(node_id: i32) -> sys::ImVec2;
    }
}

mod context;
mod editor;
mod ini;
mod query;
mod style;

pub use context::*;
pub use editor::*;
pub use ini::*;
pub use query::*;
pub use style::*;
