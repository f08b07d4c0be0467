//! # dear-imgui-js
//!
//! Dear ImGui's C API, callable from a host whose only mutable
//! pass-by-reference primitive is an array.
//!
//! Every binding is a free function mirroring one native function. Pointer
//! arguments are generic over [`HostContainer`]: the web crate passes
//! `JsValue`s, native hosts and tests pass `serde_json::Value`s.
//!
//! ```no_run
//! use dear_imgui_js as imgui;
//! use serde_json::json;
//!
//! let ctx = imgui::create_context().unwrap();
//! imgui::setup_ini_settings().unwrap();
//! imgui::set_io_field("DisplaySize", imgui::FieldValue::Vec2([800.0, 600.0])).unwrap();
//!
//! let mut open = json!([true]);
//! let mut speed = json!([0.5]);
//! imgui::new_frame().unwrap();
//! if imgui::begin("Settings", &mut open, 0) {
//!     imgui::slider_float("speed", &mut speed, 0.0, 1.0, None, 0);
//! }
//! imgui::end();
//! imgui::render().unwrap();
//! // SAFETY: `ctx` and the handles taken from it are not used again.
//! unsafe { imgui::destroy_context(ctx) };
//! ```
//!
//! Native assertions (unbalanced `begin`/`end`, widgets outside a frame)
//! abort the process; they are not reported as errors.

#![deny(rust_2018_idioms)]

pub use dear_imgui_js_marshal as marshal;
pub use dear_imgui_js_marshal::reflect::{FieldKind, FieldValue};
pub use dear_imgui_js_marshal::{Handle, HostContainer, HostScalar};
pub use dear_imgui_sys as sys;

pub use self::clipboard::*;
pub use self::context::*;
pub use self::error::*;
pub use self::io::*;
pub use self::style::*;
pub use self::widget::*;
pub use self::window::*;

mod clipboard;
mod context;
mod error;
mod io;
pub mod logging;
mod style;
pub mod widget;
mod window;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
