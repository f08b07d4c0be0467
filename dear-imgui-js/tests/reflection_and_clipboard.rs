use approx::assert_relative_eq;
use dear_imgui_js as imgui;
use dear_imgui_js::marshal::ReflectError;
use imgui::{FieldKind, FieldValue};
use serde_json::json;
use std::sync::{Mutex, OnceLock};

fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(())).lock().unwrap()
}

#[test]
fn io_fields_by_name() {
    let _guard = test_guard();
    let ctx = imgui::create_context().unwrap();

    imgui::set_io_field("DisplaySize", FieldValue::Vec2([640.0, 480.0])).unwrap();
    assert_eq!(
        imgui::get_io_field("DisplaySize"),
        Ok(FieldValue::Vec2([640.0, 480.0]))
    );

    imgui::set_io_field("ConfigFlags", FieldValue::I32(1)).unwrap();
    assert_eq!(imgui::get_io_field("ConfigFlags"), Ok(FieldValue::I32(1)));

    assert_eq!(
        imgui::set_io_field("DeltaTime", FieldValue::Bool(true)),
        Err(imgui::BindError::Reflect(ReflectError::KindMismatch {
            field: "DeltaTime",
            expected: FieldKind::F32,
            found: FieldKind::Bool,
        }))
    );
    assert!(matches!(
        imgui::get_io_field("NoSuchField"),
        Err(imgui::BindError::Reflect(ReflectError::UnknownField { .. }))
    ));

    unsafe { imgui::destroy_context(ctx) };
}

#[test]
fn io_snapshot_as_json() {
    let _guard = test_guard();
    let ctx = imgui::create_context().unwrap();
    let io = imgui::get_io().unwrap();

    let snapshot = unsafe { imgui::io_binder().snapshot_json(io.as_ptr()) }.unwrap();
    assert_eq!(snapshot["MouseDrawCursor"], json!(false));
    assert!(snapshot["DisplaySize"].is_object());

    unsafe { imgui::destroy_context(ctx) };
}

#[test]
fn style_fields_and_colors() {
    let _guard = test_guard();
    let ctx = imgui::create_context().unwrap();

    imgui::set_style_field("Alpha", FieldValue::F32(0.5)).unwrap();
    assert_eq!(imgui::get_style_field("Alpha"), Ok(FieldValue::F32(0.5)));

    let red = json!([1.0, 0.0, 0.0, 1.0]);
    assert_eq!(imgui::set_style_color(0, &red), Ok(true));
    assert_eq!(imgui::get_style_color(0), Ok(Some([1.0, 0.0, 0.0, 1.0])));
    assert_eq!(imgui::get_style_color(-1), Ok(None));

    let absent = serde_json::Value::Null;
    assert_eq!(imgui::set_style_color(0, &absent), Ok(false));

    imgui::style_colors_light(imgui::Handle::null());
    let text = imgui::get_style_color(0).unwrap().unwrap();
    assert_relative_eq!(text[3], 1.0);
    assert!(text[0] < 0.5, "light preset text should be dark, got {text:?}");

    unsafe { imgui::destroy_context(ctx) };
}

#[test]
fn style_color_input_is_left_alone() {
    let _guard = test_guard();
    let ctx = imgui::create_context().unwrap();

    // Short arrays are padded with zeros natively, never on the host side
    let short = json!([1.0, 0.5]);
    assert_eq!(imgui::set_style_color(2, &short), Ok(true));
    assert_eq!(imgui::get_style_color(2), Ok(Some([1.0, 0.5, 0.0, 0.0])));
    assert_eq!(short, json!([1.0, 0.5]));

    let precise = json!([0.1, 0.2, 0.3, 1.0, "tail"]);
    assert_eq!(imgui::set_style_color(3, &precise), Ok(true));
    assert_eq!(precise, json!([0.1, 0.2, 0.3, 1.0, "tail"]));

    unsafe { imgui::destroy_context(ctx) };
}

#[test]
fn clipboard_goes_through_backend() {
    let _guard = test_guard();
    let ctx = imgui::create_context().unwrap();

    imgui::set_clipboard_backend(imgui::MemoryClipboard::default()).unwrap();
    imgui::set_clipboard_text("copied node").unwrap();
    assert_eq!(
        imgui::get_clipboard_text().unwrap().as_deref(),
        Some("copied node")
    );

    unsafe { imgui::destroy_context(ctx) };
    assert_eq!(
        imgui::set_clipboard_backend(imgui::MemoryClipboard::default()),
        Err(imgui::BindError::NoCurrentContext)
    );
}
