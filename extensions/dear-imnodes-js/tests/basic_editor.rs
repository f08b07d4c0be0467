use dear_imgui_js as imgui;
use dear_imnodes_js as imnodes;
use imgui::FieldValue;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::{Mutex, OnceLock};

fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct Contexts {
    imgui: imgui::ContextHandle,
    nodes: imnodes::NodesContextHandle,
}

impl Contexts {
    fn create() -> Self {
        let imgui = imgui::create_context().unwrap();
        imgui::setup_ini_settings().unwrap();
        imgui::set_io_field("DisplaySize", FieldValue::Vec2([800.0, 600.0])).unwrap();
        imgui::set_io_field("DeltaTime", FieldValue::F32(1.0 / 60.0)).unwrap();
        let nodes = imnodes::create_context().unwrap();
        Self { imgui, nodes }
    }
}

impl Drop for Contexts {
    fn drop(&mut self) {
        unsafe { imnodes::destroy_context(self.nodes) };
        unsafe { imgui::destroy_context(self.imgui) };
    }
}

/// Two nodes joined by one link, plus a minimap.
fn draw_graph() {
    imnodes::begin_node_editor().unwrap();
    for (node, input, output) in [(1, 10, 11), (2, 20, 21)] {
        imnodes::begin_node(node);
        imnodes::begin_node_title_bar();
        imgui::text("node");
        imnodes::end_node_title_bar();
        imnodes::begin_input_attribute(input, 0);
        imgui::text("in");
        imnodes::end_input_attribute();
        imnodes::begin_static_attribute(input + 5);
        imgui::text("static");
        imnodes::end_static_attribute();
        imnodes::begin_output_attribute(output, 0);
        imgui::text("out");
        imnodes::end_output_attribute();
        imnodes::end_node();
    }
    imnodes::link(100, 11, 20);
    imnodes::mini_map(0.2, 3);
    imnodes::end_node_editor();
}

/// Runs `f` after the graph, inside the same window and frame.
fn graph_frame(f: impl FnOnce()) {
    imgui::new_frame().unwrap();
    let _ = imgui::begin("Graph", &mut Value::Null, 0);
    draw_graph();
    f();
    imgui::end();
    imgui::render().unwrap();
}

#[test]
fn idle_queries_leave_containers_untouched() {
    let _guard = test_guard();
    let _ctx = Contexts::create();

    let mut hovered_node = json!([-1]);
    let mut hovered_link = json!([-1]);
    let mut hovered_pin = json!([-1]);
    let mut active = json!([-1]);
    let mut started = json!([-1]);
    let mut dropped = json!([-1]);
    let (mut start, mut end, mut snap) = (json!([-1]), json!([-1]), json!([true]));
    let mut destroyed = json!([-1]);
    let mut ex = [json!([-1]), json!([-1]), json!([-1]), json!([-1])];

    graph_frame(|| {
        assert!(!imnodes::is_editor_hovered());
        assert!(!imnodes::is_node_hovered(&mut hovered_node));
        assert!(!imnodes::is_link_hovered(&mut hovered_link));
        assert!(!imnodes::is_pin_hovered(&mut hovered_pin));
        assert!(!imnodes::is_any_attribute_active(&mut active));
        assert!(!imnodes::is_link_started(&mut started));
        assert!(!imnodes::is_link_dropped(&mut dropped, true));
        assert!(!imnodes::is_link_created(&mut start, &mut end, &mut snap));
        assert!(!imnodes::is_link_created(&mut start, &mut end, &mut Value::Null));
        let [a, b, c, d] = &mut ex;
        assert!(!imnodes::is_link_created_ex(a, b, c, d, &mut Value::Null));
        assert!(!imnodes::is_link_destroyed(&mut destroyed));
    });

    for container in [
        &hovered_node,
        &hovered_link,
        &hovered_pin,
        &active,
        &started,
        &dropped,
        &start,
        &end,
        &destroyed,
    ] {
        assert_eq!(container, &json!([-1]));
    }
    assert_eq!(snap, json!([true]));
    assert_eq!(ex, [json!([-1]), json!([-1]), json!([-1]), json!([-1])]);
}

#[test]
fn selection_resizes_host_arrays() {
    let _guard = test_guard();
    let _ctx = Contexts::create();
    graph_frame(|| {});

    let mut nodes = json!([7, 7, 7]);
    imnodes::get_selected_nodes(&mut nodes).unwrap();
    assert_eq!(nodes, json!([]));

    imnodes::select_node(1).unwrap();
    imnodes::select_link(100).unwrap();
    assert_eq!(imnodes::num_selected_nodes(), Ok(1));
    assert_eq!(imnodes::is_node_selected(1), Ok(true));
    assert_eq!(imnodes::is_node_selected(2), Ok(false));
    assert_eq!(imnodes::is_link_selected(100), Ok(true));

    imnodes::get_selected_nodes(&mut nodes).unwrap();
    assert_eq!(nodes, json!([1]));
    let mut links = json!([]);
    imnodes::get_selected_links(&mut links).unwrap();
    assert_eq!(links, json!([100]));

    let mut absent = Value::Null;
    imnodes::get_selected_nodes(&mut absent).unwrap();
    assert_eq!(absent, Value::Null);

    imnodes::clear_node_selection_id(1).unwrap();
    imnodes::clear_link_selection().unwrap();
    assert_eq!(imnodes::num_selected_nodes(), Ok(0));
    assert_eq!(imnodes::num_selected_links(), Ok(0));
    imnodes::get_selected_nodes(&mut nodes).unwrap();
    assert_eq!(nodes, json!([]));
}

#[test]
fn node_positions_and_dimensions() {
    let _guard = test_guard();
    let _ctx = Contexts::create();

    imnodes::set_node_grid_space_pos(1, [40.0, 80.0]).unwrap();
    assert_eq!(imnodes::get_node_grid_space_pos(1), Ok([40.0, 80.0]));
    imnodes::set_node_draggable(1, false).unwrap();

    graph_frame(|| {});
    let [w, h] = imnodes::get_node_dimensions(1).unwrap();
    assert!(w > 0.0 && h > 0.0, "node 1 should have been laid out, got {w}x{h}");
    assert_eq!(imnodes::get_node_grid_space_pos(1), Ok([40.0, 80.0]));

    imnodes::editor_context_reset_panning([16.0, 32.0]).unwrap();
    assert_eq!(imnodes::editor_context_get_panning(), Ok([16.0, 32.0]));
}

#[test]
fn editor_state_round_trips_through_ini() {
    let _guard = test_guard();
    let _ctx = Contexts::create();

    imnodes::set_node_grid_space_pos(1, [40.0, 80.0]).unwrap();
    imnodes::editor_context_reset_panning([16.0, 32.0]).unwrap();
    let saved = imnodes::save_current_editor_state_to_ini_string().unwrap();
    assert!(saved.contains("[node.1]"), "missing node section in {saved:?}");
    assert!(saved.contains("origin=40,80"), "missing origin in {saved:?}");

    let editor = imnodes::editor_context_create().unwrap();
    imnodes::load_editor_state_from_ini_string(editor, &saved).unwrap();
    assert_eq!(imnodes::save_editor_state_to_ini_string(editor), Ok(saved.clone()));

    imnodes::editor_context_set(editor).unwrap();
    assert_eq!(imnodes::get_node_grid_space_pos(1), Ok([40.0, 80.0]));
    assert_eq!(imnodes::editor_context_get_panning(), Ok([16.0, 32.0]));

    imnodes::load_current_editor_state_from_ini_string("").unwrap();
    unsafe { imnodes::editor_context_free(editor) };
}

#[test]
fn style_and_io_fields() {
    let _guard = test_guard();
    let _ctx = Contexts::create();

    imnodes::set_style_field("GridSpacing", FieldValue::F32(24.0)).unwrap();
    assert_eq!(imnodes::get_style_field("GridSpacing"), Ok(FieldValue::F32(24.0)));
    imnodes::set_style_field("NodePadding", FieldValue::Vec2([4.0, 2.0])).unwrap();
    assert_eq!(imnodes::get_style_field("NodePadding"), Ok(FieldValue::Vec2([4.0, 2.0])));

    imnodes::set_io_field("AutoPanningSpeed", FieldValue::F32(500.0)).unwrap();
    assert_eq!(imnodes::get_io_field("AutoPanningSpeed"), Ok(FieldValue::F32(500.0)));
    assert_eq!(imnodes::get_io_field("AltMouseButton").unwrap().kind(), imgui::FieldKind::I32);

    assert_eq!(imnodes::set_style_color(0, 0xFF00_FF00), Ok(true));
    assert_eq!(imnodes::get_style_color(0), Ok(Some(0xFF00_FF00)));
    assert_eq!(imnodes::get_style_color(-1), Ok(None));
    assert_eq!(imnodes::set_style_color(10_000, 0), Ok(false));

    assert_eq!(imnodes::set_style_colors(&json!([1, 2])), Ok(true));
    let colors = imnodes::get_style_colors().unwrap();
    assert_eq!(&colors[..3], &[1, 2, 0]);
    assert_eq!(imnodes::set_style_colors(&Value::Null), Ok(false));

    imnodes::style_colors_dark(imgui::Handle::null()).unwrap();
    let dark = imnodes::get_style_colors().unwrap();
    imnodes::style_colors_light(imgui::Handle::null()).unwrap();
    assert_ne!(imnodes::get_style_colors().unwrap(), dark);
}

#[test]
fn style_stacks_balance_within_a_frame() {
    let _guard = test_guard();
    let _ctx = Contexts::create();

    imgui::new_frame().unwrap();
    let _ = imgui::begin("Graph", &mut Value::Null, 0);
    imnodes::push_color_style(0, 0xFF00_00FF);
    imnodes::push_style_var(0, 32.0);
    imnodes::push_style_var_vec2(2, [8.0, 8.0]);
    imnodes::push_attribute_flag(1);
    draw_graph();
    imnodes::pop_attribute_flag();
    imnodes::pop_style_var(2);
    imnodes::pop_color_style();
    imgui::end();
    imgui::render().unwrap();

    assert_ne!(imnodes::get_style_field("GridSpacing"), Ok(FieldValue::F32(32.0)));
}

#[test]
fn calls_need_an_imnodes_context() {
    let _guard = test_guard();

    assert_eq!(imnodes::create_context(), Err(imgui::BindError::NoCurrentContext));

    let ctx = imgui::create_context().unwrap();
    assert!(imnodes::get_current_context().is_null());
    let missing = Err(imgui::BindError::NoExtensionContext { extension: "ImNodes" });
    assert_eq!(imnodes::num_selected_nodes(), missing);
    assert_eq!(imnodes::get_style_field("GridSpacing").map(|_| 0), missing);
    assert_eq!(imnodes::begin_node_editor().map(|_| 0), missing);

    let first = imnodes::create_context().unwrap();
    let second = imnodes::create_context().unwrap();
    assert_eq!(imnodes::get_current_context(), first);
    imnodes::set_current_context(second);
    assert_eq!(imnodes::get_current_context(), second);

    unsafe { imnodes::destroy_context(imgui::Handle::null()) };
    assert!(imnodes::get_current_context().is_null());
    unsafe { imnodes::destroy_context(first) };
    unsafe { imgui::destroy_context(ctx) };
}
