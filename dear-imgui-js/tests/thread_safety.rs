use static_assertions::assert_not_impl_any;

// Handles name objects that live in a thread-affine native context.
#[test]
fn handles_are_thread_bound() {
    assert_not_impl_any!(dear_imgui_js::ContextHandle: Send, Sync);
    assert_not_impl_any!(dear_imgui_js::IoHandle: Send, Sync);
    assert_not_impl_any!(dear_imgui_js::DrawListHandle: Send, Sync);
}
