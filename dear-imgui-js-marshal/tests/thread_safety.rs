use static_assertions::assert_not_impl_any;

// Native current-context state is thread-affine.
#[test]
fn handles_are_thread_bound() {
    assert_not_impl_any!(dear_imgui_js_marshal::Handle<u8>: Send, Sync);
    assert_not_impl_any!(dear_imgui_js_marshal::Handle<std::ffi::c_void>: Send, Sync);
}
