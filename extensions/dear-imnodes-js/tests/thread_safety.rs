use static_assertions::assert_not_impl_any;

#[test]
fn imnodes_handles_not_send_sync() {
    assert_not_impl_any!(dear_imnodes_js::NodesContextHandle: Send, Sync);
    assert_not_impl_any!(dear_imnodes_js::EditorContextHandle: Send, Sync);
    assert_not_impl_any!(dear_imnodes_js::NodesStyleHandle: Send, Sync);
}
