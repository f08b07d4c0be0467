//! Hover, link and selection queries
//!
//! Ids come back through one-element host arrays: `is_node_hovered(&mut [0])`
//! leaves the hovered node id in element 0 and returns whether one exists.
//! ImNodes only writes the id when the query succeeds, so a container keeps
//! its previous value otherwise.
//!
//! Apart from `created_from_snap`, ImNodes requires these pointers; an absent
//! container where one is required trips a native assertion.

use dear_imgui_js::{BindResult, HostContainer};
use dear_imgui_js_marshal::{BoolSlot, IntSlot, SelectionBuffer};

use crate::context::require_context;
use crate::sys;

/// Whether the mouse is over the editor canvas.
pub fn is_editor_hovered() -> bool {
    unsafe { sys::imnodes_IsEditorHovered() }
}

/// Writes the hovered node id to `node_id[0]` and returns `true`, or
/// leaves it untouched.
pub fn is_node_hovered<H: HostContainer + ?Sized>(node_id: &mut H) -> bool {
    let mut node_id = IntSlot::new(node_id);
    unsafe { sys::imnodes_IsNodeHovered(node_id.as_mut_ptr()) }
}

pub fn is_link_hovered<H: HostContainer + ?Sized>(link_id: &mut H) -> bool {
    let mut link_id = IntSlot::new(link_id);
    unsafe { sys::imnodes_IsLinkHovered(link_id.as_mut_ptr()) }
}

pub fn is_pin_hovered<H: HostContainer + ?Sized>(attribute_id: &mut H) -> bool {
    let mut attribute_id = IntSlot::new(attribute_id);
    unsafe { sys::imnodes_IsPinHovered(attribute_id.as_mut_ptr()) }
}

/// Whether the last attribute submitted is being interacted with.
pub fn is_attribute_active() -> bool {
    unsafe { sys::imnodes_IsAttributeActive() }
}

pub fn is_any_attribute_active<H: HostContainer + ?Sized>(attribute_id: &mut H) -> bool {
    let mut attribute_id = IntSlot::new(attribute_id);
    unsafe { sys::imnodes_IsAnyAttributeActive(attribute_id.as_mut_ptr()) }
}

/// `true` on the frame a link drag starts; writes the source pin.
pub fn is_link_started<H: HostContainer + ?Sized>(started_at_attribute_id: &mut H) -> bool {
    let mut started_at = IntSlot::new(started_at_attribute_id);
    unsafe { sys::imnodes_IsLinkStarted(started_at.as_mut_ptr()) }
}

/// A link drag ended without connecting. With `including_detached_links`
/// false, dragging an existing link off its pin does not count.
pub fn is_link_dropped<H: HostContainer + ?Sized>(
    started_at_attribute_id: &mut H,
    including_detached_links: bool,
) -> bool {
    let mut started_at = IntSlot::new(started_at_attribute_id);
    unsafe { sys::imnodes_IsLinkDropped(started_at.as_mut_ptr(), including_detached_links) }
}

/// A new link was dropped on a pin this frame. `created_from_snap` may be
/// absent.
pub fn is_link_created<H1, H2, H3>(
    started_at_attribute_id: &mut H1,
    ended_at_attribute_id: &mut H2,
    created_from_snap: &mut H3,
) -> bool
where
    H1: HostContainer + ?Sized,
    H2: HostContainer + ?Sized,
    H3: HostContainer + ?Sized,
{
    let mut started_at = IntSlot::new(started_at_attribute_id);
    let mut ended_at = IntSlot::new(ended_at_attribute_id);
    let mut from_snap = BoolSlot::new(created_from_snap);
    unsafe {
        sys::imnodes_IsLinkCreated_BoolPtr(
            started_at.as_mut_ptr(),
            ended_at.as_mut_ptr(),
            from_snap.as_mut_ptr(),
        )
    }
}

/// [`is_link_created`] that also reports the node ids on both ends.
pub fn is_link_created_ex<H1, H2, H3, H4, H5>(
    started_at_node_id: &mut H1,
    started_at_attribute_id: &mut H2,
    ended_at_node_id: &mut H3,
    ended_at_attribute_id: &mut H4,
    created_from_snap: &mut H5,
) -> bool
where
    H1: HostContainer + ?Sized,
    H2: HostContainer + ?Sized,
    H3: HostContainer + ?Sized,
    H4: HostContainer + ?Sized,
    H5: HostContainer + ?Sized,
{
    let mut start_node = IntSlot::new(started_at_node_id);
    let mut start_attr = IntSlot::new(started_at_attribute_id);
    let mut end_node = IntSlot::new(ended_at_node_id);
    let mut end_attr = IntSlot::new(ended_at_attribute_id);
    let mut from_snap = BoolSlot::new(created_from_snap);
    unsafe {
        sys::imnodes_IsLinkCreated_IntPtr(
            start_node.as_mut_ptr(),
            start_attr.as_mut_ptr(),
            end_node.as_mut_ptr(),
            end_attr.as_mut_ptr(),
            from_snap.as_mut_ptr(),
        )
    }
}

/// `true` when a link was detached; writes its id.
pub fn is_link_destroyed<H: HostContainer + ?Sized>(link_id: &mut H) -> bool {
    let mut link_id = IntSlot::new(link_id);
    unsafe { sys::imnodes_IsLinkDestroyed(link_id.as_mut_ptr()) }
}

/// Number of selected nodes; sizes [`get_selected_nodes`].
pub fn num_selected_nodes() -> BindResult<i32> {
    require_context()?;
    Ok(unsafe { sys::imnodes_NumSelectedNodes() })
}

pub fn num_selected_links() -> BindResult<i32> {
    require_context()?;
    Ok(unsafe { sys::imnodes_NumSelectedLinks() })
}

/// Replaces the contents of `node_ids` with the selected node ids.
///
/// The buffer is sized by [`num_selected_nodes`], never by the host array.
/// An absent container skips the native call.
pub fn get_selected_nodes<H: HostContainer + ?Sized>(node_ids: &mut H) -> BindResult<()> {
    let count = usize::try_from(num_selected_nodes()?).unwrap_or(0);
    let mut buffer = SelectionBuffer::<_, i32>::new(node_ids, count);
    if buffer.is_valid() {
        unsafe { sys::imnodes_GetSelectedNodes(buffer.as_mut_ptr()) };
    }
    Ok(())
}

/// Replaces the contents of `link_ids` with the selected link ids.
pub fn get_selected_links<H: HostContainer + ?Sized>(link_ids: &mut H) -> BindResult<()> {
    let count = usize::try_from(num_selected_links()?).unwrap_or(0);
    let mut buffer = SelectionBuffer::<_, i32>::new(link_ids, count);
    if buffer.is_valid() {
        unsafe { sys::imnodes_GetSelectedLinks(buffer.as_mut_ptr()) };
    }
    Ok(())
}

/// Adds `node_id` to the selection.
pub fn select_node(node_id: i32) -> BindResult<()> {
    require_context()?;
    unsafe { sys::imnodes_SelectNode(node_id) };
    Ok(())
}

pub fn select_link(link_id: i32) -> BindResult<()> {
    require_context()?;
    unsafe { sys::imnodes_SelectLink(link_id) };
    Ok(())
}

/// Deselects every node.
pub fn clear_node_selection() -> BindResult<()> {
    require_context()?;
    unsafe { sys::imnodes_ClearNodeSelection_Nil() };
    Ok(())
}

/// Deselects a single node.
pub fn clear_node_selection_id(node_id: i32) -> BindResult<()> {
    require_context()?;
    unsafe { sys::imnodes_ClearNodeSelection_Int(node_id) };
    Ok(())
}

pub fn clear_link_selection() -> BindResult<()> {
    require_context()?;
    unsafe { sys::imnodes_ClearLinkSelection_Nil() };
    Ok(())
}

pub fn clear_link_selection_id(link_id: i32) -> BindResult<()> {
    require_context()?;
    unsafe { sys::imnodes_ClearLinkSelection_Int(link_id) };
    Ok(())
}

/// Whether `node_id` is part of the selection.
pub fn is_node_selected(node_id: i32) -> BindResult<bool> {
    require_context()?;
    Ok(unsafe { sys::imnodes_IsNodeSelected(node_id) })
}

pub fn is_link_selected(link_id: i32) -> BindResult<bool> {
    require_context()?;
    Ok(unsafe { sys::imnodes_IsLinkSelected(link_id) })
}
