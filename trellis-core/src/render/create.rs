//! Materialization
//!
//! Converts a virtual subtree into live handles through the backend
//! contract, recursively.

use tracing::trace;

use super::backend::Backend;
use crate::vdom::VNode;

/// Materialize a virtual subtree into a live handle.
///
/// Effects happen in a fixed order: the node is created, its attributes are
/// set, its listeners are registered, then each child is fully materialized
/// and appended before the next child begins. The returned handle is not yet
/// attached to any parent; callers append or splice it themselves.
///
/// If any step fails, the partially constructed subtree is left in whatever
/// state the backend put it in; there is no rollback.
pub fn create_node<B: Backend>(backend: &mut B, node: &VNode) -> Result<B::Handle, B::Error> {
    match node {
        VNode::Text(text) => {
            trace!(content = %text.content, "creating text node");
            backend.create_text_node(&text.content)
        }
        VNode::Element(element) => {
            trace!(name = %element.name, "creating element");
            let handle = match element.namespace.as_deref() {
                Some(namespace) => backend.create_element_ns(namespace, &element.name)?,
                None => backend.create_element(&element.name)?,
            };

            for (key, value) in &element.props {
                backend.set_attribute(key, value, &handle)?;
            }

            for listener in &element.listeners {
                backend.add_event_listener(&listener.event, listener.handler.clone(), &handle)?;
            }

            for child in &element.children {
                let child_handle = create_node(backend, child)?;
                backend.append_child(&child_handle, &handle)?;
            }

            Ok(handle)
        }
    }
}
