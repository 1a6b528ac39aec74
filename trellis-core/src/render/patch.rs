//! Tree Diffing and Patching
//!
//! Given the previously rendered virtual tree and a freshly built one, the
//! patcher applies the minimal mutation at each position: create, remove,
//! replace, or update in place, recursing into children strictly by
//! position.
//!
//! # The Pairing State Machine
//!
//! Each step looks at the presence of the old and new node for one child
//! slot:
//!
//! - neither present: nothing to do
//! - only new present: materialize it and append it
//! - only old present: remove the live child at that position
//! - both present: text content is compared directly; anything else goes
//!   through the [`changed`] test, which either replaces the whole live
//!   subtree or updates attributes in place and descends
//!
//! # Positional, Not Keyed
//!
//! Children are matched up purely by index. Inserting or removing a child in
//! the middle of a list shifts every following sibling onto a different old
//! node, so the whole suffix is torn down and rebuilt instead of being
//! recognized as moved. That trade keeps the reconciler free of any
//! node-to-handle bookkeeping between passes; keyed matching would be a
//! separate design.
//!
//! # Tolerated Absences
//!
//! A live tree shorter than the index being targeted is not an error. The
//! removal and text-update paths silently do nothing when
//! [`Backend::child_at`] comes back empty.

use tracing::trace;

use super::backend::Backend;
use super::create::create_node;
use crate::vdom::{VElement, VNode};

/// Reconcile the live tree under `root` from `old` to `new`.
///
/// The caller holds the state across renders: pass `old = None` on the first
/// call to materialize the tree, and on every later call pass the tree that
/// was `new` the time before. The reconciler itself keeps nothing between
/// invocations.
///
/// A backend failure aborts the pass at the point it occurred; mutations
/// already applied stay applied.
pub fn patch<B: Backend>(
    backend: &mut B,
    root: &B::Handle,
    old: Option<&VNode>,
    new: Option<&VNode>,
) -> Result<(), B::Error> {
    run(backend, root, old, new, 0)
}

/// One reconciliation step for the child slot `index` under `parent`.
fn run<B: Backend>(
    backend: &mut B,
    parent: &B::Handle,
    old: Option<&VNode>,
    new: Option<&VNode>,
    index: usize,
) -> Result<(), B::Error> {
    match (old, new) {
        (None, None) => Ok(()),

        (None, Some(new)) => {
            trace!(index, "appending fresh subtree");
            let handle = create_node(backend, new)?;
            backend.append_child(&handle, parent)
        }

        (Some(_), None) => match backend.child_at(index, parent)? {
            Some(child) => {
                trace!(index, "removing child");
                backend.remove_child(&child, parent)
            }
            // Live tree already shorter than this slot.
            None => Ok(()),
        },

        (Some(old), Some(new)) => {
            // Text against text compares content directly; equal strings
            // touch nothing.
            if let (VNode::Text(prev), VNode::Text(next)) = (old, new) {
                if prev.content == next.content {
                    return Ok(());
                }
                return match backend.child_at(index, parent)? {
                    Some(child) => {
                        trace!(index, "updating text content");
                        backend.set_text_content(&next.content, &child)
                    }
                    None => Ok(()),
                };
            }

            let child = match backend.child_at(index, parent)? {
                Some(child) => child,
                None => return Ok(()),
            };

            if changed(old, new) {
                trace!(index, "replacing child");
                let fresh = create_node(backend, new)?;
                return backend.replace_child(&fresh, &child, parent);
            }

            // Same shape: reconcile attributes in place, then descend.
            if let (VNode::Element(prev), VNode::Element(next)) = (old, new) {
                update_props(backend, &child, prev, next)?;
                walk(backend, &child, prev, next)?;
            }
            Ok(())
        }
    }
}

/// Structural change test: true when the live subtree cannot be reconciled
/// in place and must be rebuilt.
///
/// Deliberately shallow. Element nodes compare tag name and namespace only;
/// text nodes compare content; a variant mismatch is always a change.
/// Attributes, listeners and children are the patcher's business, not this
/// function's.
fn changed(old: &VNode, new: &VNode) -> bool {
    match (old, new) {
        (VNode::Element(prev), VNode::Element(next)) => {
            prev.name != next.name || prev.namespace != next.namespace
        }
        (VNode::Text(prev), VNode::Text(next)) => prev.content != next.content,
        (VNode::Element(_), VNode::Text(_)) | (VNode::Text(_), VNode::Element(_)) => true,
    }
}

/// Reconcile the attribute maps of two same-shaped elements.
///
/// Works over the union of keys: new-only keys are set, old-only keys are
/// removed, keys present in both are rewritten only when the value differs.
/// Keys absent from both maps are never touched, and the per-key operations
/// are independent of processing order.
fn update_props<B: Backend>(
    backend: &mut B,
    handle: &B::Handle,
    old: &VElement,
    new: &VElement,
) -> Result<(), B::Error> {
    for (key, value) in &new.props {
        if old.props.get(key) != Some(value) {
            trace!(%key, "setting attribute");
            backend.set_attribute(key, value, handle)?;
        }
    }
    for key in old.props.keys() {
        if !new.props.contains_key(key) {
            trace!(%key, "removing attribute");
            backend.remove_attribute(key, handle)?;
        }
    }
    Ok(())
}

/// Recurse into the child lists of two same-shaped elements, by position.
///
/// Walks `0..max(|old|, |new|)`; positions past the end of either list
/// recurse with that side absent, which turns into appends or removals one
/// level down.
fn walk<B: Backend>(
    backend: &mut B,
    handle: &B::Handle,
    old: &VElement,
    new: &VElement,
) -> Result<(), B::Error> {
    let max_len = old.children.len().max(new.children.len());
    for index in 0..max_len {
        run(
            backend,
            handle,
            old.children.get(index),
            new.children.get(index),
            index,
        )?;
    }
    Ok(())
}
