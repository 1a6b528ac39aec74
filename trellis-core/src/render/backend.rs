//! Backend Contract
//!
//! The reconciler drives a live tree only through the [`Backend`] trait. Any
//! concrete tree technology (a browser DOM via wasm bindings, a retained
//! scene graph, an in-memory tree for tests) plugs in by implementing it;
//! nothing in this crate names a concrete tree API.
//!
//! # Error Model
//!
//! The core defines no error kinds of its own. Every operation returns
//! `Result<_, Self::Error>`; a failure aborts the current reconciliation
//! pass at that point, with no rollback of already-applied mutations, and is
//! propagated to the caller unmodified.
//!
//! # Handle Stability
//!
//! The reconciler keeps no map from virtual nodes to live handles. It
//! re-derives child handles positionally through [`Backend::child_at`] on
//! every pass, so implementations must guarantee that a handle returned for
//! a given position keeps referring to the same live node until a mutation
//! changes the tree structure at or before that position.

use crate::vdom::EventHandler;

/// Capability interface over a live, stateful tree.
///
/// All mutating operations are invoked strictly in sequence; the reconciler
/// never issues two of them concurrently and never interleaves sibling
/// subtrees. Implementations may be synchronous or may conceal sequentially
/// awaited asynchronous work, as long as effect ordering is preserved.
pub trait Backend {
    /// Opaque reference to a materialized live node.
    ///
    /// Cloning a handle must yield a reference to the same live node; the
    /// backend owns the underlying storage and its lifetime.
    type Handle: Clone;

    /// Backend-defined failure type. The reconciler never constructs or
    /// inspects these; it only propagates them.
    type Error;

    /// Create an element by tag name.
    fn create_element(&mut self, tag: &str) -> Result<Self::Handle, Self::Error>;

    /// Create an element by tag name in an explicit namespace.
    fn create_element_ns(&mut self, namespace: &str, tag: &str)
        -> Result<Self::Handle, Self::Error>;

    /// Create a text node with the given content.
    fn create_text_node(&mut self, text: &str) -> Result<Self::Handle, Self::Error>;

    /// Replace `old` with `new` among the children of `parent`.
    fn replace_child(
        &mut self,
        new: &Self::Handle,
        old: &Self::Handle,
        parent: &Self::Handle,
    ) -> Result<(), Self::Error>;

    /// Remove `child` from the children of `parent`.
    fn remove_child(&mut self, child: &Self::Handle, parent: &Self::Handle)
        -> Result<(), Self::Error>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, child: &Self::Handle, parent: &Self::Handle)
        -> Result<(), Self::Error>;

    /// Number of children currently under `handle`.
    fn child_count(&self, handle: &Self::Handle) -> Result<usize, Self::Error>;

    /// Child of `handle` at a 0-based position.
    ///
    /// Absence is an ordinary answer, not an error: the reconciler probes
    /// positions that may be past the end of the live child list.
    fn child_at(&self, index: usize, handle: &Self::Handle)
        -> Result<Option<Self::Handle>, Self::Error>;

    /// Set the text content of `handle`.
    fn set_text_content(&mut self, text: &str, handle: &Self::Handle)
        -> Result<(), Self::Error>;

    /// Set attribute `key` to `value` on `handle`.
    fn set_attribute(&mut self, key: &str, value: &str, handle: &Self::Handle)
        -> Result<(), Self::Error>;

    /// Remove attribute `key` from `handle`.
    fn remove_attribute(&mut self, key: &str, handle: &Self::Handle)
        -> Result<(), Self::Error>;

    /// Register `handler` for `event` on `handle`.
    fn add_event_listener(
        &mut self,
        event: &str,
        handler: EventHandler,
        handle: &Self::Handle,
    ) -> Result<(), Self::Error>;
}
