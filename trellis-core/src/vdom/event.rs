//! Event Listeners
//!
//! A listener pairs an event name with a shared handler callback. Listeners
//! are plain data on the virtual tree: the reconciler forwards them verbatim
//! to the backend during materialization and never invokes them itself.
//!
//! Handlers take no arguments. What (if anything) of a native event a backend
//! surfaces to application code is the backend's concern; keeping the handler
//! signature empty keeps the node model free of backend type parameters.

use std::fmt;
use std::rc::Rc;

/// A shared, zero-argument event handler callback.
///
/// Handlers are reference-counted so a listener can be cloned together with
/// the rest of a virtual node. The reconciler treats handlers as opaque
/// values: it only hands them to the backend via
/// [`Backend::add_event_listener`].
///
/// [`Backend::add_event_listener`]: crate::render::Backend::add_event_listener
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn()>);

impl EventHandler {
    /// Wrap a closure as a shared handler.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self(Rc::new(f))
    }

    /// Invoke the handler.
    ///
    /// Called by backends when the corresponding native event fires.
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler")
    }
}

/// An (event name, handler) pair attached to an element node.
///
/// The event name is an opaque string forwarded to the backend without
/// validation.
#[derive(Debug, Clone)]
pub struct Listener {
    /// Event name, e.g. `"click"`.
    pub event: String,

    /// The handler to register for that event.
    pub handler: EventHandler,
}

impl Listener {
    /// Create a listener for the given event name.
    pub fn new<F>(event: impl Into<String>, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            event: event.into(),
            handler: EventHandler::new(handler),
        }
    }
}
