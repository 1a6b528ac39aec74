//! Virtual Nodes
//!
//! A virtual node is an immutable description of a subtree: either an
//! element (tag name, attribute map, listener list, ordered children) or a
//! run of text.
//!
//! # Immutability
//!
//! A node is never mutated once built. An update is always expressed as a
//! freshly built tree, which the patcher compares against the previously
//! rendered one. The builders here consume and return values accordingly;
//! there are no setters.
//!
//! # No Validation
//!
//! Tag names, attribute keys and event names are opaque strings forwarded
//! verbatim to the backend. A malformed name is the backend's problem to
//! reject, not ours to detect.

use indexmap::IndexMap;
use smallvec::SmallVec;

use super::event::Listener;

/// Attribute map of an element node.
///
/// Keys are unique. Iteration order is insertion order, but the reconciler
/// makes no ordering promises when it walks the union of two maps.
pub type Props = IndexMap<String, String>;

/// Build an attribute map from key/value pairs.
///
/// # Example
///
/// ```rust,ignore
/// let map = props([("class", "card"), ("id", "main")]);
/// ```
pub fn props<K, V, I>(entries: I) -> Props
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// An immutable virtual node.
///
/// The two variants are the whole vocabulary of the tree language: element
/// nodes carry structure, text nodes carry content. Every dispatch in the
/// reconciler matches exhaustively on this enum.
///
/// # Example
///
/// ```rust,ignore
/// let tree = VNode::element(
///     "div",
///     props([("class", "app")]),
///     vec![VNode::text("hello")],
/// );
/// ```
#[derive(Debug, Clone)]
pub enum VNode {
    /// An element with a tag name, attributes, listeners and children.
    Element(VElement),
    /// A run of text.
    Text(VText),
}

/// Payload of an element node.
#[derive(Debug, Clone)]
pub struct VElement {
    /// Tag name, forwarded verbatim to the backend.
    pub name: String,

    /// Namespace for the backend's namespaced creation operation.
    /// `None` means the default namespace.
    pub namespace: Option<String>,

    /// Attribute map. Keys are unique; order carries no meaning.
    pub props: Props,

    /// Listeners to register at materialization, in order.
    pub listeners: SmallVec<[Listener; 2]>,

    /// Ordered child nodes.
    pub children: Vec<VNode>,
}

/// Payload of a text node.
#[derive(Debug, Clone)]
pub struct VText {
    /// The text content.
    pub content: String,
}

impl VNode {
    /// Build an element node. The listener list starts empty; attach
    /// listeners with [`VNode::with_listeners`].
    pub fn element(name: impl Into<String>, props: Props, children: Vec<VNode>) -> Self {
        VNode::Element(VElement {
            name: name.into(),
            namespace: None,
            props,
            listeners: SmallVec::new(),
            children,
        })
    }

    /// Build an element node in an explicit namespace.
    ///
    /// Materialization routes these through the backend's namespaced
    /// creation operation.
    pub fn element_ns(
        namespace: impl Into<String>,
        name: impl Into<String>,
        props: Props,
        children: Vec<VNode>,
    ) -> Self {
        VNode::Element(VElement {
            name: name.into(),
            namespace: Some(namespace.into()),
            props,
            listeners: SmallVec::new(),
            children,
        })
    }

    /// Build a text node.
    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text(VText {
            content: content.into(),
        })
    }

    /// Return a copy of this node with its listener list replaced.
    ///
    /// Only element nodes carry listeners; on a text node this is the
    /// identity, not an error.
    pub fn with_listeners(self, listeners: impl IntoIterator<Item = Listener>) -> Self {
        match self {
            VNode::Element(mut element) => {
                element.listeners = listeners.into_iter().collect();
                VNode::Element(element)
            }
            text @ VNode::Text(_) => text,
        }
    }

    /// Check if this is an element node.
    pub fn is_element(&self) -> bool {
        matches!(self, VNode::Element(_))
    }

    /// Check if this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self, VNode::Text(_))
    }

    /// Get the element payload if this is an element node.
    pub fn as_element(&self) -> Option<&VElement> {
        match self {
            VNode::Element(element) => Some(element),
            VNode::Text(_) => None,
        }
    }

    /// Get the text content if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            VNode::Text(text) => Some(&text.content),
            VNode::Element(_) => None,
        }
    }
}
