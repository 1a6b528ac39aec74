//! Trellis Core
//!
//! This crate provides the reconciliation core for the Trellis UI framework.
//! It implements:
//!
//! - An immutable virtual node model (elements and text)
//! - An abstract backend contract over live tree technologies
//! - Materialization of virtual subtrees into live handles
//! - A positional differ/patcher that applies minimal mutations
//!
//! The crate is deliberately backend-agnostic: it never names a concrete
//! tree API. A renderer integration supplies a [`render::Backend`]
//! implementation and decides when to call the patcher; both concerns live
//! outside this crate.
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - `vdom`: the virtual node description and its trivial builders
//! - `render`: the backend contract, materializer and patcher
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis_core::render::patch;
//! use trellis_core::vdom::{props, VNode};
//!
//! // First render: no previous tree, the whole thing is materialized.
//! let tree = VNode::element("div", props([("class", "app")]), vec![
//!     VNode::text("hello"),
//! ]);
//! patch(&mut backend, &root, None, Some(&tree))?;
//!
//! // Later render: diff against the tree from the previous call.
//! let next = VNode::element("div", props([("class", "app")]), vec![
//!     VNode::text("world"),
//! ]);
//! patch(&mut backend, &root, Some(&tree), Some(&next))?;
//! ```

pub mod render;
pub mod vdom;
