//! Virtual Tree Description
//!
//! This module implements the virtual node model: a lightweight, immutable
//! description of the tree a caller wants to see rendered.
//!
//! # Concepts
//!
//! ## Nodes
//!
//! A [`VNode`] is either an element (tag name, attribute map, listener list,
//! ordered children) or a run of text. Trees of them are cheap to build and
//! are rebuilt from scratch on every render; the reconciler in
//! [`crate::render`] compares the new tree against the previous one and
//! mutates the live tree accordingly.
//!
//! ## Listeners
//!
//! A [`Listener`] pairs an event name with a shared zero-argument callback.
//! Listeners ride along on element nodes and are registered with the backend
//! when the element is materialized.
//!
//! # Lifecycle
//!
//! The caller builds a tree per render, passes it to the patcher as "new",
//! and keeps it around to pass back as "old" on the following render. After
//! that round it can be dropped; nothing in this crate retains it.

mod event;
mod node;

pub use event::{EventHandler, Listener};
pub use node::{props, Props, VElement, VNode, VText};
