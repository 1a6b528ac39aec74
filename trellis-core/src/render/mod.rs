//! Rendering Pipeline
//!
//! This module implements the reconciler: the abstract backend contract, the
//! materializer that turns virtual subtrees into live handles, and the
//! differ/patcher that mutates a live tree to match a new virtual tree.
//!
//! # Overview
//!
//! The caller owns two things: a handle to the live root (obtained from the
//! backend, outside this crate) and the most recently rendered virtual tree.
//! On every render it builds a fresh tree and calls [`patch`] with the
//! previous tree as `old` and the fresh one as `new`; the first render
//! passes `old = None`. The reconciler is stateless between calls.
//!
//! # Design Decisions
//!
//! 1. No owned handle map. Child handles are re-derived positionally via
//!    [`Backend::child_at`] on every pass, trading a lookup per slot for
//!    zero bookkeeping state in the core.
//!
//! 2. Strictly positional child matching. A mid-list insertion rebuilds the
//!    sibling suffix; keyed matching is left as a separate design.
//!
//! 3. Backend operations are effectful but strictly sequenced. Sibling
//!    subtrees are never materialized concurrently, so ordering guarantees
//!    hold whether an implementation is synchronous or sequentially awaits
//!    asynchronous work.

mod backend;
mod create;
mod patch;

pub use backend::Backend;
pub use create::create_node;
pub use patch::patch;
