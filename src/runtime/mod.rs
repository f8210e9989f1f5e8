//! Runtime support for reactive primitives.
//!
//! This module provides the dependency graph behind signals, memos and
//! effects: id allocation, read tracking, dirty propagation and effect
//! scheduling.

mod context;

pub(crate) use context::RuntimeInner;
pub use context::ReactiveRuntime;
