//! Application-level plumbing for the Grind CLI: path resolution and the
//! per-invocation context.

mod context;
mod resolver;

pub use context::{AppContext, Session};
