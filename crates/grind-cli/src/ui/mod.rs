//! UI primitives for the Grind CLI.
//!
//! - **Context**: stream detection and output mode (json, plain, pretty)
//! - **Theme**: badges and styles
//! - **Render**: headers, tables, key-value lines, hints, errors

mod context;
pub mod render;
pub mod theme;

pub use context::{OutputMode, UiContext};
pub use theme::Badge;

pub use render::{
    badge, blank_line, header, hint, kv, print, print_error, print_warning, progress_bar,
    simple_table,
};
