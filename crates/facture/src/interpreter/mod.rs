//! Template renderer.
//!
//! This module provides the engine that takes parsed templates and a
//! dictionary and produces formatted strings. It resolves symbols, applies
//! directives, and reports missing symbols as typed errors.

mod directives;
mod error;
mod options;
mod renderer;

pub use directives::{
    DirectiveError, apply_directive, change_case, pad_to, truncate_to, with_precision,
};
pub use error::{ErrorKind, RenderError, compute_suggestions};
pub use options::RenderOptions;
pub use renderer::{render, render_template};
