//! CLI command implementations.

mod check;
mod doc_number;
mod inspect;
mod render;
mod source;

pub use check::{run_check, CheckArgs};
pub use doc_number::{run_doc_number, DocNumberArgs};
pub use inspect::{run_inspect, InspectArgs};
pub use render::{run_render, RenderArgs};
