//! Template parser.
//!
//! Turns a template string into a [`Template`] AST: the [`Scanner`] finds
//! the `%`-delimited placeholder spans and each span is parsed into a symbol
//! name plus its directives.

pub mod ast;
pub mod error;
mod scanner;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use scanner::{RawSegment, Scanner};
pub use template::{escape_literal, parse_template};
