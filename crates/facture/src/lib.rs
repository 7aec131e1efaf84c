//! Template formatting for invoice documents.
//!
//! A [`Dictionary`] holds named text and number values. Templates reference
//! them with `%name%` placeholders, optionally followed by formatting
//! directives:
//!
//! ```
//! use facture::Dictionary;
//!
//! let mut dict = Dictionary::new();
//! dict.set_text("client", "doe");
//! dict.set_number("total", 1234.5);
//!
//! let text = dict
//!     .render("%client{case=A}%|%total{precision=1}%|%%")
//!     .unwrap();
//! assert_eq!(text, "DOE|1234.5|%");
//! ```

pub mod catalog;
pub mod document;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use interpreter::{ErrorKind, RenderError, RenderOptions, render, render_template};
pub use parser::{ParseError, Template, escape_literal, parse_template};
pub use types::{Dictionary, Value};
