//! Template rendering.
//!
//! Walks a parsed template once, copying literal text and substituting each
//! placeholder with its dictionary value, formatted by its directives.

use std::mem;

use tracing::{debug, trace};

use crate::interpreter::directives::apply_directive;
use crate::interpreter::error::compute_suggestions;
use crate::interpreter::{RenderError, RenderOptions};
use crate::parser::{Directive, Placeholder, Segment, Template, parse_template};
use crate::types::{Dictionary, Value};

/// Render a parsed template against a dictionary.
///
/// # Errors
///
/// Returns an error if:
/// - A placeholder names a symbol missing from the dictionary
/// - A `precision` directive receives text
pub fn render_template(
    template: &Template,
    dictionary: &Dictionary,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    debug!(
        segments = template.segments.len(),
        entries = dictionary.len(),
        "rendering template"
    );
    let mut output = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(placeholder) => {
                substitute(placeholder, dictionary, options, &mut output)?;
            }
        }
    }
    Ok(output)
}

/// Resolve one placeholder and append it to `output`.
///
/// The chained directive, when present, rewrites the whole of `output`
/// after the substitution has been appended.
fn substitute(
    placeholder: &Placeholder,
    dictionary: &Dictionary,
    options: &RenderOptions,
    output: &mut String,
) -> Result<(), RenderError> {
    let value = dictionary
        .get(&placeholder.name)
        .ok_or_else(|| missing_symbol(&placeholder.name, dictionary, options))?;

    let formatted = match placeholder.directive {
        Some(directive) => apply(directive, value, &placeholder.name, options)?,
        None => value.render(options.default_precision),
    };
    trace!(name = %placeholder.name, value = %formatted, "substituted placeholder");
    output.push_str(&formatted);

    if let Some(chained) = placeholder.chained {
        let accumulated = Value::Text(mem::take(output));
        *output = apply(chained, &accumulated, &placeholder.name, options)?;
    }
    Ok(())
}

fn apply(
    directive: Directive,
    value: &Value,
    name: &str,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    apply_directive(directive, value, options.default_precision).map_err(|e| {
        RenderError::InvalidDirective {
            directive: directive.to_string(),
            name: name.to_string(),
            message: e.to_string(),
        }
    })
}

fn missing_symbol(name: &str, dictionary: &Dictionary, options: &RenderOptions) -> RenderError {
    debug!(name, "symbol not found");
    RenderError::MissingSymbol {
        name: name.to_string(),
        suggestions: compute_suggestions(name, dictionary.names(), options.max_suggestions),
    }
}

/// Render a template string against a dictionary with default options.
///
/// ```
/// use facture::{Dictionary, render};
///
/// let mut dict = Dictionary::new();
/// dict.set_text("name", "doe");
/// assert_eq!(render(&dict, "Dear %name{case=A}%,").unwrap(), "Dear DOE,");
/// ```
pub fn render(dictionary: &Dictionary, template: &str) -> Result<String, RenderError> {
    dictionary.render(template)
}

impl Dictionary {
    /// Render `template` using this dictionary and default options.
    pub fn render(&self, template: &str) -> Result<String, RenderError> {
        self.render_with(template, &RenderOptions::default())
    }

    /// Render `template` using this dictionary.
    pub fn render_with(
        &self,
        template: &str,
        options: &RenderOptions,
    ) -> Result<String, RenderError> {
        let parsed = parse_template(template)?;
        render_template(&parsed, self, options)
    }
}
