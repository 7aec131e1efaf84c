//! Implementation of the `facture render` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use facture::{Dictionary, ParseError, RenderError, RenderOptions};
use serde::Serialize;
use tracing::debug;

use super::source::TemplateSource;
use crate::output::TemplateDiagnostic;

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: TemplateSource,

    /// JSON file with an object of name -> text or number
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Text entries in name=value format (repeatable)
    #[arg(short = 't', long = "text", value_parser = parse_key_val)]
    pub texts: Vec<(String, String)>,

    /// Number entries in name=value format (repeatable)
    #[arg(short = 'n', long = "number", value_parser = parse_key_number)]
    pub numbers: Vec<(String, f64)>,

    /// Decimals for numbers without a precision directive
    #[arg(long, env = "FACTURE_PRECISION")]
    pub precision: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
pub struct RenderResult {
    pub result: String,
}

/// Parse a name=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid entry format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Parse a name=number parameter string.
fn parse_key_number(s: &str) -> Result<(String, f64), String> {
    let (name, value) = parse_key_val(s)?;
    let number = value
        .parse::<f64>()
        .map_err(|_| format!("invalid number '{}' for '{}'", value, name))?;
    Ok((name, number))
}

/// Build the dictionary: the JSON file first, then command-line entries on top.
fn build_dictionary(args: &RenderArgs) -> miette::Result<Dictionary> {
    let mut dictionary = match &args.dictionary {
        Some(path) => {
            let content = read_to_string(path).map_err(|e| {
                miette::miette!("Cannot read dictionary file {}: {}", path.display(), e)
            })?;
            serde_json::from_str(&content).map_err(|e| {
                miette::miette!("Invalid dictionary file {}: {}", path.display(), e)
            })?
        }
        None => Dictionary::new(),
    };
    dictionary.extend(args.texts.iter().map(|(k, v)| (k, v.as_str())));
    dictionary.extend(args.numbers.iter().map(|(k, v)| (k, *v)));
    Ok(dictionary)
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let (name, template) = args.source.load()?;
    let dictionary = build_dictionary(&args)?;
    debug!(entries = dictionary.len(), "dictionary loaded");

    let mut options = RenderOptions::default();
    if let Some(precision) = args.precision {
        options.default_precision = precision;
    }

    match dictionary.render_with(&template, &options) {
        Ok(result) => {
            if args.json {
                let output = RenderResult { result };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                report(&name, &template, &e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}

/// Print a render error, with source context for syntax errors.
fn report(name: &str, template: &str, err: &RenderError) {
    match err {
        RenderError::Parse(parse_error) => print_diagnostic(name, template, parse_error),
        other => eprintln!("Render error: {}", other),
    }
}

fn print_diagnostic(name: &str, template: &str, err: &ParseError) {
    let diagnostic = TemplateDiagnostic::from_parse_error(name, template, err);
    eprintln!("{:?}", miette::Report::new(diagnostic));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_val_splits_on_first_equals() {
        assert_eq!(
            parse_key_val("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert!(parse_key_val("missing").is_err());
    }

    #[test]
    fn parse_key_number_rejects_text() {
        assert_eq!(parse_key_number("total=12.5").unwrap().1, 12.5);
        assert!(parse_key_number("total=abc").is_err());
    }
}
