//! Implementation of the `facture inspect` command.

use facture::parse_template;
use serde::Serialize;

use super::source::TemplateSource;
use crate::output::table::{format_placeholder_table, PlaceholderRow};
use crate::output::TemplateDiagnostic;

/// Arguments for the inspect command.
#[derive(Debug, clap::Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: TemplateSource,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one placeholder.
#[derive(Debug, Serialize)]
struct PlaceholderJson<'a> {
    name: &'a str,
    offset: usize,
    directive: Option<String>,
    chained: Option<String>,
}

/// Run the inspect command.
pub fn run_inspect(args: InspectArgs) -> miette::Result<i32> {
    let (name, content) = args.source.load()?;
    let template = match parse_template(&content) {
        Ok(template) => template,
        Err(e) => return Err(TemplateDiagnostic::from_parse_error(&name, &content, &e).into()),
    };

    if args.json {
        let placeholders: Vec<PlaceholderJson<'_>> = template
            .placeholders()
            .map(|p| PlaceholderJson {
                name: &p.name,
                offset: p.span.start,
                directive: p.directive.map(|d| d.to_string()),
                chained: p.chained.map(|d| d.to_string()),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&placeholders)
                .expect("JSON serialization should not fail")
        );
        return Ok(exitcode::OK);
    }

    let rows: Vec<PlaceholderRow> = template
        .placeholders()
        .map(|p| PlaceholderRow {
            name: p.name.clone(),
            directive: p.directive.map(|d| d.to_string()),
            chained: p.chained.map(|d| d.to_string()),
        })
        .collect();
    if rows.is_empty() {
        println!("{}: no placeholders", name);
    } else {
        println!("{}", format_placeholder_table(&rows));
    }
    Ok(exitcode::OK)
}
