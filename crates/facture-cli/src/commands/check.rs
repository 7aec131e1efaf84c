//! Implementation of the `facture check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use facture::parse_template;
use serde::Serialize;
use tracing::debug;

use crate::output::TemplateDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Template files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    ok: bool,
    placeholders: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<CheckErrorJson>,
}

#[derive(Debug, Serialize)]
struct CheckErrorJson {
    line: usize,
    column: usize,
    message: String,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut results = Vec::with_capacity(args.files.len());
    let mut failed = false;

    for path in &args.files {
        let content = read_to_string(path)
            .map_err(|e| miette::miette!("Cannot read template file {}: {}", path.display(), e))?;
        let file = path.display().to_string();

        match parse_template(&content) {
            Ok(template) => {
                let placeholders = template.placeholders().count();
                debug!(file = %file, placeholders, "template ok");
                if !args.json {
                    println!("{}: ok ({} placeholders)", file, placeholders);
                }
                results.push(CheckJson {
                    file,
                    ok: true,
                    placeholders,
                    error: None,
                });
            }
            Err(e) => {
                failed = true;
                if !args.json {
                    let diagnostic = TemplateDiagnostic::from_parse_error(&file, &content, &e);
                    eprintln!("{:?}", miette::Report::new(diagnostic));
                }
                let (line, column) = e.line_column();
                results.push(CheckJson {
                    file,
                    ok: false,
                    placeholders: 0,
                    error: Some(CheckErrorJson {
                        line,
                        column,
                        message: e.message(),
                    }),
                });
            }
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).expect("JSON serialization should not fail")
        );
    }

    Ok(if failed { exitcode::DATAERR } else { exitcode::OK })
}
