//! Implementation of the `facture doc-number` command.

use chrono::NaiveDate;
use facture::document::{document_number, format_date};

/// Arguments for the doc-number command.
#[derive(Debug, clap::Args)]
pub struct DocNumberArgs {
    /// Numeric document id
    pub id: u64,

    /// Document date (YYYY-MM-DD), printed as DD/MM/YYYY after the number
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

/// Run the doc-number command.
pub fn run_doc_number(args: DocNumberArgs) -> miette::Result<i32> {
    let number = document_number(args.id);
    match args.date {
        Some(date) => println!("{} {}", number, format_date(date)),
        None => println!("{}", number),
    }
    Ok(exitcode::OK)
}
