//! Template input shared by commands that take a single template.

use std::fs::read_to_string;
use std::path::PathBuf;

use miette::{miette, Result};

/// Where to read the template from: inline or from a file.
#[derive(Debug, clap::Args)]
#[group(required = true, multiple = false)]
pub struct TemplateSource {
    /// Template string
    #[arg(long)]
    pub template: Option<String>,

    /// File containing the template
    #[arg(long)]
    pub template_file: Option<PathBuf>,
}

impl TemplateSource {
    /// Returns a display name for diagnostics and the template text.
    pub fn load(&self) -> Result<(String, String)> {
        match (&self.template, &self.template_file) {
            (Some(text), _) => Ok(("<template>".to_string(), text.clone())),
            (None, Some(path)) => {
                let content = read_to_string(path)
                    .map_err(|e| miette!("Cannot read template file {}: {}", path.display(), e))?;
                Ok((path.display().to_string(), content))
            }
            (None, None) => Err(miette!("either --template or --template-file is required")),
        }
    }
}
