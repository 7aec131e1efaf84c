use bon::Builder;

use crate::types::DEFAULT_PRECISION;

/// Settings for a render pass.
///
/// # Example
///
/// ```
/// use facture::{Dictionary, RenderOptions};
///
/// let mut dict = Dictionary::new();
/// dict.set_number("total", 12.5);
///
/// let options = RenderOptions::builder().default_precision(3).build();
/// assert_eq!(dict.render_with("%total%", &options).unwrap(), "12.500");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct RenderOptions {
    /// Decimals used for numbers rendered without a `precision` directive.
    #[builder(default = DEFAULT_PRECISION)]
    pub default_precision: usize,

    /// Maximum number of "did you mean" names attached to a missing-symbol
    /// error. Zero disables suggestions.
    #[builder(default = 3)]
    pub max_suggestions: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
