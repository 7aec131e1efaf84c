use serde::{Deserialize, Serialize};

/// Precision used when a number is rendered without a `precision` directive.
pub const DEFAULT_PRECISION: usize = 2;

/// A value stored in a [`Dictionary`](crate::Dictionary).
///
/// Values are immutable: assigning a new value to an existing name replaces
/// the whole value, and the type may change from text to number or back.
///
/// # Example
///
/// ```
/// use facture::Value;
///
/// let total: Value = 12.5.into();
/// assert_eq!(total.as_number(), Some(12.5));
///
/// let client: Value = "Doe".into();
/// assert_eq!(client.as_text(), Some("Doe"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A text value, substituted verbatim.
    Text(String),

    /// A numeric value, rendered with a fixed number of decimals.
    Number(f64),
}

impl Value {
    /// Get this value as text, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Check whether this value holds a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Render this value as a string, using `precision` decimals for numbers.
    ///
    /// ```
    /// use facture::Value;
    ///
    /// assert_eq!(Value::from(12.3456).render(2), "12.35");
    /// assert_eq!(Value::from(3.0).render(0), "3");
    /// assert_eq!(Value::from("Doe").render(2), "Doe");
    /// ```
    pub fn render(&self, precision: usize) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => format!("{n:.precision$}"),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Number(n) => write!(f, "{n:.prec$}", prec = DEFAULT_PRECISION),
        }
    }
}

// From implementations for common types

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}
