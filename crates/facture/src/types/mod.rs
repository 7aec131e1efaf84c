mod dictionary;
mod value;

pub use dictionary::{Dictionary, names_match};
pub use value::{DEFAULT_PRECISION, Value};
