//! Catalog records: the products an invoice line can refer to.
//!
//! A record is stored on disk as a fixed-width block: three NUL-terminated,
//! NUL-padded text fields followed by three little-endian `f64`s.

use std::fmt;
use std::io::{self, Read, Write};

use thiserror::Error;

use crate::types::{DEFAULT_PRECISION, Dictionary};

pub const CODE_SIZE: usize = 16;
pub const DESIGNATION_SIZE: usize = 128;
pub const UNITY_SIZE: usize = 20;
const NUMBER_SIZE: usize = 8;

/// Size in bytes of one encoded record.
pub const RECORD_SIZE: usize = CODE_SIZE + DESIGNATION_SIZE + UNITY_SIZE + 3 * NUMBER_SIZE;

/// Errors raised while filling or decoding a catalog record.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid code '{0}': only ASCII letters and digits are allowed")]
    InvalidCode(String),

    #[error("invalid {field}: '{value}' is not a positive number")]
    InvalidNumber { field: CatalogField, value: String },

    #[error("invalid {field}: stored text is not valid UTF-8")]
    InvalidText { field: CatalogField },

    #[error("catalog I/O error: {0}")]
    Io(#[from] io::Error),
}

/// The fields of a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogField {
    Code,
    Designation,
    Unity,
    BasePrice,
    SellingPrice,
    RateOfVat,
}

impl CatalogField {
    pub const ALL: [CatalogField; 6] = [
        CatalogField::Code,
        CatalogField::Designation,
        CatalogField::Unity,
        CatalogField::BasePrice,
        CatalogField::SellingPrice,
        CatalogField::RateOfVat,
    ];

    /// Name used for this field in dictionaries and templates.
    pub fn name(self) -> &'static str {
        match self {
            CatalogField::Code => "code",
            CatalogField::Designation => "designation",
            CatalogField::Unity => "unity",
            CatalogField::BasePrice => "basePrice",
            CatalogField::SellingPrice => "sellingPrice",
            CatalogField::RateOfVat => "rateOfVAT",
        }
    }
}

impl fmt::Display for CatalogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A product of the catalog.
///
/// # Example
///
/// ```
/// use facture::catalog::{CatalogField, CatalogRecord};
///
/// let mut record = CatalogRecord::default();
/// record.set_field(CatalogField::Code, "PAP001").unwrap();
/// record.set_field(CatalogField::SellingPrice, "4.5").unwrap();
///
/// let dict = record.to_dictionary();
/// assert_eq!(dict.render("%code%: %sellingPrice%").unwrap(), "PAP001: 4.50");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogRecord {
    pub code: String,
    pub designation: String,
    pub unity: String,
    pub base_price: f64,
    pub selling_price: f64,
    pub rate_of_vat: f64,
}

/// Check that a code only contains ASCII letters and digits.
pub fn is_valid_code(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Check that the whole string is a number greater than or equal to zero.
pub fn is_valid_positive_number(value: &str) -> bool {
    parse_positive(value).is_some()
}

fn parse_positive(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|n| *n >= 0.0)
}

impl CatalogRecord {
    /// Set a field from its textual form, validating codes and numbers.
    pub fn set_field(&mut self, field: CatalogField, value: &str) -> Result<(), CatalogError> {
        match field {
            CatalogField::Code => {
                if !is_valid_code(value) {
                    return Err(CatalogError::InvalidCode(value.to_string()));
                }
                self.code = value.to_string();
            }
            CatalogField::Designation => self.designation = value.to_string(),
            CatalogField::Unity => self.unity = value.to_string(),
            CatalogField::BasePrice => self.base_price = positive(field, value)?,
            CatalogField::SellingPrice => self.selling_price = positive(field, value)?,
            CatalogField::RateOfVat => self.rate_of_vat = positive(field, value)?,
        }
        Ok(())
    }

    /// The textual form of a field; numbers carry two decimals.
    pub fn field_text(&self, field: CatalogField) -> String {
        let number = |n: f64| format!("{n:.prec$}", prec = DEFAULT_PRECISION);
        match field {
            CatalogField::Code => self.code.clone(),
            CatalogField::Designation => self.designation.clone(),
            CatalogField::Unity => self.unity.clone(),
            CatalogField::BasePrice => number(self.base_price),
            CatalogField::SellingPrice => number(self.selling_price),
            CatalogField::RateOfVat => number(self.rate_of_vat),
        }
    }

    /// Copy every field into `dictionary`: text fields as text, prices as numbers.
    pub fn fill_dictionary(&self, dictionary: &mut Dictionary) {
        dictionary.set_text(CatalogField::Code.name(), self.code.as_str());
        dictionary.set_text(CatalogField::Designation.name(), self.designation.as_str());
        dictionary.set_text(CatalogField::Unity.name(), self.unity.as_str());
        dictionary.set_number(CatalogField::BasePrice.name(), self.base_price);
        dictionary.set_number(CatalogField::SellingPrice.name(), self.selling_price);
        dictionary.set_number(CatalogField::RateOfVat.name(), self.rate_of_vat);
    }

    pub fn to_dictionary(&self) -> Dictionary {
        let mut dictionary = Dictionary::new();
        self.fill_dictionary(&mut dictionary);
        dictionary
    }

    /// Encode this record as one fixed-width block.
    ///
    /// Every text field keeps at least one trailing NUL, so text longer than
    /// `size - 1` bytes is cut at the last character that fits.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), CatalogError> {
        let mut buffer = Vec::with_capacity(RECORD_SIZE);
        put_text(&mut buffer, &self.code, CODE_SIZE);
        put_text(&mut buffer, &self.designation, DESIGNATION_SIZE);
        put_text(&mut buffer, &self.unity, UNITY_SIZE);
        for number in [self.base_price, self.selling_price, self.rate_of_vat] {
            buffer.extend_from_slice(&number.to_le_bytes());
        }
        writer.write_all(&buffer)?;
        Ok(())
    }

    /// Decode one fixed-width block, validating fields like [`set_field`](Self::set_field).
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, CatalogError> {
        let mut buffer = [0u8; RECORD_SIZE];
        reader.read_exact(&mut buffer)?;
        let (code, rest) = buffer.split_at(CODE_SIZE);
        let (designation, rest) = rest.split_at(DESIGNATION_SIZE);
        let (unity, numbers) = rest.split_at(UNITY_SIZE);

        let mut record = CatalogRecord::default();
        record.set_field(CatalogField::Code, &take_text(CatalogField::Code, code)?)?;
        record.designation = take_text(CatalogField::Designation, designation)?;
        record.unity = take_text(CatalogField::Unity, unity)?;

        let prices = numbers.chunks_exact(NUMBER_SIZE).map(|chunk| {
            let mut bytes = [0u8; NUMBER_SIZE];
            bytes.copy_from_slice(chunk);
            f64::from_le_bytes(bytes)
        });
        let slots = [
            (CatalogField::BasePrice, &mut record.base_price),
            (CatalogField::SellingPrice, &mut record.selling_price),
            (CatalogField::RateOfVat, &mut record.rate_of_vat),
        ];
        for ((field, slot), value) in slots.into_iter().zip(prices) {
            if value.is_nan() || value < 0.0 {
                return Err(CatalogError::InvalidNumber {
                    field,
                    value: value.to_string(),
                });
            }
            *slot = value;
        }
        Ok(record)
    }
}

fn positive(field: CatalogField, value: &str) -> Result<f64, CatalogError> {
    parse_positive(value).ok_or_else(|| CatalogError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn put_text(buffer: &mut Vec<u8>, text: &str, size: usize) {
    let mut end = text.len().min(size - 1);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    buffer.extend_from_slice(&text.as_bytes()[..end]);
    buffer.resize(buffer.len() + size - end, 0);
}

fn take_text(field: CatalogField, bytes: &[u8]) -> Result<String, CatalogError> {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8(bytes[..end].to_vec()).map_err(|_| CatalogError::InvalidText { field })
}
