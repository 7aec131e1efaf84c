//! Document numbering, date helpers and the length-prefixed string codec
//! used by document files.

use std::io::{self, Read, Write};

use chrono::NaiveDate;
use thiserror::Error;

const BASE: u64 = 36;
const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encode a document id in base 36, using digits then uppercase letters.
///
/// ```
/// use facture::document::document_number;
///
/// assert_eq!(document_number(0), "0");
/// assert_eq!(document_number(35), "Z");
/// assert_eq!(document_number(36), "10");
/// ```
pub fn document_number(id: u64) -> String {
    let mut digits = Vec::new();
    let mut rest = id;
    loop {
        digits.push(DIGITS[(rest % BASE) as usize]);
        rest /= BASE;
        if rest == 0 {
            break;
        }
    }
    digits.iter().rev().map(|&d| char::from(d)).collect()
}

/// Format a date as `DD/MM/YYYY`.
///
/// ```
/// use chrono::NaiveDate;
/// use facture::document::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2010, 9, 3).unwrap();
/// assert_eq!(format_date(date), "03/09/2010");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Errors raised while reading a document string.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("stored string is not valid UTF-8")]
    InvalidText,

    #[error("document I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Write `text` as its byte length (`u64`, little-endian) followed by its bytes.
pub fn write_string<W: Write>(writer: &mut W, text: &str) -> Result<(), DocumentError> {
    writer.write_all(&(text.len() as u64).to_le_bytes())?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Read a string written by [`write_string`].
///
/// ```
/// use std::io::Cursor;
/// use facture::document::{read_string, write_string};
///
/// let mut buffer = Vec::new();
/// write_string(&mut buffer, "Facture n°1").unwrap();
/// assert_eq!(read_string(&mut Cursor::new(buffer)).unwrap(), "Facture n°1");
/// ```
pub fn read_string<R: Read>(reader: &mut R) -> Result<String, DocumentError> {
    let mut prefix = [0u8; 8];
    reader.read_exact(&mut prefix)?;
    let len = u64::from_le_bytes(prefix);

    let mut bytes = Vec::new();
    reader.take(len).read_to_end(&mut bytes)?;
    if (bytes.len() as u64) < len {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    String::from_utf8(bytes).map_err(|_| DocumentError::InvalidText)
}
