//! Tests for catalog records and their fixed-width codec.

use std::fs::File;
use std::io::{Cursor, Seek, SeekFrom};

use facture::Value;
use facture::catalog::{
    CODE_SIZE, CatalogError, CatalogField, CatalogRecord, DESIGNATION_SIZE, RECORD_SIZE,
    UNITY_SIZE, is_valid_code, is_valid_positive_number,
};
use tempfile::tempfile;

fn paper() -> CatalogRecord {
    CatalogRecord {
        code: "PAP001".into(),
        designation: "Ramette papier A4".into(),
        unity: "ramette".into(),
        base_price: 3.2,
        selling_price: 4.5,
        rate_of_vat: 20.0,
    }
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn codes_are_alphanumeric() {
    assert!(is_valid_code("ABC123"));
    assert!(is_valid_code(""));
    assert!(!is_valid_code("ABC-123"));
    assert!(!is_valid_code("ÉTÉ"));
}

#[test]
fn positive_numbers() {
    assert!(is_valid_positive_number("0"));
    assert!(is_valid_positive_number("12.5"));
    assert!(!is_valid_positive_number("-1"));
    assert!(!is_valid_positive_number("12.5€"));
    assert!(!is_valid_positive_number(""));
}

#[test]
fn set_field_validates() {
    let mut record = CatalogRecord::default();
    assert!(matches!(
        record.set_field(CatalogField::Code, "bad code"),
        Err(CatalogError::InvalidCode(_))
    ));
    let err = record
        .set_field(CatalogField::RateOfVat, "-5")
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid rateOfVAT: '-5' is not a positive number");
    assert_eq!(record, CatalogRecord::default());

    record.set_field(CatalogField::BasePrice, "7.25").unwrap();
    assert_eq!(record.base_price, 7.25);
}

#[test]
fn field_text_uses_two_decimals() {
    let record = paper();
    assert_eq!(record.field_text(CatalogField::Code), "PAP001");
    assert_eq!(record.field_text(CatalogField::SellingPrice), "4.50");
    assert_eq!(record.field_text(CatalogField::RateOfVat), "20.00");
}

// =============================================================================
// Dictionary export
// =============================================================================

#[test]
fn to_dictionary_exports_every_field() {
    let dict = paper().to_dictionary();
    assert_eq!(dict.len(), CatalogField::ALL.len());
    for field in CatalogField::ALL {
        assert!(dict.contains(field.name()), "missing {field}");
    }
    assert_eq!(dict.get("sellingprice"), Some(&Value::Number(4.5)));
}

#[test]
fn catalog_line_renders() {
    let dict = paper().to_dictionary();
    let line = dict
        .render("%code{min=8}%%designation{max=10}% %sellingPrice% (VAT %rateOfVAT{precision=0}%%%)")
        .unwrap();
    assert_eq!(line, "PAP001  Ramette pa 4.50 (VAT 20%)");
}

// =============================================================================
// Codec
// =============================================================================

#[test]
fn encoded_record_has_fixed_size() {
    let mut buffer = Vec::new();
    paper().write_to(&mut buffer).unwrap();
    assert_eq!(buffer.len(), RECORD_SIZE);
    assert_eq!(&buffer[..6], b"PAP001");
    assert!(buffer[6..CODE_SIZE].iter().all(|&b| b == 0));
}

#[test]
fn records_survive_a_file_round_trip() {
    let mut file: File = tempfile().unwrap();
    let second = CatalogRecord {
        code: "STY9".into(),
        designation: "Stylo bille".into(),
        unity: "pièce".into(),
        base_price: 0.3,
        selling_price: 0.9,
        rate_of_vat: 5.5,
    };
    paper().write_to(&mut file).unwrap();
    second.write_to(&mut file).unwrap();

    file.seek(SeekFrom::Start(0)).unwrap();
    assert_eq!(CatalogRecord::read_from(&mut file).unwrap(), paper());
    assert_eq!(CatalogRecord::read_from(&mut file).unwrap(), second);
}

#[test]
fn long_text_is_cut_on_a_character_boundary() {
    let record = CatalogRecord {
        unity: "é".repeat(15),
        ..paper()
    };
    let mut buffer = Vec::new();
    record.write_to(&mut buffer).unwrap();
    let unity_end = CODE_SIZE + DESIGNATION_SIZE + UNITY_SIZE;
    assert_eq!(buffer[unity_end - 2..unity_end], [0, 0]);
    let decoded = CatalogRecord::read_from(&mut Cursor::new(buffer)).unwrap();
    assert_eq!(decoded.unity, "é".repeat(9));
}

#[test]
fn text_filling_its_field_keeps_a_terminator() {
    let record = CatalogRecord {
        code: "A".repeat(CODE_SIZE),
        ..paper()
    };
    let mut buffer = Vec::new();
    record.write_to(&mut buffer).unwrap();
    assert_eq!(buffer[CODE_SIZE - 1], 0);
    let decoded = CatalogRecord::read_from(&mut Cursor::new(buffer)).unwrap();
    assert_eq!(decoded.code, "A".repeat(CODE_SIZE - 1));
}

#[test]
fn invalid_utf8_text_is_a_data_error() {
    let mut buffer = Vec::new();
    paper().write_to(&mut buffer).unwrap();
    buffer[CODE_SIZE] = 0xFF;
    assert!(matches!(
        CatalogRecord::read_from(&mut Cursor::new(buffer)),
        Err(CatalogError::InvalidText {
            field: CatalogField::Designation
        })
    ));
}

#[test]
fn truncated_input_is_an_io_error() {
    let mut buffer = Vec::new();
    paper().write_to(&mut buffer).unwrap();
    buffer.truncate(RECORD_SIZE - 1);
    assert!(matches!(
        CatalogRecord::read_from(&mut Cursor::new(buffer)),
        Err(CatalogError::Io(_))
    ));
}

#[test]
fn decoding_rejects_negative_prices() {
    let mut buffer = Vec::new();
    CatalogRecord {
        selling_price: -1.0,
        ..paper()
    }
    .write_to(&mut buffer)
    .unwrap();
    assert!(matches!(
        CatalogRecord::read_from(&mut Cursor::new(buffer)),
        Err(CatalogError::InvalidNumber {
            field: CatalogField::SellingPrice,
            ..
        })
    ));
}
