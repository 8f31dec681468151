//! Line-at-a-time reader for Big5 pipe-delimited invoice exports.
//!
//! Each line is decoded to UTF-8 before it is split, so the rest of the
//! crate only ever sees `String` fields.

use encoding_rs::BIG5;
use std::io::BufRead;
use tracing::debug;

use crate::error::{InvoiceError, Result, RowError};

/// Field separator within a line.
pub const DELIMITER: char = '|';

/// One decoded line of the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based line number in the source.
    pub line: usize,
    pub fields: Vec<String>,
}

impl Row {
    /// The row tag (first field).
    pub fn tag(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or("")
    }

    /// Fields joined back together, for error messages.
    pub fn raw(&self) -> String {
        self.fields.join("|")
    }
}

/// Lazily yields decoded rows from a byte source.
pub struct RowReader<R> {
    inner: R,
    line: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> RowReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: 0,
            buf: Vec::new(),
        }
    }

    fn read_row(&mut self) -> Result<Option<Row>> {
        loop {
            self.buf.clear();
            if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let bytes = strip_line_ending(&self.buf);
            if bytes.is_empty() {
                debug!(line = self.line, "skipping blank line");
                continue;
            }

            let text = decode_big5(bytes).map_err(|source| InvoiceError::Row {
                line: self.line,
                source,
            })?;
            let fields = text.split(DELIMITER).map(str::to_string).collect();
            return Ok(Some(Row {
                line: self.line,
                fields,
            }));
        }
    }
}

impl<R: BufRead> Iterator for RowReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_row().transpose()
    }
}

fn strip_line_ending(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}

/// Whether a double-byte sequence lies in standard Big5 (0xA140..=0xF9D5,
/// without the 0xC6A1..=0xC8FE user-defined block). `encoding_rs` follows
/// the WHATWG index, which also maps the HKSCS and ETEN extensions.
fn is_standard_big5(lead: u8, trail: u8) -> bool {
    match lead {
        0xC6 => trail <= 0x7E,
        0xC7 | 0xC8 => false,
        0xF9 => trail <= 0xD5,
        0xA1..=0xF8 => true,
        _ => false,
    }
}

/// Strictly decode Big5 bytes; malformed input is an error, never U+FFFD.
pub fn decode_big5(bytes: &[u8]) -> std::result::Result<String, RowError> {
    let decode_error = || RowError::Decode {
        bytes: bytes.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(" "),
    };

    let mut i = 0;
    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b, _) if b.is_ascii() => i += 1,
            (lead, Some(&trail)) if is_standard_big5(lead, trail) => i += 2,
            _ => return Err(decode_error()),
        }
    }

    BIG5.decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(decode_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big5(text: &str) -> Vec<u8> {
        let (bytes, _, had_errors) = BIG5.encode(text);
        assert!(!had_errors);
        bytes.into_owned()
    }

    fn rows(input: &[u8]) -> Vec<Row> {
        RowReader::new(input).collect::<Result<Vec<_>>>().unwrap()
    }

    #[test]
    fn decodes_and_splits_fields() {
        let input = big5("D|AB12345678|100.5|咖啡\n");
        let rows = rows(&input);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].line, 1);
        assert_eq!(rows[0].tag(), "D");
        assert_eq!(rows[0].fields, vec!["D", "AB12345678", "100.5", "咖啡"]);
    }

    #[test]
    fn handles_crlf_blank_lines_and_missing_final_newline() {
        let input = big5("M|a\r\n\r\nD|b");
        let rows = rows(&input);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields, vec!["M", "a"]);
        assert_eq!(rows[1].line, 3);
        assert_eq!(rows[1].fields, vec!["D", "b"]);
    }

    #[test]
    fn trail_byte_equal_to_delimiter_stays_in_one_field() {
        // 0xA1 0x7C is a single Big5 character whose trail byte is '|'.
        let mut input = b"D|x|".to_vec();
        input.extend_from_slice(&[0xA1, 0x7C]);
        input.push(b'\n');
        let rows = rows(&input);
        assert_eq!(rows[0].fields.len(), 3);
        assert_eq!(rows[0].fields[2].chars().count(), 1);
    }

    #[test]
    fn invalid_bytes_are_a_decode_error() {
        let input: &[u8] = b"M|ok\nD|\xff\xff\n";
        let mut reader = RowReader::new(input);
        assert!(reader.next().unwrap().is_ok());
        match reader.next().unwrap() {
            Err(InvoiceError::Row { line, source }) => {
                assert_eq!(line, 2);
                assert!(matches!(source, RowError::Decode { .. }));
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn extension_bytes_are_rejected() {
        let cases: [&[u8]; 7] = [
            &[0x87, 0x40],
            &[0x88, 0x62],
            &[0xFA, 0x40],
            &[0xC8, 0xA1],
            &[0xF9, 0xFE],
            &[0x41, 0x80],
            &[0x41, 0xA4],
        ];
        for bytes in cases {
            assert!(
                matches!(decode_big5(bytes), Err(RowError::Decode { .. })),
                "{bytes:02x?} decoded"
            );
        }
        assert_eq!(decode_big5(&big5("咖啡")).unwrap(), "咖啡");
    }

    #[test]
    fn quotes_are_kept_as_plain_text() {
        let rows = rows(b"D|\"a|b\"|1\n");
        assert_eq!(rows[0].fields, vec!["D", "\"a", "b\"", "1"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(rows(b"").is_empty());
    }
}
