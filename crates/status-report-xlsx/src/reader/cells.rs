//! Cell-level decoding helpers

use std::borrow::Cow;

use status_report_core::{CellError, CellValue};

use super::styles::DateStyles;
use crate::error::{XlsxError, XlsxResult};

/// Decode Excel's `_xHHHH_` escapes (`_x000a_` is a line feed, `_x005f_` an
/// underscore). Malformed sequences are kept verbatim.
pub(crate) fn decode_excel_escapes(s: &str) -> Cow<'_, str> {
    if !s.contains("_x") {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find("_x") {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match parse_escape(tail) {
            Some(ch) => {
                out.push(ch);
                rest = &tail[7..];
            }
            None => {
                out.push('_');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// `s` starts with `_x`; a full escape is exactly 7 bytes long
fn parse_escape(s: &str) -> Option<char> {
    if s.as_bytes().get(6) != Some(&b'_') {
        return None;
    }
    let hex = s.get(2..6)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Parse an A1-style reference into 0-based (row, column)
pub(crate) fn parse_cell_ref(reference: &str) -> Option<(u32, u16)> {
    let split = reference.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = reference.split_at(split);
    if letters.is_empty() || !letters.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    let mut col: u32 = 0;
    for b in letters.bytes() {
        col = col * 26 + u32::from(b.to_ascii_uppercase() - b'A' + 1);
        if col > 16_384 {
            return None;
        }
    }

    let row: u32 = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, (col - 1) as u16))
}

/// A `<c>` element collected while parsing
#[derive(Debug)]
pub(crate) struct PendingCell {
    pub row: u32,
    pub col: u16,
    pub kind: Option<String>,
    /// `s` attribute: index into `cellXfs`
    pub style: Option<usize>,
    pub text: String,
}

impl PendingCell {
    /// Turn the collected text into a value according to the `t` attribute.
    ///
    /// Formula cells arrive here with their cached `<v>` result; empty text
    /// (and empty strings) become [`CellValue::Empty`]. Numbers whose cell
    /// format shows a date become [`CellValue::DateTime`].
    pub fn into_value(
        self,
        shared_strings: &[String],
        dates: &DateStyles,
    ) -> XlsxResult<CellValue> {
        if self.text.is_empty() {
            return Ok(CellValue::Empty);
        }

        let value = match self.kind.as_deref() {
            Some("s") => {
                let idx: usize = self.text.trim().parse().map_err(|_| {
                    XlsxError::Parse(format!("Invalid shared string index: {}", self.text))
                })?;
                let s = shared_strings.get(idx).ok_or_else(|| {
                    XlsxError::Parse(format!("Shared string index {} out of bounds", idx))
                })?;
                CellValue::string(s.as_str())
            }
            Some("b") => {
                CellValue::Boolean(self.text == "1" || self.text.eq_ignore_ascii_case("true"))
            }
            Some("e") => CellError::parse(&self.text)
                .map(CellValue::Error)
                .unwrap_or_else(|| CellValue::string(self.text.as_str())),
            Some("str") | Some("inlineStr") | Some("d") => {
                CellValue::string(decode_excel_escapes(&self.text))
            }
            None | Some("n") => match self.text.trim().parse::<f64>() {
                Ok(n) if dates.is_date(self.style) => dates
                    .to_datetime(n)
                    .map(CellValue::DateTime)
                    .unwrap_or(CellValue::Number(n)),
                Ok(n) => CellValue::Number(n),
                Err(_) => CellValue::String(self.text),
            },
            Some(_) => CellValue::String(self.text),
        };

        Ok(match value {
            CellValue::String(s) if s.is_empty() => CellValue::Empty,
            other => other,
        })
    }
}
