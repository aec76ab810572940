//! Number formats from `xl/styles.xml`
//!
//! Only one fact about each cell format matters here: whether its number
//! format shows a date or time. Numeric cells using such a format are turned
//! into [`CellValue::DateTime`](status_report_core::CellValue::DateTime).

use std::collections::HashMap;
use std::io::BufRead;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};

/// First serial past 9999-12-31
const MAX_SERIAL: f64 = 2_958_466.0;

/// Which cell formats (`cellXfs` entries) display dates, and the date system
#[derive(Debug, Clone, Default)]
pub(crate) struct DateStyles {
    is_date: Vec<bool>,
    date_1904: bool,
}

impl DateStyles {
    /// Switch to the 1904 date system (`<workbookPr date1904="1"/>`)
    pub fn with_1904(mut self, date_1904: bool) -> Self {
        self.date_1904 = date_1904;
        self
    }

    /// Check whether the cell format at this `s` index shows a date
    pub fn is_date(&self, style: Option<usize>) -> bool {
        style
            .and_then(|s| self.is_date.get(s).copied())
            .unwrap_or(false)
    }

    /// Convert a serial number to a date and time.
    ///
    /// In the 1900 system serial 1 is 1900-01-01 and serial 60 is the
    /// nonexistent 1900-02-29; serials below 61 are shifted by one day so
    /// that later dates come out right. Serials outside 0..=9999-12-31
    /// return `None`.
    pub fn to_datetime(&self, serial: f64) -> Option<NaiveDateTime> {
        if !(0.0..MAX_SERIAL).contains(&serial) {
            return None;
        }

        let (base, serial) = if self.date_1904 {
            (NaiveDate::from_ymd_opt(1904, 1, 1)?, serial)
        } else if serial < 61.0 {
            (NaiveDate::from_ymd_opt(1899, 12, 31)?, serial)
        } else {
            (NaiveDate::from_ymd_opt(1899, 12, 30)?, serial)
        };

        let millis = (serial * 86_400_000.0).round() as i64;
        base.and_hms_opt(0, 0, 0)?
            .checked_add_signed(Duration::milliseconds(millis))
    }
}

/// Built-in number formats 14-22 are dates and times, as are 45-47
/// (`mm:ss`, `[h]:mm:ss`, `mm:ss.0`).
fn is_builtin_date_format(id: u32) -> bool {
    matches!(id, 14..=22 | 45..=47)
}

/// A custom format shows a date when it has a date or time token outside
/// quoted literals, escapes and bracketed sections (colors, locales).
/// Elapsed-time brackets (`[h]`, `[mm]`, `[ss]`) count as time tokens.
fn is_date_format_code(code: &str) -> bool {
    let mut chars = code.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                for q in chars.by_ref() {
                    if q == '"' {
                        break;
                    }
                }
            }
            '\\' | '_' | '*' => {
                chars.next();
            }
            '[' => {
                let mut section = String::new();
                for b in chars.by_ref() {
                    if b == ']' {
                        break;
                    }
                    section.push(b.to_ascii_lowercase());
                }
                if !section.is_empty() && section.chars().all(|b| matches!(b, 'h' | 'm' | 's')) {
                    return true;
                }
            }
            _ => {
                if matches!(c.to_ascii_lowercase(), 'y' | 'm' | 'd' | 'h' | 's') {
                    return true;
                }
            }
        }
    }
    false
}

fn u32_attr(e: &BytesStart<'_>, key: &[u8]) -> Option<u32> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok()?.parse().ok())
}

/// Read the custom number formats and the `cellXfs` list
pub(crate) fn read_date_styles<B: BufRead>(reader: B) -> XlsxResult<DateStyles> {
    let mut xml_reader = Reader::from_reader(reader);
    xml_reader.trim_text(true);

    let mut buf = Vec::new();
    let mut custom: HashMap<u32, bool> = HashMap::new();
    let mut num_fmt_ids: Vec<u32> = Vec::new();
    let mut in_cell_xfs = false;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"numFmt" => {
                    let mut id = None;
                    let mut code = None;
                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"numFmtId" => {
                                id = attr.unescape_value().ok().and_then(|s| s.parse().ok())
                            }
                            b"formatCode" => {
                                code = attr.unescape_value().ok().map(|s| s.to_string())
                            }
                            _ => {}
                        }
                    }
                    if let (Some(id), Some(code)) = (id, code) {
                        custom.insert(id, is_date_format_code(&code));
                    }
                }
                b"cellXfs" => in_cell_xfs = true,
                b"xf" if in_cell_xfs => {
                    num_fmt_ids.push(u32_attr(&e, b"numFmtId").unwrap_or(0));
                }
                _ => {}
            },
            Ok(Event::End(e)) if e.name().as_ref() == b"cellXfs" => in_cell_xfs = false,
            Ok(Event::Eof) => break,
            Err(e) => return Err(XlsxError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let is_date = num_fmt_ids
        .into_iter()
        .map(|id| {
            custom
                .get(&id)
                .copied()
                .unwrap_or_else(|| is_builtin_date_format(id))
        })
        .collect();

    Ok(DateStyles {
        is_date,
        date_1904: false,
    })
}
