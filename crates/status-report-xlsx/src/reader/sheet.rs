//! Worksheet parsing

use std::collections::BTreeMap;
use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use status_report_core::CellValue;

use super::cells::{parse_cell_ref, PendingCell};
use super::styles::DateStyles;
use crate::error::{XlsxError, XlsxResult};

/// Read the `<sheetData>` of a worksheet into dense rows.
///
/// Only cell values are kept. Rows are returned in sheet order with their
/// 1-based row number, starting at the leftmost used column; rows without
/// any value are omitted.
pub(crate) fn read_rows<B: BufRead>(
    reader: B,
    shared_strings: &[String],
    dates: &DateStyles,
) -> XlsxResult<Vec<(usize, Vec<CellValue>)>> {
    let mut xml_reader = Reader::from_reader(reader);
    // Cell text keeps its whitespace; trailing blanks are normalized later.
    xml_reader.trim_text(false);

    let mut buf = Vec::new();
    let mut grid: BTreeMap<u32, BTreeMap<u16, CellValue>> = BTreeMap::new();

    let mut current_row: u32 = 0;
    let mut next_row: u32 = 0;
    let mut next_col: u16 = 0;
    let mut cell: Option<PendingCell> = None;
    let mut in_value = false;
    let mut in_inline_str = false;
    let mut in_inline_text = false;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"row" => {
                    current_row = row_number(&e).unwrap_or(next_row);
                    next_row = current_row + 1;
                    next_col = 0;
                }
                b"c" => {
                    cell = Some(start_cell(&e, current_row, next_col));
                }
                b"v" if cell.is_some() => in_value = true,
                b"is" if cell.is_some() => in_inline_str = true,
                b"t" if in_inline_str => in_inline_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"row" => {
                    current_row = row_number(&e).unwrap_or(next_row);
                    next_row = current_row + 1;
                    next_col = 0;
                }
                b"c" => {
                    let empty = start_cell(&e, current_row, next_col);
                    next_col = empty.col.saturating_add(1);
                }
                _ => {}
            },
            Ok(Event::Text(t)) if in_value || in_inline_text => {
                if let Some(pending) = cell.as_mut() {
                    pending.text.push_str(&t.unescape()?);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"v" => in_value = false,
                b"t" => in_inline_text = false,
                b"is" => in_inline_str = false,
                b"c" => {
                    if let Some(pending) = cell.take() {
                        let (row, col) = (pending.row, pending.col);
                        next_col = col.saturating_add(1);
                        let value = pending.into_value(shared_strings, dates)?;
                        if !value.is_empty() {
                            grid.entry(row).or_default().insert(col, value);
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(XlsxError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(densify(grid))
}

fn row_number(e: &BytesStart<'_>) -> Option<u32> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"r")
        .and_then(|attr| attr.unescape_value().ok()?.parse::<u32>().ok())
        .and_then(|r| r.checked_sub(1))
}

fn start_cell(e: &BytesStart<'_>, row: u32, col: u16) -> PendingCell {
    let mut pending = PendingCell {
        row,
        col,
        kind: None,
        style: None,
        text: String::new(),
    };

    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"r" => {
                if let Some((r, c)) = attr
                    .unescape_value()
                    .ok()
                    .and_then(|s| parse_cell_ref(&s))
                {
                    pending.row = r;
                    pending.col = c;
                }
            }
            b"t" => {
                pending.kind = attr.unescape_value().ok().map(|s| s.to_string());
            }
            b"s" => {
                pending.style = attr.unescape_value().ok().and_then(|s| s.parse().ok());
            }
            _ => {}
        }
    }

    pending
}

fn densify(grid: BTreeMap<u32, BTreeMap<u16, CellValue>>) -> Vec<(usize, Vec<CellValue>)> {
    let first_col = grid
        .values()
        .filter_map(|cols| cols.keys().next().copied())
        .min()
        .unwrap_or(0);
    let last_col = grid
        .values()
        .filter_map(|cols| cols.keys().next_back().copied())
        .max()
        .unwrap_or(0);

    grid.into_iter()
        .map(|(row_idx, cols)| {
            let mut row = vec![CellValue::Empty; usize::from(last_col - first_col) + 1];
            for (col, value) in cols {
                row[usize::from(col - first_col)] = value;
            }
            (row_idx as usize + 1, row)
        })
        .collect()
}
