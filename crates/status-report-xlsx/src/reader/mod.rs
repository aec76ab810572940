//! XLSX reader

mod cells;
mod sheet;
mod styles;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use status_report_core::Table;

use cells::decode_excel_escapes;
use styles::DateStyles;

/// A worksheet listed in `xl/workbook.xml`
#[derive(Debug, Clone)]
struct SheetEntry {
    name: String,
    path: String,
}

/// An open XLSX package.
///
/// Opening reads the sheet list, the shared strings table and the date
/// formats; worksheets are parsed one at a time by
/// [`XlsxWorkbook::read_sheet`], so a broken sheet does not prevent reading
/// the others.
pub struct XlsxWorkbook<R> {
    archive: zip::ZipArchive<R>,
    shared_strings: Vec<String>,
    date_styles: DateStyles,
    sheets: Vec<SheetEntry>,
}

impl XlsxWorkbook<BufReader<File>> {
    /// Open a workbook from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> XlsxResult<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> XlsxWorkbook<R> {
    /// Open a workbook from a reader
    pub fn new(reader: R) -> XlsxResult<Self> {
        let mut archive = zip::ZipArchive::new(reader)?;

        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        let shared_strings = Self::read_shared_strings(&mut archive)?;
        let (sheet_info, date_1904) = Self::read_workbook_xml(&mut archive)?;
        let date_styles = Self::read_styles(&mut archive)?.with_1904(date_1904);
        let sheet_paths = Self::read_workbook_rels(&mut archive)?;

        let mut sheets = Vec::with_capacity(sheet_info.len());
        for (name, r_id) in sheet_info {
            match sheet_paths.get(&r_id) {
                Some(path) => sheets.push(SheetEntry {
                    name,
                    path: path.clone(),
                }),
                // chartsheets and dialog sheets have no worksheet relationship
                None => log::debug!("skipping sheet '{}' ({}): not a worksheet", name, r_id),
            }
        }

        log::debug!(
            "opened workbook: {} sheets, {} shared strings",
            sheets.len(),
            shared_strings.len()
        );

        Ok(Self {
            archive,
            shared_strings,
            date_styles,
            sheets,
        })
    }

    /// Sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Parse one worksheet into a table.
    ///
    /// The first row with any value is the header. A sheet without any value
    /// yields [`XlsxError::EmptySheet`].
    pub fn read_sheet(&mut self, name: &str) -> XlsxResult<Table> {
        let entry = self
            .sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| XlsxError::SheetNotFound(name.to_string()))?;

        let file = self
            .archive
            .by_name(&entry.path)
            .map_err(|_| XlsxError::MissingPart(entry.path.clone()))?;
        let rows = sheet::read_rows(
            BufReader::new(file),
            &self.shared_strings,
            &self.date_styles,
        )?;

        let table = Table::from_numbered_rows(rows)
            .ok_or_else(|| XlsxError::EmptySheet(name.to_string()))?;
        log::debug!(
            "read sheet '{}': {} columns, {} rows",
            name,
            table.columns().len(),
            table.row_count()
        );
        Ok(table)
    }

    /// Read the shared strings table
    fn read_shared_strings(archive: &mut zip::ZipArchive<R>) -> XlsxResult<Vec<String>> {
        let mut strings = Vec::new();

        let file = match archive.by_name("xl/sharedStrings.xml") {
            Ok(f) => f,
            Err(_) => return Ok(strings), // No shared strings is valid
        };

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(false);

        let mut buf = Vec::new();
        let mut current = String::new();
        let mut in_si = false;
        let mut in_t = false;
        // phonetic runs repeat the text in another script
        let mut in_phonetic = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"si" => {
                        in_si = true;
                        current.clear();
                    }
                    b"rPh" => in_phonetic = true,
                    b"t" if in_si && !in_phonetic => in_t = true,
                    _ => {}
                },
                Ok(Event::Empty(e)) if e.name().as_ref() == b"si" => {
                    strings.push(String::new());
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"si" => {
                        strings.push(decode_excel_escapes(&current).into_owned());
                        current.clear();
                        in_si = false;
                    }
                    b"rPh" => in_phonetic = false,
                    b"t" => in_t = false,
                    _ => {}
                },
                Ok(Event::Text(e)) if in_t => {
                    current.push_str(&e.unescape()?);
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(strings)
    }

    /// Read the cell formats; a package without styles has no dates
    fn read_styles(archive: &mut zip::ZipArchive<R>) -> XlsxResult<DateStyles> {
        match archive.by_name("xl/styles.xml") {
            Ok(file) => styles::read_date_styles(BufReader::new(file)),
            Err(_) => Ok(DateStyles::default()),
        }
    }

    /// Read workbook.xml to get sheet names and rIds, and the date system
    fn read_workbook_xml(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<(Vec<(String, String)>, bool)> {
        let file = archive
            .by_name("xl/workbook.xml")
            .map_err(|_| XlsxError::MissingPart("xl/workbook.xml".into()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut sheets = Vec::new();
        let mut date_1904 = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e))
                    if e.name().as_ref() == b"workbookPr" =>
                {
                    date_1904 = e
                        .attributes()
                        .flatten()
                        .find(|attr| attr.key.as_ref() == b"date1904")
                        .and_then(|attr| attr.unescape_value().ok())
                        .is_some_and(|v| v == "1" || v == "true");
                }
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.name().as_ref() == b"sheet" => {
                    let mut name = None;
                    let mut r_id = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"name" => name = attr.unescape_value().ok().map(|s| s.to_string()),
                            b"r:id" => r_id = attr.unescape_value().ok().map(|s| s.to_string()),
                            _ => {}
                        }
                    }

                    if let (Some(name), Some(r_id)) = (name, r_id) {
                        sheets.push((name, r_id));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok((sheets, date_1904))
    }

    /// Read workbook.xml.rels to get worksheet part paths by rId
    fn read_workbook_rels(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<HashMap<String, String>> {
        let file = archive
            .by_name("xl/_rels/workbook.xml.rels")
            .map_err(|_| XlsxError::MissingPart("xl/_rels/workbook.xml.rels".into()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut rels = HashMap::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let mut id = None;
                    let mut target = None;
                    let mut rel_type = None;

                    for attr in e.attributes().flatten() {
                        let value = attr.unescape_value().ok().map(|s| s.to_string());
                        match attr.key.as_ref() {
                            b"Id" => id = value,
                            b"Target" => target = value,
                            b"Type" => rel_type = value,
                            _ => {}
                        }
                    }

                    if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                        if rel_type.ends_with("/worksheet") {
                            // Targets are relative to xl/ unless absolute
                            let full_path = match target.strip_prefix('/') {
                                Some(absolute) => absolute.to_string(),
                                None => format!("xl/{}", target),
                            };
                            rels.insert(id, full_path);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }
}
