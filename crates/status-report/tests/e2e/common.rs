//! Common utilities for E2E tests.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

/// A cell written into a test worksheet
#[derive(Debug, Clone)]
pub enum Cell {
    Text(&'static str),
    Number(f64),
    /// Date serial with the `dd/mm/yyyy` cell format
    Date(f64),
    /// Shared-string reference; fixtures carry no shared strings, so any
    /// index makes the sheet unreadable
    Shared(usize),
    Blank,
}

pub use Cell::{Blank, Date, Number, Shared, Text};

/// A sheet name with its rows; an empty row list writes an empty sheet
pub type SheetRows = (&'static str, Vec<Vec<Cell>>);

/// A workbook saved to a temp directory that lives as long as this value
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

/// Cell formats: 0 is General, 1 shows a date
const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?><styleSheet><numFmts count="1"><numFmt numFmtId="164" formatCode="dd/mm/yyyy"/></numFmts><cellXfs count="2"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/><xf numFmtId="164" fontId="0" fillId="0" borderId="0" applyNumberFormat="1"/></cellXfs></styleSheet>"#;

/// Write an XLSX workbook with inline-string cells.
pub fn xlsx_fixture(sheets: &[SheetRows]) -> Fixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("inspecoes.xlsx");
    let file = File::create(&path).expect("create fixture");

    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/></Types>"#,
    )
    .unwrap();

    let mut workbook = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><workbook xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>"#,
    );
    let mut rels = String::from(r#"<?xml version="1.0" encoding="UTF-8"?><Relationships>"#);
    for (i, (name, _)) in sheets.iter().enumerate() {
        workbook.push_str(&format!(
            r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
            name,
            i + 1,
            i + 1
        ));
        rels.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
            i + 1,
            i + 1
        ));
    }
    workbook.push_str("</sheets></workbook>");
    rels.push_str("</Relationships>");

    zip.start_file("xl/workbook.xml", options).unwrap();
    zip.write_all(workbook.as_bytes()).unwrap();
    zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
    zip.write_all(rels.as_bytes()).unwrap();
    zip.start_file("xl/styles.xml", options).unwrap();
    zip.write_all(STYLES_XML.as_bytes()).unwrap();

    for (i, (_, rows)) in sheets.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)
            .unwrap();
        zip.write_all(worksheet_xml(rows).as_bytes()).unwrap();
    }

    zip.finish().unwrap();
    Fixture { _dir: dir, path }
}

/// Write a CSV file named `name` into a temp directory
pub fn csv_fixture(name: &str, contents: &str) -> Fixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write csv fixture");
    Fixture { _dir: dir, path }
}

fn worksheet_xml(rows: &[Vec<Cell>]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?><worksheet><sheetData>"#);
    for (r, row) in rows.iter().enumerate() {
        xml.push_str(&format!(r#"<row r="{}">"#, r + 1));
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", (b'A' + c as u8) as char, r + 1);
            match cell {
                Text(s) => xml.push_str(&format!(
                    r#"<c r="{}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                    reference,
                    escape(s)
                )),
                Number(n) => {
                    xml.push_str(&format!(r#"<c r="{}"><v>{}</v></c>"#, reference, n))
                }
                Date(serial) => xml.push_str(&format!(
                    r#"<c r="{}" s="1"><v>{}</v></c>"#,
                    reference, serial
                )),
                Shared(idx) => xml.push_str(&format!(
                    r#"<c r="{}" t="s"><v>{}</v></c>"#,
                    reference, idx
                )),
                Blank => {}
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// The header used by inspection sheets
pub fn status_header() -> Vec<Cell> {
    vec![Text("placa"), Text("status"), Text("observação")]
}
