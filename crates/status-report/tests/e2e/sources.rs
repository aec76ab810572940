//! Opening sources from disk.

use crate::{csv_fixture, xlsx_fixture, Text};
use pretty_assertions::assert_eq;
use status_report::prelude::*;

#[test]
fn test_missing_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inspecoes.xlsx");

    let err = Report::open(&path, ReportConfig::default()).err().expect("error");
    assert!(matches!(err, ReportError::SourceNotFound(_)));
    assert!(err.to_string().starts_with("Arquivo "));
    assert!(err
        .to_string()
        .ends_with("não encontrado. Certifique-se de que o arquivo existe."));
}

#[test]
fn test_corrupt_workbook() {
    let fixture = csv_fixture("quebrado.xlsx", "not a zip archive");
    let err = Report::open(&fixture.path, ReportConfig::default()).err().expect("error");
    assert!(matches!(err, ReportError::Xlsx(_)));
}

#[test]
fn test_unsupported_extension() {
    let fixture = csv_fixture("dados.ods", "");
    assert!(matches!(
        Source::open(&fixture.path),
        Err(ReportError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_sheet_names_in_workbook_order() {
    let fixture = xlsx_fixture(&[
        ("Extintores", vec![vec![Text("status")]]),
        ("CIV", vec![vec![Text("placa")]]),
        ("Data", vec![vec![Text("data")]]),
    ]);
    let source = Source::open(&fixture.path).unwrap();
    assert_eq!(source.sheet_names(), vec!["Extintores", "CIV", "Data"]);
}

#[test]
fn test_csv_source_renders_chart() {
    let fixture = csv_fixture(
        "Extintores.csv",
        "placa;status;observação\nABC1D23;Conforme;\nDEF4G56;Vencido;EM OPERAÇÃO\n",
    );
    let mut report = Report::open(&fixture.path, ReportConfig::default()).unwrap();

    assert_eq!(report.menu(), vec!["Extintores", "Todos os Gráficos"]);
    let View::Sheet(view) = report.render("Extintores").unwrap() else {
        panic!("expected sheet view");
    };
    let chart = view.chart.expect("chart");
    assert_eq!(
        chart.annotation.lines,
        vec!["Conforme: 1", "Vencido: 1", "Vencido em operação: 1"]
    );
}

#[test]
fn test_html_for_workbook_sheet() {
    let fixture = xlsx_fixture(&[(
        "Extintores",
        vec![vec![Text("status")], vec![Text("Vencido")]],
    )]);
    let mut report = Report::open(&fixture.path, ReportConfig::default()).unwrap();
    let html = render_html(&report.render("Extintores").unwrap());

    assert!(html.contains("<svg"));
    assert!(html.contains("Vencido: 1<br>Vencido em operação: 0"));
    assert!(html.contains(r#"style="background-color: #E74C3C; color: #FFFFFF;""#));
}
