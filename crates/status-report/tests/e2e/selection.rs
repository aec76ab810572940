//! Single-sheet selections: chart sheets, table sheets and failures.

use crate::{status_header, xlsx_fixture, Blank, Date, Number, Text};
use pretty_assertions::assert_eq;
use status_report::prelude::*;
use status_report::{SheetView, TableView};

fn open(sheets: &[crate::SheetRows]) -> (crate::Fixture, Report<Source>) {
    let fixture = xlsx_fixture(sheets);
    let report = Report::open(&fixture.path, ReportConfig::default()).expect("open fixture");
    (fixture, report)
}

fn sheet_view(report: &mut Report<Source>, sheet: &str) -> SheetView {
    match report.render(sheet).expect("render") {
        View::Sheet(view) => view,
        other => panic!("expected sheet view, got {other:?}"),
    }
}

fn table_view(report: &mut Report<Source>, sheet: &str) -> TableView {
    match report.render(sheet).expect("render") {
        View::Table(view) => view,
        other => panic!("expected table view, got {other:?}"),
    }
}

#[test]
fn test_inspection_sheet_chart_and_table() {
    let (_fixture, mut report) = open(&[(
        "Extintores",
        vec![
            status_header(),
            vec![Text("ABC1D23"), Text("Conforme"), Blank],
            vec![Text("DEF4G56"), Text("Vencido"), Text("EM OPERAÇÃO")],
            vec![Text("GHI7J89"), Text("Conforme"), Blank],
            vec![Text("JKL0M12"), Text("Vencido"), Text("PARADO")],
            vec![Text("MNO3P45"), Text("Atenção"), Blank],
        ],
    )]);

    let view = sheet_view(&mut report, "Extintores");
    assert!(view.notices.is_empty());

    let chart = view.chart.expect("chart");
    assert_eq!(
        chart.annotation.lines,
        vec![
            "Conforme: 2",
            "Vencido: 2",
            "Atenção: 1",
            "Vencido em operação: 1",
        ]
    );
    let colors: Vec<String> = chart.slices.iter().map(|s| s.color.to_hex()).collect();
    assert_eq!(colors, vec!["#164888", "#EF4824", "#118DFF"]);
    let pulls: Vec<f64> = chart.slices.iter().map(|s| s.pull).collect();
    assert_eq!(pulls, vec![0.0, 0.1, 0.0]);
    assert_eq!(chart.hole, 0.5);

    let table = view.table.expect("table");
    assert_eq!(table.table.row_count(), 5);
    let highlighted: Vec<bool> = table.styles.iter().map(|s| s.is_highlighted()).collect();
    assert_eq!(highlighted, vec![false, true, false, true, false]);
}

#[test]
fn test_observation_header_with_line_break() {
    let (_fixture, mut report) = open(&[(
        "Tacógrafo",
        vec![
            vec![Text("status"), Text("observação\n")],
            vec![Text("Vencido"), Text("EM OPERAÇÃO")],
            vec![Text("Vencido"), Text("EM OPERAÇÃO ")],
        ],
    )]);

    let chart = sheet_view(&mut report, "Tacógrafo").chart.expect("chart");
    assert_eq!(
        chart.annotation.lines.last().map(String::as_str),
        Some("Vencido em operação: 2")
    );
}

#[test]
fn test_exempt_sheet_without_status_is_silent() {
    let (_fixture, mut report) = open(&[(
        "CIV",
        vec![vec![Text("placa"), Text("validade")], vec![Text("ABC1D23"), Number(45000.0)]],
    )]);

    let view = sheet_view(&mut report, "CIV");
    assert!(view.chart.is_none());
    assert!(view.table.is_none());
    assert!(view.notices.is_empty());
}

#[test]
fn test_sheet_without_status_warns() {
    let (_fixture, mut report) = open(&[(
        "Revenue",
        vec![vec![Text("mês"), Text("valor")], vec![Text("jan"), Number(10.0)]],
    )]);

    let view = sheet_view(&mut report, "Revenue");
    assert!(view.chart.is_none());
    assert_eq!(view.notices.len(), 1);
    assert_eq!(view.notices[0].level, NoticeLevel::Warning);
    assert_eq!(
        view.notices[0].message,
        "A coluna 'status' não foi encontrada na aba 'Revenue'. Ignorando a aba."
    );
}

#[test]
fn test_numeric_status_fails_the_sheet() {
    let (_fixture, mut report) = open(&[(
        "Opacidade 2",
        vec![
            vec![Text("status")],
            vec![Text("Conforme")],
            vec![Number(3.0)],
        ],
    )]);

    let view = sheet_view(&mut report, "Opacidade 2");
    assert!(view.chart.is_none());
    assert!(view.table.is_none());
    assert_eq!(view.notices.len(), 1);
    assert!(view.notices[0].message.contains("linha 3"));
}

#[test]
fn test_empty_status_fails_the_sheet_at_its_row() {
    let (_fixture, mut report) = open(&[(
        "Extintores",
        vec![
            vec![Blank, Blank, Blank],
            status_header(),
            vec![Text("ABC1D23"), Text("Conforme"), Blank],
            vec![Blank, Blank, Blank],
            vec![Text("DEF4G56"), Blank, Text("EM OPERAÇÃO")],
        ],
    )]);

    let view = sheet_view(&mut report, "Extintores");
    assert!(view.chart.is_none());
    assert!(view.table.is_none());
    assert_eq!(view.notices.len(), 1);
    assert_eq!(view.notices[0].level, NoticeLevel::Warning);
    assert_eq!(
        view.notices[0].message,
        "Ocorreu um erro ao tentar obter os rótulos da aba 'Extintores' (linha 5: valor do tipo empty). Verifique se os dados estão corretos."
    );
}

#[test]
fn test_table_sheet_shows_dates() {
    let (_fixture, mut report) = open(&[(
        "Data",
        vec![
            vec![Text("data"), Text("km")],
            vec![Date(45352.0), Number(45352.0)],
        ],
    )]);

    let view = table_view(&mut report, "Data");
    let row = view.table.row(0).unwrap();
    assert_eq!(row.get("data").unwrap().to_string(), "2024-03-01");
    assert_eq!(row.get("km").unwrap().to_string(), "45352");
    assert!(render_text(&View::Table(view.clone())).contains("2024-03-01"));
}

#[test]
fn test_table_sheet_highlights_overdue_rows() {
    let (_fixture, mut report) = open(&[(
        "Veículos Bloqueados",
        vec![
            vec![Text("placa"), Text("status")],
            vec![Text("ABC1D23"), Text("Vencido há 3 dias")],
            vec![Text("DEF4G56"), Text("Liberado")],
        ],
    )]);

    let view = table_view(&mut report, "Veículos Bloqueados");
    assert_eq!(view.caption(), "Dados carregados da aba 'Veículos Bloqueados':");
    assert_eq!(view.highlighted_rows(), 1);
    assert_eq!(
        view.styles[0].cells[0].to_css(),
        "background-color: #E74C3C; color: #FFFFFF;"
    );
    assert!(view.styles[1].cells.iter().all(|c| c.is_plain()));
}

#[test]
fn test_table_sheet_without_status_column() {
    let (_fixture, mut report) = open(&[(
        "Data",
        vec![vec![Text("data"), Text("evento")], vec![Text("01/03"), Text("vistoria")]],
    )]);

    let view = table_view(&mut report, "Data");
    assert_eq!(view.highlighted_rows(), 0);
    assert_eq!(view.table.row_count(), 1);
}

#[test]
fn test_empty_sheet_is_source_empty() {
    let (_fixture, mut report) = open(&[("Vazia", vec![])]);

    let err = report.render("Vazia").unwrap_err();
    assert_eq!(err.to_string(), "A aba selecionada (Vazia) não contém dados.");
}

#[test]
fn test_unknown_sheet() {
    let (_fixture, mut report) = open(&[("Extintores", vec![status_header()])]);

    assert!(matches!(
        report.render("Pneus"),
        Err(ReportError::SheetNotFound(name)) if name == "Pneus"
    ));
}

#[test]
fn test_header_only_sheet_gives_empty_chart() {
    let (_fixture, mut report) = open(&[("Extintores", vec![status_header()])]);

    let chart = sheet_view(&mut report, "Extintores").chart.expect("chart");
    assert!(chart.slices.is_empty());
    assert_eq!(chart.annotation.lines, vec!["Vencido em operação: 0"]);
}
