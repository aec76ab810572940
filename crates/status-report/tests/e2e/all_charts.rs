//! The all-charts selection: one panel per chartable sheet.

use crate::{status_header, xlsx_fixture, Blank, Number, Shared, Text};
use status_report::prelude::*;
use status_report::render::render_text;

fn workbook() -> crate::Fixture {
    xlsx_fixture(&[
        (
            "Extintores",
            vec![
                status_header(),
                vec![Text("ABC1D23"), Text("Conforme"), Blank],
                vec![Text("DEF4G56"), Text("Vencido"), Text("EM OPERAÇÃO")],
            ],
        ),
        (
            "CIV",
            vec![vec![Text("placa"), Text("validade")], vec![Text("ABC1D23"), Number(1.0)]],
        ),
        (
            "Corrompida",
            vec![vec![Text("status")], vec![Shared(7)]],
        ),
        (
            "Revenue",
            vec![vec![Text("mês"), Text("valor")], vec![Text("jan"), Number(10.0)]],
        ),
        ("Vazia", vec![]),
        (
            "Tacógrafo",
            vec![
                vec![Text("status")],
                vec![Text("Atenção")],
                vec![Text("Atenção")],
            ],
        ),
        (
            "Pneus",
            vec![vec![Text("status")], vec![Text("Conforme")], vec![Number(0.0)]],
        ),
    ])
}

fn panels(report: &mut Report<Source>) -> Vec<Panel> {
    match report.render("Todos os Gráficos").expect("render") {
        View::AllCharts { panels } => panels,
        other => panic!("expected all-charts view, got {other:?}"),
    }
}

#[test]
fn test_menu_lists_sheets_then_all_charts() {
    let fixture = workbook();
    let report = Report::open(&fixture.path, ReportConfig::default()).unwrap();

    assert_eq!(
        report.menu(),
        vec![
            "Extintores",
            "CIV",
            "Corrompida",
            "Revenue",
            "Vazia",
            "Tacógrafo",
            "Pneus",
            "Todos os Gráficos",
        ]
    );
}

#[test]
fn test_failures_are_contained_per_sheet() {
    let fixture = workbook();
    let mut report = Report::open(&fixture.path, ReportConfig::default()).unwrap();
    let panels = panels(&mut report);

    assert_eq!(panels.len(), 4, "{panels:#?}");

    match &panels[0] {
        Panel::Chart(chart) => assert_eq!(
            chart.title.as_deref(),
            Some("Distribuição de Status - Extintores")
        ),
        other => panic!("unexpected panel {other:?}"),
    }
    match &panels[1] {
        Panel::Failed { sheet, notice } => {
            assert_eq!(sheet, "Corrompida");
            assert_eq!(notice.level, NoticeLevel::Error);
            assert!(notice
                .message
                .starts_with("Erro durante a leitura do arquivo Excel:"));
        }
        other => panic!("unexpected panel {other:?}"),
    }
    match &panels[2] {
        Panel::Chart(chart) => {
            assert_eq!(chart.annotation.lines, vec!["Atenção: 2", "Vencido em operação: 0"]);
        }
        other => panic!("unexpected panel {other:?}"),
    }
    match &panels[3] {
        Panel::Failed { sheet, notice } => {
            assert_eq!(sheet, "Pneus");
            assert_eq!(notice.level, NoticeLevel::Warning);
        }
        other => panic!("unexpected panel {other:?}"),
    }
}

#[test]
fn test_custom_all_charts_label() {
    let fixture = workbook();
    let config = ReportConfig {
        all_charts_label: "Todos".to_string(),
        ..Default::default()
    };
    let mut report = Report::open(&fixture.path, config).unwrap();

    assert_eq!(report.menu().last().map(String::as_str), Some("Todos"));
    assert!(matches!(report.render("Todos"), Ok(View::AllCharts { .. })));
    assert!(matches!(
        report.render("Todos os Gráficos"),
        Err(ReportError::SheetNotFound(_))
    ));
}

#[test]
fn test_all_charts_text() {
    let fixture = workbook();
    let mut report = Report::open(&fixture.path, ReportConfig::default()).unwrap();
    let text = render_text(&report.render("Todos os Gráficos").unwrap());

    assert!(text.contains("Distribuição de Status - Extintores"));
    assert!(text.contains("Distribuição de Status - Tacógrafo"));
    assert!(text.contains("Corrompida\nErro: "));
    assert!(!text.contains("Revenue"));
    assert!(!text.contains("CIV"));
}
