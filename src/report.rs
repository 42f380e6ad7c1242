/// Spreadsheet export for the analysis view
///
/// The exported workbook mirrors the on-screen analysis: document info block,
/// the validation-results table, the summary counts, and the image-analysis
/// table, all on a single "Analysis Report" sheet. Building the rows is kept
/// separate from writing the file so the layout can be tested directly.
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use tokio::task;

use crate::error::FileError;
use crate::state::samples::{DocumentOverview, ImageAnalysisResult, ValidationResult};

/// One spreadsheet cell. Counts are written as numbers, everything else as
/// text.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }
}

/// Suggested download name: `FAIR_Analysis_<base-name>_<ISO-date>.xlsx`.
pub fn export_file_name(document_name: &str, date: NaiveDate) -> String {
    let base = document_name
        .strip_suffix(".pdf")
        .unwrap_or(document_name);
    format!("FAIR_Analysis_{}_{}.xlsx", base, date.format("%Y-%m-%d"))
}

/// Assemble the fixed row layout of the report sheet.
pub fn report_rows(
    overview: &DocumentOverview,
    results: &[ValidationResult],
    images: &[ImageAnalysisResult],
) -> Vec<Vec<Cell>> {
    let summary = crate::state::samples::summarize(results);

    let mut rows = vec![
        vec![Cell::text("FAIR Document Analysis Report")],
        Vec::new(),
        vec![Cell::text("Document Information")],
        vec![Cell::text("Document ID"), Cell::text(overview.id)],
        vec![Cell::text("Document Name"), Cell::text(overview.name.clone())],
        vec![Cell::text("Commodity"), Cell::text(overview.commodity)],
        vec![Cell::text("Upload Date"), Cell::text(overview.uploaded.clone())],
        vec![
            Cell::text("Overall Status"),
            Cell::text(overview.overall_status.label()),
        ],
        vec![
            Cell::text("Confidence Score"),
            Cell::text(format!("{}%", overview.confidence)),
        ],
        Vec::new(),
        vec![Cell::text("Validation Results")],
        vec![
            Cell::text("Field"),
            Cell::text("Expected Value"),
            Cell::text("Actual Value"),
            Cell::text("Status"),
            Cell::text("Source"),
        ],
    ];

    for result in results {
        rows.push(vec![
            Cell::text(result.field),
            Cell::text(result.expected),
            Cell::text(result.actual),
            Cell::text(result.status.label()),
            Cell::text(result.source),
        ]);
    }

    rows.push(Vec::new());
    rows.push(vec![Cell::text("Summary")]);
    rows.push(vec![
        Cell::text("Tests Passed"),
        Cell::Number(summary.passed as f64),
    ]);
    rows.push(vec![
        Cell::text("Warnings"),
        Cell::Number(summary.warnings as f64),
    ]);
    rows.push(vec![
        Cell::text("Failed Tests"),
        Cell::Number(summary.failed as f64),
    ]);

    rows.push(Vec::new());
    rows.push(vec![Cell::text("Image Analysis")]);
    rows.push(vec![
        Cell::text("Type"),
        Cell::text("Status"),
        Cell::text("Confidence"),
        Cell::text("Description"),
    ]);
    for image in images {
        rows.push(vec![
            Cell::text(image.kind),
            Cell::text(image.status.label()),
            Cell::text(format!("{}%", image.confidence)),
            Cell::text(image.description),
        ]);
    }

    rows
}

/// Write the report workbook in the background and hand back the path.
pub async fn write_report(path: PathBuf, rows: Vec<Vec<Cell>>) -> Result<PathBuf, String> {
    task::spawn_blocking(move || {
        write_workbook(&path, &rows)
            .map(|_| path)
            .map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| format!("Task join error: {}", e))?
}

fn write_workbook(path: &Path, rows: &[Vec<Cell>]) -> Result<(), FileError> {
    let export_error = |source| FileError::Export {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Analysis Report").map_err(export_error)?;

    for (row_index, row) in rows.iter().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(value) => {
                    sheet
                        .write_string(row_index as u32, col_index as u16, value.as_str())
                        .map_err(export_error)?;
                }
                Cell::Number(value) => {
                    sheet
                        .write_number(row_index as u32, col_index as u16, *value)
                        .map_err(export_error)?;
                }
            }
        }
    }

    workbook.save(path).map_err(export_error)?;
    Ok(())
}
