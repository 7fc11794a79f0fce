//! Spreadsheet artifact: one worksheet per report table.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, Worksheet};
use tracing::{info, warn};

use crate::ResultsResult;
use crate::book::ReportBook;
use crate::manifest::SweepManifest;
use crate::types::{Cell, ReportTable};

/// Write the workbook and, when given, its manifest beside it.
///
/// Both payloads are rendered before anything touches disk. A failed manifest
/// write removes the workbook again.
pub fn save_artifacts(
    book: &ReportBook,
    path: &Path,
    manifest: Option<&SweepManifest>,
) -> ResultsResult<Option<PathBuf>> {
    let bytes = xlsx_bytes(book)?;
    let manifest_json = manifest.map(SweepManifest::to_json).transpose()?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    info!(
        path = %path.display(),
        tables = book.tables().len(),
        rows = book.row_count(),
        "saved report workbook"
    );

    let Some(json) = manifest_json else {
        return Ok(None);
    };
    let manifest_path = SweepManifest::path_for(path);
    if let Err(e) = std::fs::write(&manifest_path, json) {
        warn!(path = %manifest_path.display(), error = %e, "manifest write failed, removing workbook");
        let _ = std::fs::remove_file(path);
        return Err(e.into());
    }
    Ok(Some(manifest_path))
}

/// In-memory xlsx bytes: one named worksheet per table, missing cells left blank.
pub fn xlsx_bytes(book: &ReportBook) -> ResultsResult<Vec<u8>> {
    let mut workbook = build_workbook(book)?;
    Ok(workbook.save_to_buffer()?)
}

fn build_workbook(book: &ReportBook) -> ResultsResult<Workbook> {
    let mut workbook = Workbook::new();
    for table in book.tables() {
        let sheet = workbook.add_worksheet();
        fill_sheet(sheet, table)?;
    }
    Ok(workbook)
}

fn fill_sheet(sheet: &mut Worksheet, table: &ReportTable) -> ResultsResult<()> {
    sheet.set_name(table.title())?;

    for (col, label) in table.header().iter().enumerate() {
        sheet.write_string(0, col as u16, *label)?;
    }

    for (r, row) in table.rows().iter().enumerate() {
        let r = (r + 1) as u32;
        for (col, cell) in row.cells().iter().enumerate() {
            if let Cell::Number(v) = cell {
                sheet.write_number(r, col as u16, *v)?;
            }
        }
    }

    Ok(())
}
