use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::Result;
use crate::exporter::record::{COLUMNS, Cell, TrackRecord};

pub const SHEET_NAME: &str = "Sheet1";

/// Fixed document creation date, so identical records give identical files.
const CREATION_DATE: (u16, u8, u8) = (2024, 1, 1);

/// Write `records` to an `.xlsx` file at `path`, one header row followed by
/// one row per record. Missing parent directories are created and an
/// existing file is replaced. The output is byte-for-byte reproducible.
pub fn write_records(records: &[TrackRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!("Creating output directory {}", parent.display());
        }
        fs::create_dir_all(parent)?;
    }

    let (year, month, day) = CREATION_DATE;
    let properties =
        DocProperties::new().set_creation_datetime(&ExcelDateTime::from_ymd(year, month, day)?);

    let mut workbook = Workbook::new();
    workbook.set_properties(&properties);
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        for (col, cell) in record.cells().into_iter().enumerate() {
            match cell {
                Cell::Text(text) => worksheet.write_string(row, col as u16, text)?,
                Cell::Number(value) => worksheet.write_number(row, col as u16, value)?,
            };
        }
    }

    workbook.save(path)?;

    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
