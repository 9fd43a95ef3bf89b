pub mod csv;
pub mod xlsx;

use anyhow::Result;
use std::path::Path;

use crate::constants::{CSV_EXTENSION, XLSX_EXTENSION};
use crate::error::LocatorError;
use crate::formats::csv::CsvFormat;
use crate::formats::xlsx::XlsxFormat;
use crate::options::{ReadOptions, WriteOptions};
use crate::table::Table;

/// A file format the adapters can load tables from and save tables to.
pub trait TableFormat {
    fn load(&self, path: &Path, opts: &ReadOptions) -> Result<Table>;
    fn save(&self, path: &Path, table: &Table, opts: &WriteOptions) -> Result<()>;
}

/// Picks the reader/writer for `path` by its extension. Matching is exact:
/// `data.CSV` is not a CSV file here.
pub fn get_table_format(path: &Path) -> Result<Box<dyn TableFormat>> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .unwrap_or_default();

    match extension.as_str() {
        CSV_EXTENSION => Ok(Box::new(CsvFormat)),
        XLSX_EXTENSION => Ok(Box::new(XlsxFormat)),
        _ => Err(LocatorError::UnsupportedFormat { extension }.into()),
    }
}
