use anyhow::{Context, Result, anyhow};
use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::TableFormat;
use crate::options::{ReadOptions, WriteOptions};
use crate::table::{Table, Value};

/// Largest integer a worksheet number (an f64) holds exactly. Anything
/// bigger is written as text and reads back as a string.
const MAX_EXACT_INTEGER: u64 = 1 << 53;

pub struct XlsxFormat;

impl TableFormat for XlsxFormat {
    fn load(&self, path: &Path, opts: &ReadOptions) -> Result<Table> {
        let file = File::open(path)?;
        let mut workbook: Xlsx<_> = Xlsx::new(BufReader::new(file))
            .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

        let sheet = match &opts.sheet_name {
            Some(name) => name.clone(),
            None => workbook
                .sheet_names()
                .first()
                .cloned()
                .ok_or_else(|| anyhow!("Workbook {} has no sheets", path.display()))?,
        };

        let range = workbook.worksheet_range(&sheet).with_context(|| {
            format!("Failed to read sheet '{}' from {}", sheet, path.display())
        })?;

        let mut cells = range.rows().skip(opts.skip_rows);
        let columns = if opts.has_headers {
            cells
                .next()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        let rows = cells
            .map(|row| {
                row.iter()
                    .map(|cell| cell_value(cell, opts.infer_types))
                    .collect()
            })
            .collect();

        let mut table = Table::from_rows(columns, rows);
        if opts.infer_types {
            table.demote_integral_columns();
            table.unify_numeric_columns();
        }
        Ok(table)
    }

    fn save(&self, path: &Path, table: &Table, opts: &WriteOptions) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(opts.sheet_name.as_str())
            .with_context(|| format!("Invalid sheet name '{}'", opts.sheet_name))?;

        let mut first_row = 0;
        if opts.has_headers {
            for (col, name) in table.columns().iter().enumerate() {
                worksheet.write_string(0, column_number(col)?, name.as_str())?;
            }
            first_row = 1;
        }

        for (offset, row) in table.rows().iter().enumerate() {
            let row_number = u32::try_from(offset)
                .ok()
                .and_then(|r| r.checked_add(first_row))
                .ok_or_else(|| anyhow!("Too many rows for a worksheet"))?;

            for (col, value) in row.iter().enumerate() {
                let col = column_number(col)?;
                match value {
                    Value::Null => {}
                    Value::Bool(b) => {
                        worksheet.write_boolean(row_number, col, *b)?;
                    }
                    Value::Int(i) if i.unsigned_abs() > MAX_EXACT_INTEGER => {
                        worksheet.write_string(row_number, col, i.to_string())?;
                    }
                    Value::Int(i) => {
                        worksheet.write_number(row_number, col, *i as f64)?;
                    }
                    Value::Float(f) => {
                        worksheet.write_number(row_number, col, *f)?;
                    }
                    Value::Str(s) => {
                        worksheet.write_string(row_number, col, s.as_str())?;
                    }
                }
            }
        }

        workbook
            .save(path)
            .with_context(|| format!("Failed to save workbook: {}", path.display()))?;
        Ok(())
    }
}

fn column_number(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| anyhow!("Column {} is past the worksheet limit", col))
}

fn cell_value(cell: &Data, infer_types: bool) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::String(s) => Value::Str(s.clone()),
        _ if !infer_types => Value::Str(cell.to_string()),
        Data::Int(i) => Value::Int(*i),
        Data::Float(f) => Value::Float(*f),
        Data::Bool(b) => Value::Bool(*b),
        // dates and durations stay as their text rendering
        other => Value::Str(other.to_string()),
    }
}
