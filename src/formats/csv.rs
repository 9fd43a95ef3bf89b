use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

use super::TableFormat;
use crate::options::{ReadOptions, WriteOptions};
use crate::table::{Table, Value};

pub struct CsvFormat;

impl TableFormat for CsvFormat {
    fn load(&self, path: &Path, opts: &ReadOptions) -> Result<Table> {
        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(opts.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        for record in reader.records().skip(opts.skip_rows) {
            let record =
                record.with_context(|| format!("Failed to parse CSV file: {}", path.display()))?;
            records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        let mut records = records.into_iter();
        let columns = if opts.has_headers {
            records.next().unwrap_or_default()
        } else {
            Vec::new()
        };

        let rows = records
            .map(|fields| {
                fields
                    .iter()
                    .map(|field| parse_field(field, opts.infer_types))
                    .collect()
            })
            .collect();

        let mut table = Table::from_rows(columns, rows);
        if opts.infer_types {
            table.unify_numeric_columns();
        }
        Ok(table)
    }

    fn save(&self, path: &Path, table: &Table, opts: &WriteOptions) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = csv::WriterBuilder::new()
            .delimiter(opts.delimiter)
            .from_writer(file);

        if opts.has_headers {
            writer
                .write_record(table.columns())
                .with_context(|| format!("Failed to write CSV header: {}", path.display()))?;
        }

        for row in table.rows() {
            writer
                .write_record(row.iter().map(Value::to_field))
                .with_context(|| format!("Failed to write CSV row: {}", path.display()))?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn parse_field(field: &str, infer_types: bool) -> Value {
    if infer_types {
        Value::infer(field)
    } else if field.is_empty() {
        Value::Null
    } else {
        Value::Str(field.to_string())
    }
}
