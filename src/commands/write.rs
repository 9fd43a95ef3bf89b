use anyhow::Result;
use log::info;

use crate::formats::get_table_format;
use crate::locator::Locator;
use crate::options::WriteOptions;
use crate::table::Table;

impl Locator {
    /// Saves `table` as `file_name` inside the folder named `directory_name`.
    /// The folder must already exist somewhere reachable from the working directory.
    pub fn write_data(
        &self,
        directory_name: &str,
        file_name: &str,
        table: &Table,
        opts: &WriteOptions,
    ) -> Result<()> {
        let directory_path = self.resolve_directory(directory_name)?;
        let file_path = directory_path.join(file_name);

        let format = get_table_format(&file_path)?;
        format.save(&file_path, table, opts)?;

        info!(
            "💾 Saved file {} to folder {}.",
            file_name,
            directory_path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LocatorError;
    use crate::test_utils::run_test_in_temp_dir;
    use crate::{Locator, ReadOptions, Table, Value, WriteOptions};
    use std::fs;

    fn holdings() -> Table {
        Table::from_rows(
            vec!["ticker".to_string(), "shares".to_string(), "weight".to_string()],
            vec![
                vec!["AAPL".into(), Value::Int(10), 0.25.into()],
                vec!["XOM".into(), Value::Int(3), 0.75.into()],
                vec!["CASH".into(), Value::Null, 0.0.into()],
            ],
        )
    }

    #[test]
    fn test_csv_round_trip() {
        run_test_in_temp_dir(|root| {
            fs::create_dir_all(root.join("Research/Output")).unwrap();
            let scripts = root.join("Research/scripts");
            fs::create_dir_all(&scripts).unwrap();
            std::env::set_current_dir(&scripts).unwrap();

            let locator = Locator::new("ProjectRoot");
            let table = holdings();
            locator
                .write_data("Output", "holdings.csv", &table, &WriteOptions::default())
                .unwrap();

            assert!(root.join("Research/Output/holdings.csv").is_file());

            let loaded = locator
                .read_data("Output", "holdings.csv", &ReadOptions::default())
                .unwrap();
            assert_eq!(loaded, table);
        });
    }

    #[test]
    fn test_xlsx_round_trip() {
        run_test_in_temp_dir(|root| {
            fs::create_dir_all(root.join("Output")).unwrap();

            let locator = Locator::new("ProjectRoot");
            let table = holdings();
            locator
                .write_data("Output", "holdings.xlsx", &table, &WriteOptions::default())
                .unwrap();
            let loaded = locator
                .read_data("Output", "holdings.xlsx", &ReadOptions::default())
                .unwrap();

            assert_eq!(loaded.columns(), table.columns());
            assert_eq!(loaded.row_count(), table.row_count());
            assert_eq!(loaded.get(0, "shares"), Some(&Value::Int(10)));
            assert_eq!(loaded.get(2, "shares"), Some(&Value::Null));
            assert_eq!(loaded.get(1, "weight"), Some(&Value::Float(0.75)));
        });
    }

    #[test]
    fn test_unsupported_extension_writes_nothing() {
        run_test_in_temp_dir(|root| {
            fs::create_dir_all(root.join("Output")).unwrap();

            let err = Locator::new("ProjectRoot")
                .write_data("Output", "data.txt", &holdings(), &WriteOptions::default())
                .unwrap_err();

            assert_eq!(
                LocatorError::from_anyhow(&err),
                Some(&LocatorError::UnsupportedFormat {
                    extension: "txt".to_string()
                })
            );
            assert!(!root.join("Output/data.txt").exists());
        });
    }

    #[test]
    fn test_missing_directory() {
        run_test_in_temp_dir(|root| {
            let start = root.join("ProjectRoot/scripts");
            fs::create_dir_all(&start).unwrap();
            std::env::set_current_dir(&start).unwrap();

            let err = Locator::new("ProjectRoot")
                .write_data("Output", "holdings.csv", &holdings(), &WriteOptions::default())
                .unwrap_err();

            assert_eq!(
                LocatorError::from_anyhow(&err),
                Some(&LocatorError::DirectoryNotFound {
                    name: "Output".to_string()
                })
            );
        });
    }
}
