use anyhow::Result;
use log::info;

use crate::formats::get_table_format;
use crate::locator::Locator;
use crate::options::ReadOptions;
use crate::table::Table;

impl Locator {
    /// Loads `file_name` from the folder named `directory_name`, wherever the
    /// search from the working directory finds it.
    pub fn read_data(
        &self,
        directory_name: &str,
        file_name: &str,
        opts: &ReadOptions,
    ) -> Result<Table> {
        let directory_path = self.resolve_directory(directory_name)?;
        let file_path = directory_path.join(file_name);

        let format = get_table_format(&file_path)?;
        let table = format.load(&file_path, opts)?;

        info!(
            "📄 Loaded file {} from folder {}.",
            file_name,
            directory_path.display()
        );
        Ok(table)
    }
}
