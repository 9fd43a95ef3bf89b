/// Folder name that stops upward searches unless configured otherwise.
pub const DEFAULT_ROOT_MARKER: &str = "PolyFinance";

/// Conventional name for a locator config file.
pub const CONFIG_FILE: &str = "dirseek.toml";

pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

pub const CSV_EXTENSION: &str = "csv";
pub const XLSX_EXTENSION: &str = "xlsx";
