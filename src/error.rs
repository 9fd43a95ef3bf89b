//! Error conditions raised by the locator and the data adapters.
//!
//! Operations return `anyhow::Result`; these variants travel inside the
//! `anyhow::Error` and can be recovered with `downcast_ref::<LocatorError>()`.
//! Filesystem failures are not wrapped here, they surface as the original
//! `std::io::Error`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    /// No folder with this name is reachable from the search start.
    DirectoryNotFound { name: String },
    /// The file extension has no reader/writer. Empty when the file has none.
    UnsupportedFormat { extension: String },
    /// The folder name is empty or looks like a path.
    InvalidTargetName { name: String },
}

impl std::fmt::Display for LocatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocatorError::DirectoryNotFound { name } => {
                write!(f, "🛑 Folder {} not found.", name)
            }
            LocatorError::UnsupportedFormat { extension } if extension.is_empty() => {
                write!(f, "🛑 File has no extension; expected .csv or .xlsx.")
            }
            LocatorError::UnsupportedFormat { extension } => {
                write!(f, "🛑 File extension .{} not supported.", extension)
            }
            LocatorError::InvalidTargetName { name } => {
                write!(f, "🛑 '{}' is not a folder name.", name)
            }
        }
    }
}

impl std::error::Error for LocatorError {}

impl LocatorError {
    /// Pulls a `LocatorError` back out of an `anyhow::Error`, if that is what it carries.
    pub fn from_anyhow(err: &anyhow::Error) -> Option<&LocatorError> {
        err.downcast_ref::<LocatorError>()
    }
}
