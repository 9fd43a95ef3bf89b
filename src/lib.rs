//! dirseek
//!
//! Find a folder by name somewhere above or below the working directory, then
//! read or write tables inside it without spelling out where it lives.
//!
//! ```no_run
//! use dirseek::{Locator, ReadOptions};
//!
//! let locator = Locator::new("PolyFinance");
//! let sectors = locator.read_data("Data", "sectors.csv", &ReadOptions::default())?;
//! println!("{} rows", sectors.row_count());
//! # Ok::<(), anyhow::Error>(())
//! ```

mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formats;
pub mod locator;
pub mod options;
pub mod table;

#[cfg(test)]
mod test_utils;

pub use config::{LocatorConfig, find_locator_config, load_locator_config};
pub use error::LocatorError;
pub use locator::Locator;
pub use options::{ReadOptions, WriteOptions};
pub use table::{Table, Value};
