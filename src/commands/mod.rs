//! Adapters that resolve a folder name from the working directory and then
//! hand the real work to a table format or the filesystem.

pub mod move_file;
pub mod read;
pub mod write;
