use anyhow::Result;
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::locator::Locator;

impl Locator {
    /// Moves `src_file_name` out of the working directory into the folder
    /// named `dest_directory_name`, keeping the file name. Returns the new path.
    pub fn move_file(&self, src_file_name: &str, dest_directory_name: &str) -> Result<PathBuf> {
        let starting_path = std::env::current_dir()?;
        let dest_directory_path = self.resolve_directory_from(dest_directory_name, &starting_path)?;

        let src_file_path = starting_path.join(src_file_name);
        let dest_file_path = dest_directory_path.join(src_file_name);

        move_path(&src_file_path, &dest_file_path)?;

        info!(
            "📦 Moved file {} to folder {}.",
            src_file_name,
            dest_directory_path.display()
        );
        Ok(dest_file_path)
    }
}

/// Renames `src` to `dest`, copying then deleting when the two sit on
/// different filesystems.
fn move_path(src: &Path, dest: &Path) -> io::Result<()> {
    move_path_with(src, dest, |from, to| fs::rename(from, to))
}

fn move_path_with<F>(src: &Path, dest: &Path, rename: F) -> io::Result<()>
where
    F: FnOnce(&Path, &Path) -> io::Result<()>,
{
    match rename(src, dest) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(src, dest)?;
            fs::remove_file(src)
        }
        other => other,
    }
}
