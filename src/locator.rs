//! Folder lookup by name.
//!
//! A search starts in one directory, walks its subtrees depth-first, then climbs
//! to the parent and repeats, until a directory with the requested name turns up
//! or nothing reachable is left. The first match wins; sibling subtrees after a
//! successful one are never visited, and siblings are taken in whatever order
//! the filesystem lists them.

use anyhow::Result;
use log::{debug, warn};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::config::{LocatorConfig, find_locator_config, load_locator_config};
use crate::error::LocatorError;

/// Resolves folder names to paths. Holds only immutable settings, so one
/// instance can serve any number of searches, from any thread.
#[derive(Debug, Clone, Default)]
pub struct Locator {
    config: LocatorConfig,
}

/// Directories already visited during one search.
///
/// Keyed by canonical path when it can be resolved, so a symlink pointing back
/// at a visited ancestor counts as visited.
#[derive(Debug, Default)]
struct Explored(HashSet<PathBuf>);

impl Explored {
    fn key(path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }

    fn insert(&mut self, path: &Path) {
        self.0.insert(Self::key(path));
    }

    fn contains(&self, path: &Path) -> bool {
        self.0.contains(&Self::key(path))
    }
}

/// A directory whose children are still being worked through.
struct Frame {
    path: PathBuf,
    children: std::vec::IntoIter<PathBuf>,
}

enum Visit {
    Found(PathBuf),
    Pending(Frame),
}

impl Locator {
    pub fn new(root_marker: impl Into<String>) -> Self {
        Self::from_config(LocatorConfig::with_root_marker(root_marker))
    }

    pub fn from_config(config: LocatorConfig) -> Self {
        Self { config }
    }

    pub fn from_config_file(path: &Path) -> Result<Self> {
        Ok(Self::from_config(load_locator_config(path)?))
    }

    /// Uses the nearest `dirseek.toml` above the working directory, or the
    /// defaults when there is none.
    pub fn discover() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        match find_locator_config(&cwd) {
            Some(path) => {
                debug!("Using locator config {}", path.display());
                Self::from_config_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn root_marker(&self) -> &str {
        &self.config.root_marker
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Finds a directory named `target_name`, starting at `search_path`.
    ///
    /// Returns `Ok(None)` when the whole reachable region has been searched
    /// without a match. Listing failures come back as the underlying `io::Error`.
    pub fn find_folder_path(
        &self,
        target_name: &str,
        search_path: impl AsRef<Path>,
    ) -> Result<Option<PathBuf>> {
        validate_target_name(target_name)?;

        let start = normalize(&std::path::absolute(search_path.as_ref())?);
        debug!(
            "🔍 Searching for folder '{}' from {}",
            target_name,
            start.display()
        );

        let mut explored = Explored::default();
        let mut stack: Vec<Frame> = Vec::new();

        match self.visit(start, target_name, &mut explored, true)? {
            Visit::Found(path) => return Ok(Some(self.found(path))),
            Visit::Pending(frame) => stack.push(frame),
        }

        while let Some(mut frame) = stack.pop() {
            if let Some(child) = frame.children.next() {
                stack.push(frame);

                if child.is_dir() && self.is_valid_path(&child, &explored) {
                    match self.visit(child, target_name, &mut explored, false)? {
                        Visit::Found(path) => return Ok(Some(self.found(path))),
                        Visit::Pending(next) => stack.push(next),
                    }
                }
                continue;
            }

            // Subtrees exhausted; climb. For any frame above the bottom of the
            // stack the parent is already explored, so this only ever climbs
            // out of the directory the search is currently rooted in.
            let Some(parent) = frame.path.parent() else {
                continue;
            };

            if self.is_valid_path(parent, &explored) {
                match self.visit(parent.to_path_buf(), target_name, &mut explored, false)? {
                    Visit::Found(path) => return Ok(Some(self.found(path))),
                    Visit::Pending(next) => stack.push(next),
                }
            }
        }

        debug!("Folder '{}' not found", target_name);
        Ok(None)
    }

    /// Like [`Locator::find_folder_path`] from the current working directory,
    /// with a miss turned into [`LocatorError::DirectoryNotFound`].
    pub fn resolve_directory(&self, directory_name: &str) -> Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        self.resolve_directory_from(directory_name, &cwd)
    }

    pub fn resolve_directory_from(
        &self,
        directory_name: &str,
        search_path: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        match self.find_folder_path(directory_name, search_path)? {
            Some(path) => Ok(path),
            None => Err(LocatorError::DirectoryNotFound {
                name: directory_name.to_string(),
            }
            .into()),
        }
    }

    fn found(&self, path: PathBuf) -> PathBuf {
        debug!("✅ Found folder at {}", path.display());
        path
    }

    /// Marks `path` explored, then either returns the matching child or a frame
    /// holding every child left to descend into.
    fn visit(
        &self,
        path: PathBuf,
        target_name: &str,
        explored: &mut Explored,
        is_start: bool,
    ) -> Result<Visit> {
        explored.insert(&path);

        let children = match list_children(&path) {
            Ok(children) => children,
            Err(e)
                if !is_start
                    && self.config.skip_unreadable
                    && e.kind() == io::ErrorKind::PermissionDenied =>
            {
                warn!("⚠️ Skipping unreadable folder {}: {}", path.display(), e);
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        let target = OsStr::new(target_name);
        if children.iter().any(|child| child.file_name() == Some(target)) {
            let candidate = path.join(target_name);
            if candidate.is_dir() {
                return Ok(Visit::Found(candidate));
            }
        }

        Ok(Visit::Pending(Frame {
            path,
            children: children.into_iter(),
        }))
    }

    /// A path may be searched if it hasn't been yet and isn't the root marker folder.
    fn is_valid_path(&self, path: &Path, explored: &Explored) -> bool {
        if explored.contains(path) {
            return false;
        }

        let marker = self.config.root_marker.as_str();
        marker.is_empty() || path.file_name() != Some(OsStr::new(marker))
    }
}

/// Folds `.` and `..` out of an absolute path so that climbing with
/// `parent()` follows real ancestors.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

fn list_children(path: &Path) -> io::Result<Vec<PathBuf>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(path)? {
        children.push(entry?.path());
    }
    Ok(children)
}

fn validate_target_name(target_name: &str) -> Result<()> {
    let mut components = Path::new(target_name).components();
    let is_plain_name = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == OsStr::new(target_name)
    );

    if !is_plain_name {
        return Err(LocatorError::InvalidTargetName {
            name: target_name.to_string(),
        }
        .into());
    }
    Ok(())
}
