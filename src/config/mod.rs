use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_FILE, DEFAULT_ROOT_MARKER};

/// Settings shared by every search a `Locator` performs.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LocatorConfig {
    /// Folder name the search never enters or climbs into. Empty disables the boundary.
    pub root_marker: String,

    /// Treat subfolders that can't be listed (permission denied) as empty instead of failing.
    pub skip_unreadable: bool,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            root_marker: DEFAULT_ROOT_MARKER.to_string(),
            skip_unreadable: false,
        }
    }
}

impl LocatorConfig {
    pub fn with_root_marker(root_marker: impl Into<String>) -> Self {
        Self {
            root_marker: root_marker.into(),
            ..Self::default()
        }
    }
}

pub fn load_locator_config(path: &Path) -> Result<LocatorConfig> {
    let toml_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locator config at {}", path.display()))?;

    let config: LocatorConfig = toml::from_str(&toml_str).with_context(|| {
        format!(
            "🛑 Corrupted locator config found at {}\n\
                 → The TOML syntax is invalid or a key has the wrong type.\n\
                 → Expected keys: root_marker (string), skip_unreadable (bool).",
            path.display()
        )
    })?;

    Ok(config)
}

/// Looks for a `dirseek.toml` in `start` and each of its parents.
pub fn find_locator_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_use_project_marker() {
        let config = LocatorConfig::default();
        assert_eq!(config.root_marker, "PolyFinance");
        assert!(!config.skip_unreadable);
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dirseek.toml");
        fs::write(&path, "root_marker = \"Research\"\nskip_unreadable = true\n").unwrap();

        let config = load_locator_config(&path).unwrap();
        assert_eq!(config.root_marker, "Research");
        assert!(config.skip_unreadable);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dirseek.toml");
        fs::write(&path, "skip_unreadable = true\n").unwrap();

        let config = load_locator_config(&path).unwrap();
        assert_eq!(config.root_marker, "PolyFinance");
        assert!(config.skip_unreadable);
    }

    #[test]
    fn test_empty_marker_is_kept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dirseek.toml");
        fs::write(&path, "root_marker = \"\"\n").unwrap();

        let config = load_locator_config(&path).unwrap();
        assert_eq!(config.root_marker, "");
    }

    #[test]
    fn test_corrupted_config_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dirseek.toml");
        fs::write(&path, "root_marker = [unterminated").unwrap();

        let err = load_locator_config(&path).unwrap_err();
        assert!(err.to_string().contains("Corrupted locator config"));
        assert!(err.to_string().contains("dirseek.toml"));
    }

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("a/dirseek.toml"), "root_marker = \"a\"\n").unwrap();

        let found = find_locator_config(&nested).unwrap();
        assert_eq!(found, dir.path().join("a/dirseek.toml"));
    }

    #[test]
    fn test_nearest_config_wins() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("a/dirseek.toml"), "").unwrap();
        fs::write(nested.join("dirseek.toml"), "").unwrap();

        assert_eq!(find_locator_config(&nested), Some(nested.join("dirseek.toml")));
    }

    #[test]
    fn test_missing_config_file_fails() {
        let dir = tempdir().unwrap();
        let result = load_locator_config(&dir.path().join("nope.toml"));
        assert!(result.is_err());
    }
}
