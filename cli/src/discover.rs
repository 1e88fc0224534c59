//! Spec file discovery.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Default spec file looked up when no path is given.
const DEFAULT_FILE: &str = "packspec.yml";

/// Default spec directory looked up when no path is given.
const DEFAULT_DIR: &str = "packspec";

/// Resolve the positional path argument to the list of spec files to load.
///
/// An explicit file is taken as-is; an explicit directory contributes its
/// `*.yml` files, sorted. Without a path, `packspec.yml` wins over the
/// `packspec/` directory; neither existing means nothing to run.
pub fn discover(path: Option<&Path>) -> Result<Vec<PathBuf>> {
    match path {
        Some(path) if path.is_file() => Ok(vec![path.to_path_buf()]),
        Some(path) if path.is_dir() => yml_files(path),
        Some(path) => bail!("no such file or directory: {}", path.display()),
        None => {
            let file = Path::new(DEFAULT_FILE);
            if file.is_file() {
                return Ok(vec![file.to_path_buf()]);
            }
            let dir = Path::new(DEFAULT_DIR);
            if dir.is_dir() {
                return yml_files(dir);
            }
            Ok(Vec::new())
        }
    }
}

fn yml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in dir.read_dir()? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "yml") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
