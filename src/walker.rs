//! Path rewriting: applies resolved placeholder values to generated file
//! paths and moves the files accordingly.

use crate::error::{Error, Result};
use crate::replacer::Replacer;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Rewrites every file path under `root` through the replacer.
///
/// A single file is renamed in place; a directory is walked recursively and
/// each contained file renamed independently. Directories themselves are
/// never renamed: a placeholder in a directory segment materializes through
/// the destination paths of the files it contains, since moving a file
/// creates its new nested directories.
///
/// A failure on one file aborts the remaining walk; files already moved stay
/// moved.
pub fn rewrite<P: AsRef<Path>>(root: P, replacer: &Replacer) -> Result<()> {
    let root = root.as_ref();
    debug!("Replacing path placeholders in [{}]...", root.display());

    if !root.exists() {
        return Err(Error::PathNotFound { path: root.display().to_string() });
    }

    if root.is_dir() {
        // Snapshot the complete file list before moving anything; renames
        // must not feed back into the walk, and the walk order itself
        // carries no meaning.
        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| wrap_walk_error(root, e))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        for file in files {
            rewrite_file(&file, replacer)?;
        }
    } else {
        rewrite_file(root, replacer)?;
    }

    Ok(())
}

/// Applies the path substitution to one file and moves it when the resolved
/// path differs from the original.
fn rewrite_file(file: &Path, replacer: &Replacer) -> Result<()> {
    let Some(path) = file.to_str() else {
        return Err(Error::Substitution {
            path: file.display().to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, "path is not valid UTF-8"),
        });
    };

    let new_path = replacer.replace_path_placeholders(path)?;
    if new_path == path {
        return Ok(());
    }

    let dest = Path::new(&new_path);
    if dest.exists() {
        return Err(Error::Substitution {
            path: path.to_string(),
            source: io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("destination [{}] already exists", dest.display()),
            ),
        });
    }
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| Error::Substitution { path: path.to_string(), source })?;
    }
    fs::rename(file, dest).map_err(|source| Error::Substitution { path: path.to_string(), source })?;

    debug!("File [{}] moved to [{}]", path, new_path);
    Ok(())
}

fn wrap_walk_error(root: &Path, e: walkdir::Error) -> Error {
    let path = e.path().unwrap_or(root).display().to_string();
    Error::Substitution { path, source: e.into() }
}
