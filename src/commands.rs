//! Thin filesystem commands driven by the runner: template copy and content
//! substitution.

use crate::error::{Error, Result};
use crate::replacer::Replacer;
use crate::resource::Resource;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copies the resource's source template (directory or single file) to
/// `target_folder/target_name` and returns the created path.
///
/// The destination must not already exist; intermediate directories are
/// created on demand.
pub fn copy_template(resource: &Resource) -> Result<PathBuf> {
    let source = Path::new(resource.source_folder_path()).join(resource.source_name());
    let target = Path::new(resource.target_folder_path()).join(resource.target_name());

    if !source.exists() {
        return Err(Error::PathNotFound { path: source.display().to_string() });
    }
    if target.exists() {
        return Err(Error::Config(format!(
            "target [{}] already exists",
            target.display()
        )));
    }

    if source.is_dir() {
        for entry in WalkDir::new(&source) {
            let entry = entry.map_err(|e| Error::Io(e.into()))?;
            let relative = entry
                .path()
                .strip_prefix(&source)
                .map_err(|e| Error::Config(e.to_string()))?;
            let dest = target.join(relative);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&dest)?;
            } else {
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(entry.path(), &dest)?;
            }
        }
    } else {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&source, &target)?;
    }

    debug!("Created [{}] from template [{}]", target.display(), source.display());
    Ok(target)
}

/// Builds a matcher for file extensions that carry text placeholders.
pub fn extension_matcher(extensions: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for extension in extensions {
        let glob = Glob::new(&format!("*.{}", extension.trim()))
            .map_err(|e| Error::Config(format!("invalid extension [{extension}]: {e}")))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| Error::Config(e.to_string()))
}

/// Replaces text placeholders in every matching file under `root`,
/// consulting the resource's extra placeholders on top of the replacer's
/// shared set.
pub fn replace_content_placeholders(
    root: &Path,
    replacer: &Replacer,
    resource: &Resource,
    extensions: &GlobSet,
) -> Result<()> {
    if !root.exists() {
        return Err(Error::PathNotFound { path: root.display().to_string() });
    }

    let mut files = Vec::new();
    if root.is_dir() {
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| Error::Io(e.into()))?;
            if entry.file_type().is_file() && extensions.is_match(Path::new(entry.file_name())) {
                files.push(entry.into_path());
            }
        }
    } else if root.file_name().is_some_and(|name| extensions.is_match(Path::new(name))) {
        files.push(root.to_path_buf());
    }

    for file in files {
        replace_in_file(&file, replacer, resource)?;
    }
    Ok(())
}

fn replace_in_file(file: &Path, replacer: &Replacer, resource: &Resource) -> Result<()> {
    let content = fs::read_to_string(file).map_err(|source| Error::Substitution {
        path: file.display().to_string(),
        source,
    })?;

    let replaced = replacer.replace_text_placeholders(&content, resource.placeholders())?;

    let leftover = replacer.find_text_placeholders(&replaced);
    if !leftover.is_empty() {
        warn!("Unresolved placeholders in [{}]: {}", file.display(), leftover.join(", "));
    }

    if replaced != content {
        fs::write(file, &replaced).map_err(|source| Error::Substitution {
            path: file.display().to_string(),
            source,
        })?;
        debug!("Replaced placeholders in [{}]", file.display());
    }
    Ok(())
}
