//! Flat `key=value` property file support.
//! Both the main configuration file and the auxiliary build-tool parameter
//! file use this format.

use crate::error::Result;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Ordered key/value pairs parsed from a property file.
pub type PropertySet = IndexMap<String, String>;

/// Parses property file content: one `key=value` pair per line, `#` and `!`
/// comment lines and blank lines skipped, whitespace around key and value
/// trimmed. A later duplicate key overwrites an earlier one.
pub fn parse_props(content: &str) -> PropertySet {
    let mut props = PropertySet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            props.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    props
}

/// Reads a property file. A missing file yields an empty set; a file that
/// exists but cannot be read is an error.
pub fn read_props<P: AsRef<Path>>(path: P) -> Result<PropertySet> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(PropertySet::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(parse_props(&content))
}
