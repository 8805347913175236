//! Configuration loading and self-reference resolution.
//! This module loads the flat key/value configuration file and expands
//! `{{key}}` references embedded in configuration values, in a fixed key
//! order.

use crate::constants::{
    CONFIGPROP_FILES_WITH_PLACEHOLDERS_EXTENSIONS, FILES_PH_EXTENSIONS_DEFAULT, PLACEHOLDER_KEYS,
    REQUIRED_PATH_KEYS,
};
use crate::props::parse_props;
use indexmap::IndexMap;
use log::{debug, error};
use std::fs;
use std::path::Path;

/// Fully expanded configuration: unique keys mapped to resolved values.
pub type ConfigurationSet = IndexMap<String, String>;

/// Loads the configuration file and resolves its self-references.
///
/// A missing or unreadable file is logged and yields an empty set, so
/// callers can tell "no configuration" apart from a configuration that is
/// missing required keys.
pub fn get_config<P: AsRef<Path>>(config_path: P) -> ConfigurationSet {
    let config_path = config_path.as_ref();
    let raw = match fs::read_to_string(config_path) {
        Ok(content) => parse_props(&content),
        Err(e) => {
            error!(
                "Please create a configuration properties file [{}] in the root folder: {}",
                config_path.display(),
                e
            );
            ConfigurationSet::new()
        }
    };

    if raw.is_empty() {
        raw
    } else {
        resolve(raw)
    }
}

/// Expands `{{key}}` references across all values, one placeholder-bearing
/// key at a time, in the order of [`PLACEHOLDER_KEYS`].
///
/// A value is only guaranteed to resolve references to keys that appear
/// strictly earlier in that order. References to keys outside the list, and
/// circular or self references, leave the sentinel pattern in the output
/// verbatim; that is deliberate and never an error.
pub fn resolve(raw: ConfigurationSet) -> ConfigurationSet {
    debug!("Configuration placeholder replacing...");
    PLACEHOLDER_KEYS.iter().fold(raw, |config, key| expand_key(config, key))
}

/// One resolution step: replaces `{{name}}` in every value of the set with
/// the named key's current value, producing a new set.
fn expand_key(config: ConfigurationSet, name: &str) -> ConfigurationSet {
    let Some(replacement) = config.get(name).cloned() else {
        return config;
    };
    let sentinel = format!("{{{{{name}}}}}");

    config
        .into_iter()
        .map(|(key, value)| {
            let expanded = value.replace(&sentinel, &replacement);
            if expanded != value {
                debug!("Expanded {key}={expanded}");
            }
            (key, expanded)
        })
        .collect()
}

/// Validates that every required path key is present and that each resolved
/// path exists on disk.
///
/// All violations are logged before the single status flag is returned, so
/// the operator sees every problem in one pass. An empty set fails.
pub fn check_configuration(config: &ConfigurationSet) -> bool {
    if config.is_empty() {
        return false;
    }

    let mut status = true;
    for key in REQUIRED_PATH_KEYS {
        match config.get(key) {
            Some(path) if !path.trim().is_empty() => {
                if !Path::new(path).exists() {
                    error!("The path [{path}] from configuration properties key [{key}] doesn't exist.");
                    status = false;
                }
            }
            _ => {
                error!("Please configure the key [{key}] in the configuration properties file.");
                status = false;
            }
        }
    }
    status
}

/// File extensions whose content is substituted, from the configuration or
/// the built-in default list.
pub fn config_extensions(config: &ConfigurationSet) -> Vec<String> {
    match config.get(CONFIGPROP_FILES_WITH_PLACEHOLDERS_EXTENSIONS) {
        Some(extensions) if !extensions.trim().is_empty() => {
            extensions.split(',').map(|e| e.trim().to_string()).collect()
        }
        _ => FILES_PH_EXTENSIONS_DEFAULT.iter().map(|e| e.to_string()).collect(),
    }
}

/// Renders the configuration as sorted `key=value` lines for operator
/// display.
pub fn config_as_text(config: &ConfigurationSet) -> String {
    let mut keys: Vec<&String> = config.keys().collect();
    keys.sort();

    let mut text = String::new();
    for key in keys {
        if let Some(value) = config.get(key) {
            text.push_str(key);
            text.push('=');
            text.push_str(value);
            text.push('\n');
        }
    }
    text
}
