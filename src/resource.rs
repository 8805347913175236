//! Resource descriptor for one generation target.

use indexmap::IndexMap;

/// Describes a single generation target: which template to copy, where the
/// generated artifact goes, and the extra placeholders contributed on the
/// command line.
///
/// A resource is owned by the invocation that creates it and passed by
/// reference to the collaborating components for the duration of one run.
#[derive(Debug, Clone)]
pub struct Resource {
    artifact_type: String,
    source_name: String,
    target_name: String,
    source_folder_path: String,
    target_folder_path: String,
    placeholders: IndexMap<String, String>,
}

impl Resource {
    pub fn new<S: Into<String>>(artifact_type: S, source_name: S, target_name: S) -> Self {
        Self {
            artifact_type: artifact_type.into(),
            source_name: source_name.into(),
            target_name: target_name.into(),
            source_folder_path: String::new(),
            target_folder_path: String::new(),
            placeholders: IndexMap::new(),
        }
    }

    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn source_folder_path(&self) -> &str {
        &self.source_folder_path
    }

    pub fn set_source_folder_path<S: Into<String>>(&mut self, path: S) {
        self.source_folder_path = path.into();
    }

    pub fn target_folder_path(&self) -> &str {
        &self.target_folder_path
    }

    pub fn set_target_folder_path<S: Into<String>>(&mut self, path: S) {
        self.target_folder_path = path.into();
    }

    /// Extra placeholders keyed by their full sentinel token.
    pub fn placeholders(&self) -> &IndexMap<String, String> {
        &self.placeholders
    }

    /// Registers an extra placeholder under its full sentinel token
    /// (`PH_<NAME>`); a repeated token overwrites the previous value.
    pub fn add_placeholder<S: Into<String>>(&mut self, token: S, value: S) {
        self.placeholders.insert(token.into(), value.into());
    }
}
