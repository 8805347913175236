//! Substitution rules for the configuration-properties artifact type.
//!
//! The generated configuration file bootstraps everything else, so its
//! placeholder values cannot come from the configuration itself. They are
//! derived from the build tool's stored parameter file instead, with fixed
//! fallbacks when that file or a specific key is absent.

use crate::constants::{
    PH_TARGET_CORE_PROJECT_FOLDER, PH_TARGET_JAVA_PACKAGE, PH_TARGET_OSGI_FOLDER,
    PH_TARGET_PROJECT_NAME, PH_TARGET_UI_PROJECT_FOLDER,
};
use crate::error::{Error, Result};
use crate::props::{read_props, PropertySet};
use crate::replacer::{CustomSubstitutionRules, PlaceholderSet};
use std::path::PathBuf;

// Build-tool parameter keys; any of them may be absent.
pub const PROP_USE_NEW_NAMING_CONVENTION: &str = "useNewNamingConvention";
pub const PROP_BUNDLE_IN_BUNDLES_DIR: &str = "bundleInBundlesDirectory";
pub const PROP_APPS_FOLDER_NAME: &str = "appsFolderName";
pub const PROP_SLING_MODELS_PACKAGE: &str = "slingModelsPackage";
pub const PROP_GROUP_ID: &str = "groupId";

// Fallback values applied when the parameter file or a key is missing.
pub const DEFAULT_TARGET_PROJECT_NAME: &str = "my-aem-project";
pub const DEFAULT_TARGET_UI_PROJECT_FOLDER: &str = "ui.apps";
pub const DEFAULT_TARGET_UI_PROJECT_FOLDER_OLD: &str = "content";
pub const DEFAULT_TARGET_CORE_PROJECT_FOLDER: &str = "core";
pub const DEFAULT_TARGET_CORE_PROJECT_FOLDER_OLD: &str = "bundle";
pub const DEFAULT_TARGET_CORE_BUNDLES_SUBFOLDER: &str = "bundles";
pub const DEFAULT_TARGET_JAVA_PACKAGE: &str = "com/myaem/samples";
pub const DEFAULT_TARGET_OSGI_FOLDER: &str = "/configuration";

/// Rules resolving `PH_TARGET_*` tokens from the build tool's stored
/// parameters.
pub struct ConfigPropsRules {
    props_path: PathBuf,
}

impl ConfigPropsRules {
    /// `props_path` points at the stored parameter file. It may be absent,
    /// in which case every derived value falls back to its default.
    pub fn new<P: Into<PathBuf>>(props_path: P) -> Self {
        Self { props_path: props_path.into() }
    }

    fn load_props(&self) -> Result<PropertySet> {
        read_props(&self.props_path).map_err(|e| match e {
            Error::Io(source) => Error::Substitution {
                path: self.props_path.display().to_string(),
                source,
            },
            other => other,
        })
    }
}

fn is_yes(props: &PropertySet, key: &str) -> bool {
    props.get(key).is_some_and(|value| value.eq_ignore_ascii_case("yes"))
}

fn non_blank<'a>(props: &'a PropertySet, key: &str) -> Option<&'a str> {
    props.get(key).map(String::as_str).filter(|value| !value.trim().is_empty())
}

impl CustomSubstitutionRules for ConfigPropsRules {
    fn replace_markup(&self, text: &str, _placeholders: &PlaceholderSet) -> Result<String> {
        Ok(text.to_string())
    }

    fn replace_text(&self, text: &str, _placeholders: &PlaceholderSet) -> Result<String> {
        let props = self.load_props()?;
        let mut result = text.to_string();

        // apps folder name
        let project_name =
            non_blank(&props, PROP_APPS_FOLDER_NAME).unwrap_or(DEFAULT_TARGET_PROJECT_NAME);
        result = result.replace(PH_TARGET_PROJECT_NAME, project_name);

        // UI project folder name
        let new_naming = is_yes(&props, PROP_USE_NEW_NAMING_CONVENTION);
        let ui_folder = if new_naming {
            DEFAULT_TARGET_UI_PROJECT_FOLDER
        } else {
            DEFAULT_TARGET_UI_PROJECT_FOLDER_OLD
        };
        result = result.replace(PH_TARGET_UI_PROJECT_FOLDER, ui_folder);

        // CORE project folder name, like "core" or "bundles/bundle"
        let mut core_folder = if new_naming {
            DEFAULT_TARGET_CORE_PROJECT_FOLDER.to_string()
        } else {
            DEFAULT_TARGET_CORE_PROJECT_FOLDER_OLD.to_string()
        };
        if is_yes(&props, PROP_BUNDLE_IN_BUNDLES_DIR) {
            core_folder = format!("{DEFAULT_TARGET_CORE_BUNDLES_SUBFOLDER}/{core_folder}");
        }
        result = result.replace(PH_TARGET_CORE_PROJECT_FOLDER, &core_folder);

        // OSGi configuration folder name
        let osgi_folder = if props.is_empty() { DEFAULT_TARGET_OSGI_FOLDER } else { "" };
        result = result.replace(PH_TARGET_OSGI_FOLDER, osgi_folder);

        // target java package
        let java_package = match non_blank(&props, PROP_SLING_MODELS_PACKAGE) {
            Some(package) => package.replace('.', "/"),
            None => match non_blank(&props, PROP_GROUP_ID) {
                Some(group_id) => group_id.replace('-', ".").replace('.', "/"),
                None => DEFAULT_TARGET_JAVA_PACKAGE.to_string(),
            },
        };
        result = result.replace(PH_TARGET_JAVA_PACKAGE, &java_package);

        Ok(result)
    }
}
