//! Replacer selection: an explicit registry from artifact type tag to the
//! concrete replacer variant and its configuration keys.

use crate::config::ConfigurationSet;
use crate::config_props::ConfigPropsRules;
use crate::constants::{
    CONFIGPROP_SOURCE_COMPONENTS_FOLDER, CONFIGPROP_SOURCE_CONFIG_PROPS_FOLDER,
    CONFIGPROP_SOURCE_CONFSTR_FOLDER, CONFIGPROP_SOURCE_MODELS_FOLDER,
    CONFIGPROP_SOURCE_OSGI_FOLDER, CONFIGPROP_SOURCE_SERVICES_FOLDER,
    CONFIGPROP_SOURCE_SERVLETS_FOLDER, CONFIGPROP_SOURCE_TEMPLATES_FOLDER,
    CONFIGPROP_TARGET_COMPONENTS_FOLDER, CONFIGPROP_TARGET_CONFSTR_FOLDER,
    CONFIGPROP_TARGET_JAVA_PACKAGE, CONFIGPROP_TARGET_MODELS_FOLDER, CONFIGPROP_TARGET_OSGI_FOLDER,
    CONFIGPROP_TARGET_PROJECT_NAME, CONFIGPROP_TARGET_PROJECT_ROOT,
    CONFIGPROP_TARGET_SERVICES_FOLDER, CONFIGPROP_TARGET_SERVLETS_FOLDER,
    CONFIGPROP_TARGET_TEMPLATES_FOLDER, LAZYBONES_PROPS_FILE, PH_TARGET_JAVA_PACKAGE,
    PH_TARGET_NAME, PH_TARGET_PROJECT_NAME,
};
use crate::error::{Error, Result};
use crate::replacer::{GenericRules, PlaceholderSet, Replacer};
use crate::resource::Resource;
use std::path::Path;

/// Which substitution rules an artifact type carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacerVariant {
    Generic,
    ConfigProps,
}

/// Registry entry binding an artifact type tag to its template folder keys
/// and replacer variant.
pub struct ArtifactSpec {
    pub tag: &'static str,
    pub source_folder_key: &'static str,
    pub target_folder_key: &'static str,
    pub variant: ReplacerVariant,
}

/// All supported artifact types. Selection is a lookup here, nothing else.
pub const ARTIFACT_TYPES: &[ArtifactSpec] = &[
    ArtifactSpec {
        tag: "component",
        source_folder_key: CONFIGPROP_SOURCE_COMPONENTS_FOLDER,
        target_folder_key: CONFIGPROP_TARGET_COMPONENTS_FOLDER,
        variant: ReplacerVariant::Generic,
    },
    ArtifactSpec {
        tag: "template",
        source_folder_key: CONFIGPROP_SOURCE_TEMPLATES_FOLDER,
        target_folder_key: CONFIGPROP_TARGET_TEMPLATES_FOLDER,
        variant: ReplacerVariant::Generic,
    },
    ArtifactSpec {
        tag: "osgi",
        source_folder_key: CONFIGPROP_SOURCE_OSGI_FOLDER,
        target_folder_key: CONFIGPROP_TARGET_OSGI_FOLDER,
        variant: ReplacerVariant::Generic,
    },
    ArtifactSpec {
        tag: "confstr",
        source_folder_key: CONFIGPROP_SOURCE_CONFSTR_FOLDER,
        target_folder_key: CONFIGPROP_TARGET_CONFSTR_FOLDER,
        variant: ReplacerVariant::Generic,
    },
    ArtifactSpec {
        tag: "model",
        source_folder_key: CONFIGPROP_SOURCE_MODELS_FOLDER,
        target_folder_key: CONFIGPROP_TARGET_MODELS_FOLDER,
        variant: ReplacerVariant::Generic,
    },
    ArtifactSpec {
        tag: "service",
        source_folder_key: CONFIGPROP_SOURCE_SERVICES_FOLDER,
        target_folder_key: CONFIGPROP_TARGET_SERVICES_FOLDER,
        variant: ReplacerVariant::Generic,
    },
    ArtifactSpec {
        tag: "servlet",
        source_folder_key: CONFIGPROP_SOURCE_SERVLETS_FOLDER,
        target_folder_key: CONFIGPROP_TARGET_SERVLETS_FOLDER,
        variant: ReplacerVariant::Generic,
    },
    ArtifactSpec {
        tag: "config-props",
        source_folder_key: CONFIGPROP_SOURCE_CONFIG_PROPS_FOLDER,
        target_folder_key: CONFIGPROP_TARGET_PROJECT_ROOT,
        variant: ReplacerVariant::ConfigProps,
    },
];

/// Looks up the registry entry for an artifact type tag.
///
/// An unknown tag fails fast; the caller cannot proceed without a replacer.
pub fn artifact_spec(type_tag: &str) -> Result<&'static ArtifactSpec> {
    ARTIFACT_TYPES
        .iter()
        .find(|spec| spec.tag == type_tag)
        .ok_or_else(|| Error::UnsupportedArtifactType { type_tag: type_tag.to_string() })
}

/// Builds the replacer for a resource: the shared placeholder set plus the
/// selected variant's custom rules.
pub fn select(resource: &Resource, config: &ConfigurationSet) -> Result<Replacer> {
    let spec = artifact_spec(resource.artifact_type())?;
    let placeholders = build_placeholders(resource, config);

    let replacer = match spec.variant {
        ReplacerVariant::Generic => Replacer::new(placeholders, Box::new(GenericRules)),
        ReplacerVariant::ConfigProps => {
            let project_root = config
                .get(CONFIGPROP_TARGET_PROJECT_ROOT)
                .map(String::as_str)
                .unwrap_or(".");
            let props_path = Path::new(project_root).join(LAZYBONES_PROPS_FILE);
            Replacer::new(placeholders, Box::new(ConfigPropsRules::new(props_path)))
        }
    };
    Ok(replacer)
}

/// Shared placeholder set for a resource: values resolved from the
/// configuration, the resource's own target name, and its extra
/// placeholders.
fn build_placeholders(resource: &Resource, config: &ConfigurationSet) -> PlaceholderSet {
    let mut placeholders = PlaceholderSet::new();

    if let Some(name) = config.get(CONFIGPROP_TARGET_PROJECT_NAME) {
        placeholders.insert(PH_TARGET_PROJECT_NAME.to_string(), name.clone());
    }
    if let Some(package) = config.get(CONFIGPROP_TARGET_JAVA_PACKAGE) {
        // the package may be configured in dotted form
        placeholders.insert(PH_TARGET_JAVA_PACKAGE.to_string(), package.replace('.', "/"));
    }
    placeholders.insert(PH_TARGET_NAME.to_string(), resource.target_name().to_string());

    for (token, value) in resource.placeholders() {
        placeholders.insert(token.clone(), value.clone());
    }
    placeholders
}
