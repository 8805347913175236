//! Common constants used throughout the stencil application.

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "stencil.properties";

/// Auxiliary build-tool parameter file, relative to the target project root.
pub const LAZYBONES_PROPS_FILE: &str = ".lazybones/stored-params.properties";

// Configuration keys whose values may be referenced as `{{<key>}}` by other
// values.
pub const CONFIGPROP_SOURCE_FOLDER: &str = "SOURCE_FOLDER";
pub const CONFIGPROP_SOURCE_UI_FOLDER: &str = "SOURCE_UI_FOLDER";
pub const CONFIGPROP_SOURCE_PROJECT_ROOT: &str = "SOURCE_PROJECT_ROOT";
pub const CONFIGPROP_SOURCE_JAVA_FOLDER: &str = "SOURCE_JAVA_FOLDER";
pub const CONFIGPROP_TARGET_UI_FOLDER: &str = "TARGET_UI_FOLDER";
pub const CONFIGPROP_TARGET_PROJECT_NAME: &str = "TARGET_PROJECT_NAME";
pub const CONFIGPROP_TARGET_PROJECT_ROOT: &str = "TARGET_PROJECT_ROOT";
pub const CONFIGPROP_TARGET_JAVA_FOLDER: &str = "TARGET_JAVA_FOLDER";
pub const CONFIGPROP_TARGET_JAVA_PACKAGE: &str = "TARGET_JAVA_PACKAGE";

/// Self-reference expansion order: source path keys before target path keys.
/// A value is only guaranteed to resolve references to keys that appear
/// strictly earlier in this list.
pub const PLACEHOLDER_KEYS: [&str; 9] = [
    CONFIGPROP_SOURCE_FOLDER,
    CONFIGPROP_SOURCE_UI_FOLDER,
    CONFIGPROP_SOURCE_PROJECT_ROOT,
    CONFIGPROP_SOURCE_JAVA_FOLDER,
    CONFIGPROP_TARGET_UI_FOLDER,
    CONFIGPROP_TARGET_PROJECT_NAME,
    CONFIGPROP_TARGET_PROJECT_ROOT,
    CONFIGPROP_TARGET_JAVA_FOLDER,
    CONFIGPROP_TARGET_JAVA_PACKAGE,
];

/// Required path keys; presence and on-disk existence are validated in one
/// aggregate pass.
pub const REQUIRED_PATH_KEYS: [&str; 7] = [
    CONFIGPROP_SOURCE_FOLDER,
    CONFIGPROP_SOURCE_UI_FOLDER,
    CONFIGPROP_SOURCE_PROJECT_ROOT,
    CONFIGPROP_SOURCE_JAVA_FOLDER,
    CONFIGPROP_TARGET_UI_FOLDER,
    CONFIGPROP_TARGET_PROJECT_ROOT,
    CONFIGPROP_TARGET_JAVA_FOLDER,
];

// Per-artifact template source/target folder keys.
pub const CONFIGPROP_SOURCE_COMPONENTS_FOLDER: &str = "SOURCE_COMPONENTS_FOLDER";
pub const CONFIGPROP_TARGET_COMPONENTS_FOLDER: &str = "TARGET_COMPONENTS_FOLDER";
pub const CONFIGPROP_SOURCE_TEMPLATES_FOLDER: &str = "SOURCE_TEMPLATES_FOLDER";
pub const CONFIGPROP_TARGET_TEMPLATES_FOLDER: &str = "TARGET_TEMPLATES_FOLDER";
pub const CONFIGPROP_SOURCE_OSGI_FOLDER: &str = "SOURCE_OSGI_FOLDER";
pub const CONFIGPROP_TARGET_OSGI_FOLDER: &str = "TARGET_OSGI_FOLDER";
pub const CONFIGPROP_SOURCE_CONFSTR_FOLDER: &str = "SOURCE_CONFSTR_FOLDER";
pub const CONFIGPROP_TARGET_CONFSTR_FOLDER: &str = "TARGET_CONFSTR_FOLDER";
pub const CONFIGPROP_SOURCE_MODELS_FOLDER: &str = "SOURCE_MODELS_FOLDER";
pub const CONFIGPROP_TARGET_MODELS_FOLDER: &str = "TARGET_MODELS_FOLDER";
pub const CONFIGPROP_SOURCE_SERVICES_FOLDER: &str = "SOURCE_SERVICES_FOLDER";
pub const CONFIGPROP_TARGET_SERVICES_FOLDER: &str = "TARGET_SERVICES_FOLDER";
pub const CONFIGPROP_SOURCE_SERVLETS_FOLDER: &str = "SOURCE_SERVLETS_FOLDER";
pub const CONFIGPROP_TARGET_SERVLETS_FOLDER: &str = "TARGET_SERVLETS_FOLDER";
pub const CONFIGPROP_SOURCE_CONFIG_PROPS_FOLDER: &str = "SOURCE_CONFIG_PROPS_FOLDER";

/// Comma-separated list of file extensions whose content carries text
/// placeholders.
pub const CONFIGPROP_FILES_WITH_PLACEHOLDERS_EXTENSIONS: &str =
    "FILES_WITH_PLACEHOLDERS_EXTENSIONS";

/// Extensions substituted when the configuration does not override them.
pub const FILES_PH_EXTENSIONS_DEFAULT: [&str; 6] =
    ["xml", "java", "jsp", "html", "properties", "json"];

// Path placeholder sentinel tokens, recognized verbatim.
pub const PH_TARGET_NAME: &str = "PH_TARGET_NAME";
pub const PH_TARGET_PROJECT_NAME: &str = "PH_TARGET_PROJECT_NAME";
pub const PH_TARGET_UI_PROJECT_FOLDER: &str = "PH_TARGET_UI_PROJECT_FOLDER";
pub const PH_TARGET_CORE_PROJECT_FOLDER: &str = "PH_TARGET_CORE_PROJECT_FOLDER";
pub const PH_TARGET_OSGI_FOLDER: &str = "PH_TARGET_OSGI_FOLDER";
pub const PH_TARGET_JAVA_PACKAGE: &str = "PH_TARGET_JAVA_PACKAGE";

/// Prefix applied to placeholder names contributed on the command line.
pub const PH_PREFIX: &str = "PH_";
