use std::fs;

use stencil::config_props::ConfigPropsRules;
use stencil::replacer::{GenericRules, PlaceholderSet, Replacer};
use tempfile::TempDir;

fn generic_replacer(pairs: &[(&str, &str)]) -> Replacer {
    let mut placeholders = PlaceholderSet::new();
    for (token, value) in pairs {
        placeholders.insert(token.to_string(), value.to_string());
    }
    Replacer::new(placeholders, Box::new(GenericRules))
}

#[test]
fn test_replace_path_placeholders() {
    let replacer = generic_replacer(&[("PH_TARGET_JAVA_PACKAGE", "com/acme")]);

    let result = replacer
        .replace_path_placeholders("/out/PH_TARGET_JAVA_PACKAGE/Foo.java")
        .unwrap();
    assert_eq!(result, "/out/com/acme/Foo.java");
}

#[test]
fn test_replace_path_placeholders_is_idempotent() {
    let replacer = generic_replacer(&[
        ("PH_TARGET_JAVA_PACKAGE", "com/acme"),
        ("PH_TARGET_NAME", "mypage"),
    ]);

    let once = replacer
        .replace_path_placeholders("/out/PH_TARGET_JAVA_PACKAGE/PH_TARGET_NAME.java")
        .unwrap();
    let twice = replacer.replace_path_placeholders(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_replace_path_placeholders_no_token_is_noop() {
    let replacer = generic_replacer(&[("PH_TARGET_JAVA_PACKAGE", "com/acme")]);

    let path = "/out/plain/Foo.java";
    assert_eq!(replacer.replace_path_placeholders(path).unwrap(), path);
}

#[test]
fn test_replace_text_placeholders_applies_extras() {
    let replacer = generic_replacer(&[("PH_TARGET_NAME", "mypage")]);

    let mut extra = PlaceholderSet::new();
    extra.insert("PH_TITLE".to_string(), "Hello".to_string());

    let result = replacer
        .replace_text_placeholders("title=PH_TITLE name=PH_TARGET_NAME", &extra)
        .unwrap();
    assert_eq!(result, "title=Hello name=mypage");
}

#[test]
fn test_find_text_placeholders_distinct_in_order() {
    let replacer = generic_replacer(&[]);

    let found = replacer
        .find_text_placeholders("a PH_TWO b PH_ONE c PH_TWO d PH_THREE");
    assert_eq!(found, vec!["PH_TWO", "PH_ONE", "PH_THREE"]);
}

#[test]
fn test_find_text_placeholders_none() {
    let replacer = generic_replacer(&[]);
    assert!(replacer.find_text_placeholders("nothing to see").is_empty());
}

fn config_props_replacer(props_content: Option<&str>) -> (TempDir, Replacer) {
    let temp_dir = TempDir::new().unwrap();
    let props_path = temp_dir.path().join("stored-params.properties");
    if let Some(content) = props_content {
        fs::write(&props_path, content).unwrap();
    }
    let replacer =
        Replacer::new(PlaceholderSet::new(), Box::new(ConfigPropsRules::new(props_path)));
    (temp_dir, replacer)
}

const CONFIG_PROPS_TEXT: &str = "\
name=PH_TARGET_PROJECT_NAME
ui=PH_TARGET_UI_PROJECT_FOLDER
core=PH_TARGET_CORE_PROJECT_FOLDER
osgi=PH_TARGET_OSGI_FOLDER
package=PH_TARGET_JAVA_PACKAGE
";

#[test]
fn test_config_props_defaults_without_params_file() {
    let (_temp_dir, replacer) = config_props_replacer(None);

    let result = replacer
        .replace_text_placeholders(CONFIG_PROPS_TEXT, &PlaceholderSet::new())
        .unwrap();

    assert!(result.contains("name=my-aem-project"));
    assert!(result.contains("ui=content"));
    assert!(result.contains("core=bundle"));
    assert!(result.contains("osgi=/configuration"));
    assert!(result.contains("package=com/myaem/samples"));
}

#[test]
fn test_config_props_new_naming_convention() {
    let (_temp_dir, replacer) = config_props_replacer(Some(
        "useNewNamingConvention=yes\nbundleInBundlesDirectory=yes\nappsFolderName=shop\n",
    ));

    let result = replacer
        .replace_text_placeholders(CONFIG_PROPS_TEXT, &PlaceholderSet::new())
        .unwrap();

    assert!(result.contains("name=shop"));
    assert!(result.contains("ui=ui.apps"));
    assert!(result.contains("core=bundles/core"));
    // any stored parameter clears the OSGi subfolder
    assert!(result.contains("osgi=\n"));
}

#[test]
fn test_config_props_package_from_group_id() {
    let (_temp_dir, replacer) = config_props_replacer(Some("groupId=com-acme-web\n"));

    let result = replacer
        .replace_text_placeholders(CONFIG_PROPS_TEXT, &PlaceholderSet::new())
        .unwrap();
    assert!(result.contains("package=com/acme/web"));
}

#[test]
fn test_config_props_package_from_sling_models_package() {
    let (_temp_dir, replacer) = config_props_replacer(Some(
        "slingModelsPackage=com.acme.models\ngroupId=ignored-group\n",
    ));

    let result = replacer
        .replace_text_placeholders(CONFIG_PROPS_TEXT, &PlaceholderSet::new())
        .unwrap();
    assert!(result.contains("package=com/acme/models"));
}

#[test]
fn test_config_props_path_placeholders_resolved() {
    let (_temp_dir, replacer) = config_props_replacer(Some("appsFolderName=shop\n"));

    let result = replacer
        .replace_path_placeholders("/apps/PH_TARGET_PROJECT_NAME/config")
        .unwrap();
    assert_eq!(result, "/apps/shop/config");
}
