use std::fs;

use stencil::commands::{copy_template, extension_matcher, replace_content_placeholders};
use stencil::error::Error;
use stencil::replacer::{GenericRules, PlaceholderSet, Replacer};
use stencil::resource::Resource;
use tempfile::TempDir;

fn component_resource(temp_dir: &TempDir) -> Resource {
    let mut resource = Resource::new("component", "contentpage", "mypage");
    resource.set_source_folder_path(temp_dir.path().join("source").to_str().unwrap());
    resource.set_target_folder_path(temp_dir.path().join("target").to_str().unwrap());
    resource
}

#[test]
fn test_copy_template_directory() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("source/contentpage");
    fs::create_dir_all(template.join("dialogs")).unwrap();
    fs::write(template.join(".content.xml"), "<jcr:root/>").unwrap();
    fs::write(template.join("dialogs/dialog.xml"), "<dialog/>").unwrap();

    let resource = component_resource(&temp_dir);
    let target = copy_template(&resource).unwrap();

    assert_eq!(target, temp_dir.path().join("target/mypage"));
    assert!(target.join(".content.xml").exists());
    assert!(target.join("dialogs/dialog.xml").exists());
}

#[test]
fn test_copy_template_single_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("source")).unwrap();
    fs::write(temp_dir.path().join("source/contentpage"), "content").unwrap();

    let resource = component_resource(&temp_dir);
    let target = copy_template(&resource).unwrap();

    assert_eq!(fs::read_to_string(target).unwrap(), "content");
}

#[test]
fn test_copy_template_missing_source_fails() {
    let temp_dir = TempDir::new().unwrap();
    let resource = component_resource(&temp_dir);

    assert!(matches!(copy_template(&resource), Err(Error::PathNotFound { .. })));
}

#[test]
fn test_copy_template_existing_target_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("source/contentpage")).unwrap();
    fs::create_dir_all(temp_dir.path().join("target/mypage")).unwrap();

    let resource = component_resource(&temp_dir);
    assert!(matches!(copy_template(&resource), Err(Error::Config(_))));
}

#[test]
fn test_replace_content_placeholders_matching_extensions_only() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("out");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("page.xml"), "name=PH_TARGET_NAME").unwrap();
    fs::write(root.join("notes.txt"), "name=PH_TARGET_NAME").unwrap();

    let mut placeholders = PlaceholderSet::new();
    placeholders.insert("PH_TARGET_NAME".to_string(), "mypage".to_string());
    let replacer = Replacer::new(placeholders, Box::new(GenericRules));

    let resource = Resource::new("component", "contentpage", "mypage");
    let extensions = extension_matcher(&["xml".to_string()]).unwrap();
    replace_content_placeholders(&root, &replacer, &resource, &extensions).unwrap();

    assert_eq!(fs::read_to_string(root.join("page.xml")).unwrap(), "name=mypage");
    assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "name=PH_TARGET_NAME");
}

#[test]
fn test_replace_content_placeholders_uses_resource_extras() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("out");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("page.xml"), "title=PH_TITLE").unwrap();

    let replacer = Replacer::new(PlaceholderSet::new(), Box::new(GenericRules));
    let mut resource = Resource::new("component", "contentpage", "mypage");
    resource.add_placeholder("PH_TITLE", "Hello");

    let extensions = extension_matcher(&["xml".to_string()]).unwrap();
    replace_content_placeholders(&root, &replacer, &resource, &extensions).unwrap();

    assert_eq!(fs::read_to_string(root.join("page.xml")).unwrap(), "title=Hello");
}

#[test]
fn test_replace_content_placeholders_missing_root_fails() {
    let temp_dir = TempDir::new().unwrap();
    let replacer = Replacer::new(PlaceholderSet::new(), Box::new(GenericRules));
    let resource = Resource::new("component", "contentpage", "mypage");
    let extensions = extension_matcher(&["xml".to_string()]).unwrap();

    let result = replace_content_placeholders(
        &temp_dir.path().join("missing"),
        &replacer,
        &resource,
        &extensions,
    );
    assert!(matches!(result, Err(Error::PathNotFound { .. })));
}
