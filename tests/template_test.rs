//! Integration tests for template loading and merging.

use std::io::Write;

use md2page::{Error, Md2Page, TemplateRegistry};
use tempfile::NamedTempFile;

const OCEAN: &str = r#"
[[template]]
id = "ocean"
name = "Ocean"
font = "Source Sans 3"
margin = 56.0

[template.colors]
text = { r = 0.05, g = 0.15, b = 0.25 }
heading = { r = 0.0, g = 0.3, b = 0.5 }
link = { r = 0.0, g = 0.5, b = 0.6 }
divider = { r = 0.6, g = 0.8, b = 0.9 }

[template.sizes]
h1 = 26.0
h2 = 18.0
h3 = 14.0
h4 = 12.0
body = 11.0

[template.spacing]
h1 = 12.0
h2 = 10.0
h3 = 8.0
h4 = 6.0
body = 2.0
list = 4.0
empty = 10.0
afterLine = 5.0
"#;

fn temp_toml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_builtin_templates() {
    let registry = TemplateRegistry::builtin().unwrap();
    assert_eq!(registry.ids(), vec!["classic", "modern", "compact"]);
    assert_eq!(registry.default_template().id, "classic");
    assert!(registry.contains("MODERN"));
}

#[test]
fn test_from_file_and_merge() {
    let file = temp_toml(OCEAN);
    let extra = TemplateRegistry::from_file(file.path()).unwrap();
    assert_eq!(extra.len(), 1);

    let mut registry = TemplateRegistry::builtin().unwrap();
    registry.merge(extra);
    assert_eq!(registry.len(), 4);
    assert_eq!(registry.ids().last(), Some(&"ocean"));

    let ocean = registry.resolve("Ocean");
    assert_eq!(ocean.font, "Source Sans 3");
    assert_eq!(ocean.spacing.after_line, 5.0);

    let doc = Md2Page::new()
        .with_registry(registry)
        .with_template("ocean")
        .layout("# Hi")
        .unwrap()
        .into_document();
    assert_eq!(doc.template.id, "ocean");
    assert_eq!(doc.pages[0].elements[0].y(), 56.0 + 12.0);
}

#[test]
fn test_merge_overrides_in_place() {
    let file = temp_toml(&OCEAN.replace("\"ocean\"", "\"classic\""));
    let mut registry = TemplateRegistry::builtin().unwrap();
    registry.merge(TemplateRegistry::from_file(file.path()).unwrap());

    assert_eq!(registry.len(), 3);
    assert_eq!(registry.default_template().id, "classic");
    assert_eq!(registry.default_template().margin, 56.0);
}

#[test]
fn test_invalid_margin_rejected() {
    let file = temp_toml(&OCEAN.replace("margin = 56.0", "margin = 500.0"));
    let err = TemplateRegistry::from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidTemplate(_)));
}

#[test]
fn test_malformed_toml_rejected() {
    let file = temp_toml("[[template]\nid = ");
    let err = TemplateRegistry::from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::TemplateParse(_)));
}

#[test]
fn test_empty_file_has_no_templates() {
    let file = temp_toml("# nothing here\n");
    let err = TemplateRegistry::from_file(file.path()).unwrap_err();
    assert!(matches!(err, Error::NoTemplates));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TemplateRegistry::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
