#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sheetstats binary.
#[macro_export]
macro_rules! sheetstats {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sheetstats"))
    };
}

/// A small but complete fact base: 16 declarations over 9 properties.
pub const SAMPLE_FACTS: &str = r##"{
  "propertyValues": {
    "color": ["red", "blue", "red"],
    "font-size": ["16px", "1em", "200%", "16px"],
    "width": ["100%", "50px"],
    "margin": ["0", "0 auto"],
    "height": ["50px"],
    "float": ["left"],
    "background-color": ["#fff"],
    "padding": ["10px"],
    "border-radius": ["4px"]
  },
  "allDeclarations": [
    {"property": "color", "value": "red"},
    {"property": "color", "value": "blue"},
    {"property": "color", "value": "red"},
    {"property": "font-size", "value": "16px"},
    {"property": "font-size", "value": "1em"},
    {"property": "font-size", "value": "200%"},
    {"property": "font-size", "value": "16px"},
    {"property": "width", "value": "100%"},
    {"property": "width", "value": "50px"},
    {"property": "margin", "value": "0"},
    {"property": "margin", "value": "0 auto"},
    {"property": "height", "value": "50px"},
    {"property": "float", "value": "left"},
    {"property": "background-color", "value": "#fff"},
    {"property": "padding", "value": "10px"},
    {"property": "border-radius", "value": "4px"}
  ],
  "declarationsByProperty": {
    "color": [
      {"property": "color", "value": "red"},
      {"property": "color", "value": "blue"},
      {"property": "color", "value": "red"}
    ],
    "font-size": [
      {"property": "font-size", "value": "16px"},
      {"property": "font-size", "value": "1em"},
      {"property": "font-size", "value": "200%"},
      {"property": "font-size", "value": "16px"}
    ],
    "width": [
      {"property": "width", "value": "100%"},
      {"property": "width", "value": "50px"}
    ],
    "margin": [
      {"property": "margin", "value": "0"},
      {"property": "margin", "value": "0 auto"}
    ],
    "height": [{"property": "height", "value": "50px"}],
    "float": [{"property": "float", "value": "left"}],
    "background-color": [{"property": "background-color", "value": "#fff"}],
    "padding": [{"property": "padding", "value": "10px"}],
    "border-radius": [{"property": "border-radius", "value": "4px"}]
  },
  "distinctPropertiesUsed": [
    "color", "font-size", "width", "margin", "height",
    "float", "background-color", "padding", "border-radius"
  ],
  "fontSizeTokens": ["16px", "1em", "200%", "16px"],
  "fontFamilyTokens": ["serif", "sans-serif", "serif"],
  "selectorSpecificities": [1, 10, 11, 100],
  "ruleDeclarationCounts": [3, 0, 2, 1],
  "mediaQueryValues": ["(min-width: 768px)", "(min-width: 768px)", "print"]
}"##;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a basic sheetstats config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".sheetstats.toml", content);
    }

    /// Creates a fact-base file with the shared sample facts.
    pub fn create_sample_facts(&self, relative_path: &str) {
        self.create_file(relative_path, SAMPLE_FACTS);
    }

    /// Creates a fact-base file signalling "no facts".
    pub fn create_null_facts(&self, relative_path: &str) {
        self.create_file(relative_path, "null");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
