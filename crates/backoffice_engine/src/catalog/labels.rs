use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use heck::ToUpperCamelCase;

use super::StoreError;

/// Interface-label lookup, keyed by camel-cased names.
pub trait Translator {
    fn label(&self, key: &str) -> Option<String>;
}

/// Label translations loaded from a RON map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    labels: BTreeMap<String, String>,
}

impl LabelTable {
    pub fn new(labels: BTreeMap<String, String>) -> Self {
        Self { labels }
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let labels = ron::from_str(&content).map_err(|err| StoreError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Ok(Self { labels })
    }
}

impl Translator for LabelTable {
    fn label(&self, key: &str) -> Option<String> {
        self.labels.get(key).cloned()
    }
}

/// `content_blocks` -> `ContentBlocks`.
pub fn to_camel_case(raw: &str) -> String {
    raw.to_upper_camel_case()
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display label for a raw module name; falls back to the camel-cased key
/// when no translation exists.
pub fn module_label(raw: &str, translator: &dyn Translator) -> String {
    let key = to_camel_case(raw);
    let label = translator.label(&key).unwrap_or(key);
    capitalize_first(&label)
}
