//! Installed-module listing for the extensions screen.
mod descriptor;
mod labels;
mod store;

use std::path::PathBuf;

use backoffice_logging::backoffice_debug;

pub use descriptor::{
    load_descriptor, parse_descriptor, DescriptorError, ElementRecord, EventRecord,
    ModuleMetadata, DESCRIPTOR_FILENAME,
};
pub use labels::{capitalize_first, module_label, to_camel_case, LabelTable, Translator};
pub use store::{InMemoryModuleStore, ModuleRow, ModuleStore, RonModuleStore, StoreError};

/// Modules bundled with the platform; they cannot be managed and are never listed.
pub const IGNORED_MODULES: [&str; 13] = [
    "authentication",
    "content_blocks",
    "core",
    "dashboard",
    "error",
    "extensions",
    "groups",
    "locale",
    "pages",
    "search",
    "settings",
    "tags",
    "users",
];

/// Longest description shown in the listing, ellipsis included.
pub const DESCRIPTION_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    /// Raw storage key.
    pub name: String,
    pub label: String,
    pub active: bool,
    pub description: String,
    pub version: String,
}

pub struct ModuleCatalog {
    store: Box<dyn ModuleStore>,
    translator: Box<dyn Translator>,
    modules_root: PathBuf,
}

impl ModuleCatalog {
    pub fn new(
        store: Box<dyn ModuleStore>,
        translator: Box<dyn Translator>,
        modules_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            translator,
            modules_root: modules_root.into(),
        }
    }

    /// Manageable modules, ordered by raw name.
    ///
    /// Only a failing store is an error; unreadable descriptors just leave
    /// the description and version empty.
    pub fn list_modules(&self) -> Result<Vec<ModuleEntry>, StoreError> {
        let rows = self.store.modules()?;
        let entries: Vec<ModuleEntry> = rows
            .into_iter()
            .filter(|row| !is_ignored(&row.name))
            .map(|row| self.entry_for(row))
            .collect();
        backoffice_debug!("Listed {} manageable modules", entries.len());
        Ok(entries)
    }

    /// Whether the module's directory is present on disk.
    pub fn module_exists(&self, name: &str) -> bool {
        self.modules_root.join(name).is_dir()
    }

    fn entry_for(&self, row: ModuleRow) -> ModuleEntry {
        let label = module_label(&row.name, self.translator.as_ref());
        let path = self.modules_root.join(&row.name).join(DESCRIPTOR_FILENAME);
        let metadata = load_descriptor(&path).unwrap_or_default();

        ModuleEntry {
            label,
            active: row.active,
            description: metadata
                .description
                .as_deref()
                .map(|text| truncate(text, DESCRIPTION_LIMIT))
                .unwrap_or_default(),
            version: metadata.version.unwrap_or_default(),
            name: row.name,
        }
    }
}

pub fn is_ignored(name: &str) -> bool {
    IGNORED_MODULES.contains(&name)
}

/// Shortens `text` to at most `limit` characters, ending in `…` when cut.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
