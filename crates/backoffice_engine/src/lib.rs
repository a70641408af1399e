//! Backoffice engine: status polling IO and the extensions module catalog.
mod catalog;
mod poller;
mod status;
mod types;

pub use catalog::{
    capitalize_first, is_ignored, load_descriptor, module_label, parse_descriptor, to_camel_case,
    truncate, DescriptorError, ElementRecord, EventRecord, InMemoryModuleStore, LabelTable, ModuleCatalog,
    ModuleEntry, ModuleMetadata, ModuleRow, ModuleStore, RonModuleStore, StoreError, Translator,
    DESCRIPTION_LIMIT, DESCRIPTOR_FILENAME, IGNORED_MODULES,
};
pub use poller::{PageSurface, StatusPoller};
pub use status::{ReqwestStatusClient, StatusClient, StatusSettings, CHECK_STATUS_ACTION};
pub use types::{classify, StatusData, StatusEnvelope, StatusError};
