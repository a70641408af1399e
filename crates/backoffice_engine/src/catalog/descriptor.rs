use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use backoffice_logging::{backoffice_debug, backoffice_warn};
use roxmltree::{Document, Node};
use thiserror::Error;

/// Name of the descriptor file inside every module directory.
pub const DESCRIPTOR_FILENAME: &str = "info.xml";

const ROOT: &str = "module";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("descriptor is not well-formed xml: {0}")]
    Malformed(String),
}

/// One descriptor element: its attributes, direct text and child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementRecord {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
    pub children: Vec<ElementRecord>,
}

impl ElementRecord {
    pub fn from_node(node: Node<'_, '_>) -> Self {
        let attributes = node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect();
        let text = node
            .children()
            .filter(Node::is_text)
            .filter_map(|child| child.text())
            .collect::<String>();
        let children = node
            .children()
            .filter(Node::is_element)
            .map(ElementRecord::from_node)
            .collect();

        Self {
            name: node.tag_name().name().to_string(),
            attributes,
            text,
            children,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Trimmed text of the first child element called `name`.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|child| child.name == name)
            .map(|child| child.text.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventRecord {
    pub application: String,
    pub name: String,
    pub description: String,
}

impl From<&ElementRecord> for EventRecord {
    fn from(record: &ElementRecord) -> Self {
        Self {
            application: record.attribute("application").unwrap_or_default().to_string(),
            name: record.attribute("name").unwrap_or_default().to_string(),
            description: record.text.trim().to_string(),
        }
    }
}

/// Everything a module descriptor can tell about its module.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleMetadata {
    pub version: Option<String>,
    pub description: Option<String>,
    pub authors: Vec<ElementRecord>,
    pub events: Vec<EventRecord>,
}

impl ModuleMetadata {
    /// Extracts metadata from an already parsed descriptor.
    ///
    /// Never fails: a document with another root, or missing sections, simply
    /// yields fewer fields.
    pub fn from_document(document: &Document<'_>) -> Self {
        let root = document.root_element();
        if root.tag_name().name() != ROOT {
            return Self::default();
        }

        let version = first_text(root, "version");
        let description = first_text(root, "description");
        let authors = section(root, "authors", "author")
            .map(ElementRecord::from_node)
            .collect();
        let events = section(root, "events", "event")
            .map(|node| EventRecord::from(&ElementRecord::from_node(node)))
            .collect();

        Self {
            version,
            description,
            authors,
            events,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.version.is_none()
            && self.description.is_none()
            && self.authors.is_empty()
            && self.events.is_empty()
    }
}

/// Parses descriptor text. CDATA sections are folded into plain text.
pub fn parse_descriptor(xml: &str) -> Result<Document<'_>, DescriptorError> {
    Document::parse(xml).map_err(|err| DescriptorError::Malformed(err.to_string()))
}

/// Best-effort load of a descriptor file; any problem means "no metadata".
pub fn load_descriptor(path: &Path) -> Option<ModuleMetadata> {
    let xml = match fs::read_to_string(path) {
        Ok(xml) => xml,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            backoffice_debug!("No descriptor at {:?}", path);
            return None;
        }
        Err(err) => {
            backoffice_warn!("Failed to read descriptor {:?}: {}", path, err);
            return None;
        }
    };

    match parse_descriptor(&xml) {
        Ok(document) => Some(ModuleMetadata::from_document(&document)),
        Err(err) => {
            backoffice_warn!("Ignoring descriptor {:?}: {}", path, err);
            None
        }
    }
}

fn elements<'a, 'input>(
    parent: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    parent
        .children()
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}

fn first_text(root: Node<'_, '_>, name: &'static str) -> Option<String> {
    let node = elements(root, name).next()?;
    let text = node
        .children()
        .find(Node::is_text)
        .and_then(|child| child.text())?;
    Some(text.trim().to_string())
}

fn section<'a, 'input>(
    root: Node<'a, 'input>,
    container: &'static str,
    item: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    elements(root, container).flat_map(move |group| elements(group, item))
}
