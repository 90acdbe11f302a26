//! Input documents prepared for merging into the grid
//!
//! This is the strict read path: the document must parse, and each direct
//! child element of its root is kept as the exact slice of original text it
//! came from, so prefixes, namespace declarations, and formatting inside a
//! child survive untouched.

use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::layout::Dimensions;
use crate::probe;
use crate::renderer::svg::XLINK_NS;

/// One input SVG, parsed and ready to place
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    /// Path the document was loaded from
    pub path: PathBuf,
    /// Intrinsic size from the root's `width`/`height`
    pub dimensions: Dimensions,
    /// Markup of each top-level child element, in document order
    pub elements: Vec<String>,
    /// Prefixed namespace declarations in scope on the root, as
    /// `(prefix, uri)`, that the copied children may rely on
    pub namespaces: Vec<(String, String)>,
}

impl SourceDocument {
    /// Read and parse the document at `path`
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(path, &text)
    }

    /// Parse a document from text, recording `path` for labelling
    pub fn from_str(path: &Path, text: &str) -> Result<Self, SourceError> {
        let doc = roxmltree::Document::parse_with_options(text, probe::parsing_options())
            .map_err(|source| SourceError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let root = doc.root_element();
        let elements = root
            .children()
            .filter(|node| node.is_element())
            .map(|node| text[node.range()].to_string())
            .collect();

        let namespaces = root
            .namespaces()
            .filter_map(|ns| {
                let prefix = ns.name()?;
                if prefix == "xml" || (prefix == "xlink" && ns.uri() == XLINK_NS) {
                    return None;
                }
                Some((prefix.to_string(), ns.uri().to_string()))
            })
            .collect();

        let dimensions = match probe::dimensions_from_str(text) {
            Ok(dims) => dims,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read dimensions, using defaults");
                Dimensions::DEFAULT
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            dimensions,
            elements,
            namespaces,
        })
    }

    /// Base file name shown under the cell
    pub fn label(&self) -> String {
        file_label(&self.path)
    }
}

/// Base name of `path`, or the whole path if it has none
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
