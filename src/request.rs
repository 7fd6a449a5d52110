//! The incoming search request and its classification.

use serde::Deserialize;

/// A single "find symbol" request from the editor integration, with fields
/// already parsed by the host.
///
/// Exactly one of two shapes selects the execution path: a source position
/// (`file` + `offset` + `length`) selects element search, anything else
/// falls through to pattern search. A request with neither a position nor a
/// pattern is not an error; it produces an empty result.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchRequest {
    /// Anchor project for scope resolution.
    pub project: String,
    /// Source file of the position, project-relative or absolute per the
    /// host's convention.
    #[serde(default)]
    pub file: Option<String>,
    /// Byte offset of the position.
    #[serde(default)]
    pub offset: Option<usize>,
    /// Byte length of the selection at `offset`.
    #[serde(default)]
    pub length: Option<usize>,
    /// Pattern text for pattern search.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Occurrence context keyword: `all`, `declarations`, `references`.
    #[serde(default)]
    pub context: Option<String>,
    /// Symbol kind keyword: `all`, `class_struct`, `function`, ...
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Scope keyword: `all` or `project`.
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub case_insensitive: bool,
}

/// The two execution paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPath {
    Element,
    Pattern,
}

impl SearchRequest {
    /// Parse a request from the host's JSON encoding.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Pure predicate: element search iff file, offset, and length are all
    /// present and the file is non-empty. Malformed requests fall through to
    /// pattern search, which itself returns empty when `pattern` is absent.
    pub fn classify(&self) -> SearchPath {
        let has_file = self.file.as_deref().is_some_and(|f| !f.is_empty());
        if has_file && self.offset.is_some() && self.length.is_some() {
            SearchPath::Element
        } else {
            SearchPath::Pattern
        }
    }
}
