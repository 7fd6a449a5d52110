use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Write as _;

/// A raw occurrence as reported by the index engine: a file plus a byte
/// offset into it.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct SymbolLocation {
    pub file: String,
    pub offset: usize,
}

impl SymbolLocation {
    pub fn new(file: impl Into<String>, offset: usize) -> Self {
        Self {
            file: file.into(),
            offset,
        }
    }
}

/// An occurrence after offset translation, with 1-based line and column.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedLocation {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

/// Ordered, deduplicating collection of resolved locations for one request.
///
/// Appending a location that is already present (by value) is a no-op, so an
/// occurrence reported as both a definition and a declaration shows up once.
/// The set is request-scoped: built during one search, rendered once,
/// discarded.
#[derive(Debug, Default)]
pub struct ResultSet {
    entries: Vec<ResolvedLocation>,
    seen: HashSet<ResolvedLocation>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `location` unless an equal one is already present. Returns
    /// whether the location was added.
    pub fn push(&mut self, location: ResolvedLocation) -> bool {
        if self.seen.insert(location.clone()) {
            self.entries.push(location);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn locations(&self) -> &[ResolvedLocation] {
        &self.entries
    }

    /// Render the wire format consumed by the editor: one
    /// `file|line:column|` record per location, joined with line feeds. The
    /// trailing empty field is a placeholder for excerpt text and must stay.
    /// An empty set renders as the empty string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for location in &self.entries {
            if !out.is_empty() {
                out.push('\n');
            }
            let _ = write!(
                out,
                "{}|{}:{}|",
                location.file, location.line, location.column
            );
        }
        out
    }
}
