//! Collaborator traits for the external index engine, parser, offset
//! translator, and workspace project model.
//!
//! The engine owns every hard part of the problem: building and persisting
//! the index, parsing translation units, and resolving name bindings. The
//! handles it hands out ([`TranslationUnit`], [`NameToken`], [`Binding`]) are
//! opaque to this crate and only ever passed back to the engine.
//!
//! Adapters are expected to flatten their native result wrappers before
//! crossing this boundary: a pattern match arrives as an optional
//! [`SymbolLocation`] rather than a stack of match/element/reference types.

use crate::error::Result;
use crate::model::SymbolLocation;
use crate::scope::{IndexScope, ProjectId};

/// Language classification of a workspace project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    C,
    Cpp,
}

/// Opaque handle to a parsed translation unit, issued by [`SourceParser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranslationUnit(pub u64);

/// Opaque handle to a name token inside a translation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameToken(pub u64);

/// Opaque handle to a resolved symbol identity, shared by the symbol's
/// declarations, definitions, and references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding(pub u64);

/// One hit of a pattern query. `resolved` is absent when the engine knows of
/// the match but cannot point at a concrete location, which is expected for
/// partially-indexed symbols and skipped silently.
#[derive(Debug, Clone)]
pub struct PatternMatch {
    pub resolved: Option<SymbolLocation>,
}

/// Query surface of the pre-built symbol index.
///
/// The lock is shared: concurrent readers are allowed, and this crate adds no
/// mutual exclusion of its own. Implementations should widen the locked scope
/// to the projects' declared dependents and dependencies so cross-project
/// references are visible to the queries that follow.
pub trait SymbolIndex {
    fn acquire_read_lock(&self, scope: &IndexScope) -> Result<()>;

    fn release_read_lock(&self);

    /// Find the name token enclosing the byte span `offset..offset + length`
    /// in `unit`, if any.
    fn enclosing_name(
        &self,
        unit: TranslationUnit,
        offset: usize,
        length: usize,
    ) -> Result<Option<NameToken>>;

    /// Resolve a name token to its binding. `None` means the index has no
    /// identity for this name.
    fn resolve_binding(&self, name: NameToken) -> Result<Option<Binding>>;

    fn definitions_of(&self, binding: Binding) -> Result<Vec<SymbolLocation>>;

    fn declarations_of(&self, binding: Binding) -> Result<Vec<SymbolLocation>>;

    fn references_of(&self, binding: Binding) -> Result<Vec<SymbolLocation>>;

    /// Run a name/kind-filtered query over `scope`. `mask` is the bitwise
    /// union of a kind mask and a context mask from [`crate::query`]. Match
    /// order is engine-defined and preserved downstream.
    fn query_pattern(
        &self,
        scope: &IndexScope,
        pattern: &str,
        case_sensitive: bool,
        mask: u32,
    ) -> Result<Vec<PatternMatch>>;
}

/// Produces translation units for source files.
pub trait SourceParser {
    /// Parse `file` in the context of `project`. `None` means the file does
    /// not belong to the project, which renders as an empty result.
    fn parse(&self, project: &ProjectId, file: &str) -> Result<Option<TranslationUnit>>;
}

/// Translates byte offsets to 1-based (line, column) pairs.
pub trait OffsetTranslator {
    fn to_line_column(&self, file: &str, offset: usize) -> Result<(usize, usize)>;
}

/// The host workspace's project model.
pub trait ProjectModel {
    fn is_open(&self, project: &ProjectId) -> bool;

    /// Open a closed project. Failing to open a declared dependency aborts
    /// scope resolution.
    fn open(&self, project: &ProjectId) -> Result<()>;

    /// Projects `project` declares as build/reference dependencies, in
    /// declaration order. Direct dependencies only.
    fn declared_dependencies(&self, project: &ProjectId) -> Vec<ProjectId>;

    /// Every open project in the workspace classified as one of `languages`.
    fn open_projects_of(&self, languages: &[Language]) -> Vec<ProjectId>;
}

/// Scoped read lock on the symbol index: acquired on construction, released
/// on drop, so every exit path out of a search, including error propagation,
/// releases the lock.
pub struct IndexReadLock<'a> {
    index: &'a dyn SymbolIndex,
}

impl<'a> IndexReadLock<'a> {
    pub fn acquire(index: &'a dyn SymbolIndex, scope: &IndexScope) -> Result<Self> {
        index.acquire_read_lock(scope)?;
        Ok(Self { index })
    }
}

impl Drop for IndexReadLock<'_> {
    fn drop(&mut self) {
        self.index.release_read_lock();
    }
}
