#![allow(dead_code)]

use csearch::engine::{
    Binding, Language, NameToken, OffsetTranslator, PatternMatch, ProjectModel, SourceParser,
    SymbolIndex, TranslationUnit,
};
use csearch::error::{Result, SearchError};
use csearch::model::SymbolLocation;
use csearch::scope::{IndexScope, ProjectId};
use csearch::search::SearchService;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

/// In-memory stand-in for the external engine, parser, offset translator,
/// and project model, with enough recording to assert on lock discipline and
/// query arguments.
#[derive(Default)]
pub struct FakeWorkspace {
    pub units: HashMap<String, TranslationUnit>,
    pub names: HashMap<(TranslationUnit, usize, usize), NameToken>,
    pub bindings: HashMap<NameToken, Binding>,
    pub definitions: HashMap<Binding, Vec<SymbolLocation>>,
    pub declarations: HashMap<Binding, Vec<SymbolLocation>>,
    pub references: HashMap<Binding, Vec<SymbolLocation>>,
    pub pattern_matches: Vec<PatternMatch>,
    pub line_columns: HashMap<(String, usize), (usize, usize)>,
    pub dependencies: HashMap<ProjectId, Vec<ProjectId>>,
    pub open_projects: RefCell<HashSet<ProjectId>>,
    pub refuse_open: HashSet<ProjectId>,
    pub workspace_projects: Vec<ProjectId>,
    pub fail_pattern_query: bool,
    pub fail_references: bool,
    pub locks_acquired: Cell<usize>,
    pub locks_released: Cell<usize>,
    pub last_lock_scope: RefCell<Option<IndexScope>>,
    pub last_query: RefCell<Option<RecordedQuery>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery {
    pub scope: IndexScope,
    pub pattern: String,
    pub case_sensitive: bool,
    pub mask: u32,
}

impl FakeWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service(&self) -> SearchService<'_> {
        SearchService::new(self, self, self, self)
    }

    /// Register `file` with a translation unit whose name at
    /// `offset..offset + length` resolves to a fresh binding.
    pub fn add_symbol(&mut self, file: &str, offset: usize, length: usize, id: u64) -> Binding {
        let unit = TranslationUnit(id);
        let name = NameToken(id);
        let binding = Binding(id);
        self.units.insert(file.to_string(), unit);
        self.names.insert((unit, offset, length), name);
        self.bindings.insert(name, binding);
        binding
    }

    pub fn map_offset(&mut self, file: &str, offset: usize, line: usize, column: usize) {
        self.line_columns
            .insert((file.to_string(), offset), (line, column));
    }

    pub fn resolved_match(&mut self, file: &str, offset: usize) {
        self.pattern_matches.push(PatternMatch {
            resolved: Some(SymbolLocation::new(file, offset)),
        });
    }

    pub fn unresolved_match(&mut self) {
        self.pattern_matches.push(PatternMatch { resolved: None });
    }

    pub fn lock_balanced(&self) -> bool {
        self.locks_acquired.get() == self.locks_released.get()
    }
}

impl SymbolIndex for FakeWorkspace {
    fn acquire_read_lock(&self, scope: &IndexScope) -> Result<()> {
        self.locks_acquired.set(self.locks_acquired.get() + 1);
        *self.last_lock_scope.borrow_mut() = Some(scope.clone());
        Ok(())
    }

    fn release_read_lock(&self) {
        self.locks_released.set(self.locks_released.get() + 1);
    }

    fn enclosing_name(
        &self,
        unit: TranslationUnit,
        offset: usize,
        length: usize,
    ) -> Result<Option<NameToken>> {
        Ok(self.names.get(&(unit, offset, length)).copied())
    }

    fn resolve_binding(&self, name: NameToken) -> Result<Option<Binding>> {
        Ok(self.bindings.get(&name).copied())
    }

    fn definitions_of(&self, binding: Binding) -> Result<Vec<SymbolLocation>> {
        Ok(self.definitions.get(&binding).cloned().unwrap_or_default())
    }

    fn declarations_of(&self, binding: Binding) -> Result<Vec<SymbolLocation>> {
        Ok(self.declarations.get(&binding).cloned().unwrap_or_default())
    }

    fn references_of(&self, binding: Binding) -> Result<Vec<SymbolLocation>> {
        if self.fail_references {
            return Err(SearchError::engine("index corrupt"));
        }
        Ok(self.references.get(&binding).cloned().unwrap_or_default())
    }

    fn query_pattern(
        &self,
        scope: &IndexScope,
        pattern: &str,
        case_sensitive: bool,
        mask: u32,
    ) -> Result<Vec<PatternMatch>> {
        *self.last_query.borrow_mut() = Some(RecordedQuery {
            scope: scope.clone(),
            pattern: pattern.to_string(),
            case_sensitive,
            mask,
        });
        if self.fail_pattern_query {
            return Err(SearchError::engine("query executor died"));
        }
        Ok(self.pattern_matches.clone())
    }
}

impl SourceParser for FakeWorkspace {
    fn parse(&self, _project: &ProjectId, file: &str) -> Result<Option<TranslationUnit>> {
        Ok(self.units.get(file).copied())
    }
}

impl OffsetTranslator for FakeWorkspace {
    fn to_line_column(&self, file: &str, offset: usize) -> Result<(usize, usize)> {
        self.line_columns
            .get(&(file.to_string(), offset))
            .copied()
            .ok_or_else(|| SearchError::engine(format!("no line info for {file}@{offset}")))
    }
}

impl ProjectModel for FakeWorkspace {
    fn is_open(&self, project: &ProjectId) -> bool {
        self.open_projects.borrow().contains(project)
    }

    fn open(&self, project: &ProjectId) -> Result<()> {
        if self.refuse_open.contains(project) {
            return Err(SearchError::engine("refused"));
        }
        self.open_projects.borrow_mut().insert(project.clone());
        Ok(())
    }

    fn declared_dependencies(&self, project: &ProjectId) -> Vec<ProjectId> {
        self.dependencies.get(project).cloned().unwrap_or_default()
    }

    fn open_projects_of(&self, _languages: &[Language]) -> Vec<ProjectId> {
        self.workspace_projects.clone()
    }
}
