//! The two search executors and the request dispatcher.

use crate::config::Config;
use crate::engine::{
    IndexReadLock, OffsetTranslator, ProjectModel, SourceParser, SymbolIndex,
};
use crate::error::{Result, SearchError};
use crate::model::{ResolvedLocation, ResultSet, SymbolLocation};
use crate::query::{SearchContext, SymbolKind};
use crate::request::{SearchPath, SearchRequest};
use crate::scope::{ProjectId, resolve_element_scope, resolve_pattern_scope};
use tracing::debug;

/// One search request processed end to end against a set of collaborators.
///
/// The service holds no state of its own; every request builds its scope and
/// result set from scratch and discards them on completion. Either the full
/// result set is rendered or an error propagates, never partial output.
pub struct SearchService<'a> {
    projects: &'a dyn ProjectModel,
    parser: &'a dyn SourceParser,
    index: &'a dyn SymbolIndex,
    offsets: &'a dyn OffsetTranslator,
}

impl<'a> SearchService<'a> {
    pub fn new(
        projects: &'a dyn ProjectModel,
        parser: &'a dyn SourceParser,
        index: &'a dyn SymbolIndex,
        offsets: &'a dyn OffsetTranslator,
    ) -> Self {
        Self {
            projects,
            parser,
            index,
            offsets,
        }
    }

    /// Run a request and render its wire-format output. Empty results render
    /// as the empty string, not an error.
    pub fn execute(&self, request: &SearchRequest) -> Result<String> {
        match request.classify() {
            SearchPath::Element => {
                debug!(project = %request.project, "element search");
                self.element_search(request)
            }
            SearchPath::Pattern => {
                debug!(project = %request.project, "pattern search");
                self.pattern_search(request)
            }
        }
    }

    /// Resolve the symbol at the request's source position and collect its
    /// occurrences from the index.
    fn element_search(&self, request: &SearchRequest) -> Result<String> {
        let (Some(file), Some(offset), Some(length)) =
            (request.file.as_deref(), request.offset, request.length)
        else {
            return Ok(String::new());
        };

        let anchor = ProjectId::new(&request.project);
        let scope = resolve_element_scope(request.scope.as_deref(), &anchor, self.projects)?;
        let _lock = IndexReadLock::acquire(self.index, &scope)?;

        let Some(unit) = self.parser.parse(&anchor, file)? else {
            debug!(file, "no translation unit for file");
            return Ok(String::new());
        };
        let Some(name) = self.index.enclosing_name(unit, offset, length)? else {
            debug!(file, offset, length, "no name encloses position");
            return Ok(String::new());
        };
        let Some(binding) = self.index.resolve_binding(name)? else {
            return Err(SearchError::SymbolResolution {
                file: file.to_string(),
                offset,
            });
        };

        let context = SearchContext::from_keyword(request.context.as_deref());

        // Fixed collection order: definitions, then declarations not already
        // seen among the definitions, then references. Never re-sorted.
        let mut occurrences: Vec<SymbolLocation> = Vec::new();
        if context.wants_declarations() {
            occurrences.extend(self.index.definitions_of(binding)?);
            for declaration in self.index.declarations_of(binding)? {
                if !occurrences.contains(&declaration) {
                    occurrences.push(declaration);
                }
            }
        }
        if context.wants_references() {
            occurrences.extend(self.index.references_of(binding)?);
        }

        let mut results = ResultSet::new();
        self.resolve_into(&occurrences, &mut results)?;
        debug!(occurrences = occurrences.len(), results = results.len(), "element search done");
        Ok(results.render())
    }

    /// Run a name/kind-filtered pattern query over the resolved scope.
    fn pattern_search(&self, request: &SearchRequest) -> Result<String> {
        let Some(pattern) = request.pattern.as_deref().filter(|p| !p.is_empty()) else {
            return Ok(String::new());
        };
        let max_length = Config::get().pattern_max_length;
        if pattern.len() > max_length {
            return Err(SearchError::PatternTooLong {
                len: pattern.len(),
                max: max_length,
            });
        }

        let kind = SymbolKind::from_keyword(request.kind.as_deref());
        let context = SearchContext::from_keyword(request.context.as_deref());
        let mask = kind.mask() | context.mask();

        let anchor = ProjectId::new(&request.project);
        let scope = resolve_pattern_scope(request.scope.as_deref(), &anchor, self.projects)?;
        let _lock = IndexReadLock::acquire(self.index, &scope)?;

        let matches =
            self.index
                .query_pattern(&scope, pattern, !request.case_insensitive, mask)?;

        let mut results = ResultSet::new();
        for hit in &matches {
            // A match without a resolved location is expected for
            // partially-indexed symbols; skip it.
            let Some(location) = &hit.resolved else {
                continue;
            };
            let (line, column) = self.offsets.to_line_column(&location.file, location.offset)?;
            results.push(ResolvedLocation {
                file: location.file.clone(),
                line,
                column,
            });
        }
        debug!(matches = matches.len(), results = results.len(), "pattern search done");
        Ok(results.render())
    }

    fn resolve_into(
        &self,
        occurrences: &[SymbolLocation],
        results: &mut ResultSet,
    ) -> Result<()> {
        for occurrence in occurrences {
            let (line, column) = self
                .offsets
                .to_line_column(&occurrence.file, occurrence.offset)?;
            results.push(ResolvedLocation {
                file: occurrence.file.clone(),
                line,
                column,
            });
        }
        Ok(())
    }
}
