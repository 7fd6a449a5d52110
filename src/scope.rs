//! Search scope resolution: which projects a request is allowed to touch.

use crate::engine::{Language, ProjectModel};
use crate::error::{Result, SearchError};
use serde::Serialize;
use tracing::debug;

pub const SCOPE_ALL: &str = "all";
pub const SCOPE_PROJECT: &str = "project";

/// Identifier of a workspace project.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The set of projects an index query is restricted to.
///
/// `Workspace` is the engine's whole-workspace mode, a sentinel rather than
/// an enumerated project list. `Projects` is an ordered list, anchor project
/// first. Built once per request and consumed by exactly one executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexScope {
    Workspace,
    Projects(Vec<ProjectId>),
}

/// Resolve the scope for a pattern search. `"all"` defers to the engine's
/// whole-workspace mode; anything else restricts to the anchor project and
/// its directly declared dependencies.
pub fn resolve_pattern_scope(
    scope: Option<&str>,
    anchor: &ProjectId,
    projects: &dyn ProjectModel,
) -> Result<IndexScope> {
    if scope == Some(SCOPE_ALL) {
        debug!(anchor = anchor.as_str(), "pattern scope: whole workspace");
        return Ok(IndexScope::Workspace);
    }
    resolve_project_scope(anchor, projects)
}

/// Resolve the scope for an element search. `"all"` enumerates every open C
/// or C++ project in the workspace; anything else restricts to the anchor
/// project and its directly declared dependencies.
pub fn resolve_element_scope(
    scope: Option<&str>,
    anchor: &ProjectId,
    projects: &dyn ProjectModel,
) -> Result<IndexScope> {
    if scope == Some(SCOPE_ALL) {
        let open = projects.open_projects_of(&[Language::C, Language::Cpp]);
        debug!(
            anchor = anchor.as_str(),
            projects = open.len(),
            "element scope: all open C/C++ projects"
        );
        return Ok(IndexScope::Projects(open));
    }
    resolve_project_scope(anchor, projects)
}

/// Anchor-first scope: the anchor project followed by its directly declared
/// dependencies in declaration order. Closed dependencies are opened as a
/// side effect; a dependency that refuses to open aborts resolution.
///
/// Expansion is one level deep only. The original system never walked the
/// transitive closure, and callers' expectations encode that, so deepening
/// the walk here would be a behavior change.
fn resolve_project_scope(anchor: &ProjectId, projects: &dyn ProjectModel) -> Result<IndexScope> {
    let mut elements = vec![anchor.clone()];
    for dependency in projects.declared_dependencies(anchor) {
        if !projects.is_open(&dependency) {
            projects
                .open(&dependency)
                .map_err(|err| SearchError::ScopeResolution {
                    project: dependency.as_str().to_string(),
                    reason: err.to_string(),
                })?;
        }
        elements.push(dependency);
    }
    debug!(
        anchor = anchor.as_str(),
        projects = elements.len(),
        "project scope resolved"
    );
    Ok(IndexScope::Projects(elements))
}
