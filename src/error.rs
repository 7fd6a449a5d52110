use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors surfaced to the caller. Empty results are not errors: a position
/// with no enclosing name, a pattern with zero matches, and a request with
/// neither position nor pattern all render as the empty string.
#[derive(Error, Debug)]
pub enum SearchError {
    /// A project declared as a dependency of the search anchor could not be
    /// opened while resolving the search scope.
    #[error("scope resolution failed: cannot open dependency project '{project}': {reason}")]
    ScopeResolution { project: String, reason: String },

    /// The name at the requested position exists but has no resolvable
    /// binding in the index.
    #[error("no resolvable binding for symbol at {file}:{offset}")]
    SymbolResolution { file: String, offset: usize },

    /// The external engine, parser, or offset translator failed.
    #[error("index engine query failed: {message}")]
    EngineQuery { message: String },

    /// The search pattern exceeds the configured length limit.
    #[error("pattern too long: {len} bytes (max: {max})")]
    PatternTooLong { len: usize, max: usize },
}

impl SearchError {
    pub fn engine(message: impl Into<String>) -> Self {
        SearchError::EngineQuery {
            message: message.into(),
        }
    }
}
