//! Core decision logic for a "find symbol" command over a C/C++ code index.
//!
//! The crate classifies an editor request as an element search (resolve the
//! symbol under a source position) or a pattern search (name/kind query),
//! computes the set of projects to search, maps the request's keyword enums
//! onto the index engine's query masks, runs the query under a shared read
//! lock, and renders the results as newline-separated `file|line:column|`
//! records.
//!
//! Parsing translation units, maintaining the index, and resolving bindings
//! are the job of an external engine; this crate talks to it through the
//! traits in [`engine`].

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod query;
pub mod request;
pub mod scope;
pub mod search;

pub use error::{Result, SearchError};
pub use request::{SearchPath, SearchRequest};
pub use search::SearchService;
