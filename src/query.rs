//! Translation of the request's keyword enums into the index engine's query
//! mask vocabulary.
//!
//! Both translations are total: an unrecognized or absent keyword falls
//! through to a documented default instead of failing. The keyword tables are
//! spelled out as explicit `match` arms on purpose; the default-on-miss
//! behavior is part of the contract with the editor side.

/// Occurrence context bits understood by the engine.
pub const FIND_DECLARATIONS: u32 = 0x01;
pub const FIND_DEFINITIONS: u32 = 0x02;
pub const FIND_REFERENCES: u32 = 0x04;
pub const FIND_DECLARATIONS_DEFINITIONS: u32 = FIND_DECLARATIONS | FIND_DEFINITIONS;
pub const FIND_ALL_OCCURRENCES: u32 = FIND_DECLARATIONS | FIND_DEFINITIONS | FIND_REFERENCES;

/// Symbol kind bits understood by the engine. 0x80 is unused, matching the
/// engine's own numbering.
pub const FIND_CLASS_STRUCT: u32 = 0x10;
pub const FIND_FUNCTION: u32 = 0x20;
pub const FIND_VARIABLE: u32 = 0x40;
pub const FIND_UNION: u32 = 0x100;
pub const FIND_METHOD: u32 = 0x200;
pub const FIND_FIELD: u32 = 0x400;
pub const FIND_ENUM: u32 = 0x800;
pub const FIND_ENUMERATOR: u32 = 0x1000;
pub const FIND_NAMESPACE: u32 = 0x2000;
pub const FIND_TYPEDEF: u32 = 0x4000;
pub const FIND_MACRO: u32 = 0x8000;
pub const FIND_ALL_TYPES: u32 = FIND_CLASS_STRUCT
    | FIND_FUNCTION
    | FIND_VARIABLE
    | FIND_UNION
    | FIND_METHOD
    | FIND_FIELD
    | FIND_ENUM
    | FIND_ENUMERATOR
    | FIND_NAMESPACE
    | FIND_TYPEDEF
    | FIND_MACRO;

/// Which occurrences of a symbol a search should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchContext {
    AllOccurrences,
    DeclarationsAndDefinitions,
    ReferencesOnly,
}

impl SearchContext {
    /// Translate the request's `context` keyword. Anything other than
    /// `"all"` or `"references"`, including an absent value, means
    /// declarations and definitions.
    pub fn from_keyword(raw: Option<&str>) -> Self {
        match raw {
            Some("all") => SearchContext::AllOccurrences,
            Some("references") => SearchContext::ReferencesOnly,
            _ => SearchContext::DeclarationsAndDefinitions,
        }
    }

    pub fn mask(self) -> u32 {
        match self {
            SearchContext::AllOccurrences => FIND_ALL_OCCURRENCES,
            SearchContext::DeclarationsAndDefinitions => FIND_DECLARATIONS_DEFINITIONS,
            SearchContext::ReferencesOnly => FIND_REFERENCES,
        }
    }

    pub fn wants_declarations(self) -> bool {
        matches!(
            self,
            SearchContext::AllOccurrences | SearchContext::DeclarationsAndDefinitions
        )
    }

    pub fn wants_references(self) -> bool {
        matches!(
            self,
            SearchContext::AllOccurrences | SearchContext::ReferencesOnly
        )
    }
}

/// Symbol kind filter for pattern searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    All,
    ClassStruct,
    Function,
    Variable,
    Union,
    Method,
    Field,
    Enum,
    Enumerator,
    Namespace,
    Typedef,
    Macro,
}

impl SymbolKind {
    /// Translate the request's `type` keyword. Unrecognized or absent
    /// keywords mean all kinds.
    pub fn from_keyword(raw: Option<&str>) -> Self {
        match raw {
            Some("class_struct") => SymbolKind::ClassStruct,
            Some("function") => SymbolKind::Function,
            Some("variable") => SymbolKind::Variable,
            Some("union") => SymbolKind::Union,
            Some("method") => SymbolKind::Method,
            Some("field") => SymbolKind::Field,
            Some("enum") => SymbolKind::Enum,
            Some("enumerator") => SymbolKind::Enumerator,
            Some("namespace") => SymbolKind::Namespace,
            Some("typedef") => SymbolKind::Typedef,
            Some("macro") => SymbolKind::Macro,
            _ => SymbolKind::All,
        }
    }

    pub fn mask(self) -> u32 {
        match self {
            SymbolKind::All => FIND_ALL_TYPES,
            SymbolKind::ClassStruct => FIND_CLASS_STRUCT,
            SymbolKind::Function => FIND_FUNCTION,
            SymbolKind::Variable => FIND_VARIABLE,
            SymbolKind::Union => FIND_UNION,
            SymbolKind::Method => FIND_METHOD,
            SymbolKind::Field => FIND_FIELD,
            SymbolKind::Enum => FIND_ENUM,
            SymbolKind::Enumerator => FIND_ENUMERATOR,
            SymbolKind::Namespace => FIND_NAMESPACE,
            SymbolKind::Typedef => FIND_TYPEDEF,
            SymbolKind::Macro => FIND_MACRO,
        }
    }
}
