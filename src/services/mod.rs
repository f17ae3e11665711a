//! Service layer for tsxmend
//!
//! Providers receive a per-request context holding one immutable snapshot
//! (source text, tree, semantic model, preferences). The context is built
//! by the proxy and discarded when the request returns.

pub mod codefixes;
pub mod edits;
pub mod infer;
pub mod markup;
pub mod proxy;
pub mod refactors;
pub mod semantic;

pub use codefixes::{CodeFixProvider, CodeFixRegistry};
pub use edits::EditSynthesizer;
pub use proxy::{DocumentStore, EngineService, LanguageService, NullHost, Workspace};
pub use refactors::{RefactorProvider, RefactorRegistry};
pub use semantic::{FileLocalModel, SemanticModel, SymbolBinding};

use crate::config::EnginePreferences;
use crate::infra::ast::SourceTree;

/// Per-invocation request context; one snapshot, no shared mutable state.
pub struct RequestContext<'a> {
    pub file_name: &'a str,
    pub tree: &'a SourceTree,
    pub model: &'a dyn SemanticModel,
    pub preferences: &'a EnginePreferences,
    /// Cursor or diagnostic-span start offset.
    pub start: usize,
    /// Selection/span end offset, when the request carries one.
    pub end: Option<usize>,
}

impl<'a> RequestContext<'a> {
    pub fn source(&self) -> &'a str {
        self.tree.text()
    }
}

/// Whether a file participates in typed markup transformations.
/// Plain-JS dialects are served by the host alone.
pub fn supports_typed_markup(file_name: &str) -> bool {
    !(file_name.ends_with(".js") || file_name.ends_with(".jsx"))
}
