//! AST infrastructure for tsxmend
//!
//! Tree-sitter based parsing into an immutable per-request snapshot.
//! The TSX grammar is used for every document (superset of plain TS).
//! Trees are never mutated; the engine only emits text edits against them.

pub mod kinds;
pub mod locate;

pub use kinds::{SyntaxKind, kind_of};
pub use locate::{find_ancestor, node_at_offset};

use tree_sitter::{Node, Parser, Tree};

use crate::error::AstError;
use crate::models::TextSpan;

/// One file's text together with its parsed tree.
///
/// Immutable once constructed; every request computes against exactly one
/// snapshot, so no computation ever observes torn text.
pub struct SourceTree {
    text: String,
    tree: Tree,
}

impl SourceTree {
    pub fn parse(file_name: &str, text: impl Into<String>) -> Result<Self, AstError> {
        let text = text.into();
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())
            .map_err(|e| AstError::Grammar(e.to_string()))?;
        let tree = parser
            .parse(&text, None)
            .ok_or_else(|| AstError::Parse(file_name.to_string()))?;
        Ok(Self { text, tree })
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Source text covered by `node`.
    pub fn node_text(&self, node: &Node) -> &str {
        &self.text[node.start_byte()..node.end_byte()]
    }
}

impl std::fmt::Debug for SourceTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceTree")
            .field("len", &self.text.len())
            .finish()
    }
}

/// Byte span of a node.
pub fn span_of(node: &Node) -> TextSpan {
    TextSpan::from_bounds(node.start_byte(), node.end_byte())
}
