//! Semantic model seam
//!
//! The engine queries symbols and types through this trait instead of
//! owning resolution. Queries are position-addressed against the current
//! snapshot and synchronous; a production host backs them with its own
//! analysis service. `FileLocalModel` is the bundled fallback: purely
//! syntactic, same-file resolution for the standalone CLI and tests.

use tree_sitter::Node;

use crate::infra::ast::{SourceTree, SyntaxKind, find_ancestor, kind_of, node_at_offset, span_of};
use crate::models::TextSpan;

/// A resolved symbol at a use site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolBinding {
    pub name: String,
    /// Span of the declaring node when it lives in the same file.
    pub declaration: Option<TextSpan>,
}

/// Synchronous, snapshot-scoped symbol and type queries.
///
/// Every method may answer `None`; callers degrade to a fallback value
/// rather than failing the request.
pub trait SemanticModel {
    /// Symbol bound to the identifier at `offset`.
    fn symbol_at(&self, file_name: &str, offset: usize) -> Option<SymbolBinding>;

    /// Rendered type of the expression covering `span`, with literal types
    /// widened to their base type.
    fn widened_expression_type(&self, file_name: &str, span: TextSpan) -> Option<String>;

    /// Rendered type of the symbol used at `offset` (for component tags,
    /// the declared attributes type).
    fn symbol_type_at(&self, file_name: &str, offset: usize) -> Option<String>;
}

/// Same-file syntactic resolver over one snapshot.
pub struct FileLocalModel<'a> {
    file_name: &'a str,
    tree: &'a SourceTree,
}

impl<'a> FileLocalModel<'a> {
    pub fn new(file_name: &'a str, tree: &'a SourceTree) -> Self {
        Self { file_name, tree }
    }
}

impl SemanticModel for FileLocalModel<'_> {
    fn symbol_at(&self, file_name: &str, offset: usize) -> Option<SymbolBinding> {
        if file_name != self.file_name {
            return None;
        }
        symbol_at(self.tree, offset)
    }

    fn widened_expression_type(&self, file_name: &str, span: TextSpan) -> Option<String> {
        if file_name != self.file_name {
            return None;
        }
        widened_expression_type(self.tree, span)
    }

    fn symbol_type_at(&self, _file_name: &str, _offset: usize) -> Option<String> {
        // Rendering use-site types needs a type checker; syntactic
        // resolution cannot answer, so callers take their fallback path.
        None
    }
}

/// Top-level declaration of `name`: a function, type alias, or variable
/// declarator, searched in document order.
pub(crate) fn find_declaration<'t>(tree: &'t SourceTree, name: &str) -> Option<Node<'t>> {
    let mut stack = vec![tree.root()];
    while let Some(node) = stack.pop() {
        match kind_of(&node) {
            SyntaxKind::FunctionDeclaration
            | SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::VariableDeclarator => {
                if let Some(binding) = node.child_by_field_name("name")
                    && tree.node_text(&binding) == name
                {
                    return Some(node);
                }
            }
            _ => {}
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.named_children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }
    None
}

pub(crate) fn symbol_at(tree: &SourceTree, offset: usize) -> Option<SymbolBinding> {
    let node = node_at_offset(tree.root(), offset, true)?;
    if !kind_of(&node).is_identifier() {
        return None;
    }
    let name = tree.node_text(&node).to_string();
    let declaration = find_declaration(tree, &name).map(|decl| span_of(&decl));
    Some(SymbolBinding { name, declaration })
}

pub(crate) fn widened_expression_type(tree: &SourceTree, span: TextSpan) -> Option<String> {
    let inner = node_at_offset(tree.root(), span.start, true)?;
    let expr = find_ancestor(inner, |n| n.end_byte() >= span.end())?;
    literal_base_type(tree, expr, 0)
}

/// Widened base type of literal-shaped expressions; `None` for anything a
/// syntactic model cannot judge.
fn literal_base_type(tree: &SourceTree, node: Node<'_>, depth: u8) -> Option<String> {
    if depth > 4 {
        return None;
    }
    match kind_of(&node) {
        SyntaxKind::Number => Some("number".to_string()),
        SyntaxKind::String | SyntaxKind::TemplateString => Some("string".to_string()),
        SyntaxKind::True | SyntaxKind::False => Some("boolean".to_string()),
        SyntaxKind::Identifier => {
            let decl = find_declaration(tree, tree.node_text(&node))?;
            if kind_of(&decl) != SyntaxKind::VariableDeclarator {
                return None;
            }
            let value = decl.child_by_field_name("value")?;
            literal_base_type(tree, value, depth + 1)
        }
        SyntaxKind::Other if node.kind() == "parenthesized_expression" => {
            let inner = node.named_child(0)?;
            literal_base_type(tree, inner, depth + 1)
        }
        SyntaxKind::Other if node.kind() == "unary_expression" => {
            let operand = node.child_by_field_name("argument")?;
            literal_base_type(tree, operand, depth + 1)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = concat!(
        "type FooProps = { a: string };\n",
        "const limit = 10;\n",
        "function Foo(props: FooProps) {\n",
        "  return <span>{props.a}</span>;\n",
        "}\n",
        "const el = <Foo a=\"x\" b={limit} />;\n",
    );

    fn fixture() -> SourceTree {
        SourceTree::parse("app.tsx", SOURCE).unwrap()
    }

    #[test]
    fn test_symbol_at_resolves_local_function() {
        let tree = fixture();
        let offset = SOURCE.rfind("Foo").unwrap();
        let binding = symbol_at(&tree, offset).unwrap();
        assert_eq!(binding.name, "Foo");
        let decl = binding.declaration.unwrap();
        assert_eq!(decl.start, SOURCE.find("function Foo").unwrap());
    }

    #[test]
    fn test_symbol_at_resolves_type_alias() {
        let tree = fixture();
        let offset = SOURCE.find("FooProps)").unwrap();
        let binding = symbol_at(&tree, offset).unwrap();
        assert_eq!(binding.name, "FooProps");
        let decl = binding.declaration.unwrap();
        assert_eq!(decl.start, 0);
    }

    #[test]
    fn test_symbol_at_non_identifier_is_none() {
        let tree = fixture();
        assert!(symbol_at(&tree, SOURCE.find("10").unwrap()).is_none());
    }

    #[test]
    fn test_widened_number_literal() {
        let tree = fixture();
        let offset = SOURCE.find("10").unwrap();
        let ty = widened_expression_type(&tree, TextSpan::new(offset, 2)).unwrap();
        assert_eq!(ty, "number");
    }

    #[test]
    fn test_widened_through_const_binding() {
        let tree = fixture();
        let offset = SOURCE.find("{limit}").unwrap() + 1;
        let ty = widened_expression_type(&tree, TextSpan::new(offset, "limit".len())).unwrap();
        assert_eq!(ty, "number");
    }

    #[test]
    fn test_unjudgeable_expression_is_none() {
        let source = "const el = <Foo cb={() => 1} />;";
        let tree = SourceTree::parse("app.tsx", source).unwrap();
        let offset = source.find("() =>").unwrap();
        assert!(widened_expression_type(&tree, TextSpan::new(offset, 7)).is_none());
    }
}
