//! Position locator and ancestor matcher
//!
//! The locator descends to the innermost named node whose span contains an
//! offset. Sibling spans never overlap, so at each level at most one child
//! can match; a shared boundary offset resolves to the first sibling in
//! document order. The matcher tests the starting node first, then walks
//! the single-parent chain upward.

use tree_sitter::Node;

use super::kinds::{SyntaxKind, kind_of};

/// Innermost named node containing `offset`, or `None` when the offset lies
/// outside the root's span.
///
/// When `include_documentation` is false, a hit on a comment node yields
/// `None` instead.
pub fn node_at_offset(
    root: Node<'_>,
    offset: usize,
    include_documentation: bool,
) -> Option<Node<'_>> {
    if offset < root.start_byte() || offset > root.end_byte() {
        return None;
    }

    let mut current = root;
    loop {
        let mut cursor = current.walk();
        let next = current
            .named_children(&mut cursor)
            .find(|child| child.start_byte() <= offset && offset <= child.end_byte());
        match next {
            Some(child) => current = child,
            None => break,
        }
    }

    if !include_documentation && kind_of(&current) == SyntaxKind::Comment {
        return None;
    }
    Some(current)
}

/// First node in the parent chain (starting with `node` itself) satisfying
/// `predicate`, or `None` past the root.
pub fn find_ancestor<'t, P>(node: Node<'t>, mut predicate: P) -> Option<Node<'t>>
where
    P: FnMut(&Node<'t>) -> bool,
{
    let mut current = Some(node);
    while let Some(candidate) = current {
        if predicate(&candidate) {
            return Some(candidate);
        }
        current = candidate.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::ast::SourceTree;

    const SOURCE: &str = "// greeting\nfunction Foo() {\n  return <div title=\"hi\" />;\n}\n";

    #[test]
    fn test_offset_outside_root_is_none() {
        let tree = SourceTree::parse("app.tsx", SOURCE).unwrap();
        assert!(node_at_offset(tree.root(), SOURCE.len() + 10, false).is_none());
    }

    #[test]
    fn test_innermost_node() {
        let tree = SourceTree::parse("app.tsx", SOURCE).unwrap();
        let offset = SOURCE.find("title").unwrap();
        let node = node_at_offset(tree.root(), offset, false).unwrap();
        assert_eq!(kind_of(&node), SyntaxKind::PropertyIdentifier);
        assert_eq!(tree.node_text(&node), "title");
    }

    #[test]
    fn test_documentation_excluded() {
        let tree = SourceTree::parse("app.tsx", SOURCE).unwrap();
        let offset = SOURCE.find("greeting").unwrap();
        assert!(node_at_offset(tree.root(), offset, false).is_none());
        let node = node_at_offset(tree.root(), offset, true).unwrap();
        assert_eq!(kind_of(&node), SyntaxKind::Comment);
    }

    #[test]
    fn test_always_true_returns_starting_node() {
        let tree = SourceTree::parse("app.tsx", SOURCE).unwrap();
        let offset = SOURCE.find("div").unwrap();
        let node = node_at_offset(tree.root(), offset, false).unwrap();
        let found = find_ancestor(node, |_| true).unwrap();
        assert_eq!(found.id(), node.id());
    }

    #[test]
    fn test_always_false_returns_none() {
        let tree = SourceTree::parse("app.tsx", SOURCE).unwrap();
        let offset = SOURCE.find("div").unwrap();
        let node = node_at_offset(tree.root(), offset, false).unwrap();
        assert!(find_ancestor(node, |_| false).is_none());
    }

    #[test]
    fn test_ancestor_by_kind() {
        let tree = SourceTree::parse("app.tsx", SOURCE).unwrap();
        let offset = SOURCE.find("title").unwrap();
        let node = node_at_offset(tree.root(), offset, false).unwrap();
        let func = find_ancestor(node, |n| kind_of(n) == SyntaxKind::FunctionDeclaration);
        assert!(func.is_some());
    }
}

