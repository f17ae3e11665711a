//! Markup element classification
//!
//! Recognizes opening/closing/self-closing markup elements over the closed
//! kind set. An identifier inside a tag or attribute resolves upward to the
//! nearest element ancestor; any other non-element node does not classify.
//! Intrinsic elements (lowercase-initial tag) are distinguished from
//! component elements (symbol-bound): only component elements are eligible
//! for prop-type widening, while ref insertion applies to both.

use serde::Serialize;
use tree_sitter::Node;

use crate::infra::ast::{SourceTree, SyntaxKind, find_ancestor, kind_of, span_of};
use crate::models::TextSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkupVariant {
    Opening,
    Closing,
    SelfClosing,
}

/// Classified view over an element node.
#[derive(Debug, Clone)]
pub struct MarkupElement<'t> {
    pub variant: MarkupVariant,
    pub node: Node<'t>,
    pub tag_name: String,
    /// Span of the tag-name token inside the element.
    pub name_span: TextSpan,
}

impl MarkupElement<'_> {
    /// Lowercase-initial tags name host intrinsics, not user components.
    pub fn is_intrinsic(&self) -> bool {
        self.tag_name
            .chars()
            .next()
            .is_some_and(|c| c.is_lowercase())
    }
}

/// An attribute of an opening-like element.
#[derive(Debug, Clone)]
pub struct MarkupAttribute<'t> {
    pub node: Node<'t>,
    pub name: String,
    /// Value node after `=`, absent for bare boolean attributes.
    pub initializer: Option<Node<'t>>,
}

/// Classify `node` as a markup element, walking up from an identifier
/// inside a tag or attribute. Non-identifier non-element nodes (text,
/// expressions between tags) yield `None`.
pub fn classify<'t>(tree: &SourceTree, node: Node<'t>) -> Option<MarkupElement<'t>> {
    let kind = kind_of(&node);
    let element = if kind.is_markup_element() {
        node
    } else if kind.is_identifier() {
        find_ancestor(node, |n| kind_of(n).is_markup_element())?
    } else {
        return None;
    };

    let variant = match kind_of(&element) {
        SyntaxKind::JsxOpeningElement => MarkupVariant::Opening,
        SyntaxKind::JsxClosingElement => MarkupVariant::Closing,
        SyntaxKind::JsxSelfClosingElement => MarkupVariant::SelfClosing,
        _ => return None,
    };

    let name = element.child_by_field_name("name")?;
    Some(MarkupElement {
        variant,
        node: element,
        tag_name: tree.node_text(&name).to_string(),
        name_span: span_of(&name),
    })
}

/// Resolve an element to the opening-like element carrying its attributes:
/// a closing tag resolves through the enclosing element to its opening tag.
pub fn opening_like<'t>(
    tree: &SourceTree,
    element: &MarkupElement<'t>,
) -> Option<MarkupElement<'t>> {
    match element.variant {
        MarkupVariant::Opening | MarkupVariant::SelfClosing => Some(element.clone()),
        MarkupVariant::Closing => {
            let parent = element.node.parent()?;
            if kind_of(&parent) != SyntaxKind::JsxElement {
                return None;
            }
            let mut cursor = parent.walk();
            let opening = parent
                .named_children(&mut cursor)
                .find(|n| kind_of(n) == SyntaxKind::JsxOpeningElement)?;
            classify(tree, opening)
        }
    }
}

/// Attributes of an opening-like element, in source order.
pub fn attributes<'t>(tree: &SourceTree, element: &MarkupElement<'t>) -> Vec<MarkupAttribute<'t>> {
    let mut cursor = element.node.walk();
    element
        .node
        .named_children(&mut cursor)
        .filter(|n| kind_of(n) == SyntaxKind::JsxAttribute)
        .filter_map(|attr| attribute_of(tree, attr))
        .collect()
}

/// Classified view of one `jsx_attribute` node.
pub fn attribute_of<'t>(tree: &SourceTree, attr: Node<'t>) -> Option<MarkupAttribute<'t>> {
    let name = attr.named_child(0)?;
    let initializer = if attr.named_child_count() > 1 {
        attr.named_child((attr.named_child_count() - 1) as u32)
    } else {
        None
    };
    Some(MarkupAttribute {
        node: attr,
        name: tree.node_text(&name).to_string(),
        initializer,
    })
}

pub fn find_attribute<'t>(
    tree: &SourceTree,
    element: &MarkupElement<'t>,
    name: &str,
) -> Option<MarkupAttribute<'t>> {
    attributes(tree, element).into_iter().find(|a| a.name == name)
}

pub fn has_attribute(tree: &SourceTree, element: &MarkupElement<'_>, name: &str) -> bool {
    find_attribute(tree, element, name).is_some()
}
