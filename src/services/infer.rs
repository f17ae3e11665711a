//! Attribute type inference
//!
//! Infers a type expression from an attribute's value: a bare attribute is
//! a boolean flag, a string literal is a string, and an expression value is
//! asked of the semantic model (already widened). A pure query with no side
//! effects; anything unrenderable falls back to the universal type.

use crate::infra::ast::{SyntaxKind, kind_of, span_of};
use crate::services::RequestContext;
use crate::services::markup::MarkupAttribute;

/// Universal fallback when no better type can be rendered.
pub const FALLBACK_TYPE: &str = "any";

/// Type text for an attribute's value.
pub fn attribute_value_type(cx: &RequestContext<'_>, attribute: &MarkupAttribute<'_>) -> String {
    let Some(initializer) = attribute.initializer else {
        return "boolean".to_string();
    };

    match kind_of(&initializer) {
        SyntaxKind::String => "string".to_string(),
        SyntaxKind::JsxExpression => match initializer.named_child(0) {
            Some(expr) => cx
                .model
                .widened_expression_type(cx.file_name, span_of(&expr))
                .unwrap_or_else(|| FALLBACK_TYPE.to_string()),
            None => FALLBACK_TYPE.to_string(),
        },
        _ => FALLBACK_TYPE.to_string(),
    }
}
