//! Add-useRef refactor
//!
//! Offered on any markup element in a typed-markup file. Produces two
//! coordinated edits against the original text: a mutable ref-container
//! binding inserted as the first statement of the nearest block-bodied
//! enclosing function, and a `ref={ref}` attribute inserted right after
//! the opening tag's name token. Either step failing makes the whole
//! refactor silently unavailable; an element that already carries a ref
//! attribute is declined so applying the edits removes the offer.

use tracing::debug;

use crate::infra::ast::{SyntaxKind, find_ancestor, kind_of, node_at_offset};
use crate::models::{ApplicableRefactor, FileTextEdits, RefactorActionInfo, RefactorEditSet};
use crate::services::markup::{MarkupElement, classify, has_attribute, opening_like};
use crate::services::refactors::RefactorProvider;
use crate::services::{EditSynthesizer, RequestContext, supports_typed_markup};

pub const REFACTOR_NAME: &str = "Add useRef to component";
const REFACTOR_DESCRIPTION: &str = "Bind a useRef container to this element";
pub const ACTION_KIND: &str = "refactor.rewrite";

/// Fallback host-element type when resolution fails entirely.
const UNIVERSAL_ELEMENT_TYPE: &str = "HTMLElement";

pub struct AddRefBinding;

impl RefactorProvider for AddRefBinding {
    fn name(&self) -> &'static str {
        REFACTOR_NAME
    }

    fn kinds(&self) -> &'static [&'static str] {
        &[ACTION_KIND]
    }

    fn available_actions(&self, cx: &RequestContext<'_>) -> Vec<ApplicableRefactor> {
        if self.target_element(cx).is_none() {
            return Vec::new();
        }
        vec![ApplicableRefactor {
            name: REFACTOR_NAME.to_string(),
            description: REFACTOR_DESCRIPTION.to_string(),
            actions: vec![RefactorActionInfo {
                name: REFACTOR_NAME.to_string(),
                description: REFACTOR_DESCRIPTION.to_string(),
                kind: ACTION_KIND.to_string(),
                is_interactive: true,
            }],
        }]
    }

    fn edits_for_action(
        &self,
        cx: &RequestContext<'_>,
        action_name: &str,
    ) -> Option<RefactorEditSet> {
        if action_name != REFACTOR_NAME {
            return None;
        }
        let opening = self.target_element(cx)?;
        let edits = build_edits(cx, &opening)?;
        Some(RefactorEditSet { edits: vec![edits] })
    }
}

impl AddRefBinding {
    /// Opening-like element under the cursor, when the refactor applies.
    fn target_element<'t>(&self, cx: &RequestContext<'t>) -> Option<MarkupElement<'t>> {
        if !supports_typed_markup(cx.file_name) {
            return None;
        }
        let node = node_at_offset(
            cx.tree.root(),
            cx.start,
            cx.preferences.include_documentation,
        )?;
        let element = classify(cx.tree, node)?;
        let opening = opening_like(cx.tree, &element)?;
        if has_attribute(cx.tree, &opening, "ref") {
            debug!(tag = %opening.tag_name, "element already carries a ref attribute");
            return None;
        }
        Some(opening)
    }
}

fn build_edits(cx: &RequestContext<'_>, opening: &MarkupElement<'_>) -> Option<FileTextEdits> {
    let function = find_ancestor(opening.node, |n| kind_of(n).is_function_like())?;
    let body = function.child_by_field_name("body")?;
    if kind_of(&body) != SyntaxKind::StatementBlock {
        debug!("enclosing function body is not block-shaped");
        return None;
    }

    let element_type = host_element_type(cx, opening);

    let mut synth = EditSynthesizer::new(cx.file_name, cx.source());
    // first statement of the block, right after the opening brace
    synth.insert_at(
        body.start_byte() + 1,
        format!("\nconst ref = useRef<{element_type} | null>(null);\n"),
    );
    // insertion is addressed off the tag-name token, so attribute-heavy or
    // multi-line opening tags need no text matching
    synth.insert_at(opening.name_span.end(), " ref={ref}");
    synth.finish()
}

/// Host-element type for the ref container.
///
/// Components: the rendered tag-symbol type, with an `HTMLAttributes<X>`
/// element parameter extracted by convention when present. Intrinsics: the
/// capitalized tag name. Resolution failure degrades to the universal type.
fn host_element_type(cx: &RequestContext<'_>, opening: &MarkupElement<'_>) -> String {
    if opening.is_intrinsic() {
        return capitalize(&opening.tag_name);
    }
    match cx.model.symbol_type_at(cx.file_name, opening.name_span.start) {
        Some(rendered) => extract_element_param(&rendered).unwrap_or(rendered),
        None => UNIVERSAL_ELEMENT_TYPE.to_string(),
    }
}

/// Pull `X` out of the first `HTMLAttributes<X>` occurrence.
fn extract_element_param(rendered: &str) -> Option<String> {
    const MARKER: &str = "HTMLAttributes<";
    let rest = &rendered[rendered.find(MARKER)? + MARKER.len()..];
    let inner = rest[..rest.find('>')?].trim();
    (!inner.is_empty()).then(|| inner.to_string())
}

fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
