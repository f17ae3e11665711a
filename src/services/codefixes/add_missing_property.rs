//! Add-missing-property code fix
//!
//! Fires on "property does not exist" and "not assignable" diagnostics
//! whose span lands on an attribute of a component element. The component's
//! existing props type alias is appended to when there is one; otherwise a
//! fresh `<Component>Props` alias is synthesized before the declaration and
//! the parameter list is replaced with a destructured binding of the new
//! property. The replacement branch discards pre-existing parameters; a
//! known limitation of the synthesized-type path.

use tracing::debug;
use tree_sitter::Node;

use crate::infra::ast::{SyntaxKind, find_ancestor, kind_of, node_at_offset, span_of};
use crate::models::{CodeFixAction, FileTextEdits, TextSpan};
use crate::services::codefixes::CodeFixProvider;
use crate::services::infer::attribute_value_type;
use crate::services::markup::{MarkupElement, attribute_of, classify};
use crate::services::{EditSynthesizer, RequestContext};

pub const FIX_ID: &str = "addMissingProperty";

/// 2339: property does not exist on type. 2322: value not assignable.
pub const ERROR_CODES: &[u32] = &[2339, 2322];

pub struct AddMissingProperty;

impl CodeFixProvider for AddMissingProperty {
    fn fix_id(&self) -> &'static str {
        FIX_ID
    }

    fn error_codes(&self) -> &'static [u32] {
        ERROR_CODES
    }

    fn code_actions(&self, cx: &RequestContext<'_>, span: TextSpan) -> Vec<CodeFixAction> {
        match build_fix(cx, span) {
            Some(action) => vec![action],
            None => Vec::new(),
        }
    }
}

fn build_fix(cx: &RequestContext<'_>, span: TextSpan) -> Option<CodeFixAction> {
    let token = node_at_offset(cx.tree.root(), span.start, true)?;
    let attribute_node = find_ancestor(token, |n| kind_of(n) == SyntaxKind::JsxAttribute)?;
    let element_node = find_ancestor(attribute_node, |n| kind_of(n).is_opening_like())?;
    let element = classify(cx.tree, element_node)?;
    if element.is_intrinsic() {
        debug!(tag = %element.tag_name, "intrinsic elements take their props from the host");
        return None;
    }

    let attribute = attribute_of(cx.tree, attribute_node)?;
    let prop_name = attribute.name.clone();
    let component_name = element.tag_name.clone();

    let declaration = component_declaration(cx, &element)?;
    let prop_type = attribute_value_type(cx, &attribute);

    let changes = match resolve_props_type(cx, declaration) {
        Some(object_type) => append_property(cx, object_type, &prop_name, &prop_type)?,
        None => synthesize_props_type(cx, declaration, &component_name, &prop_name, &prop_type)?,
    };

    Some(CodeFixAction {
        fix_id: FIX_ID.to_string(),
        fix_name: format!("Add missing property '{prop_name}'"),
        description: format!("Add '{prop_name}' to {component_name} props"),
        changes: vec![changes],
    })
}

/// Function-shaped declaration the element tag resolves to. Other
/// declaration shapes yield no fix.
fn component_declaration<'t>(
    cx: &RequestContext<'t>,
    element: &MarkupElement<'t>,
) -> Option<Node<'t>> {
    let binding = cx.model.symbol_at(cx.file_name, element.name_span.start)?;
    let decl_span = binding.declaration?;
    let node = node_at_offset(cx.tree.root(), decl_span.start, true)?;
    let declaration = find_ancestor(node, |n| span_of(n) == decl_span)?;
    if kind_of(&declaration) != SyntaxKind::FunctionDeclaration {
        debug!(name = %binding.name, "component declaration is not function-shaped");
        return None;
    }
    Some(declaration)
}

/// Existing props type of the declaration: the first parameter's type
/// annotation must be a direct named-type reference to a type alias whose
/// value is an object type literal.
fn resolve_props_type<'t>(cx: &RequestContext<'t>, declaration: Node<'t>) -> Option<Node<'t>> {
    let parameters = declaration.child_by_field_name("parameters")?;
    let first = parameters.named_child(0)?;
    if !matches!(
        kind_of(&first),
        SyntaxKind::RequiredParameter | SyntaxKind::OptionalParameter
    ) {
        return None;
    }
    let annotation = first.child_by_field_name("type")?;
    let reference = annotation.named_child(0)?;
    if kind_of(&reference) != SyntaxKind::TypeIdentifier {
        return None;
    }

    let binding = cx.model.symbol_at(cx.file_name, reference.start_byte())?;
    let decl_span = binding.declaration?;
    let node = node_at_offset(cx.tree.root(), decl_span.start, true)?;
    let alias = find_ancestor(node, |n| kind_of(n) == SyntaxKind::TypeAliasDeclaration)?;
    let value = alias.child_by_field_name("value")?;
    (kind_of(&value) == SyntaxKind::ObjectType).then_some(value)
}

fn append_property(
    cx: &RequestContext<'_>,
    object_type: Node<'_>,
    prop_name: &str,
    prop_type: &str,
) -> Option<FileTextEdits> {
    if member_exists(cx, object_type, prop_name) {
        debug!(prop = prop_name, "props type already declares this member");
        return None;
    }
    let mut synth = EditSynthesizer::new(cx.file_name, cx.source());
    synth.append_type_member(
        object_type,
        &format!("{prop_name}: {prop_type}"),
        cx.preferences,
    );
    synth.finish()
}

fn synthesize_props_type(
    cx: &RequestContext<'_>,
    declaration: Node<'_>,
    component_name: &str,
    prop_name: &str,
    prop_type: &str,
) -> Option<FileTextEdits> {
    let parameters = declaration.child_by_field_name("parameters")?;
    let props_type_name = format!("{component_name}Props");
    let indent = &cx.preferences.indent;

    let mut synth = EditSynthesizer::new(cx.file_name, cx.source());
    // alias first, blank line between it and the declaration
    synth.insert_at(
        declaration.start_byte(),
        format!("type {props_type_name} = {{\n{indent}{prop_name}: {prop_type};\n}};\n\n"),
    );
    synth.replace_span(
        span_of(&parameters),
        format!("({{ {prop_name} }}: {props_type_name})"),
    );
    synth.finish()
}

fn member_exists(cx: &RequestContext<'_>, object_type: Node<'_>, prop_name: &str) -> bool {
    let mut cursor = object_type.walk();
    object_type
        .named_children(&mut cursor)
        .filter(|n| kind_of(n) == SyntaxKind::PropertySignature)
        .any(|member| {
            member
                .child_by_field_name("name")
                .is_some_and(|name| cx.tree.node_text(&name) == prop_name)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnginePreferences;
    use crate::infra::ast::SourceTree;
    use crate::services::edits::apply_changes;
    use crate::services::semantic::FileLocalModel;

    fn fixes_at(source: &str, span_start: usize, span_len: usize) -> Vec<CodeFixAction> {
        let tree = SourceTree::parse("app.tsx", source).unwrap();
        let prefs = EnginePreferences::default();
        let model = FileLocalModel::new("app.tsx", &tree);
        let cx = RequestContext {
            file_name: "app.tsx",
            tree: &tree,
            model: &model,
            preferences: &prefs,
            start: span_start,
            end: Some(span_start + span_len),
        };
        AddMissingProperty.code_actions(&cx, TextSpan::new(span_start, span_len))
    }

    const EXISTING_PROPS: &str = concat!(
        "type FooProps = { a: string };\n",
        "\n",
        "function Foo(props: FooProps) {\n",
        "  return <span>{props.a}</span>;\n",
        "}\n",
        "\n",
        "const el = <Foo a=\"x\" b={5} />;\n",
    );

    #[test]
    fn test_appends_to_existing_props_type() {
        let offset = EXISTING_PROPS.find("b={5}").unwrap();
        let fixes = fixes_at(EXISTING_PROPS, offset, 1);
        assert_eq!(fixes.len(), 1);
        let fix = &fixes[0];
        assert_eq!(fix.fix_id, FIX_ID);
        assert_eq!(fix.fix_name, "Add missing property 'b'");
        assert_eq!(fix.description, "Add 'b' to Foo props");

        let applied = apply_changes(EXISTING_PROPS, &fix.changes[0].changes);
        assert!(applied.contains("type FooProps = { a: string;\n  b: number; };"));
        // the rest of the file is untouched
        assert!(applied.contains("function Foo(props: FooProps) {"));
    }

    const UNTYPED_PROPS: &str = concat!(
        "function Bar({ x }) {\n",
        "  return <span>{x}</span>;\n",
        "}\n",
        "\n",
        "const el = <Bar x={1} y=\"z\" />;\n",
    );

    #[test]
    fn test_synthesizes_props_type_and_rebinds_parameter() {
        let offset = UNTYPED_PROPS.find("y=\"z\"").unwrap();
        let fixes = fixes_at(UNTYPED_PROPS, offset, 1);
        assert_eq!(fixes.len(), 1);

        let applied = apply_changes(UNTYPED_PROPS, &fixes[0].changes[0].changes);
        assert!(applied.contains("type BarProps = {\n  y: string;\n};\n\nfunction Bar"));
        // pre-existing destructured props are dropped by this branch
        assert!(applied.contains("function Bar({ y }: BarProps) {"));
        assert!(!applied.contains("{ x }"));
    }

    #[test]
    fn test_intrinsic_element_gets_no_fix() {
        let source = "function App() {\n  return <div foo={1} />;\n}\n";
        let offset = source.find("foo").unwrap();
        assert!(fixes_at(source, offset, 3).is_empty());
    }

    #[test]
    fn test_span_outside_attribute_gets_no_fix() {
        let offset = EXISTING_PROPS.find("span").unwrap();
        assert!(fixes_at(EXISTING_PROPS, offset, 4).is_empty());
    }

    #[test]
    fn test_unresolved_component_gets_no_fix() {
        let source = "const el = <Mystery a={1} />;";
        let offset = source.find("a={1}").unwrap();
        assert!(fixes_at(source, offset, 1).is_empty());
    }

    #[test]
    fn test_non_function_declaration_gets_no_fix() {
        let source = concat!(
            "const Chip = (props: { label: string }) => <b>{props.label}</b>;\n",
            "const el = <Chip label=\"x\" count={2} />;\n",
        );
        let offset = source.find("count").unwrap();
        assert!(fixes_at(source, offset, 5).is_empty());
    }

    #[test]
    fn test_not_reoffered_after_apply() {
        let offset = EXISTING_PROPS.find("b={5}").unwrap();
        let fixes = fixes_at(EXISTING_PROPS, offset, 1);
        let applied = apply_changes(EXISTING_PROPS, &fixes[0].changes[0].changes);

        // the member now exists, so the same diagnostic span yields nothing
        let offset = applied.find("b={5}").unwrap();
        assert!(fixes_at(&applied, offset, 1).is_empty());
    }

    #[test]
    fn test_boolean_attribute_infers_boolean() {
        let source = concat!(
            "type TogProps = { on: boolean };\n",
            "function Tog(props: TogProps) {\n",
            "  return <span />;\n",
            "}\n",
            "const el = <Tog on disabled />;\n",
        );
        let offset = source.find("disabled").unwrap();
        let fixes = fixes_at(source, offset, 8);
        let applied = apply_changes(source, &fixes[0].changes[0].changes);
        assert!(applied.contains("{ on: boolean;\n  disabled: boolean; }"));
    }
}
