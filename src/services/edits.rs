//! Edit synthesis
//!
//! Builds position-addressed insert/replace changes against one file's
//! pre-edit snapshot. `finish` validates the non-overlap invariant; a
//! violating set is rejected as a whole (warn, no edits) because a host
//! applies returned changes verbatim. Application for the standalone CLI
//! splices in descending start order so earlier spans stay valid.

use tree_sitter::Node;

use crate::config::EnginePreferences;
use crate::infra::ast::{SyntaxKind, kind_of};
use crate::models::{FileTextEdits, TextChange, TextSpan};

pub struct EditSynthesizer<'a> {
    file_name: &'a str,
    source: &'a str,
    changes: Vec<TextChange>,
}

impl<'a> EditSynthesizer<'a> {
    pub fn new(file_name: &'a str, source: &'a str) -> Self {
        Self {
            file_name,
            source,
            changes: Vec::new(),
        }
    }

    pub fn insert_at(&mut self, offset: usize, text: impl Into<String>) {
        self.changes.push(TextChange::insert(offset, text));
    }

    pub fn replace_span(&mut self, span: TextSpan, text: impl Into<String>) {
        self.changes.push(TextChange::new(span, text));
    }

    /// Append a member to an object type literal.
    ///
    /// With existing members the new signature goes on its own line after
    /// the last one, separated from it by `;` only when the member is not
    /// already followed by one. An empty literal gets the member right
    /// after the opening brace, indented only.
    pub fn append_type_member(
        &mut self,
        object_type: Node<'_>,
        member: &str,
        preferences: &EnginePreferences,
    ) {
        debug_assert_eq!(kind_of(&object_type), SyntaxKind::ObjectType);

        let mut cursor = object_type.walk();
        let last_member = object_type
            .named_children(&mut cursor)
            .filter(|n| kind_of(n) != SyntaxKind::Comment)
            .last();

        match last_member {
            None => {
                let offset = object_type.start_byte() + 1;
                self.insert_at(offset, format!("{}{member};", preferences.indent));
            }
            Some(last) => {
                let mut offset = last.end_byte();
                // land past an existing separator token
                let bytes = self.source.as_bytes();
                while matches!(bytes.get(offset), Some(b';') | Some(b',')) {
                    offset += 1;
                }
                let separator = match bytes.get(offset.wrapping_sub(1)) {
                    Some(b';') | Some(b',') => "",
                    _ => ";",
                };
                self.insert_at(
                    offset,
                    format!("{separator}\n{}{member};", preferences.indent),
                );
            }
        }
    }

    /// Changes built so far, validated non-overlapping.
    pub fn finish(self) -> Option<FileTextEdits> {
        if self.changes.is_empty() {
            return None;
        }
        for (i, a) in self.changes.iter().enumerate() {
            for b in &self.changes[i + 1..] {
                if a.span.overlaps(&b.span) {
                    tracing::warn!(
                        file = self.file_name,
                        "discarding edit set with overlapping spans"
                    );
                    return None;
                }
            }
        }
        Some(FileTextEdits {
            file_name: self.file_name.to_string(),
            changes: self.changes,
        })
    }
}

/// Apply a change set to its pre-edit snapshot.
pub fn apply_changes(source: &str, changes: &[TextChange]) -> String {
    let mut ordered: Vec<&TextChange> = changes.iter().collect();
    ordered.sort_by(|a, b| b.span.start.cmp(&a.span.start));

    let mut text = source.to_string();
    for change in ordered {
        let end = change.span.end().min(text.len());
        let start = change.span.start.min(end);
        text.replace_range(start..end, &change.new_text);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::ast::{SourceTree, find_ancestor, node_at_offset};

    fn object_type_of(tree: &SourceTree) -> Node<'_> {
        let offset = tree.text().find('{').unwrap() + 1;
        let node = node_at_offset(tree.root(), offset, false).unwrap();
        find_ancestor(node, |n| kind_of(n) == SyntaxKind::ObjectType).unwrap()
    }

    fn appended(source: &str, member: &str) -> String {
        let tree = SourceTree::parse("app.tsx", source).unwrap();
        let mut synth = EditSynthesizer::new("app.tsx", source);
        synth.append_type_member(object_type_of(&tree), member, &EnginePreferences::default());
        let edits = synth.finish().unwrap();
        apply_changes(source, &edits.changes)
    }

    #[test]
    fn test_append_adds_missing_separator() {
        let result = appended("type P = { a: string };", "b: number");
        assert_eq!(result, "type P = { a: string;\n  b: number; };");
    }

    #[test]
    fn test_append_keeps_existing_separator() {
        let result = appended("type P = { a: string; };", "b: number");
        assert_eq!(result, "type P = { a: string;\n  b: number; };");
    }

    #[test]
    fn test_append_multiline_literal() {
        let result = appended("type P = {\n  a: string;\n};", "b: number");
        assert_eq!(result, "type P = {\n  a: string;\n  b: number;\n};");
    }

    #[test]
    fn test_append_into_empty_literal() {
        let result = appended("type P = {};", "b: number");
        assert_eq!(result, "type P = {  b: number;};");
    }

    #[test]
    fn test_overlapping_set_is_rejected() {
        let mut synth = EditSynthesizer::new("app.tsx", "abcdef");
        synth.replace_span(TextSpan::new(0, 4), "x");
        synth.replace_span(TextSpan::new(2, 3), "y");
        assert!(synth.finish().is_none());
    }

    #[test]
    fn test_empty_set_is_none() {
        let synth = EditSynthesizer::new("app.tsx", "abcdef");
        assert!(synth.finish().is_none());
    }

    #[test]
    fn test_apply_is_order_independent() {
        let source = "function F() { return <input />; }";
        let body = source.find('{').unwrap();
        let tag_end = source.find("input").unwrap() + "input".len();
        let changes = vec![
            TextChange::insert(body + 1, "\nconst ref = null;\n"),
            TextChange::insert(tag_end, " ref={ref}"),
        ];
        let forward = apply_changes(source, &changes);
        let reversed: Vec<_> = changes.iter().rev().cloned().collect();
        assert_eq!(forward, apply_changes(source, &reversed));
        assert!(forward.contains("<input ref={ref} />"));
        assert!(forward.contains("{\nconst ref = null;\n return"));
    }
}
