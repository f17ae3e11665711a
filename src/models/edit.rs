//! Text edit and action types
//!
//! Spans are byte offsets into one file's pre-edit text. Changes within one
//! edit set are non-overlapping and are never shifted by sibling edits in
//! the same batch; ordered application is the applier's job.

use serde::{Deserialize, Serialize};

/// Half-open byte span into a file's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TextSpan {
    pub start: usize,
    pub length: usize,
}

impl TextSpan {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Span covering `start..end`; empty when `end <= start`.
    pub fn from_bounds(start: usize, end: usize) -> Self {
        Self {
            start,
            length: end.saturating_sub(start),
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn overlaps(&self, other: &TextSpan) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// One replacement against the pre-edit snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextChange {
    pub span: TextSpan,
    pub new_text: String,
}

impl TextChange {
    pub fn new(span: TextSpan, new_text: impl Into<String>) -> Self {
        Self {
            span,
            new_text: new_text.into(),
        }
    }

    /// Pure insertion at `offset`.
    pub fn insert(offset: usize, new_text: impl Into<String>) -> Self {
        Self::new(TextSpan::new(offset, 0), new_text)
    }
}

/// Ordered edits for one file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTextEdits {
    pub file_name: String,
    pub changes: Vec<TextChange>,
}

/// A single action offered under an applicable refactor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefactorActionInfo {
    pub name: String,
    pub description: String,
    pub kind: String,
    pub is_interactive: bool,
}

/// Refactor listing entry: one provider, one or more actions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicableRefactor {
    pub name: String,
    pub description: String,
    pub actions: Vec<RefactorActionInfo>,
}

/// Result of applying a refactor action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefactorEditSet {
    pub edits: Vec<FileTextEdits>,
}

/// A diagnostic-triggered fix with its edits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFixAction {
    pub fix_id: String,
    pub fix_name: String,
    pub description: String,
    pub changes: Vec<FileTextEdits>,
}
