//! Command implementations for tsxmend
//!
//! Each command is implemented in its own module.

pub mod fixes;
pub mod refactors;

use anyhow::Result;

use crate::app::OpenDocument;
use crate::models::FileTextEdits;
use crate::services::edits::apply_changes;

/// Write an edit set back to disk. Standalone mode serves a single opened
/// document, so any edit addressed elsewhere is an error.
pub(crate) fn write_edits(doc: &OpenDocument, edits: &[FileTextEdits]) -> Result<()> {
    for file_edits in edits {
        if file_edits.file_name != doc.file_name {
            anyhow::bail!("edit targets unopened file '{}'", file_edits.file_name);
        }
        let updated = apply_changes(&doc.text, &file_edits.changes);
        std::fs::write(&doc.path, updated)?;
    }
    Ok(())
}
