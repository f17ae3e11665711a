//! Refactor listing and application commands
//!
//! `refactors` lists what is available at a byte offset; `refactor` computes
//! the edits for one named action and, with `--apply`, writes them back.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::app::App;
use crate::models::{ApplicableRefactor, FileTextEdits};
use crate::services::LanguageService;

#[derive(Args, Debug)]
pub struct RefactorsArgs {
    /// Source file (.ts or .tsx)
    pub file: PathBuf,

    /// Byte offset of the cursor
    #[arg(long)]
    pub offset: usize,

    /// Selection end offset (defaults to a caret position)
    #[arg(long)]
    pub end: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefactorsResponse {
    file: String,
    offset: usize,
    count: usize,
    refactors: Vec<ApplicableRefactor>,
}

pub fn execute_list(args: RefactorsArgs, app: &App) -> Result<()> {
    let ctx = &app.output;
    let doc = app.open_document(&args.file)?;

    let refactors = doc
        .service
        .applicable_refactors(&doc.file_name, args.offset, args.end);

    ctx.print_success_flat(RefactorsResponse {
        file: doc.file_name,
        offset: args.offset,
        count: refactors.len(),
        refactors,
    });
    Ok(())
}

#[derive(Args, Debug)]
pub struct RefactorArgs {
    /// Source file (.ts or .tsx)
    pub file: PathBuf,

    /// Byte offset of the cursor
    #[arg(long)]
    pub offset: usize,

    /// Selection end offset (defaults to a caret position)
    #[arg(long)]
    pub end: Option<usize>,

    /// Action name, as reported by `refactors`
    #[arg(long)]
    pub action: String,

    /// Actually write the changes (default: dry-run showing the edits)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefactorApplyResponse {
    file: String,
    action: String,
    dry_run: bool,
    edits: Vec<FileTextEdits>,
}

pub fn execute_apply(args: RefactorArgs, app: &App) -> Result<()> {
    let ctx = &app.output;
    let doc = app.open_document(&args.file)?;

    // built-in actions carry their provider's name
    let Some(result) = doc.service.refactor_edits(
        &doc.file_name,
        args.offset,
        args.end,
        &args.action,
        &args.action,
    ) else {
        ctx.print_error(&format!(
            "Refactor '{}' is not applicable at offset {}",
            args.action, args.offset
        ));
        return Ok(());
    };

    if args.apply {
        super::write_edits(&doc, &result.edits)?;
    }

    ctx.print_success_flat(RefactorApplyResponse {
        file: doc.file_name,
        action: args.action,
        dry_run: !args.apply,
        edits: result.edits,
    });
    Ok(())
}
