//! Code fix listing and application command
//!
//! Lists the fixes available for a diagnostic span; `--apply` selects one by
//! index and writes its changes back.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::app::App;
use crate::models::{CodeFixAction, TextSpan};
use crate::services::LanguageService;

#[derive(Args, Debug)]
pub struct FixesArgs {
    /// Source file (.ts or .tsx)
    pub file: PathBuf,

    /// Diagnostic span start (byte offset)
    #[arg(long)]
    pub start: usize,

    /// Diagnostic span length in bytes
    #[arg(long)]
    pub length: usize,

    /// Diagnostic codes, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [2339, 2322])]
    pub codes: Vec<u32>,

    /// Actually write the changes of the selected fix
    #[arg(long)]
    pub apply: bool,

    /// Fix index to apply (0-based, from the listing order)
    #[arg(long, default_value_t = 0)]
    pub index: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FixesResponse {
    file: String,
    span: TextSpan,
    applied: Option<String>,
    count: usize,
    fixes: Vec<CodeFixAction>,
}

pub fn execute(args: FixesArgs, app: &App) -> Result<()> {
    let ctx = &app.output;
    let doc = app.open_document(&args.file)?;
    let span = TextSpan::new(args.start, args.length);

    let fixes = doc.service.code_fixes(&doc.file_name, span, &args.codes);

    let applied = if args.apply {
        let Some(fix) = fixes.get(args.index) else {
            ctx.print_error(&format!(
                "No fix at index {} ({} available)",
                args.index,
                fixes.len()
            ));
            return Ok(());
        };
        super::write_edits(&doc, &fix.changes)?;
        Some(fix.fix_name.clone())
    } else {
        None
    };

    ctx.print_success_flat(FixesResponse {
        file: doc.file_name,
        span,
        applied,
        count: fixes.len(),
        fixes,
    });
    Ok(())
}
