//! CLI module for tsxmend
//!
//! Provides command-line interface using clap derive macros.

pub mod commands;
pub mod output;

pub use output::OutputContext;

use clap::{Parser, Subcommand};

use commands::fixes::FixesArgs;
use commands::refactors::{RefactorArgs, RefactorsArgs};

const LONG_ABOUT: &str = r#"
tsxmend - markup-aware refactors and code fixes for TSX

tsxmend parses a TSX source file and offers source transformations addressed
by byte offset: a useRef-binding refactor on markup elements, and a
missing-property code fix for component props diagnostics. Output is JSON.

QUICK START:
  1. List refactors:   tsxmend refactors src/App.tsx --offset 120
  2. Preview edits:    tsxmend refactor src/App.tsx --offset 120 --action "Add useRef to component"
  3. Apply a fix:      tsxmend fixes src/App.tsx --start 245 --length 1 --apply

Set RUST_LOG=tsxmend=debug for verbose logging.
"#;

/// tsxmend - markup-aware refactors and code fixes for TSX
#[derive(Parser, Debug)]
#[command(name = "tsxmend")]
#[command(author, version, about, long_about = LONG_ABOUT)]
#[command(propagate_version = true)]
#[command(after_help = "Use 'tsxmend <COMMAND> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List refactors applicable at a position
    Refactors(RefactorsArgs),

    /// Compute (and optionally apply) edits for a named refactor action
    Refactor(RefactorArgs),

    /// List (and optionally apply) code fixes for a diagnostic span
    Fixes(FixesArgs),
}
