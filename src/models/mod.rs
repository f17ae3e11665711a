//! Data models for tsxmend
//!
//! Edit and action types exchanged with the host. Everything here is plain
//! data with serde support; the host applies returned edits verbatim.

pub mod edit;

pub use edit::{
    ApplicableRefactor, CodeFixAction, FileTextEdits, RefactorActionInfo, RefactorEditSet,
    TextChange, TextSpan,
};
