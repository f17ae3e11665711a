//! tsxmend - Markup-aware refactors and fixes for TSX
//!
//! Sits in front of a host language service and injects additional
//! source transformations for typed markup: a useRef-binding refactor
//! and a missing-prop code fix, both emitted as precise text edits
//! against an immutable source snapshot.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod infra;
pub mod models;
pub mod services;

pub use error::{EngineError, EngineResult};
