//! Infrastructure for tsxmend

pub mod ast;
