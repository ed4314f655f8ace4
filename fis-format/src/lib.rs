//! Text format for fuzzy inference system documents.
//!
//! Reads and writes the line-oriented `.fis` layout: a `[System]` header,
//! numbered `[Input k]` / `[Output k]` variable blocks and an optional
//! `[Rules]` block. Parsing is strict; anything the writer would not emit is
//! rejected with a line-numbered [`FormatError`]. Serializing an accepted
//! document and parsing it back yields an equal document.

pub mod lexer;
mod parse;
mod write;

pub use parse::{parse, FormatError, MAX_INPUT_BYTES};
pub use write::serialize;
