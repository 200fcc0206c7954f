//! argsplit - shell-style command-line tokenizer.
//!
//! Splits one line of interactive console input into pipeline stages, each
//! stage an ordered argument vector, with POSIX-shell-like quoting,
//! escaping, and pipe-splitting semantics. Parsing is a pure function over
//! the input line: no state, no I/O, no error outcomes.

pub mod output;
pub mod parser;
pub mod pipeline;

pub use output::{OutputError, format_json, format_plain};
pub use parser::parse;
pub use pipeline::{Pipeline, Stage};
