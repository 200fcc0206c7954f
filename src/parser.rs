//! Command-line tokenization with shell-style quoting, escaping, and
//! pipe splitting.
//!
//! [`parse`] is total: an interactive prompt must not reject a mistyped
//! command, so unterminated quotes close implicitly at end of input and a
//! dangling trailing backslash is dropped. There is no error outcome.

use crate::pipeline::{Pipeline, Stage};

/// Quoting state while scanning the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
}

/// Split one line of console input into pipeline stages.
///
/// The line is scanned left to right exactly once. Unquoted, unescaped
/// pipe characters delimit stages; unquoted, unescaped spaces and tabs
/// delimit arguments within a stage. Quote characters are removed from the
/// output but the text they enclose is kept literal, and adjacent quoted
/// and unquoted segments with no intervening whitespace concatenate into a
/// single argument (`"one"two` is `onetwo`).
///
/// The result always holds at least one stage; an empty or all-whitespace
/// line yields one stage with zero arguments.
pub fn parse(line: &str) -> Pipeline {
    let mut stages = Vec::new();
    let mut args: Vec<String> = Vec::new();
    // None = no argument started; Some("") = started but empty, which is
    // how an empty quote pair contributes a zero-length argument.
    let mut current: Option<String> = None;
    let mut quote = Quote::None;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Quote::None => match c {
                ' ' | '\t' => {
                    if let Some(arg) = current.take() {
                        args.push(arg);
                    }
                }
                '|' => {
                    if let Some(arg) = current.take() {
                        args.push(arg);
                    }
                    stages.push(Stage::new(std::mem::take(&mut args)));
                }
                '\\' => {
                    // Escapes exactly the next character, whatever it is.
                    // A backslash ending the line escapes nothing and is
                    // dropped.
                    if let Some(escaped) = chars.next() {
                        current.get_or_insert_with(String::new).push(escaped);
                    }
                }
                '"' => {
                    current.get_or_insert_with(String::new);
                    quote = Quote::Double;
                }
                '\'' => {
                    current.get_or_insert_with(String::new);
                    quote = Quote::Single;
                }
                _ => {
                    current.get_or_insert_with(String::new).push(c);
                }
            },
            Quote::Single => match c {
                '\'' => quote = Quote::None,
                // Everything else is literal, including \ | and ".
                _ => {
                    current.get_or_insert_with(String::new).push(c);
                }
            },
            Quote::Double => match c {
                '"' => quote = Quote::None,
                '\\' => {
                    let buf = current.get_or_insert_with(String::new);
                    // Only $ " \ ` are escapable here; before anything
                    // else the backslash is an ordinary character.
                    match chars.peek() {
                        Some(&next) if matches!(next, '$' | '"' | '\\' | '`') => {
                            chars.next();
                            buf.push(next);
                        }
                        _ => buf.push('\\'),
                    }
                }
                // ' and | carry no special meaning inside double quotes.
                _ => {
                    current.get_or_insert_with(String::new).push(c);
                }
            },
        }
    }

    // End of input implicitly closes any open quote. Flush the buffered
    // argument and the final stage.
    if let Some(arg) = current.take() {
        args.push(arg);
    }
    stages.push(Stage::new(args));

    Pipeline::new(stages)
}
