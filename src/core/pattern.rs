//! Format pattern compiler
//!
//! A pattern is literal text interleaved with `%` directives:
//!
//! | Directive | Renders                          |
//! |-----------|----------------------------------|
//! | `%m`      | message content                  |
//! | `%p`      | level name                       |
//! | `%r`      | milliseconds since start         |
//! | `%c`      | logger name                      |
//! | `%t`      | thread id                        |
//! | `%n`      | newline                          |
//! | `%d{fmt}` | local time, strftime `fmt`       |
//! | `%f`      | source file name                 |
//! | `%l`      | source line                      |
//! | `%T`      | tab                              |
//! | `%F`      | fiber id                         |
//! | `%N`      | thread name                      |
//! | `%%`      | a literal `%`                    |
//!
//! The flag after `%` is the longest run of ASCII letters, optionally
//! followed by a `{...}` argument that ends at the first `}`. Flags that are
//! not in the table are kept as literal text so a typo shows up in the output.

use super::error::{LoggerError, Result};
use super::format_item::{DateTimeFormat, FormatItem};

type Constructor = fn(&str) -> FormatItem;

static DIRECTIVES: [(&str, Constructor); 12] = [
    ("m", |_: &str| FormatItem::Message),
    ("p", |_: &str| FormatItem::Level),
    ("r", |_: &str| FormatItem::Elapsed),
    ("c", |_: &str| FormatItem::LoggerName),
    ("t", |_: &str| FormatItem::ThreadId),
    ("n", |_: &str| FormatItem::NewLine),
    ("d", |arg: &str| FormatItem::DateTime(DateTimeFormat::new(arg))),
    ("f", |_: &str| FormatItem::FileName),
    ("l", |_: &str| FormatItem::LineNumber),
    ("T", |_: &str| FormatItem::Tab),
    ("F", |_: &str| FormatItem::FiberId),
    ("N", |_: &str| FormatItem::ThreadName),
];

/// Build the item for one directive token; `None` for an empty flag
fn resolve(flag: &str, argument: &str) -> Option<FormatItem> {
    if flag.is_empty() {
        return None;
    }
    let item = DIRECTIVES
        .iter()
        .find(|(letter, _)| *letter == flag)
        .map(|(_, construct)| construct(argument))
        .unwrap_or_else(|| FormatItem::Literal(flag.to_string()));
    Some(item)
}

fn flush_literal(items: &mut Vec<FormatItem>, literal: &mut String) {
    if !literal.is_empty() {
        items.push(FormatItem::Literal(std::mem::take(literal)));
    }
}

/// Compile `pattern` into the ordered items that render it.
///
/// Fails only when a `{` argument has no closing `}`.
///
/// ```
/// use rust_pattern_logger::core::pattern::compile;
/// use rust_pattern_logger::core::FormatItem;
///
/// let items = compile("[%p] %m%n").unwrap();
/// assert_eq!(items[1], FormatItem::Level);
/// assert!(compile("%d{%Y").is_err());
/// ```
pub fn compile(pattern: &str) -> Result<Vec<FormatItem>> {
    let bytes = pattern.as_bytes();
    let mut items = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            let end = pattern[i..].find('%').map_or(bytes.len(), |offset| i + offset);
            literal.push_str(&pattern[i..end]);
            i = end;
            continue;
        }

        let directive_start = i;
        i += 1;
        match bytes.get(i) {
            // lone trailing '%'
            None => {
                literal.push('%');
                break;
            }
            Some(b'%') => {
                literal.push('%');
                i += 1;
                continue;
            }
            Some(_) => {}
        }

        let flag_start = i;
        while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
            i += 1;
        }

        let mut argument = "";
        if i == flag_start && bytes[i] != b'{' {
            // punctuation (or any non-letter) stands in as a one-character flag
            let width = pattern[i..].chars().next().map_or(1, char::len_utf8);
            i += width;
        }
        let flag = &pattern[flag_start..i];

        if bytes.get(i) == Some(&b'{') && flag.bytes().all(|b| b.is_ascii_alphabetic()) {
            let open = i;
            let close = pattern[open + 1..].find('}').ok_or_else(|| {
                LoggerError::pattern_syntax(
                    pattern,
                    directive_start,
                    format!("missing closing '}}' for argument of '%{}'", flag),
                )
            })?;
            argument = &pattern[open + 1..open + 1 + close];
            i = open + 1 + close + 1;
        }

        flush_literal(&mut items, &mut literal);
        if let Some(item) = resolve(flag, argument) {
            items.push(item);
        }
    }

    flush_literal(&mut items, &mut literal);
    Ok(items)
}
