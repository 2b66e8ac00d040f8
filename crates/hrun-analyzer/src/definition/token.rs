use once_cell::sync::Lazy;
use regex::Regex;

use crate::text_pos::byte_offset_of_utf16_column;

/// Interpolated call into the companion script: `${name(args)}`.
///
/// The argument list is any run of characters up to the first `)`.
static FUNCTION_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\s*\([^)]*\)\s*\}").unwrap());

/// Bare variable placeholder: `$name`.
static VARIABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// Cross-file reference line: `url: ...`, `testcase: ...` or `api: ...`
/// whose value is a whitespace-free token ending in `.yml`/`.yaml`.
pub(crate) static PATH_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(url|testcase|api)\s*:\s*([^\s#]+\.ya?ml)").unwrap());

/// What construct a cursor position points at within one line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenClassification {
    /// Value of a `url`/`testcase`/`api` key referencing another YAML file.
    PathReference { value: String },
    /// A `$name` placeholder.
    VariableReference { name: String },
    /// A `${name(args)}` interpolation; `name` is the called function.
    FunctionCall { name: String },
}

/// Classify the construct under the cursor on a single line.
///
/// `character` is a UTF-16 column, as delivered by the client. Patterns are
/// tried in priority order (function call, variable, path reference); within
/// one pattern, matches are tested left to right and the first span that
/// contains the cursor wins. Span checks are inclusive on both ends in the
/// position-between-characters sense: a cursor sitting immediately before the
/// first or immediately after the last character of a span is a hit.
pub fn classify(
    line_text: &str,
    character: u32,
) -> Option<TokenClassification> {
    let cursor = byte_offset_of_utf16_column(line_text, character);

    for m in FUNCTION_CALL.captures_iter(line_text) {
        let (Some(whole), Some(name)) = (m.get(0), m.get(1)) else {
            continue;
        };
        if whole.start() <= cursor && cursor <= whole.end() {
            return Some(TokenClassification::FunctionCall {
                name: name.as_str().to_string(),
            });
        }
    }

    for m in VARIABLE.captures_iter(line_text) {
        let (Some(whole), Some(name)) = (m.get(0), m.get(1)) else {
            continue;
        };
        if whole.start() <= cursor && cursor <= whole.end() {
            return Some(TokenClassification::VariableReference {
                name: name.as_str().to_string(),
            });
        }
    }

    if let Some(value) = PATH_REFERENCE.captures(line_text).and_then(|m| m.get(2))
        && value.start() <= cursor
        && cursor <= value.end()
    {
        return Some(TokenClassification::PathReference {
            value: value.as_str().to_string(),
        });
    }

    None
}

#[cfg(test)]
#[path = "../../tests/src/definition/token_tests.rs"]
mod tests;
