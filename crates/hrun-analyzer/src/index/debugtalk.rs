//! Function index over the companion script (`debugtalk.py`).
//!
//! The script is never parsed as Python; it is scanned line by line for
//! `def name(` declarations, and each declaration's immediately preceding
//! `#` comment block is attached to it. The index is rebuilt wholesale on
//! demand and published as an immutable snapshot behind a swappable handle,
//! so readers never observe a partially built table.

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use once_cell::sync::Lazy;
use regex::Regex;
use tower_lsp::lsp_types::{Location, Position, Range, Url};
use tracing::{debug, info};

use crate::text_pos::utf16_column_of_byte_offset;

/// Companion function declaration: `def name(`.
static FUNCTION_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*def\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(").unwrap());

/// One indexed companion-script function.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionEntry {
    pub name: String,
    /// Jump target: the span of the identifier in its declaration line.
    pub location: Location,
    /// The trimmed declaration line, e.g. `def sleep(n_secs):`.
    pub signature: String,
    /// Newline-joined leading comment block, markers stripped. Possibly empty.
    pub comments: String,
}

/// Mapping from function name to its indexed entry.
type FunctionTable = HashMap<String, FunctionEntry>;

/// Rebuildable index of companion-script function declarations.
pub struct DebugtalkIndex {
    companion_path: RwLock<Option<PathBuf>>,
    table: RwLock<Arc<FunctionTable>>,
}

impl Default for DebugtalkIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugtalkIndex {
    pub fn new() -> Self {
        Self {
            companion_path: RwLock::new(None),
            table: RwLock::new(Arc::new(FunctionTable::new())),
        }
    }

    /// Point the index at a companion script. Takes effect on the next
    /// [`rebuild`](Self::rebuild).
    pub fn set_companion_path(
        &self,
        path: PathBuf,
    ) {
        *self.companion_path.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(path);
    }

    pub fn companion_path(&self) -> Option<PathBuf> {
        self.companion_path.read().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    /// Re-scan the companion script and replace all entries.
    ///
    /// An absent companion file is a normal state: the index becomes empty
    /// and the caller never sees a failure.
    pub fn rebuild(&self) {
        let table = match self.companion_path() {
            Some(path) => match std::fs::read_to_string(&path) {
                Ok(content) => match Url::from_file_path(&path) {
                    Ok(uri) => build_table(&content, &uri),
                    Err(()) => FunctionTable::new(),
                },
                Err(_) => {
                    info!("Companion script not found at {}; index is empty", path.display());
                    FunctionTable::new()
                },
            },
            None => FunctionTable::new(),
        };

        debug!("Rebuilt companion index with {} function(s)", table.len());
        *self.table.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = Arc::new(table);
    }

    /// Look up a function by name in the current snapshot.
    pub fn lookup(
        &self,
        name: &str,
    ) -> Option<FunctionEntry> {
        self.snapshot().get(name).cloned()
    }

    /// The current immutable table snapshot.
    pub fn snapshot(&self) -> Arc<FunctionTable> {
        Arc::clone(&self.table.read().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}

/// Scan the companion source into a fresh table. Later declarations of the
/// same name replace earlier ones.
fn build_table(
    content: &str,
    uri: &Url,
) -> FunctionTable {
    let lines: Vec<&str> = content.lines().collect();
    let mut table = FunctionTable::new();

    for (line_idx, line) in lines.iter().enumerate() {
        let Some(captures) = FUNCTION_DECL.captures(line) else {
            continue;
        };
        let Some(name) = captures.get(1) else {
            continue;
        };

        let start_col = utf16_column_of_byte_offset(line, name.start());
        let end_col = utf16_column_of_byte_offset(line, name.end());
        let location = Location {
            uri: uri.clone(),
            range: Range {
                start: Position {
                    line: line_idx as u32,
                    character: start_col,
                },
                end: Position {
                    line: line_idx as u32,
                    character: end_col,
                },
            },
        };

        table.insert(
            name.as_str().to_string(),
            FunctionEntry {
                name: name.as_str().to_string(),
                location,
                signature: line.trim().to_string(),
                comments: leading_comments(&lines, line_idx),
            },
        );
    }

    table
}

/// Collect the `#` comment block immediately above a declaration.
///
/// The upward walk skips blank lines transparently and stops at the first
/// non-blank, non-comment line. The result is in top-to-bottom order.
fn leading_comments(
    lines: &[&str],
    decl_line: usize,
) -> String {
    let mut collected: Vec<&str> = Vec::new();

    for line in lines[..decl_line].iter().rev() {
        let trimmed = line.trim();
        if let Some(comment) = trimmed.strip_prefix('#') {
            collected.push(comment.trim_start());
        } else if trimmed.is_empty() {
            continue;
        } else {
            break;
        }
    }

    collected.reverse();
    collected.join("\n")
}

#[cfg(test)]
#[path = "../../tests/src/index/debugtalk_tests.rs"]
mod tests;
