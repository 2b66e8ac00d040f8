use tower_lsp::lsp_types::{Location, Position, Range, Url};
use tracing::debug;

use crate::definition::token::PATH_REFERENCE;
use crate::text_pos::byte_offset_of_utf16_column;

/// Fixed placeholder span pointing at the start of a referenced file.
///
/// Cross-file jumps always land at the top of the target; the span is not a
/// semantically meaningful range within it.
const TARGET_FILE_RANGE: Range = Range {
    start: Position {
        line: 0,
        character: 0,
    },
    end: Position {
        line: 0,
        character: 10,
    },
};

/// Extract the referenced relative path if the cursor sits inside the value
/// of a `url`/`testcase`/`api` line. Span checks are inclusive on both ends.
pub fn path_reference_at(
    line_text: &str,
    character: u32,
) -> Option<String> {
    let cursor = byte_offset_of_utf16_column(line_text, character);
    let value = PATH_REFERENCE.captures(line_text)?.get(2)?;
    if value.start() <= cursor && cursor <= value.end() {
        Some(value.as_str().to_string())
    } else {
        None
    }
}

/// Resolve a relative path against the referencing document's directory.
///
/// Existence on disk is the only check performed; the target's content is
/// never read.
pub fn resolve_path_reference(
    referencing_uri: &Url,
    raw_relative_path: &str,
) -> Option<Location> {
    let referencing_path = referencing_uri.to_file_path().ok()?;
    let base_dir = referencing_path.parent()?;
    let candidate = base_dir.join(raw_relative_path);

    if !candidate.exists() {
        debug!("Path reference target does not exist: {}", candidate.display());
        return None;
    }

    let target_uri = Url::from_file_path(&candidate).ok()?;
    Some(Location {
        uri: target_uri,
        range: TARGET_FILE_RANGE,
    })
}

#[cfg(test)]
#[path = "../../tests/src/definition/path_ref_tests.rs"]
mod tests;
