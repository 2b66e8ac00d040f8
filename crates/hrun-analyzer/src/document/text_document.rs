use tower_lsp::lsp_types::*;

// ── DocumentKind ────────────────────────────────────────────────────────────

/// What kind of file a document is, for dispatching resolution strategies.
///
/// Derived from the language id the client reports, with a file-extension
/// fallback for clients that report a generic id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A YAML test specification (testcase, testsuite or api file).
    Yaml,
    /// The companion Python script (`debugtalk.py`).
    Debugtalk,
    /// An environment file (`.env`).
    Env,
    /// Anything else; no resolution strategies apply.
    Other,
}

impl DocumentKind {
    pub fn from_language_id(
        language_id: &str,
        uri: &Url,
    ) -> Self {
        match language_id {
            "yaml" | "yml" => return Self::Yaml,
            "python" => return Self::Debugtalk,
            "env" | "dotenv" => return Self::Env,
            _ => {},
        }

        // Extension fallback for clients that do not report a language id.
        let path = uri.path();
        if path.ends_with(".yml") || path.ends_with(".yaml") {
            Self::Yaml
        } else if path.ends_with(".py") {
            Self::Debugtalk
        } else if path.ends_with(".env") {
            Self::Env
        } else {
            Self::Other
        }
    }
}

// ── Document ────────────────────────────────────────────────────────────────

/// Snapshot of a single open text document.
#[derive(Debug, Clone)]
pub struct Document {
    /// The document URI.
    pub uri: Url,
    /// Language id as reported by the client (`yaml`, `python`, ...).
    pub language_id: String,
    /// Full source text (always kept up-to-date).
    pub text: String,
    /// Document version as reported by the client.
    pub version: i32,
    /// Pre-computed line start byte offsets (rebuilt on every mutation).
    line_offsets: Vec<usize>,
}

impl Document {
    pub fn new(
        uri: Url,
        language_id: String,
        text: String,
        version: i32,
    ) -> Self {
        let line_offsets = Self::compute_line_offsets(&text);
        Self {
            uri,
            language_id,
            text,
            version,
            line_offsets,
        }
    }

    // ── queries ─────────────────────────────────────────────────────────

    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_language_id(&self.language_id, &self.uri)
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Return the full text of a given 0-based line (without the trailing newline).
    pub fn line_text(
        &self,
        line: usize,
    ) -> Option<&str> {
        let start = *self.line_offsets.get(line)?;
        let end = self.line_offsets.get(line + 1).copied().unwrap_or(self.text.len());
        let slice = &self.text[start..end];
        Some(slice.trim_end_matches('\n').trim_end_matches('\r'))
    }

    /// Convert an LSP `Position` (line/character, 0-based) to a byte offset.
    pub fn offset_of(
        &self,
        pos: Position,
    ) -> Option<usize> {
        let line = pos.line as usize;
        let line_start = *self.line_offsets.get(line)?;
        let line_end = self.line_offsets.get(line + 1).copied().unwrap_or(self.text.len());
        let line_text = &self.text[line_start..line_end];

        // LSP character offsets are UTF-16 code-unit counts.
        let mut utf16_offset: u32 = 0;
        let mut byte_offset = line_start;
        for ch in line_text.chars() {
            if utf16_offset >= pos.character {
                break;
            }
            utf16_offset += ch.len_utf16() as u32;
            byte_offset += ch.len_utf8();
        }
        Some(byte_offset)
    }

    /// Convert a byte offset to an LSP `Position`.
    pub fn position_of(
        &self,
        offset: usize,
    ) -> Position {
        let offset = offset.min(self.text.len());
        let line = match self.line_offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(ins) => ins.saturating_sub(1),
        };
        let line_start = self.line_offsets[line];
        let character = self.text[line_start..offset].chars().map(|c| c.len_utf16() as u32).sum::<u32>();
        Position {
            line: line as u32,
            character,
        }
    }

    // ── mutations ───────────────────────────────────────────────────────

    /// Replace the full content and bump version.
    pub fn set_content(
        &mut self,
        text: String,
        version: i32,
    ) {
        self.text = text;
        self.version = version;
        self.line_offsets = Self::compute_line_offsets(&self.text);
    }

    /// Apply a list of incremental or full-content changes and bump version.
    pub fn apply_changes(
        &mut self,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) {
        for change in changes {
            if let Some(range) = change.range {
                if let (Some(start), Some(end)) = (self.offset_of(range.start), self.offset_of(range.end)) {
                    self.text.replace_range(start..end, &change.text);
                    self.line_offsets = Self::compute_line_offsets(&self.text);
                }
            } else {
                self.text = change.text;
                self.line_offsets = Self::compute_line_offsets(&self.text);
            }
        }
        self.version = version;
    }

    // ── internal helpers ────────────────────────────────────────────────

    fn compute_line_offsets(text: &str) -> Vec<usize> {
        let mut offsets = vec![0usize];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(i + 1);
            }
        }
        offsets
    }
}

#[cfg(test)]
#[path = "../../tests/src/document/text_document_tests.rs"]
mod tests;
