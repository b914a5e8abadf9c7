//! Line-level parsing of the INI format.
//!
//! Each line is classified on its own; the section cursor lives in the
//! store, which decides whether an entry has a section to land in.

/// A classified configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Blank line or `#` / `;` comment.
    Skip,
    /// `[name]` header, name trimmed and lowercased. May be empty for `[]`.
    Section(String),
    /// `key = value`, key trimmed and lowercased, value trimmed and unquoted.
    Entry { key: String, value: String },
}

/// Why a single line was rejected. Never fatal for the file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("key '{key}' appears before any [section] header")]
    NoSection { key: String },

    #[error("invalid config line: {0}")]
    Malformed(String),
}

/// Classifies one raw line.
pub fn parse_line(raw: &str) -> Result<Line, LineError> {
    let line = trim(raw);

    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return Ok(Line::Skip);
    }

    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        let name = trim(&line[1..line.len() - 1]);
        return Ok(Line::Section(name.to_ascii_lowercase()));
    }

    match line.split_once('=') {
        Some((key, value)) => Ok(Line::Entry {
            key: trim(key).to_ascii_lowercase(),
            value: strip_quotes(trim(value)).to_string(),
        }),
        None => Err(LineError::Malformed(line.to_string())),
    }
}

/// Trims the C locale whitespace set, which includes vertical tab.
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Removes one pair of matching `"` or `'` around a value. No escapes.
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
