use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Errors that can be encountered while persisting a property store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error encountered while writing the rendered property file.
    #[error("failed to write property file '{}'", .0.display())]
    Write(PathBuf, #[source] std::io::Error),
}

/// An insertion-ordered mapping from string keys to string values that
/// serializes to a line-oriented `key=value` file.
///
/// Setting an existing key replaces its value but keeps the key's position,
/// so rendered output stays stable under overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyStore {
    entries: IndexMap<String, String>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Renders the store as property-file text.
    ///
    /// Each line of `comment` becomes a leading `#` line. Keys and values
    /// are backslash-escaped where the line format requires it; non-ASCII
    /// text passes through untouched since the file is written as UTF-8.
    pub fn render(&self, comment: Option<&str>) -> String {
        let mut out = String::new();
        if let Some(comment) = comment {
            for line in comment.lines() {
                out.push('#');
                out.push_str(line);
                out.push('\n');
            }
        }
        for (key, value) in &self.entries {
            out.push_str(&escape(key, true));
            out.push('=');
            out.push_str(&escape(value, false));
            out.push('\n');
        }
        out
    }

    /// Writes the rendered store to `path` as UTF-8.
    pub fn store(&self, path: impl AsRef<Path>, comment: Option<&str>) -> Result<(), Error> {
        let path = path.as_ref();
        std::fs::write(path, self.render(comment))
            .map_err(|err| Error::Write(path.to_path_buf(), err))
    }
}

/// Backslash-escapes the characters that would break the line format.
///
/// The separators `=`, `:`, `#`, and `!`, the backslash itself, and the
/// control characters tab/newline/carriage-return are always escaped. Spaces
/// are escaped everywhere in keys but only in the first position of values,
/// where a reader would otherwise strip them.
fn escape(text: &str, escape_spaces: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (index, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' ' if escape_spaces || index == 0 => out.push_str("\\ "),
            _ => out.push(c),
        }
    }
    out
}
