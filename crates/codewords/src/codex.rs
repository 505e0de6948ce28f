use crate::entry::Entry;
use crate::error::{CodexError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A loaded reference file.
///
/// Entries alternate label / item list, so category `i` lives at positions
/// `2*i` and `2*i + 1`. The pairing is checked once at load time and the
/// sequence is never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Codex {
    source: PathBuf,
    entries: Vec<Entry>,
}

/// Borrowed view of one (label, items) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category<'a> {
    pub index: usize,
    pub label: &'a str,
    pub items: &'a [String],
}

impl Codex {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CodexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Parse any buffered source; `source` is only used for reporting.
    pub fn from_reader<R: BufRead, P: AsRef<Path>>(reader: R, source: P) -> Result<Self> {
        let source = source.as_ref();
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line = line.map_err(|e| CodexError::Io {
                path: source.to_path_buf(),
                source: e,
            })?;
            entries.push(Entry::parse(&line));
        }

        Self::from_entries(entries, source)
    }

    pub fn parse<P: AsRef<Path>>(text: &str, source: P) -> Result<Self> {
        Self::from_reader(text.as_bytes(), source)
    }

    pub fn from_entries<P: AsRef<Path>>(entries: Vec<Entry>, source: P) -> Result<Self> {
        let source = source.as_ref().to_path_buf();

        if entries.len() % 2 != 0 {
            return Err(CodexError::OddEntryCount {
                path: source,
                count: entries.len(),
            });
        }

        for (pos, entry) in entries.iter().enumerate() {
            let expected = if pos % 2 == 0 {
                "a label"
            } else {
                "a comma-separated item list"
            };
            let fits = match entry {
                Entry::Label(_) => pos % 2 == 0,
                Entry::Items(_) => pos % 2 == 1,
            };
            if !fits {
                return Err(CodexError::MisplacedEntry {
                    path: source,
                    line: pos + 1,
                    expected,
                });
            }
        }

        Ok(Self { source, entries })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn category_count(&self) -> usize {
        self.entries.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category<'_>> {
        self.entries
            .chunks_exact(2)
            .enumerate()
            .filter_map(|(index, pair)| {
                Some(Category {
                    index,
                    label: pair[0].as_label()?,
                    items: pair[1].as_items()?,
                })
            })
    }

    /// Look up a category by a caller-supplied index.
    ///
    /// Valid iff `0 <= 2*index < entries.len()`; overflow counts as invalid.
    pub fn category(&self, index: i64) -> Result<Category<'_>> {
        let label_pos = index
            .checked_mul(2)
            .and_then(|pos| usize::try_from(pos).ok())
            .filter(|&pos| pos < self.entries.len())
            .ok_or(CodexError::InvalidIndex(index))?;

        let label = self.entries[label_pos].as_label();
        let items = self.entries[label_pos + 1].as_items();
        match (label, items) {
            (Some(label), Some(items)) => Ok(Category {
                index: label_pos / 2,
                label,
                items,
            }),
            _ => Err(CodexError::InvalidIndex(index)),
        }
    }
}
