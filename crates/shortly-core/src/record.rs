use crate::alias::Alias;
use std::borrow::Cow;

/// URLs longer than this are shortened by [`Record::display_url`].
const DISPLAY_MAX_CHARS: usize = 60;
/// Characters kept from the original URL when it is shortened for display.
const DISPLAY_KEEP_CHARS: usize = 57;

/// One shortening event: an original URL and the alias generated for it.
///
/// Records are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    original_url: String,
    alias: Alias,
}

impl Record {
    pub fn new(original_url: impl Into<String>, alias: Alias) -> Self {
        Self {
            original_url: original_url.into(),
            alias,
        }
    }

    /// The URL exactly as it was submitted (trimmed).
    pub fn original_url(&self) -> &str {
        &self.original_url
    }

    pub fn alias(&self) -> &Alias {
        &self.alias
    }

    /// Returns the original URL, truncated to 57 characters plus `...`
    /// when it is longer than 60 characters.
    pub fn display_url(&self) -> Cow<'_, str> {
        if self.original_url.chars().count() <= DISPLAY_MAX_CHARS {
            return Cow::Borrowed(&self.original_url);
        }
        let head: String = self.original_url.chars().take(DISPLAY_KEEP_CHARS).collect();
        Cow::Owned(format!("{head}..."))
    }
}

/// The ordered sequence of all records, newest first.
///
/// The only mutation is [`MappingCollection::prepend`]; records are never
/// removed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingCollection {
    records: Vec<Record>,
}

impl MappingCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from records already ordered newest first.
    pub fn from_newest_first(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Inserts a record in front of every existing one.
    pub fn prepend(&mut self, record: Record) {
        self.records.insert(0, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recently added record.
    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a MappingCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
