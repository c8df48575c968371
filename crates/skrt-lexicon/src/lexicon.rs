// Master lexicon: maps each form to its canonical trie line.

use std::path::Path;

use hashbrown::HashMap;

use crate::LexiconError;
use crate::line::{form_of, normalize_newlines, split_lines};

/// Relative location of the master trie content, as seen from the trie
/// fixture directory (`src/test/resources/tries`).
pub const DEFAULT_LEXICON_PATH: &str =
    "../../../../resources/sanskrit-stemming-data/output/trie_content.txt";

/// Mapping from form to the full line that defines it.
///
/// Lines are inserted in file order and a later line with the same form
/// replaces the earlier one. Nothing is validated: a line without a comma is
/// stored under the whole line, and the empty line is stored under the empty
/// form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from the text of a master file.
    pub fn from_text(text: &str) -> Self {
        let text = normalize_newlines(text);
        let mut lexicon = Self::new();
        for line in split_lines(&text) {
            lexicon.insert(line);
        }
        lexicon
    }

    /// Read and parse the master file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    /// Insert a line under its form. Returns the line it replaced, if any.
    pub fn insert(&mut self, line: &str) -> Option<String> {
        self.entries.insert(form_of(line).to_string(), line.to_string())
    }

    /// Look up the canonical line for a form.
    pub fn get(&self, form: &str) -> Option<&str> {
        self.entries.get(form).map(String::as_str)
    }

    /// Whether a form has an entry.
    pub fn contains_form(&self, form: &str) -> bool {
        self.entries.contains_key(form)
    }

    /// The lexicon's line for the form of `line`, if the form is known.
    pub fn substitute(&self, line: &str) -> Option<&str> {
        self.get(form_of(line))
    }

    /// Number of distinct forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
