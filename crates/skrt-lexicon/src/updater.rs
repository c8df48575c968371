// Directory walk that rewrites trie fixture files in place.
//
// Every entry of the directory is treated as a trie file. Entries are taken
// in file-name order. The first failure ends the run: files handled before it
// are already rewritten and nothing after it is touched.

use std::fs::{self, File};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

use crate::LexiconError;
use crate::lexicon::Lexicon;
use crate::rewrite::rewrite;

/// What to do with a directory found among the trie files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryPolicy {
    /// Stop the run with [`LexiconError::NotAFile`].
    #[default]
    Abort,
    /// Record the directory in the report and move on.
    SkipDirectories,
}

/// Options for a [`TrieUpdater`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    pub policy: EntryPolicy,
    /// Compute every rewrite but leave the files untouched.
    pub dry_run: bool,
}

/// Outcome for a single trie file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub lines: usize,
    pub replaced: usize,
    pub changed: usize,
    /// Whether the new content differs from what was on disk. Also true
    /// when only line endings were rewritten (`\r\n` to `\n`), in which
    /// case `changed` is zero.
    pub modified: bool,
    /// Whether the file was overwritten. False only in dry-run mode.
    pub written: bool,
}

impl FileOutcome {
    /// Modified, but every line kept its text: only line endings differ.
    pub fn line_endings_only(&self) -> bool {
        self.modified && self.changed == 0
    }
}

/// Summary of a directory run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Processed files, in processing order.
    pub files: Vec<FileOutcome>,
    /// Directories passed over under [`EntryPolicy::SkipDirectories`].
    pub skipped: Vec<PathBuf>,
}

impl UpdateReport {
    /// Number of files whose content differs after substitution.
    pub fn files_modified(&self) -> usize {
        self.files.iter().filter(|f| f.modified).count()
    }

    pub fn lines_replaced(&self) -> usize {
        self.files.iter().map(|f| f.replaced).sum()
    }

    pub fn lines_changed(&self) -> usize {
        self.files.iter().map(|f| f.changed).sum()
    }

    /// Number of files modified only by line-ending normalization.
    pub fn files_line_endings_only(&self) -> usize {
        self.files.iter().filter(|f| f.line_endings_only()).count()
    }
}

/// Applies a [`Lexicon`] to trie files.
pub struct TrieUpdater<'a> {
    lexicon: &'a Lexicon,
    options: UpdateOptions,
}

impl<'a> TrieUpdater<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self::with_options(lexicon, UpdateOptions::default())
    }

    pub fn with_options(lexicon: &'a Lexicon, options: UpdateOptions) -> Self {
        Self { lexicon, options }
    }

    /// Options this updater runs with.
    pub fn options(&self) -> UpdateOptions {
        self.options
    }

    /// Rewrite every entry of `dir`.
    pub fn update_dir(&self, dir: impl AsRef<Path>) -> Result<UpdateReport, LexiconError> {
        let dir = dir.as_ref();
        let mut report = UpdateReport::default();

        for path in list_entries(dir)? {
            if path.is_dir() {
                match self.options.policy {
                    EntryPolicy::Abort => return Err(LexiconError::NotAFile { path }),
                    EntryPolicy::SkipDirectories => {
                        report.skipped.push(path);
                        continue;
                    }
                }
            }
            report.files.push(self.update_file(&path)?);
        }

        Ok(report)
    }

    /// Rewrite a single trie file.
    ///
    /// The file is overwritten even when no line changes.
    pub fn update_file(&self, path: impl AsRef<Path>) -> Result<FileOutcome, LexiconError> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(LexiconError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let original = fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let result = rewrite(self.lexicon, &original);
        let modified = result.differs_from(&original);

        if !self.options.dry_run {
            write_trie(path, &result.content)?;
        }

        Ok(FileOutcome {
            path: path.to_path_buf(),
            lines: result.lines,
            replaced: result.replaced,
            changed: result.changed,
            modified,
            written: !self.options.dry_run,
        })
    }
}

/// List the entries of `dir` sorted by file name.
fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, LexiconError> {
    let read_dir_err = |source| LexiconError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        entries.push(entry.map_err(read_dir_err)?);
    }
    entries.sort_by_key(|e| e.file_name());
    Ok(entries.into_iter().map(|e| e.path()).collect())
}

/// Overwrite a trie file, mapping failures to [`LexiconError::Write`].
fn write_trie(path: &Path, content: &str) -> Result<(), LexiconError> {
    write_text(path, content).map_err(|source| LexiconError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Truncate `path` and write `content` through a line-buffered writer.
fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut out = LineWriter::new(File::create(path)?);
    out.write_all(content.as_bytes())?;
    out.flush()
}
