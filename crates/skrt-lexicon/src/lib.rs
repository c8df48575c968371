//! Lexicon loading and trie fixture synchronization.
//!
//! The Sanskrit stemming data ships one master file (`trie_content.txt`) in
//! which every line is `<form>,<payload>`. Test fixtures hold smaller trie
//! files in the same format. This crate keeps those fixtures in step with
//! the master file: any fixture line whose form is known to the lexicon is
//! replaced by the lexicon's line.
//!
//! # Architecture
//!
//! - [`line`] -- Form extraction and newline handling
//! - [`lexicon`] -- Form-to-line mapping built from the master file
//! - [`rewrite`] -- Substitution over the text of one trie file
//! - [`updater`] -- Directory walk that rewrites every trie file in place

use std::io;
use std::path::PathBuf;

pub mod lexicon;
pub mod line;
pub mod rewrite;
pub mod updater;

pub use lexicon::Lexicon;
pub use rewrite::{Rewrite, rewrite};
pub use updater::{EntryPolicy, FileOutcome, TrieUpdater, UpdateOptions, UpdateReport};

/// Error type for lexicon loading and trie updates.
///
/// The first error stops a run. Files already rewritten stay rewritten.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// A lexicon or trie file could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The trie directory could not be listed.
    #[error("failed to list directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory was found among the trie files.
    #[error("{} is a directory, not a trie file", .path.display())]
    NotAFile { path: PathBuf },

    /// A trie file could not be rewritten.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
