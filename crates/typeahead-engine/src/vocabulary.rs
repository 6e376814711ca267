// Word list loading: one word per line, lowercased, deduplicated

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use hashbrown::HashSet;
use tracing::{debug, info};
use typeahead_core::case;

/// Error type for word list loading failures.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// The word list file could not be opened or read.
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from a non-file source failed.
    #[error("failed to read word list: {0}")]
    Read(#[from] io::Error),
}

/// A normalized, duplicate-free word list in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    lines_read: usize,
}

impl Vocabulary {
    /// Read a word list from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let io_error = |source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let vocabulary = Self::read(BufReader::new(file)).map_err(io_error)?;
        info!(
            path = %path.display(),
            lines = vocabulary.lines_read,
            words = vocabulary.len(),
            "loaded word list"
        );
        Ok(vocabulary)
    }

    /// Read a word list from any buffered reader.
    ///
    /// Lines are split on `\n`; surrounding whitespace (including a trailing
    /// `\r`) is trimmed and blank lines are skipped. Bytes that are not valid
    /// UTF-8 are replaced with U+FFFD rather than failing the whole list.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, VocabularyError> {
        let vocabulary = Self::read(reader)?;
        info!(
            lines = vocabulary.lines_read,
            words = vocabulary.len(),
            "loaded word list"
        );
        Ok(vocabulary)
    }

    /// Build a vocabulary from in-memory text in word list format.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Build a vocabulary from individual words.
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut builder = Builder::default();
        for word in words {
            builder.push(word.as_ref());
        }
        builder.finish()
    }

    /// Normalized words in the order they were first seen.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of input lines (or items) consumed, including blanks and
    /// duplicates.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    fn read<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut builder = Builder::default();
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            builder.push(&String::from_utf8_lossy(&line));
        }
        Ok(builder.finish())
    }
}

/// Accumulates normalized words while skipping blanks and duplicates.
#[derive(Default)]
struct Builder {
    words: Vec<String>,
    seen: HashSet<String>,
    lines_read: usize,
    blank: usize,
}

impl Builder {
    fn push(&mut self, raw: &str) {
        self.lines_read += 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.blank += 1;
            return;
        }
        let word = case::normalize(trimmed);
        if self.seen.insert(word.clone()) {
            self.words.push(word);
        }
    }

    fn finish(self) -> Vocabulary {
        if self.blank > 0 {
            debug!(blank = self.blank, "skipped blank lines in word list");
        }
        Vocabulary {
            words: self.words,
            lines_read: self.lines_read,
        }
    }
}
