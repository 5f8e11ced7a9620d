//! Read-only word list.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while loading a word list.
#[derive(thiserror::Error, Debug)]
pub enum DictionaryError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Set of lowercase words.
///
/// Built once before scanning and shared read-only afterwards (wrap it in an
/// `Arc` to share between threads).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build from any list of words. Entries are trimmed and lower-cased;
    /// blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a newline-separated word list. Lines starting with `#` are comments.
    pub fn parse_word_list(text: &str) -> Self {
        Self::from_words(text.lines().filter(|l| !l.trim_start().starts_with('#')))
    }

    /// Load a newline-separated word list from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::parse_word_list(&raw);
        log::info!("loaded {} words from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Membership test; `word` is lower-cased before lookup.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lookups_are_case_insensitive() {
        let dict = Dictionary::from_words(["Cat", " art "]);
        assert!(dict.contains("cat"));
        assert!(dict.contains("CAT"));
        assert!(dict.contains("Art"));
        assert!(!dict.contains("dog"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn word_list_skips_blanks_and_comments() {
        let dict = Dictionary::parse_word_list("# tiles\ncat\n\n  dog\r\n#zebra\n");
        let mut words: Vec<&str> = dict.iter().collect();
        words.sort_unstable();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "quiz\njazz").unwrap();
        let dict = Dictionary::load(file.path()).unwrap();
        assert!(dict.contains("QUIZ"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Dictionary::load("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
