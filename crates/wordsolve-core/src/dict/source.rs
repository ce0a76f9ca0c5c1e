use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::{DictError, ValidationError};
use crate::text::normalize_word;

/// Where a dictionary's raw words come from.
pub trait WordSource {
    /// Human-readable origin, used in log messages.
    fn describe(&self) -> String;

    /// Read and filter the word list.
    fn read_words(&self) -> Result<Vec<String>, DictError>;
}

/// Outcome of filtering a raw word list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub words: Vec<String>,
    /// Non-blank lines skipped for not being purely alphabetic.
    pub rejected: usize,
}

/// Filter raw lines down to lowercase word tokens.
///
/// Lines are trimmed and blank lines are ignored. Lines containing anything
/// but letters, or longer than `MAX_WORD_CHARS`, are counted as rejected.
pub fn parse_words<'a>(lines: impl IntoIterator<Item = &'a str>) -> LoadReport {
    let mut report = LoadReport::default();
    for line in lines {
        match normalize_word(line) {
            Ok(word) => report.words.push(word),
            Err(ValidationError::Empty) => {}
            Err(_) => report.rejected += 1,
        }
    }
    report
}

/// Plain-text word list, one word per line.
#[derive(Debug, Clone)]
pub struct WordListFile {
    path: PathBuf,
}

impl WordListFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_with_report(&self) -> Result<LoadReport, DictError> {
        let content = fs::read_to_string(&self.path)?;
        let report = parse_words(content.lines());
        if report.rejected > 0 {
            warn!(
                file = %self.path.display(),
                rejected = report.rejected,
                "skipped non-alphabetic lines"
            );
        }
        info!(
            file = %self.path.display(),
            word_count = report.words.len(),
            "loaded word list"
        );
        Ok(report)
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save<S: AsRef<str>>(&self, words: &[S]) -> Result<(), DictError> {
        let mut body = String::new();
        for word in words {
            body.push_str(word.as_ref());
            body.push('\n');
        }
        let tmp = self.path.with_extension("tmp");
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl WordSource for WordListFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_words(&self) -> Result<Vec<String>, DictError> {
        self.read_with_report().map(|report| report.words)
    }
}

/// In-memory word list, filtered the same way as a file.
impl<S: AsRef<str>> WordSource for Vec<S> {
    fn describe(&self) -> String {
        format!("<{} in-memory lines>", self.len())
    }

    fn read_words(&self) -> Result<Vec<String>, DictError> {
        Ok(parse_words(self.iter().map(AsRef::<str>::as_ref)).words)
    }
}
