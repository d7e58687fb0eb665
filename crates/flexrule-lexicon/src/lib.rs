//! Table-driven morphological analyzer.
//!
//! A [`Lexicon`] is an ordered list of [`Paradigm`]s, each holding one
//! lexeme's surface form per grammatical case, plus a hash index from every
//! surface form back to its paradigms. Analyzing a word returns one
//! [`LexiconParse`] per paradigm containing it, in file order.
//!
//! # Formats
//!
//! - [`tsv`](Lexicon::from_tsv_str) -- one tab-separated paradigm per line
//! - [`json`](Lexicon::from_json_str) -- an array of `{tag: form}` objects

mod json;
mod paradigm;
mod tsv;

pub use paradigm::Paradigm;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hashbrown::HashMap;

use flexrule_core::MAX_WORD_CHARS;
use flexrule_core::analysis::{AnalyzeError, Analyzer, Parse};
use flexrule_core::case::LetterCase;
use flexrule_core::character::char_len;
use flexrule_core::inflection::GrammaticalCase;

/// Error type for lexicon loading.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    /// An entry with no forms. `line` is the line number for TSV input and
    /// the 1-based entry position for JSON input.
    #[error("entry {line} has no forms")]
    EmptyEntry { line: usize },
    #[error("unknown case tag: {0}")]
    UnknownCase(String),
    #[error("invalid JSON lexicon: {0}")]
    Json(#[from] serde_json::Error),
}

/// A paradigm lexicon usable as an [`Analyzer`].
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    paradigms: Vec<Arc<Paradigm>>,
    /// Lowercase surface form -> indices into `paradigms`, in insertion order.
    index: HashMap<String, Vec<usize>>,
}

impl Lexicon {
    /// Create an empty lexicon. Every word analyzed against it is unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from paradigms, ranked in iteration order.
    pub fn from_paradigms(paradigms: impl IntoIterator<Item = Paradigm>) -> Self {
        let mut lexicon = Self::new();
        for paradigm in paradigms {
            lexicon.insert(paradigm);
        }
        lexicon
    }

    /// Append a paradigm. It ranks below every paradigm inserted before it.
    pub fn insert(&mut self, paradigm: Paradigm) {
        let idx = self.paradigms.len();
        for form in paradigm.forms() {
            let entry = self.index.entry(form.to_string()).or_default();
            // A form shared by several cases of the same paradigm is indexed once
            if entry.last() != Some(&idx) {
                entry.push(idx);
            }
        }
        self.paradigms.push(Arc::new(paradigm));
    }

    /// Parse a lexicon in the tab-separated format.
    pub fn from_tsv_str(text: &str) -> Result<Self, LexiconError> {
        tsv::parse(text).map(Self::from_paradigms)
    }

    /// Parse a lexicon in the JSON format.
    pub fn from_json_str(text: &str) -> Result<Self, LexiconError> {
        json::parse(text).map(Self::from_paradigms)
    }

    /// Load a lexicon file. Files ending in `.json` are read as JSON,
    /// anything else as tab-separated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let lexicon = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_tsv_str(&text)?
        };

        log::info!(
            "loaded {} paradigms ({} forms) from {}",
            lexicon.len(),
            lexicon.index.len(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Number of paradigms.
    pub fn len(&self) -> usize {
        self.paradigms.len()
    }

    /// Check whether the lexicon has no paradigms.
    pub fn is_empty(&self) -> bool {
        self.paradigms.is_empty()
    }
}

/// One reading of a word: a paradigm containing it, plus the word's
/// capitalization so inflected forms can be returned in the same case.
#[derive(Debug, Clone)]
pub struct LexiconParse {
    paradigm: Arc<Paradigm>,
    casing: LetterCase,
}

impl Parse for LexiconParse {
    fn inflect(&self, case: GrammaticalCase) -> Option<String> {
        let form = self.paradigm.get(case)?;
        Some(match self.casing {
            LetterCase::FirstUpper | LetterCase::AllUpper => self.casing.apply(form),
            _ => form.to_string(),
        })
    }
}

impl Analyzer for Lexicon {
    type Parse = LexiconParse;

    fn analyze(&self, word: &str) -> Result<Vec<LexiconParse>, AnalyzeError> {
        let chars = char_len(word);
        if chars == 0 {
            return Err(AnalyzeError::EmptyWord);
        }
        if chars > MAX_WORD_CHARS {
            return Err(AnalyzeError::WordTooLong {
                chars,
                limit: MAX_WORD_CHARS,
            });
        }

        let casing = LetterCase::detect(word);
        let parses: Vec<LexiconParse> = self
            .index
            .get(word.to_lowercase().as_str())
            .map(|ids| {
                ids.iter()
                    .map(|&idx| LexiconParse {
                        paradigm: Arc::clone(&self.paradigms[idx]),
                        casing,
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(parses)
    }
}
