// Morphological analyzer capability consumed by the rule synthesizer

use crate::inflection::GrammaticalCase;

/// Error returned by an [`Analyzer`] that cannot process a word.
///
/// Callers in the rule pipeline never propagate this: a word that cannot
/// be analyzed is treated as having only its own surface form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeError {
    /// The word is empty.
    #[error("cannot analyze an empty word")]
    EmptyWord,

    /// The word exceeds [`crate::MAX_WORD_CHARS`].
    #[error("word is too long: {chars} characters (limit {limit})")]
    WordTooLong { chars: usize, limit: usize },

    /// Backend-specific failure.
    #[error("analyzer backend failed: {0}")]
    Backend(String),
}

/// One morphological reading of a word.
pub trait Parse {
    /// Inflect the word into `case`.
    ///
    /// Returns `None` when the word has no form in that case. This is not
    /// an error: indeclinable words and inapplicable cases are common.
    fn inflect(&self, case: GrammaticalCase) -> Option<String>;
}

/// A morphological analyzer.
///
/// Implementations may be local tables or adapters over an external
/// analysis service. Implementations that are `Sync` can be shared by
/// several threads converting independent words.
pub trait Analyzer {
    type Parse: Parse;

    /// Analyze a word and return its readings, best first.
    ///
    /// An empty vector means the word is unknown.
    fn analyze(&self, word: &str) -> Result<Vec<Self::Parse>, AnalyzeError>;
}

impl<A: Analyzer + ?Sized> Analyzer for &A {
    type Parse = A::Parse;

    fn analyze(&self, word: &str) -> Result<Vec<Self::Parse>, AnalyzeError> {
        (**self).analyze(word)
    }
}
