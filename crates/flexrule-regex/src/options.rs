// Rule generation options

use crate::ocr::ConfusableTable;

/// Tokens shorter than this many characters are emitted unchanged.
pub const MIN_WORD_CHARS: usize = 3;

/// Token standing for an omitted passage.
pub const ELLIPSIS: &str = "...";

/// Pattern emitted for [`ELLIPSIS`].
pub const WILDCARD: &str = ".*";

/// How detached trailing punctuation is written back into a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PunctuationMode {
    /// Appended as-is. A `.` then matches any character, `?` makes the
    /// preceding group optional, and so on.
    #[default]
    Literal,
    /// Escaped so it only matches itself.
    Escaped,
}

impl PunctuationMode {
    /// Render a punctuation character for inclusion in a pattern.
    pub fn render(self, c: char) -> String {
        match self {
            PunctuationMode::Literal => c.to_string(),
            PunctuationMode::Escaped => regex::escape(c.encode_utf8(&mut [0; 4])),
        }
    }
}

/// Options controlling rule synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOptions {
    /// Widen OCR-confusable letters into alternations. Default: true.
    pub ocr: bool,
    /// Trailing punctuation handling. Default: literal.
    pub punctuation: PunctuationMode,
    /// Letters widened when `ocr` is set.
    pub confusables: ConfusableTable,
}

impl RuleOptions {
    pub fn with_ocr(mut self, ocr: bool) -> Self {
        self.ocr = ocr;
        self
    }

    pub fn with_punctuation(mut self, punctuation: PunctuationMode) -> Self {
        self.punctuation = punctuation;
        self
    }

    pub fn with_confusables(mut self, confusables: ConfusableTable) -> Self {
        self.confusables = confusables;
        self
    }
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            ocr: true,
            punctuation: PunctuationMode::Literal,
            confusables: ConfusableTable::default(),
        }
    }
}
