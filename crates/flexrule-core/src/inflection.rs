// Grammatical cases used when generating the surface forms of a word

use std::fmt;

/// One of the six grammatical cases a word is inflected into.
///
/// The declaration order is the generation order used by the wordform
/// generator. It has no effect on the produced rules since forms are
/// deduplicated and length-sorted afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GrammaticalCase {
    /// Nominative (`nomn`).
    Nominative,
    /// Genitive (`gent`).
    Genitive,
    /// Dative (`datv`).
    Dative,
    /// Accusative (`accs`).
    Accusative,
    /// Instrumental (`ablt`).
    Instrumental,
    /// Locative / prepositional (`loct`).
    Locative,
}

/// Number of grammatical cases.
pub const CASE_COUNT: usize = 6;

impl GrammaticalCase {
    /// All cases in generation order.
    pub const ALL: [GrammaticalCase; CASE_COUNT] = [
        GrammaticalCase::Nominative,
        GrammaticalCase::Genitive,
        GrammaticalCase::Dative,
        GrammaticalCase::Accusative,
        GrammaticalCase::Instrumental,
        GrammaticalCase::Locative,
    ];

    /// Short tag for this case, as used in lexicon files.
    pub fn tag(self) -> &'static str {
        match self {
            GrammaticalCase::Nominative => "nomn",
            GrammaticalCase::Genitive => "gent",
            GrammaticalCase::Dative => "datv",
            GrammaticalCase::Accusative => "accs",
            GrammaticalCase::Instrumental => "ablt",
            GrammaticalCase::Locative => "loct",
        }
    }

    /// Parse a short case tag. Returns `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|case| case.tag() == tag)
    }

    /// Position of this case in [`GrammaticalCase::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for GrammaticalCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
