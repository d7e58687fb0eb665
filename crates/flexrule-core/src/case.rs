// Letter-case detection and transfer

/// Classification of letter casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCase {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "кот".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Кот".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "коТ".
    Complex,
    /// All letters are uppercase: "КОТ".
    AllUpper,
}

impl LetterCase {
    /// Detect the case pattern of a word.
    ///
    /// Non-letter characters (digits, punctuation) are ignored when
    /// determining the case pattern.
    pub fn detect(word: &str) -> LetterCase {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return LetterCase::NoLetters;
        };

        let mut first_uc = false;
        let mut rest_lc = true;
        let mut all_uc = true;
        let mut no_letters = true;

        if first.is_uppercase() {
            first_uc = true;
            no_letters = false;
        }
        if first.is_lowercase() {
            all_uc = false;
            no_letters = false;
        }

        for c in chars {
            if c.is_uppercase() {
                no_letters = false;
                rest_lc = false;
            }
            if c.is_lowercase() {
                all_uc = false;
                no_letters = false;
            }
        }

        if no_letters {
            return LetterCase::NoLetters;
        }
        if all_uc {
            return LetterCase::AllUpper;
        }
        if !rest_lc {
            return LetterCase::Complex;
        }
        if first_uc {
            LetterCase::FirstUpper
        } else {
            LetterCase::AllLower
        }
    }

    /// Rewrite `word` into this case pattern.
    ///
    /// `NoLetters` and `Complex` leave the word unchanged.
    pub fn apply(self, word: &str) -> String {
        match self {
            LetterCase::NoLetters | LetterCase::Complex => word.to_string(),
            LetterCase::AllLower => word.to_lowercase(),
            LetterCase::AllUpper => word.to_uppercase(),
            LetterCase::FirstUpper => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                    None => String::new(),
                }
            }
        }
    }
}
