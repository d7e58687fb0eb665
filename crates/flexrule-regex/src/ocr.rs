// Confusable-character rewriting for OCR-tolerant patterns

/// One letter and the characters an OCR engine may read it as.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Confusable {
    letter: char,
    /// Rendered alternation, e.g. `(о|0)`.
    group: String,
}

/// Ordered table of confusable letters.
///
/// The default table widens Cyrillic `о` to `(о|0)` and `ё` to `(е|ё)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusableTable {
    entries: Vec<Confusable>,
}

impl ConfusableTable {
    /// Create an empty table. Rewriting with it is the identity.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a letter with the alternatives it is widened to.
    ///
    /// `alternatives` is rendered in the given order and should include
    /// `letter` itself. A letter already in the table is replaced.
    ///
    /// All entries are applied in a single left-to-right pass, so a group
    /// emitted for one letter is never rewritten by another entry. With a
    /// table whose alternatives are themselves table letters this differs
    /// from replacing each letter in turn:
    ///
    /// ```
    /// use flexrule_regex::ocr::ConfusableTable;
    ///
    /// let table = ConfusableTable::default().with('0', &['0', 'о']);
    /// assert_eq!(table.rewrite("о0"), "(о|0)(0|о)");
    /// ```
    pub fn with(mut self, letter: char, alternatives: &[char]) -> Self {
        let mut group = String::from("(");
        for (i, alt) in alternatives.iter().enumerate() {
            if i > 0 {
                group.push('|');
            }
            group.push(*alt);
        }
        group.push(')');

        self.entries.retain(|e| e.letter != letter);
        self.entries.push(Confusable { letter, group });
        self
    }

    /// Check whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every table letter in `fragment` with its alternation.
    ///
    /// This is plain textual substitution over the whole fragment, including
    /// any literal punctuation. Alternations already present in the fragment
    /// are copied through untouched, so rewriting a rewritten fragment
    /// changes nothing.
    pub fn rewrite(&self, fragment: &str) -> String {
        if self.entries.is_empty() {
            return fragment.to_string();
        }

        let mut out = String::with_capacity(fragment.len() * 2);
        let mut rest = fragment;

        'scan: while let Some(c) = rest.chars().next() {
            for entry in &self.entries {
                if rest.starts_with(entry.group.as_str()) {
                    out.push_str(&entry.group);
                    rest = &rest[entry.group.len()..];
                    continue 'scan;
                }
            }
            match self.entries.iter().find(|e| e.letter == c) {
                Some(entry) => out.push_str(&entry.group),
                None => out.push(c),
            }
            rest = &rest[c.len_utf8()..];
        }

        out
    }
}

impl Default for ConfusableTable {
    fn default() -> Self {
        Self::new().with('о', &['о', '0']).with('ё', &['е', 'ё'])
    }
}
