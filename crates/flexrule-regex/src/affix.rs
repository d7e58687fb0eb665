// Common prefix / suffix factorization of a set of surface forms

/// Longest common leading substring of `forms`.
///
/// Only the lexicographically smallest and largest forms need comparing:
/// any prefix they share is shared by everything ordered between them.
/// The result always ends on a character boundary.
pub fn common_prefix<S: AsRef<str>>(forms: &[S]) -> &str {
    let Some(min) = forms.iter().map(as_str).min() else {
        return "";
    };
    let Some(max) = forms.iter().map(as_str).max() else {
        return "";
    };

    let len = min
        .char_indices()
        .zip(max.chars())
        .find(|((_, a), b)| a != b)
        .map_or(min.len(), |((i, _), _)| i);
    &min[..len]
}

fn as_str<S: AsRef<str>>(s: &S) -> &str {
    s.as_ref()
}

/// A set of forms split into a shared prefix and per-form suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    /// Longest common leading substring of all forms.
    pub prefix: String,
    /// Each form with `prefix` removed, in input order. May contain `""`.
    pub suffixes: Vec<String>,
}

/// How the suffixes of a [`Factorization`] appear in a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuffixGroup<'a> {
    /// A single form: the prefix alone, no group.
    None,
    /// Every form has a non-empty suffix: `prefix(a|b)`.
    Required(Vec<&'a str>),
    /// The bare prefix is itself a form: `prefix(a|b)?`.
    Optional(Vec<&'a str>),
}

/// Split `forms` into their common prefix and the remaining suffixes.
///
/// `prefix + suffixes[i] == forms[i]` holds for every index.
pub fn factorize<S: AsRef<str>>(forms: &[S]) -> Factorization {
    let prefix = common_prefix(forms);
    let suffixes = forms
        .iter()
        .map(|form| as_str(form)[prefix.len()..].to_string())
        .collect();
    Factorization {
        prefix: prefix.to_string(),
        suffixes,
    }
}

impl Factorization {
    /// Decide whether a suffix alternation is needed and whether it is optional.
    pub fn suffix_group(&self) -> SuffixGroup<'_> {
        if self.suffixes.is_empty() || (self.suffixes.len() == 1 && self.suffixes[0].is_empty()) {
            return SuffixGroup::None;
        }

        let alternatives: Vec<&str> = self
            .suffixes
            .iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect();

        if self.suffixes.iter().any(String::is_empty) {
            SuffixGroup::Optional(alternatives)
        } else {
            SuffixGroup::Required(alternatives)
        }
    }
}

impl SuffixGroup<'_> {
    /// Render the group as a pattern fragment (`""`, `(a|b)` or `(a|b)?`).
    pub fn to_pattern(&self) -> String {
        match self {
            SuffixGroup::None => String::new(),
            SuffixGroup::Required(alts) => format!("({})", alts.join("|")),
            SuffixGroup::Optional(alts) => format!("({})?", alts.join("|")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_of_inflections() {
        assert_eq!(common_prefix(&["кот", "кота", "коту", "котом"]), "кот");
    }

    #[test]
    fn prefix_not_aligned_by_length() {
        // The shortest form is not the prefix of the others
        assert_eq!(common_prefix(&["мышь", "мыши", "мышью"]), "мыш");
    }

    #[test]
    fn prefix_empty_when_first_letters_differ() {
        assert_eq!(common_prefix(&["шёл", "идти"]), "");
    }

    #[test]
    fn prefix_of_nothing() {
        let empty: [&str; 0] = [];
        assert_eq!(common_prefix(&empty), "");
    }

    #[test]
    fn single_form() {
        let f = factorize(&["кофе"]);
        assert_eq!(f.prefix, "кофе");
        assert_eq!(f.suffixes, vec![""]);
        assert_eq!(f.suffix_group(), SuffixGroup::None);
        assert_eq!(f.suffix_group().to_pattern(), "");
    }

    #[test]
    fn optional_group_when_prefix_is_a_form() {
        let f = factorize(&["кот", "кота", "коту", "коте", "котом"]);
        assert_eq!(f.prefix, "кот");
        assert_eq!(f.suffixes, vec!["", "а", "у", "е", "ом"]);
        assert_eq!(
            f.suffix_group(),
            SuffixGroup::Optional(vec!["а", "у", "е", "ом"])
        );
        assert_eq!(f.suffix_group().to_pattern(), "(а|у|е|ом)?");
    }

    #[test]
    fn required_group_when_prefix_is_not_a_form() {
        let f = factorize(&["мыши", "мышь", "мышью"]);
        assert_eq!(f.suffixes, vec!["и", "ь", "ью"]);
        assert_eq!(
            f.suffix_group(),
            SuffixGroup::Required(vec!["и", "ь", "ью"])
        );
        assert_eq!(f.suffix_group().to_pattern(), "(и|ь|ью)");
    }

    #[test]
    fn reconcatenation_reproduces_input() {
        let inputs: Vec<Vec<&str>> = vec![
            vec!["кот", "кота", "котом"],
            vec!["мышь", "мыши", "мышью"],
            vec!["шёл", "идти", "шла"],
            vec!["a", "b"],
            vec!["стекло", "стекла", "стёкла"],
        ];
        for forms in inputs {
            let f = factorize(&forms);
            for (i, form) in forms.iter().enumerate() {
                assert_eq!(format!("{}{}", f.prefix, f.suffixes[i]), *form);
            }
        }
    }

    #[test]
    fn multibyte_divergence_keeps_char_boundary() {
        // "а" and "о" share their first UTF-8 byte
        assert_eq!(common_prefix(&["стекла", "стекло"]), "стекл");
        assert_eq!(common_prefix(&["стекла", "стёкла"]), "ст");
    }
}
