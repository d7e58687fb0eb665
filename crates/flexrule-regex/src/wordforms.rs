// Surface form generation: a word plus its inflection into every case

use flexrule_core::analysis::{Analyzer, Parse};
use flexrule_core::character::char_len;
use flexrule_core::dedup::dedup;
use flexrule_core::inflection::GrammaticalCase;

/// Collect the surface forms of `word`.
///
/// The top-ranked parse is inflected into each case of
/// [`GrammaticalCase::ALL`]; cases without a form are skipped. The word
/// itself is always included. The result is deduplicated and sorted by
/// length in characters (stable, so equal-length forms keep encounter
/// order).
///
/// A word the analyzer cannot parse, or fails on, yields just `[word]`.
pub fn word_forms<A: Analyzer + ?Sized>(word: &str, analyzer: &A) -> Vec<String> {
    let mut results = vec![word.to_string()];

    match analyzer.analyze(word) {
        Ok(parses) => match parses.first() {
            Some(parse) => {
                let inflected = GrammaticalCase::ALL
                    .into_iter()
                    .filter_map(|case| parse.inflect(case));
                results.extend(inflected);
            }
            None => log::debug!("no parse for {word:?}; using the word as its only form"),
        },
        Err(e) => log::warn!("failed to analyze {word:?}: {e}; using the word as its only form"),
    }

    let mut forms = dedup(results);
    forms.sort_by_key(|form| char_len(form));
    forms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample;

    #[test]
    fn forms_sorted_by_length() {
        let forms = word_forms("кот", &sample());
        assert_eq!(forms, vec!["кот", "кота", "коту", "коте", "котом"]);
    }

    #[test]
    fn original_word_first_among_equals() {
        // "мыши" is encountered first, then "мышь" from the nominative
        let forms = word_forms("мыши", &sample());
        assert_eq!(forms, vec!["мыши", "мышь", "мышью"]);
    }

    #[test]
    fn indeclinable_word() {
        assert_eq!(word_forms("кофе", &sample()), vec!["кофе"]);
    }

    #[test]
    fn unknown_word_falls_back_to_itself() {
        assert_eq!(word_forms("собака", &sample()), vec!["собака"]);
    }

    #[test]
    fn analyzer_failure_falls_back_to_itself() {
        let analyzer = sample().failing_on("кот");
        assert_eq!(word_forms("кот", &analyzer), vec!["кот"]);
    }

    #[test]
    fn no_duplicates() {
        let forms = word_forms("дом", &sample());
        assert_eq!(forms, vec!["дом", "дома", "дому", "доме", "домом"]);
    }
}
