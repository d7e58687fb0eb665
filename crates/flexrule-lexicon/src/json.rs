// JSON lexicon format: an array of objects mapping case tags to forms
//
//   [{"nomn": "кот", "gent": "кота", "datv": "коту"}]

use std::collections::BTreeMap;

use flexrule_core::inflection::GrammaticalCase;

use crate::LexiconError;
use crate::paradigm::Paradigm;

/// Parse the JSON lexicon format.
pub(crate) fn parse(text: &str) -> Result<Vec<Paradigm>, LexiconError> {
    let entries: Vec<BTreeMap<String, String>> = serde_json::from_str(text)?;
    let mut paradigms = Vec::with_capacity(entries.len());

    for (i, entry) in entries.into_iter().enumerate() {
        let mut paradigm = Paradigm::new();
        for (tag, form) in entry {
            let case = GrammaticalCase::from_tag(&tag).ok_or(LexiconError::UnknownCase(tag))?;
            if !form.is_empty() {
                paradigm.set(case, form);
            }
        }
        if paradigm.is_empty() {
            return Err(LexiconError::EmptyEntry { line: i + 1 });
        }
        paradigms.push(paradigm);
    }

    Ok(paradigms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entries() {
        let text = r#"[
            {"nomn": "кот", "gent": "кота", "ablt": "котом"},
            {"nomn": "дом", "loct": "доме"}
        ]"#;
        let paradigms = parse(text).unwrap();
        assert_eq!(paradigms.len(), 2);
        assert_eq!(
            paradigms[0].get(GrammaticalCase::Instrumental),
            Some("котом")
        );
        assert_eq!(paradigms[1].get(GrammaticalCase::Locative), Some("доме"));
        assert_eq!(paradigms[1].get(GrammaticalCase::Genitive), None);
    }

    #[test]
    fn unknown_tag() {
        let text = r#"[{"nomn": "кот", "voct": "коте"}]"#;
        match parse(text) {
            Err(LexiconError::UnknownCase(tag)) => assert_eq!(tag, "voct"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_object() {
        let text = r#"[{"nomn": "кот"}, {}]"#;
        assert!(matches!(
            parse(text),
            Err(LexiconError::EmptyEntry { line: 2 })
        ));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(parse("[{"), Err(LexiconError::Json(_))));
    }
}
